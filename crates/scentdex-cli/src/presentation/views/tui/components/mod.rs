//! TUI Components
//!
//! Components own selection state and turn key presses into actions for the
//! renderer. Views stay stateless; a component passes them what to highlight.

mod chips;
mod facets;
mod results;

pub use chips::ChipsComponent;
pub use facets::FacetPanelComponent;
pub use results::{ResultsAction, ResultsComponent};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;

const PAGE: usize = 10;

/// Shared list navigation. Returns true when the key moved the selection.
pub(crate) fn navigate(state: &mut ListState, key: KeyEvent, len: usize) -> bool {
    if len == 0 {
        state.select(None);
        return matches!(
            key.code,
            KeyCode::Char('j')
                | KeyCode::Char('k')
                | KeyCode::Down
                | KeyCode::Up
                | KeyCode::PageDown
                | KeyCode::PageUp
                | KeyCode::Home
                | KeyCode::End
        );
    }

    let last = len - 1;
    let current = state.selected().unwrap_or(0).min(last);
    let next = match key.code {
        KeyCode::Char('j') | KeyCode::Down => (current + 1).min(last),
        KeyCode::Char('k') | KeyCode::Up => current.saturating_sub(1),
        KeyCode::PageDown => (current + PAGE).min(last),
        KeyCode::PageUp => current.saturating_sub(PAGE),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => return false,
    };
    state.select(Some(next));
    true
}

/// Index Safety: clamp the selection to `len` before rendering.
pub(crate) fn clamp(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        Some(i) if i >= len => state.select(Some(len - 1)),
        None => state.select(Some(0)),
        _ => {}
    }
}
