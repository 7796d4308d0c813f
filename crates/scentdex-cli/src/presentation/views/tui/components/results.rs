//! Results Component
//!
//! Encapsulates result list selection and the per-item key bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use super::{clamp, navigate};
use crate::presentation::view_models::ItemSummaryViewModel;
use crate::presentation::views::tui::{Palette, ResultListView};

/// Actions the result list emits to its parent, by item code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsAction {
    OpenDetails(String),
    OpenSimilar(String),
    ToggleFavorite(String),
    FocusBrand(String),
}

pub struct ResultsComponent {
    state: ListState,
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        items: &[ItemSummaryViewModel],
    ) -> Option<ResultsAction> {
        if navigate(&mut self.state, key, items.len()) {
            return None;
        }

        let item = self.selected(items)?;
        match key.code {
            KeyCode::Enter => Some(ResultsAction::OpenDetails(item.code.clone())),
            KeyCode::Char('s') => Some(ResultsAction::OpenSimilar(item.code.clone())),
            KeyCode::Char('f') => Some(ResultsAction::ToggleFavorite(item.code.clone())),
            KeyCode::Char('b') => Some(ResultsAction::FocusBrand(item.brand.clone())),
            _ => None,
        }
    }

    /// Jump back to the first row, e.g. after the filters changed.
    pub fn reset(&mut self) {
        self.state.select(Some(0));
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        items: &[ItemSummaryViewModel],
        title: &str,
        palette: Palette,
        focused: bool,
    ) {
        clamp(&mut self.state, items.len());
        let list = ResultListView::new(items, title, palette).build_list(focused);
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn selected<'a>(&self, items: &'a [ItemSummaryViewModel]) -> Option<&'a ItemSummaryViewModel> {
        let index = self.state.selected().unwrap_or(0);
        items.get(index.min(items.len().checked_sub(1)?))
    }
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}
