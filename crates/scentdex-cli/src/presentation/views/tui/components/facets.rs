//! Facet Panel Component
//!
//! One facet's options at a time; h/l cycle through the facets.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};
use scentdex_engine::Action;

use super::{clamp, navigate};
use crate::presentation::view_models::FacetListViewModel;
use crate::presentation::views::tui::{FacetOptionsView, Palette};

pub struct FacetPanelComponent {
    active: usize,
    state: ListState,
}

impl FacetPanelComponent {
    pub fn new() -> Self {
        Self {
            active: 0,
            state: ListState::default(),
        }
    }

    /// Returns the toggle to dispatch when the user checks an option.
    ///
    /// Options that would empty the result set are inert unless already
    /// selected, so they can still be unchecked.
    pub fn handle_input(&mut self, key: KeyEvent, data: &FacetListViewModel) -> Option<Action> {
        let count = data.facets.len();
        if count == 0 {
            return None;
        }
        self.active = self.active.min(count - 1);

        match key.code {
            KeyCode::Char('l') | KeyCode::Right => {
                self.active = (self.active + 1) % count;
                self.state.select(Some(0));
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.active = (self.active + count - 1) % count;
                self.state.select(Some(0));
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let facet = &data.facets[self.active];
                let option = facet.options.get(self.state.selected()?)?;
                (option.viable || option.selected)
                    .then(|| Action::toggle(facet.facet, option.value.clone()))
            }
            _ => {
                navigate(&mut self.state, key, data.facets[self.active].options.len());
                None
            }
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        data: &FacetListViewModel,
        palette: Palette,
        focused: bool,
    ) {
        let count = data.facets.len();
        if count == 0 {
            return;
        }
        self.active = self.active.min(count - 1);
        let facet = &data.facets[self.active];
        clamp(&mut self.state, facet.options.len());

        let list = FacetOptionsView::new(facet, (self.active, count), palette).build_list(focused);
        f.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for FacetPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}
