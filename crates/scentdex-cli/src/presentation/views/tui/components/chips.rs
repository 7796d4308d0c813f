//! Chips Component
//!
//! Cursor over the active filter chips; x removes the one under it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};
use scentdex_engine::{Action, Chip};

use crate::presentation::view_models::ChipViewModel;
use crate::presentation::views::tui::{ChipBarView, Palette};

pub struct ChipsComponent {
    selected: usize,
}

impl ChipsComponent {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle_input(&mut self, key: KeyEvent, chips: &[ChipViewModel]) -> Option<Action> {
        if chips.is_empty() {
            return None;
        }
        self.selected = self.selected.min(chips.len() - 1);

        match key.code {
            KeyCode::Char('l') | KeyCode::Right => {
                self.selected = (self.selected + 1).min(chips.len() - 1);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                let chip = &chips[self.selected];
                Some(Action::RemoveChip(Chip::new(chip.facet, chip.value.clone())))
            }
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        chips: &[ChipViewModel],
        palette: Palette,
        focused: bool,
    ) {
        self.selected = self.selected.min(chips.len().saturating_sub(1));
        let selected = (!chips.is_empty()).then_some(self.selected);
        f.render_widget(ChipBarView::new(chips, selected, palette, focused), area);
    }
}

impl Default for ChipsComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use scentdex_types::Facet;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chip(facet: Facet, value: &str) -> ChipViewModel {
        ChipViewModel {
            facet,
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    #[test]
    fn test_remove_chip_under_cursor() {
        let chips = vec![chip(Facet::Gender, "male"), chip(Facet::Accord, "citrus")];
        let mut component = ChipsComponent::new();

        component.handle_input(key(KeyCode::Right), &chips);
        component.handle_input(key(KeyCode::Right), &chips);
        assert_eq!(
            component.handle_input(key(KeyCode::Char('x')), &chips),
            Some(Action::RemoveChip(Chip::new(Facet::Accord, "citrus")))
        );
    }

    #[test]
    fn test_cursor_clamps_after_removal() {
        let mut component = ChipsComponent::new();
        component.selected = 3;
        let chips = vec![chip(Facet::Season, "winter")];
        assert_eq!(
            component.handle_input(key(KeyCode::Delete), &chips),
            Some(Action::RemoveChip(Chip::new(Facet::Season, "winter")))
        );
    }
}
