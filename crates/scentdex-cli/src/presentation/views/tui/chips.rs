use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::Palette;
use crate::presentation::formatters::title_case;
use crate::presentation::view_models::ChipViewModel;

/// Active filters as removable chips.
pub struct ChipBarView<'a> {
    chips: &'a [ChipViewModel],
    selected: Option<usize>,
    palette: Palette,
    focused: bool,
}

impl<'a> ChipBarView<'a> {
    pub fn new(
        chips: &'a [ChipViewModel],
        selected: Option<usize>,
        palette: Palette,
        focused: bool,
    ) -> Self {
        Self {
            chips,
            selected,
            palette,
            focused,
        }
    }
}

impl<'a> Widget for ChipBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .title("Filters (x removes)")
            .borders(Borders::ALL)
            .border_style(p.border(self.focused));

        let line = if self.chips.is_empty() {
            Line::from(Span::styled(
                "No active filters",
                Style::default().fg(p.muted),
            ))
        } else {
            let mut spans = Vec::with_capacity(self.chips.len() * 2);
            for (i, chip) in self.chips.iter().enumerate() {
                let style = if self.focused && self.selected == Some(i) {
                    p.highlight().fg(p.accent)
                } else {
                    Style::default().fg(p.selected)
                };
                spans.push(Span::styled(
                    format!("[{}: {} ×]", title_case(chip.facet.as_str()), chip.label),
                    style.add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        };

        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
