use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;

/// Search box. `editing` holds the buffer while the user types.
pub struct HeaderView<'a> {
    query: &'a str,
    editing: Option<&'a str>,
    theme: &'a str,
    palette: Palette,
}

impl<'a> HeaderView<'a> {
    pub fn new(
        query: &'a str,
        editing: Option<&'a str>,
        theme: &'a str,
        palette: Palette,
    ) -> Self {
        Self {
            query,
            editing,
            theme,
            palette,
        }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .title(format!("scentdex · {} theme", self.theme))
            .title_style(Style::default().fg(p.accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(p.border(self.editing.is_some()));

        let line = match (self.editing, self.query.is_empty()) {
            (Some(buffer), _) => Line::from(vec![
                Span::styled("Search: ", Style::default().fg(p.accent)),
                Span::raw(buffer.to_string()),
            ]),
            (None, true) => Line::from(Span::styled(
                "Press / to search by name, brand or code",
                Style::default().fg(p.muted),
            )),
            (None, false) => Line::from(vec![
                Span::styled("Search: ", Style::default().fg(p.muted)),
                Span::raw(self.query.to_string()),
            ]),
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
