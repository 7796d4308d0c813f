use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;

const KEYS: &str = "Tab focus · Space toggle · / search · Enter details · f fav · F favorites · b/B brand · c clear · t theme · q quit";

/// Bottom line: error, notice or key help.
pub struct StatusBarView<'a> {
    notice: Option<&'a str>,
    error: Option<&'a str>,
    palette: Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(notice: Option<&'a str>, error: Option<&'a str>, palette: Palette) -> Self {
        Self {
            notice,
            error,
            palette,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let line = if let Some(error) = self.error {
            Line::from(Span::styled(error.to_string(), Style::default().fg(p.error)))
        } else if let Some(notice) = self.notice {
            Line::from(Span::styled(notice.to_string(), Style::default().fg(p.accent)))
        } else {
            Line::from(Span::styled(KEYS, Style::default().fg(p.muted)))
        };
        Paragraph::new(line).render(area, buf);
    }
}
