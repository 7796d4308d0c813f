use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::Palette;
use crate::presentation::formatters::{accord_icons, favorite_icon, join_tags, percent};
use crate::presentation::view_models::{
    DetailPanelViewModel, ItemDetailViewModel, SimilarListViewModel,
};
use crate::presentation::views::{NO_DESCRIPTION, NO_NOTES, note_groups};

/// Overlay for item details or the similar-items ranking.
pub struct DetailPanelView<'a> {
    panel: &'a DetailPanelViewModel,
    palette: Palette,
}

impl<'a> DetailPanelView<'a> {
    pub fn new(panel: &'a DetailPanelViewModel, palette: Palette) -> Self {
        Self { panel, palette }
    }

    fn heading(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn item_lines(&self, d: &ItemDetailViewModel) -> Vec<Line<'static>> {
        let muted = Style::default().fg(self.palette.muted);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    d.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {} ", favorite_icon(d.favorite))),
                Span::raw(accord_icons(&d.accords).join(" ")),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {}",
                    d.brand,
                    d.gender.as_deref().unwrap_or("-"),
                    d.code
                ),
                muted,
            )),
            Line::default(),
            Line::from(d.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string())),
            Line::default(),
            self.heading("Notes"),
        ];

        let groups = note_groups(&d.notes);
        if groups.is_empty() {
            lines.push(Line::from(Span::styled(format!("  {}", NO_NOTES), muted)));
        }
        for (label, values) in groups {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<6} ", format!("{}:", label)), muted),
                Span::raw(values.join(", ")),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(format!("Accords:   {}", join_tags(&d.accords))));
        lines.push(Line::from(format!("Seasons:   {}", join_tags(&d.seasons))));
        lines.push(Line::from(format!("Occasions: {}", join_tags(&d.occasions))));

        lines.push(Line::default());
        lines.push(self.heading(&format!("Boost guide · {}", d.boost.title)));
        for step in &d.boost.steps {
            lines.push(Line::from(format!("  {:<6} + {}", step.bottle, step.boost)));
        }

        lines.push(Line::default());
        lines.push(self.heading(&format!("About {}", d.brand_info.name)));
        lines.push(Line::from(format!("  {}", d.brand_info.description)));

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(d.product_url.clone(), muted)));
        lines.push(Line::from(Span::styled(
            "s similar · f favorite · Esc close",
            muted,
        )));
        lines
    }

    fn similar_lines(&self, s: &SimilarListViewModel) -> Vec<Line<'static>> {
        let muted = Style::default().fg(self.palette.muted);
        let mut lines = vec![
            self.heading(&format!(
                "Similar to {} by {}",
                s.reference.name, s.reference.brand
            )),
            Line::default(),
        ];

        if s.matches.is_empty() {
            lines.push(Line::from(Span::styled("No similar items found", muted)));
        }
        for (rank, entry) in s.matches.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw(format!("{:>2}. ", rank + 1)),
                Span::styled(
                    format!("{:>4} ", percent(entry.score)),
                    Style::default().fg(self.palette.selected),
                ),
                Span::styled(
                    entry.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", entry.brand), muted),
            ]));
            if !entry.shared_accords.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("          shared: {}", entry.shared_accords.join(", ")),
                    muted,
                )));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Esc close", muted)));
        lines
    }
}

impl<'a> Widget for DetailPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, lines) = match self.panel {
            DetailPanelViewModel::Item(detail) => ("Details", self.item_lines(detail)),
            DetailPanelViewModel::Similar(similar) => ("Similar", self.similar_lines(similar)),
        };

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(self.palette.border(true)),
            )
            .style(self.palette.base())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
