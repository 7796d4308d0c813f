use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Palette;
use crate::presentation::formatters::{accord_icons, favorite_icon, truncate};
use crate::presentation::view_models::ItemSummaryViewModel;

pub struct ResultListView<'a> {
    items: &'a [ItemSummaryViewModel],
    title: &'a str,
    palette: Palette,
}

impl<'a> ResultListView<'a> {
    pub fn new(items: &'a [ItemSummaryViewModel], title: &'a str, palette: Palette) -> Self {
        Self {
            items,
            title,
            palette,
        }
    }

    pub fn build_list(&self, focused: bool) -> List<'a> {
        let p = self.palette;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let star_style = if item.favorite {
                    Style::default().fg(p.selected)
                } else {
                    Style::default().fg(p.muted)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", favorite_icon(item.favorite)), star_style),
                    Span::styled(
                        truncate(&item.name, 30),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", item.brand), Style::default().fg(p.accent)),
                    Span::styled(format!("  {}", item.code), Style::default().fg(p.muted)),
                    Span::raw(format!("  {}", accord_icons(&item.accords).join(" "))),
                ]))
            })
            .collect();

        List::new(rows)
            .block(
                Block::default()
                    .title(self.title.to_string())
                    .borders(Borders::ALL)
                    .border_style(p.border(focused)),
            )
            .highlight_style(p.highlight())
            .highlight_symbol(if focused { "> " } else { "  " })
    }
}
