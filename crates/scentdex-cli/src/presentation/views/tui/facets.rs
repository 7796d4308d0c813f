use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use scentdex_types::MatchMode;

use super::Palette;
use crate::presentation::view_models::FacetViewModel;

/// Option list of one facet, with the facet switcher in the title.
pub struct FacetOptionsView<'a> {
    facet: &'a FacetViewModel,
    position: (usize, usize),
    palette: Palette,
}

impl<'a> FacetOptionsView<'a> {
    /// `position` is (index of this facet, number of facets).
    pub fn new(facet: &'a FacetViewModel, position: (usize, usize), palette: Palette) -> Self {
        Self {
            facet,
            position,
            palette,
        }
    }

    pub fn build_list(&self, focused: bool) -> List<'a> {
        let p = self.palette;
        let items: Vec<ListItem> = self
            .facet
            .options
            .iter()
            .map(|option| {
                let (mark, style) = match (option.selected, option.viable) {
                    (true, _) => (
                        "[x]",
                        Style::default().fg(p.selected).add_modifier(Modifier::BOLD),
                    ),
                    (false, true) => ("[ ]", Style::default()),
                    (false, false) => (
                        "[-]",
                        Style::default().fg(p.disabled).add_modifier(Modifier::DIM),
                    ),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", mark), style),
                    Span::styled(option.label.clone(), style),
                    Span::styled(format!(" ({})", option.count), Style::default().fg(p.muted)),
                ]))
            })
            .collect();

        let mode = match self.facet.mode {
            MatchMode::Any => "any",
            MatchMode::All => "all",
        };
        let (index, total) = self.position;
        let title = format!(
            "◀ {} ({}) ▶ {}/{}",
            self.facet.label,
            mode,
            index + 1,
            total
        );

        List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(p.border(focused)),
            )
            .highlight_style(p.highlight())
            .highlight_symbol(if focused { "> " } else { "  " })
    }
}
