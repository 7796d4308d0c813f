//! TUI Views for the interactive browser
//!
//! Views are stateless widgets built from `BrowserScreenViewModel` slices.
//! Selection and scroll state live in `components/`, which hand the views
//! whatever they need to highlight.

pub mod components;
mod chart;
mod chips;
mod detail;
mod facets;
mod header;
mod results;
mod status_bar;

pub use chart::AccordChartView;
pub use chips::ChipBarView;
pub use detail::DetailPanelView;
pub use facets::FacetOptionsView;
pub use header::HeaderView;
pub use results::ResultListView;
pub use status_bar::StatusBarView;

use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme. Dark is used for every non-light theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub selected: Color,
    pub disabled: Color,
    pub highlight_bg: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Self {
                bg: Color::Black,
                fg: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                selected: Color::LightGreen,
                disabled: Color::DarkGray,
                highlight_bg: Color::Indexed(238),
                error: Color::LightRed,
            }
        } else {
            Self {
                bg: Color::Reset,
                fg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Blue,
                selected: Color::Green,
                disabled: Color::Gray,
                highlight_bg: Color::Indexed(253),
                error: Color::Red,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}
