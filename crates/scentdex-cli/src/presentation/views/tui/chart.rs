use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::formatters::{title_case, truncate};
use crate::presentation::view_models::StatsViewModel;

/// Horizontal bar chart of value counts over the current results.
pub struct AccordChartView<'a> {
    stats: &'a StatsViewModel,
    palette: Palette,
}

impl<'a> AccordChartView<'a> {
    pub fn new(stats: &'a StatsViewModel, palette: Palette) -> Self {
        Self { stats, palette }
    }
}

impl<'a> Widget for AccordChartView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .title(format!("{} in results", self.stats.label))
            .borders(Borders::ALL)
            .border_style(p.border(false));

        if self.stats.values.is_empty() {
            Paragraph::new("Nothing to chart")
                .style(Style::default().fg(p.muted))
                .block(block)
                .render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .stats
            .values
            .iter()
            .map(|entry| {
                Bar::default()
                    .value(entry.count as u64)
                    .label(Line::from(truncate(&title_case(&entry.value), 10)))
                    .style(Style::default().fg(p.accent))
            })
            .collect();

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .max(self.stats.max_count as u64)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
