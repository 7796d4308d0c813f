use std::fmt;

use crate::presentation::formatters::{bar, title_case, truncate};
use crate::presentation::view_models::{CreateView, StatsViewModel, ViewMode};

const BAR_WIDTH: usize = 30;

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatsView { data: self, mode })
    }
}

struct StatsView<'a> {
    data: &'a StatsViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for entry in &self.data.values {
                writeln!(f, "{}\t{}", entry.value, entry.count)?;
            }
            return Ok(());
        }

        writeln!(f, "{} across {} item(s)", self.data.label, self.data.items)?;
        if self.data.values.is_empty() {
            return Ok(());
        }
        writeln!(f)?;

        for entry in &self.data.values {
            writeln!(
                f,
                "{:<18} {:>4} {}",
                truncate(&title_case(&entry.value), 18),
                entry.count,
                bar(entry.count, self.data.max_count, BAR_WIDTH)
            )?;
        }
        Ok(())
    }
}
