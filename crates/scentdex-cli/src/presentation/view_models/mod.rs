pub mod browser;
pub mod catalog;
pub mod common;
pub mod item;
pub mod result;
pub mod stats;
pub mod system;

pub use browser::*;
pub use catalog::*;
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use item::*;
pub use result::CommandResultViewModel;
pub use stats::*;
pub use system::*;

use std::fmt;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
