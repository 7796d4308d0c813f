mod catalog;
mod item;
mod stats;
mod system;
pub mod tui;

pub use item::{NO_DESCRIPTION, NO_NOTES, note_groups};
