// NOTE: scentdex Architecture Rationale
//
// Why a single mutation path?
// - Every flag and every key press becomes an engine `Action`
// - `reduce` is the only place filter state changes, so the CLI flags, the
//   interactive checkboxes and the chip list cannot drift apart
// - One-shot commands replay their flags into a fresh session, then render
//
// Why recompute everything on each action?
// - Option viability couples every facet to every other facet
// - The catalog is small and read-only; a full pass is cheaper than tracking
//   which options a change could affect
//
// Why JSON view models?
// - `--format json` is the scripting surface; it always carries the full view
//   model regardless of the text density flags

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    Cli, Commands, ConfigCommand, FacetArg, FavoriteCommand, FilterArgs, LogLevel, OutputFormat,
    ThemeCommand, ViewModeArgs,
};
pub use commands::run;
