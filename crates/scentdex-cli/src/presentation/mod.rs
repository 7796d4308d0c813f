//! # Presentation Layer
//!
//! User interface for the CLI, an MVVM adaptation with component-owned UI
//! state for the interactive browser.
//!
//! ## Data Flow
//!
//! ### Console output (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> Output
//!                                                                  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ### Interactive browser
//!
//! ```text
//! [ Handler ] <--(BrowserIntent)-- [ Renderer (Router) ] <-- [ Component ] <-- User Input
//!     |                                    ^
//!     +--> [ Presenter ] --> [ BrowserScreenViewModel ]
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data.** Counts stay numbers and tags stay
//!    lowercase; capitalizing, icons and bars belong to views.
//! 2. **`ViewMode` is density, not shape.** `--format json` ignores it and
//!    always dumps the full view model.
//! 3. **UI state lives in components.** Selection, the active facet and the
//!    search buffer never enter a view model; components clamp their cursor
//!    against the data before each render.
//! 4. **Domain actions go up.** Components emit `Action`s or intents; only the
//!    handler touches the browser session.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Decide when to show a tip or badge | `presenters/` |
//! | Change layout or colors | `views/` |
//! | Handle a key in the browser | `views/tui/components/` |
//! | Add an icon or text helper | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::{BrowserIntent, BrowserRenderer, ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
