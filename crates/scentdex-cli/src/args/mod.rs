// NOTE: Command Organization Rationale
//
// Why flat read commands but namespaced write commands?
// - Browsing verbs (list, facets, show, similar, stats) are used constantly and
//   share one set of filter flags
// - Persisted state (favorite, theme, config) is grouped so its mutations are
//   easy to find in --help

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "scentdex")]
#[command(about = "Browse and filter a fragrance catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $SCENTDEX_PATH, then the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Catalog JSON file (default: $SCENTDEX_CATALOG, then config, then <data-dir>/catalog.json)"
    )]
    pub catalog: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
