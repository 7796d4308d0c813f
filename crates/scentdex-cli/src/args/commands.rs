use super::common::{FilterArgs, ViewModeArgs};
use super::enums::FacetArg;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List catalog items matching the filters")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, help = "Maximum number of items to print (default: from config)")]
        limit: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show filter options and which of them still match")]
    Facets {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, help = "Only this facet")]
        facet: Option<FacetArg>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the details of one item")]
    Show {
        #[arg(help = "Item code")]
        code: String,
    },

    #[command(about = "Find items with a similar scent profile")]
    Similar {
        #[arg(help = "Item code")]
        code: String,

        #[arg(long, help = "Number of matches (default: from config)")]
        limit: Option<usize>,
    },

    #[command(about = "Value distribution of a facet over the filtered items")]
    Stats {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, default_value = "accord")]
        facet: FacetArg,
    },

    #[command(about = "List brands with their item counts")]
    Brands {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Manage favorites")]
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommand,
    },

    #[command(about = "Show or change the display theme")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },

    #[command(about = "Write the filtered items to a CSV file")]
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'o', help = "Output file")]
        output: PathBuf,
    },

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Interactive browser")]
    Browse,
}

#[derive(Subcommand)]
pub enum FavoriteCommand {
    #[command(about = "Add or remove an item from favorites")]
    Toggle {
        #[arg(help = "Item code")]
        code: String,
    },

    #[command(about = "List favorite items")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Print the current theme")]
    Show,

    #[command(about = "Set the theme (light, dark or a custom name)")]
    Set {
        #[arg(help = "Theme name")]
        name: String,
    },

    #[command(about = "Switch between light and dark")]
    Toggle,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Remember the catalog file to open")]
    SetCatalog {
        #[arg(help = "Path to the catalog JSON file")]
        path: String,
    },
}
