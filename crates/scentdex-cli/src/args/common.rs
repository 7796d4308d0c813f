use clap::Args;
use scentdex_engine::Action;
use scentdex_types::Facet;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(long, help = "Minimal output (codes only, for scripting)", group = "view_mode")]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}

/// Filter flags shared by every command that works on a result set.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Gender affinity (repeatable, any of)")]
    pub gender: Vec<String>,

    #[arg(long, help = "Brand name (repeatable, any of)")]
    pub brand: Vec<String>,

    #[arg(long, help = "Season tag (repeatable, any of)")]
    pub season: Vec<String>,

    #[arg(long, help = "Occasion tag (repeatable, any of)")]
    pub occasion: Vec<String>,

    #[arg(long, help = "Accord tag (repeatable, all of)")]
    pub accord: Vec<String>,

    #[arg(
        long,
        value_name = "NAME",
        conflicts_with_all = ["brand", "favorites"],
        help = "Show a single brand"
    )]
    pub focus_brand: Option<String>,

    #[arg(long, help = "Only favorites")]
    pub favorites: bool,

    #[arg(short = 'q', long, value_name = "TEXT", help = "Search name, brand and code")]
    pub search: Option<String>,
}

impl FilterArgs {
    /// The flags as the actions a user would have performed, in a stable order.
    pub fn to_actions(&self) -> Vec<Action> {
        let facets = [
            (Facet::Gender, &self.gender),
            (Facet::Brand, &self.brand),
            (Facet::Season, &self.season),
            (Facet::Occasion, &self.occasion),
            (Facet::Accord, &self.accord),
        ];

        let mut actions: Vec<Action> = facets
            .into_iter()
            .flat_map(|(facet, values)| values.iter().map(move |v| Action::select(facet, v.as_str())))
            .collect();

        if let Some(brand) = &self.focus_brand {
            actions.push(Action::FocusBrand(brand.clone()));
        }
        if self.favorites {
            actions.push(Action::ToggleFavoritesView);
        }
        if let Some(query) = &self.search {
            actions.push(Action::SetQuery(query.clone()));
        }

        actions
    }
}
