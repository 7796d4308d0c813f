use scentdex_runtime::{Config, DisplayConfig};
use scentdex_types::{Item, Theme};
use std::path::Path;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, DisplayConfigViewModel, ExportViewModel,
    FavoriteToggleViewModel, Guidance, StatusBadge, ThemeViewModel,
};

pub fn present_favorite_toggle(
    item: &Item,
    favorite: bool,
    total: usize,
) -> CommandResultViewModel<FavoriteToggleViewModel> {
    let badge = if favorite {
        StatusBadge::success(format!("Added {} to favorites", item.name))
    } else {
        StatusBadge::success(format!("Removed {} from favorites", item.name))
    };

    CommandResultViewModel::new(FavoriteToggleViewModel {
        code: item.code.clone(),
        name: item.name.clone(),
        favorite,
        total,
    })
    .with_badge(badge)
    .with_suggestion(Guidance::new("List your favorites").with_command(cmd::LIST_FAVORITES))
}

pub fn present_theme(theme: &Theme, changed: bool) -> CommandResultViewModel<ThemeViewModel> {
    let content = ThemeViewModel {
        theme: theme.name().to_string(),
        is_default: theme.is_default(),
    };

    let result = CommandResultViewModel::new(content);
    if changed {
        result.with_badge(StatusBadge::success(format!("Theme set to {}", theme.name())))
    } else {
        result
    }
}

pub fn present_export(path: &Path, rows: usize) -> CommandResultViewModel<ExportViewModel> {
    let badge = if rows == 0 {
        StatusBadge::warning("Exported an empty result set (header only)")
    } else {
        StatusBadge::success(format!("Exported {} item(s)", rows))
    };

    CommandResultViewModel::new(ExportViewModel {
        path: path.display().to_string(),
        rows,
    })
    .with_badge(badge)
}

fn display_config(display: &DisplayConfig) -> DisplayConfigViewModel {
    DisplayConfigViewModel {
        default_limit: display.default_limit,
        similar_limit: display.similar_limit,
        product_link: display.product_link.clone(),
    }
}

pub fn present_config(
    data_dir: &Path,
    config_path: &Path,
    catalog_path: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        data_dir: data_dir.display().to_string(),
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        catalog_path: catalog_path.display().to_string(),
        catalog_exists: catalog_path.exists(),
        display: display_config(&config.display),
    };

    if content.catalog_exists {
        return CommandResultViewModel::new(content);
    }

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::warning("Catalog file not found"))
        .with_suggestion(
            Guidance::new("Point scentdex at your catalog").with_command(cmd::CONFIG_SET_CATALOG),
        )
}

pub fn present_catalog_set(
    data_dir: &Path,
    config_path: &Path,
    catalog_path: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = present_config(data_dir, config_path, catalog_path, config);
    if result.content.catalog_exists {
        result
            .with_badge(StatusBadge::success("Catalog path saved"))
            .with_suggestion(Guidance::new("Start browsing").with_command(cmd::BROWSE))
    } else {
        result
    }
}
