use std::fmt;

use crate::presentation::view_models::{
    ConfigViewModel, CreateView, ExportViewModel, FavoriteToggleViewModel, ThemeViewModel,
    ViewMode,
};

impl CreateView for FavoriteToggleViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoriteToggleView { data: self })
    }
}

struct FavoriteToggleView<'a> {
    data: &'a FavoriteToggleViewModel,
}

impl<'a> fmt::Display for FavoriteToggleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} favorite(s) saved", self.data.total)
    }
}

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ThemeView { data: self })
    }
}

struct ThemeView<'a> {
    data: &'a ThemeViewModel,
}

impl<'a> fmt::Display for ThemeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.is_default {
            writeln!(f, "{} (default)", self.data.theme)
        } else {
            writeln!(f, "{}", self.data.theme)
        }
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView { data: self })
    }
}

struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Wrote {} row(s) to {}", self.data.rows, self.data.path)
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

fn presence(exists: bool) -> &'static str {
    if exists { "" } else { " (missing)" }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(f, "Data directory: {}", d.data_dir)?;
        writeln!(f, "Config file:    {}{}", d.config_path, presence(d.config_exists))?;
        writeln!(f, "Catalog:        {}{}", d.catalog_path, presence(d.catalog_exists))?;
        writeln!(f)?;
        writeln!(f, "[display]")?;
        writeln!(f, "default_limit = {}", d.display.default_limit)?;
        writeln!(f, "similar_limit = {}", d.display.similar_limit)?;
        writeln!(f, "product_link = {:?}", d.display.product_link)?;
        Ok(())
    }
}
