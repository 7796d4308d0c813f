use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteToggleViewModel {
    pub code: String,
    pub name: String,
    pub favorite: bool,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeViewModel {
    pub theme: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportViewModel {
    pub path: String,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayConfigViewModel {
    pub default_limit: usize,
    pub similar_limit: usize,
    pub product_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_exists: bool,
    pub catalog_path: String,
    pub catalog_exists: bool,
    pub display: DisplayConfigViewModel,
}
