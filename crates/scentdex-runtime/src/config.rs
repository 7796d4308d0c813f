use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "SCENTDEX_PATH";
pub const CATALOG_ENV: &str = "SCENTDEX_CATALOG";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";
pub const DEFAULT_PRODUCT_LINK: &str =
    "https://leparfum.com.gr/en/module/iqitsearch/searchiqit?s={code}";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SCENTDEX_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.scentdex (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("scentdex"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".scentdex"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "similar_limit")]
    pub similar_limit: usize,
    /// Product page template; `{code}` is replaced by the item code
    #[serde(default = "product_link")]
    pub product_link: String,
}

fn default_limit() -> usize {
    50
}

fn similar_limit() -> usize {
    5
}

fn product_link() -> String {
    DEFAULT_PRODUCT_LINK.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            similar_limit: similar_limit(),
            product_link: product_link(),
        }
    }
}

impl DisplayConfig {
    pub fn product_url(&self, code: &str) -> String {
        self.product_link.replace("{code}", code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Catalog file to open, based on priority:
    /// 1. Explicit path
    /// 2. SCENTDEX_CATALOG environment variable
    /// 3. `catalog_path` from the config file
    /// 4. `catalog.json` inside the data directory
    pub fn resolve_catalog_path(&self, explicit_path: Option<&str>, data_dir: &Path) -> PathBuf {
        if let Some(path) = explicit_path {
            return expand_tilde(path);
        }

        if let Ok(env_path) = std::env::var(CATALOG_ENV) {
            return expand_tilde(&env_path);
        }

        if let Some(path) = &self.catalog_path {
            return path.clone();
        }

        data_dir.join(DEFAULT_CATALOG_FILE)
    }

    pub fn set_catalog_path(&mut self, path: impl Into<PathBuf>) {
        self.catalog_path = Some(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.display.default_limit, 50);
        assert_eq!(config.display.similar_limit, 5);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.set_catalog_path("/srv/catalog.json");
        config.display.default_limit = 10;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_display_section_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[display]\nsimilar_limit = 3\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.display.similar_limit, 3);
        assert_eq!(loaded.display.default_limit, 50);
        assert_eq!(loaded.display.product_link, DEFAULT_PRODUCT_LINK);

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "catalog_path = [")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_explicit_paths_win() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        let resolved = config.resolve_catalog_path(Some("/explicit.json"), Path::new("/data"));
        assert_eq!(resolved, PathBuf::from("/explicit.json"));

        assert_eq!(
            resolve_data_dir(Some("/tmp/scentdex")).ok(),
            Some(PathBuf::from("/tmp/scentdex"))
        );
    }

    #[test]
    fn test_product_url_substitutes_code() {
        let display = DisplayConfig::default();
        assert_eq!(
            display.product_url("A1"),
            "https://leparfum.com.gr/en/module/iqitsearch/searchiqit?s=A1"
        );
    }
}
