use anyhow::Result;
use once_cell::sync::OnceCell;
use scentdex_engine::Catalog;
use scentdex_runtime::{Browser, Config, FileStore, LoadReport, load_catalog};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lazily opened collaborators for one command invocation.
pub struct ExecutionContext {
    data_dir: PathBuf,
    catalog_arg: Option<String>,
    config: OnceCell<Config>,
    catalog: OnceCell<Arc<Catalog>>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, catalog_arg: Option<String>) -> Self {
        Self {
            data_dir,
            catalog_arg,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| -> Result<Config> {
            Ok(Config::load_from(&self.config_path())?)
        })
    }

    pub fn catalog_path(&self) -> Result<PathBuf> {
        let config = self.config()?;
        Ok(config.resolve_catalog_path(self.catalog_arg.as_deref(), &self.data_dir))
    }

    /// The catalog, loaded on first use.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let catalog = self.catalog.get_or_try_init(|| -> Result<Arc<Catalog>> {
            let path = self.catalog_path()?;
            let LoadReport {
                catalog,
                dropped,
                duplicates,
            } = load_catalog(&path)?;
            if dropped + duplicates > 0 {
                tracing::warn!(dropped, duplicates, "some catalog records were skipped");
            }
            Ok(Arc::new(catalog))
        })?;
        Ok(Arc::clone(catalog))
    }

    pub fn store(&self) -> FileStore {
        FileStore::in_dir(&self.data_dir)
    }

    /// A browser over the catalog with favorites and theme from the data directory.
    pub fn browser(&self) -> Result<Browser> {
        Ok(Browser::open(self.catalog()?, Box::new(self.store())))
    }
}
