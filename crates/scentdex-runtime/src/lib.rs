// Runtime module - I/O collaborators around the engine
// Catalog loading, key-value persistence, configuration and the persisted browser

pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod store;

pub use browser::Browser;
pub use config::{Config, DisplayConfig, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use export::{export_csv, write_csv};
pub use loader::{LoadReport, load_catalog, parse_catalog};
pub use store::{FileStore, KeyValueStore, MemoryStore};
