mod context;

pub mod brands;
pub mod browse;
pub mod config;
pub mod export;
pub mod facets;
pub mod favorite;
pub mod list;
pub mod show;
pub mod similar;
pub mod stats;
pub mod theme;

pub use context::HandlerContext;

use anyhow::{Result, bail};
use scentdex_engine::Catalog;
use scentdex_types::Item;

/// Look up an item, failing with a hint when the code is unknown.
pub(crate) fn find_item<'a>(catalog: &'a Catalog, code: &str) -> Result<&'a Item> {
    match catalog.get(code) {
        Some(item) => Ok(item),
        None => bail!(
            "Unknown item code: {} (see `{}` for available codes)",
            code,
            crate::args::hints::cmd::LIST
        ),
    }
}
