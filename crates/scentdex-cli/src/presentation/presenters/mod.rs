mod browser;
mod catalog;
mod item;
mod stats;
mod system;

pub use browser::{Panel, present_browser_screen};
pub use catalog::{present_brands, present_facets, present_result_list};
pub use item::{present_item_detail, present_similar};
pub use stats::present_stats;
pub use system::{
    present_catalog_set, present_config, present_export, present_favorite_toggle, present_theme,
};
