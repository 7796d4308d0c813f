pub mod cmd {
    // Browsing
    pub const LIST: &str = "scentdex list";
    pub const LIST_FAVORITES: &str = "scentdex list --favorites";
    pub const FACETS: &str = "scentdex facets";
    pub const SHOW: &str = "scentdex show <CODE>";
    pub const SIMILAR: &str = "scentdex similar <CODE>";
    pub const BRANDS: &str = "scentdex brands";
    pub const LIST_FOCUS_BRAND: &str = "scentdex list --focus-brand <NAME>";
    pub const BROWSE: &str = "scentdex browse";

    // Persisted state
    pub const FAVORITE_TOGGLE: &str = "scentdex favorite toggle <CODE>";
    pub const CONFIG_SET_CATALOG: &str = "scentdex config set-catalog <PATH>";
}

/// Concrete command lines for an item.
pub fn show(code: &str) -> String {
    format!("scentdex show {}", code)
}

pub fn similar(code: &str) -> String {
    format!("scentdex similar {}", code)
}

pub fn favorite_toggle(code: &str) -> String {
    format!("scentdex favorite toggle {}", code)
}

pub fn focus_brand(brand: &str) -> String {
    format!("scentdex list --focus-brand {:?}", brand)
}
