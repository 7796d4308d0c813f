/// Accord keyword to icon, in display order. An accord gets every icon whose
/// key it contains ("citrus fresh" -> lemon and wind).
pub const ACCORD_ICONS: [(&str, &str); 10] = [
    ("citrus", "🍋"),
    ("woody", "🌲"),
    ("floral", "🌸"),
    ("aromatic", "🌿"),
    ("spicy", "🌶"),
    ("oriental", "🪶"),
    ("amber", "🪶"),
    ("fresh", "💨"),
    ("aquatic", "🌊"),
    ("leather", "👜"),
];

/// Icons for an item's accords, one per matching key.
pub fn accord_icons(accords: &[String]) -> Vec<&'static str> {
    let lowered: Vec<String> = accords.iter().map(|a| a.to_lowercase()).collect();
    ACCORD_ICONS
        .iter()
        .filter(|(key, _)| lowered.iter().any(|accord| accord.contains(key)))
        .map(|(_, icon)| *icon)
        .collect()
}

pub fn gender_icon(gender: &str) -> &'static str {
    match gender {
        "masculine" => "♂",
        "feminine" => "♀",
        "unisex" => "⚥",
        _ => "",
    }
}

pub const FAVORITE_ICON: &str = "★";
pub const NOT_FAVORITE_ICON: &str = "☆";

pub fn favorite_icon(favorite: bool) -> &'static str {
    if favorite {
        FAVORITE_ICON
    } else {
        NOT_FAVORITE_ICON
    }
}
