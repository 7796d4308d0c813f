pub mod icons;
pub mod text;

pub use icons::{accord_icons, favorite_icon, gender_icon};
pub use text::{bar, join_tags, percent, title_case, truncate};
