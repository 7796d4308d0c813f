mod brand;
mod favorites;
mod item;
mod theme;

pub use brand::*;
pub use favorites::*;
pub use item::*;
pub use theme::*;
