pub mod domain;
pub mod error;
pub mod facet;
pub mod filter;

pub use domain::*;
pub use error::{Error, Result};
pub use facet::*;
pub use filter::*;
