use std::fmt;

/// Result type for scentdex-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Facet name outside the fixed facet set
    UnknownFacet(String),

    /// Theme name that cannot be stored (empty or whitespace only)
    InvalidTheme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownFacet(name) => write!(
                f,
                "Unknown facet '{}' (expected one of: gender, brand, season, occasion, accord)",
                name
            ),
            Error::InvalidTheme(name) => write!(f, "Invalid theme name: '{}'", name),
        }
    }
}

impl std::error::Error for Error {}
