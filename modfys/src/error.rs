//! Error type for catalog loading and lookups

use modfys_core::ModfysError;

/// Errors produced by the modfys implementation crate
#[derive(Debug)]
pub enum Error {
    /// Validation, formula or lookup failure from the core
    Core(ModfysError),
    /// Catalog document could not be decoded or records could not be rendered
    Json(serde_json::Error),
    /// Catalog file could not be read
    Io(std::io::Error),
    /// Two catalog entries share a key
    DuplicateKey(String),
    /// A catalog entry uses `particles` or `interactions` as its key
    ReservedKey(String),
    /// A particle lists an interaction that is not in the catalog
    UnknownInteraction {
        /// Symbol of the offending particle
        symbol: String,
        /// Interaction name it refers to
        interaction: String,
    },
}

impl Error {
    /// Get the core error, if this wraps one
    pub fn as_core(&self) -> Option<ModfysError> {
        match self {
            Error::Core(err) => Some(*err),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Core(err) => write!(f, "{err}"),
            Error::Json(err) => write!(f, "Invalid catalog document: {err}"),
            Error::Io(err) => write!(f, "Failed to read catalog: {err}"),
            Error::DuplicateKey(key) => write!(f, "Duplicate catalog key {key:?}"),
            Error::ReservedKey(key) => write!(f, "Catalog key {key:?} is reserved"),
            Error::UnknownInteraction {
                symbol,
                interaction,
            } => write!(
                f,
                "Particle {symbol:?} refers to unknown interaction {interaction:?}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModfysError> for Error {
    fn from(err: ModfysError) -> Self {
        Error::Core(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type for modfys operations
pub type Result<T> = std::result::Result<T, Error>;
