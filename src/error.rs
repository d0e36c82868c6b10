use thiserror::Error;

/// Errors reported by the engine.
///
/// All of them are structural: the input has the wrong shape, so retrying the
/// same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Width or height is zero, or the cell count does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Number of cells does not match `width * height`.
    #[error("grid expects {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Option is missing, has the wrong kind or is not declared by the schema.
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: String, reason: String },

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}

impl Error {
    pub(crate) fn invalid_option(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
