//! Error types for code generation

use std::io;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// A rendered template could not be written to the output sink
    #[error("failed to render {target}: {source}")]
    Render {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Malformed item in a plugin parameter string
    #[error("invalid plugin parameter: {0:?}")]
    InvalidParameter(String),

    /// Parameter key that does not name an option
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Option value that is not a boolean
    #[error("invalid value {value:?} for option {key}")]
    InvalidOptionValue { key: String, value: String },

    /// Requested file is not part of the descriptor set
    #[error("file not found in descriptor set: {0}")]
    MissingFile(String),

    /// Descriptor input could not be decoded
    #[error("descriptor error: {0}")]
    Descriptor(String),
}

impl GenError {
    /// Wrap a sink failure for the named render target
    pub fn render(target: impl Into<String>, source: io::Error) -> Self {
        GenError::Render {
            target: target.into(),
            source,
        }
    }

    /// Returns true for failures raised while emitting code
    pub fn is_render(&self) -> bool {
        matches!(self, GenError::Render { .. })
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Descriptor(err.to_string())
    }
}
