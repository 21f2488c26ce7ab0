//! Result and error types for track construction, configuration and rendering.

use thiserror::Error;

/// Result type for fallible track-reveal operations
pub type RevealResult<T> = Result<T, RevealError>;

/// Reasons a list of points cannot form a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTrackError {
    /// A closed polygon needs at least one point
    #[error("a track needs at least one point")]
    Empty,

    /// A coordinate was NaN or infinite
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Position of the offending point in the input
        index: usize,
    },
}

/// Errors that can occur in track-reveal
#[derive(Debug, Error)]
pub enum RevealError {
    /// Track construction failed
    #[error("Invalid track: {0}")]
    InvalidTrack(#[from] InvalidTrackError),

    /// Animation or render configuration is out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// Drawing to a surface failed
    #[error("Render failed: {message}")]
    Render {
        /// Error message
        message: String,
    },

    /// Image or animation encoding failed
    #[error("Encoding failed: {message}")]
    Encode {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RevealError {
    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a render error
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create an encoding error
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}
