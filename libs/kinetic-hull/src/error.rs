//! # Hull Errors
//!
//! Error types for hull construction and text input.
//!
//! ## Error Policy
//!
//! - Bad input (too few points, NaN coordinates, malformed text) is reported
//!   as a `HullError`
//! - Degenerate geometry is a precondition and is not detected
//! - A broken chain invariant is a bug and panics instead

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building a hull or reading its input.
#[derive(Debug, Error)]
pub enum HullError {
    /// Too few points for a closed hull
    #[error("Insufficient points: {count} (min: {min})")]
    InsufficientPoints { count: usize, min: usize },

    /// A coordinate is NaN or infinite
    #[error("Invalid coordinate at point {index}")]
    InvalidCoordinate { index: usize },

    /// Malformed text input
    #[error("Parse error at token {position}: {message}")]
    Parse { position: usize, message: String },

    /// Facets do not form a closed surface
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Reading or writing a stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding facets as JSON failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HullError {
    /// Creates a parse error at the given token position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology(message.into())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;
