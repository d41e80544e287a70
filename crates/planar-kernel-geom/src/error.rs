//! Error types for geometry construction.

use thiserror::Error;

/// Errors from constructing geometric primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Input would produce an undefined direction or zero-size primitive.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;
