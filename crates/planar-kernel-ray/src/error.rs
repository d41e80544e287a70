//! Error types for ray construction and intersection.

use planar_kernel_geom::{GeomError, ShapeKind};
use thiserror::Error;

/// Errors that can occur when building or intersecting rays.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RayError {
    /// Constructor arguments of the wrong arity or type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input with an undefined direction, such as a zero normal.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// The shape has no ray intersector.
    #[error("ray intersection with a {0} is not supported")]
    UnsupportedShape(ShapeKind),
}

impl From<GeomError> for RayError {
    fn from(err: GeomError) -> Self {
        match err {
            GeomError::DegenerateGeometry(msg) => RayError::DegenerateGeometry(msg),
        }
    }
}

/// Result type for ray operations.
pub type Result<T> = std::result::Result<T, RayError>;
