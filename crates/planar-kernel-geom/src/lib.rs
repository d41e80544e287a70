#![warn(missing_docs)]

//! Bounding boxes and analytic curves for the planar kernel.
//!
//! Provides the axis-aligned [`Aabb2`] used both as a shape's extent and as
//! an ordered interval-tree key ([`IntervalKey`]), together with the curve
//! types the ray intersector works against: infinite lines, segments,
//! arcs and circles.

pub mod arc;
pub mod bbox;
pub mod error;
pub mod interval;
pub mod line;
pub mod segment;
pub mod shape;

pub use arc::{Arc, Circle};
pub use bbox::Aabb2;
pub use error::{GeomError, Result};
pub use interval::IntervalKey;
pub use line::Line;
pub use segment::Segment;
pub use shape::{Shape, ShapeKind};
