#![warn(missing_docs)]

//! Half-infinite rays and ray-curve intersection for the planar kernel.
//!
//! # Architecture
//!
//! - [`Ray`] - start point plus normal; travels 90° clockwise from the normal
//! - [`intersect`] - per-curve intersectors behind the [`RayIntersect`] trait
//! - [`trace`] - broad-phase and narrow-phase over a list of shapes
//!
//! # Example
//!
//! ```
//! use planar_kernel_geom::Segment;
//! use planar_kernel_math::Point2;
//! use planar_kernel_ray::Ray;
//!
//! let ray = Ray::default();
//! let segment = Segment::new(Point2::new(3.0, -1.0), Point2::new(3.0, 1.0));
//!
//! if ray.bounding_box().intersect(&segment.bounding_box()) {
//!     let hits = ray.intersect(&segment);
//!     assert_eq!(hits.len(), 1);
//! }
//! ```

mod error;
mod ray;
pub mod intersect;
pub mod trace;

pub use error::{RayError, Result};
pub use intersect::RayIntersect;
pub use ray::{Ray, RayArg};
pub use trace::{trace, trace_closest, RayHit};
