//! Tracing a ray through a collection of shapes.
//!
//! Every shape goes through the same two phases as a single intersection:
//! bounding-box rejection, then exact intersection. Hits from all shapes are
//! merged and ordered by distance from the ray start.

use planar_kernel_geom::Shape;
use planar_kernel_math::{Point2, PointExt};

use crate::error::Result;
use crate::Ray;

/// One intersection found while tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point.
    pub point: Point2,
    /// Distance from the ray start.
    pub distance: f64,
    /// Index of the shape that was hit.
    pub shape_index: usize,
}

/// Trace a ray through `shapes`, returning all hits sorted by distance.
///
/// Fails with [`crate::RayError::UnsupportedShape`] on the first shape the
/// ray cannot be intersected with.
pub fn trace(ray: &Ray, shapes: &[Shape]) -> Result<Vec<RayHit>> {
    let start = ray.start();
    let mut hits = Vec::new();

    for (shape_index, shape) in shapes.iter().enumerate() {
        for point in ray.intersect_shape(shape)? {
            hits.push(RayHit {
                point,
                distance: start.distance_to(&point),
                shape_index,
            });
        }
    }

    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    tracing::trace!(shapes = shapes.len(), hits = hits.len(), "ray traced");
    Ok(hits)
}

/// Trace a ray and return only the closest hit.
pub fn trace_closest(ray: &Ray, shapes: &[Shape]) -> Result<Option<RayHit>> {
    Ok(trace(ray, shapes)?.into_iter().next())
}
