//! Ray-arc intersection.

use planar_kernel_geom::Arc;
use planar_kernel_math::{Point2, Tolerance};
use tracing::trace;

use super::boxes_disjoint;
use crate::Ray;

/// Intersect a ray with an arc.
///
/// Returns up to 2 points, in the order the line-arc routine reports them.
/// Unlike the segment case, the ray start is never appended: a start lying
/// between the two line crossings is inside the circle, not on the arc.
pub fn intersect_ray_arc(ray: &Ray, arc: &Arc, tol: &Tolerance) -> Vec<Point2> {
    if boxes_disjoint(ray, arc) {
        trace!("arc box outside ray box");
        return Vec::new();
    }

    ray.line()
        .intersect_arc_with(arc, tol)
        .into_iter()
        .filter(|p| ray.contains_with(p, tol))
        .collect()
}
