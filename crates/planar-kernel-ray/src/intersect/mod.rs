//! Ray-curve intersection algorithms.
//!
//! Each curve type has a dedicated intersector. All of them share the same
//! shape: reject on bounding boxes, intersect the ray's carrier line with
//! the curve, then keep the points that lie on the forward half-line.

mod arc;
mod segment;

pub use arc::intersect_ray_arc;
pub use segment::intersect_ray_segment;

use planar_kernel_geom::{Aabb2, Arc, Segment};
use planar_kernel_math::{Point2, Tolerance};

use crate::Ray;

/// A shape a [`Ray`] can be intersected with.
///
/// New shapes gain ray support by implementing this trait; [`Ray`] itself
/// does not change.
pub trait RayIntersect {
    /// Bounding box used for broad-phase rejection.
    fn bounding_box(&self) -> Aabb2;

    /// Intersection points of `ray` with this shape.
    fn intersected_by_ray(&self, ray: &Ray, tol: &Tolerance) -> Vec<Point2>;
}

impl RayIntersect for Segment {
    fn bounding_box(&self) -> Aabb2 {
        Segment::bounding_box(self)
    }

    fn intersected_by_ray(&self, ray: &Ray, tol: &Tolerance) -> Vec<Point2> {
        intersect_ray_segment(ray, self, tol)
    }
}

impl RayIntersect for Arc {
    fn bounding_box(&self) -> Aabb2 {
        Arc::bounding_box(self)
    }

    fn intersected_by_ray(&self, ray: &Ray, tol: &Tolerance) -> Vec<Point2> {
        intersect_ray_arc(ray, self, tol)
    }
}

/// Broad-phase test shared by the intersectors.
fn boxes_disjoint<S: RayIntersect + ?Sized>(ray: &Ray, shape: &S) -> bool {
    ray.bounding_box().not_intersect(&shape.bounding_box())
}
