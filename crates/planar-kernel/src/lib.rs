#![warn(missing_docs)]

//! Planar geometry kernel facade.
//!
//! Re-exports the kernel crates and the types most callers need: the
//! [`Aabb2`] interval key, the curve types, and [`Ray`] with its
//! intersectors.
//!
//! # Example
//!
//! ```
//! use planar_kernel::{Point2, Ray, Segment};
//!
//! let segment = Segment::new(Point2::new(-5.0, 0.0), Point2::new(5.0, 0.0));
//! let hits = Ray::default().intersect(&segment);
//! assert_eq!(hits, vec![Point2::new(5.0, 0.0), Point2::new(0.0, 0.0)]);
//! ```

pub use planar_kernel_geom;
pub use planar_kernel_math;
pub use planar_kernel_ray;

pub use planar_kernel_geom::{
    Aabb2, Arc, Circle, GeomError, IntervalKey, Line, Segment, Shape, ShapeKind,
};
pub use planar_kernel_math::{point_cmp, Point2, PointExt, Tolerance, Vec2, VecExt};
pub use planar_kernel_ray::{trace, trace_closest, Ray, RayArg, RayError, RayHit, RayIntersect};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_broad_then_narrow_phase() {
        let ray = Ray::new(Point2::new(0.0, 1.0), Vec2::new(0.0, 1.0)).unwrap();
        let near = Segment::new(Point2::new(2.0, 0.0), Point2::new(2.0, 2.0));
        let below = Segment::new(Point2::new(2.0, -3.0), Point2::new(4.0, -1.0));

        assert!(ray.bounding_box().intersect(&near.bounding_box()));
        assert!(ray.bounding_box().not_intersect(&below.bounding_box()));

        let hits = ray.intersect(&near);
        assert_eq!(hits.len(), 1);
        assert_relative_eq!(hits[0].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(hits[0].y, 1.0, epsilon = 1e-9);
        assert!(ray.intersect(&below).is_empty());
    }

    #[test]
    fn test_ray_box_as_interval_key() {
        let boxes = [
            Ray::default().bounding_box(),
            Segment::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).bounding_box(),
        ];
        let joined = <Aabb2 as IntervalKey>::maximal_val(&boxes[0], &boxes[1]);
        assert_eq!(joined, Aabb2::new(-1.0, 0.0, f64::INFINITY, 0.0));
        assert!(boxes[1].less_than(&boxes[0]));
    }
}
