//! Ray-segment intersection.

use planar_kernel_geom::Segment;
use planar_kernel_math::{Point2, Tolerance};
use tracing::trace;

use super::boxes_disjoint;
use crate::Ray;

/// Intersect a ray with a segment.
///
/// Returns the line-segment intersections that lie on the ray, in the order
/// the line routine reports them. When the segment lies on the ray's line
/// and the ray starts strictly inside it, only the far endpoint survives the
/// forward filter; the ray start is then appended as the second point.
pub fn intersect_ray_segment(ray: &Ray, segment: &Segment, tol: &Tolerance) -> Vec<Point2> {
    let mut ip = Vec::new();

    if boxes_disjoint(ray, segment) {
        trace!("segment box outside ray box");
        return ip;
    }

    let line = ray.line();
    let line_ip = line.intersect_segment_with(segment, tol);

    ip.extend(
        line_ip
            .iter()
            .copied()
            .filter(|p| ray.contains_with(p, tol)),
    );

    if line_ip.len() == 2 && ip.len() == 1 && line.contains_with(&ray.start(), tol) {
        trace!(x = ray.start().x, y = ray.start().y, "ray starts inside collinear segment");
        ip.push(ray.start());
    }

    ip
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planar_kernel_math::Vec2;

    fn horizontal_segment() -> Segment {
        Segment::new(Point2::new(-5.0, 0.0), Point2::new(5.0, 0.0))
    }

    #[test]
    fn test_ray_inside_collinear_segment_recovers_start() {
        let ray = Ray::default();
        let ip = intersect_ray_segment(&ray, &horizontal_segment(), &Tolerance::DEFAULT);
        assert_eq!(ip, vec![Point2::new(5.0, 0.0), Point2::new(0.0, 0.0)]);
    }

    #[test]
    fn test_ray_before_collinear_segment() {
        let ray = Ray::from_origin(Point2::new(-10.0, 0.0));
        let ip = ray.intersect(&horizontal_segment());
        assert_eq!(ip, vec![Point2::new(-5.0, 0.0), Point2::new(5.0, 0.0)]);
    }

    #[test]
    fn test_ray_past_collinear_segment() {
        let ray = Ray::from_origin(Point2::new(10.0, 0.0));
        assert!(ray.intersect(&horizontal_segment()).is_empty());
    }

    #[test]
    fn test_ray_at_segment_endpoint() {
        let ray = Ray::from_origin(Point2::new(-5.0, 0.0));
        let ip = ray.intersect(&horizontal_segment());
        assert_eq!(ip, vec![Point2::new(-5.0, 0.0), Point2::new(5.0, 0.0)]);
    }

    #[test]
    fn test_ray_crosses_segment() {
        let ray = Ray::default();
        let seg = Segment::new(Point2::new(2.0, -3.0), Point2::new(4.0, 1.0));
        let ip = ray.intersect(&seg);
        assert_eq!(ip.len(), 1);
        assert_relative_eq!(ip[0].x, 3.5, epsilon = 1e-9);
        assert_relative_eq!(ip[0].y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_segment_behind_ray() {
        let ray = Ray::default();
        let seg = Segment::new(Point2::new(-2.0, -3.0), Point2::new(-4.0, 1.0));
        assert!(ray.intersect(&seg).is_empty());
    }

    #[test]
    fn test_broad_phase_rejects_far_segment() {
        let ray = Ray::default();
        let seg = Segment::new(Point2::new(2.0, 1.0), Point2::new(4.0, 3.0));
        assert!(ray.intersect(&seg).is_empty());
    }

    #[test]
    fn test_diagonal_ray_crossing() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(-1.0, 1.0)).unwrap();
        let seg = Segment::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0));
        let ip = ray.intersect(&seg);
        assert_eq!(ip.len(), 1);
        assert_relative_eq!(ip[0].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(ip[0].y, 2.0, epsilon = 1e-9);
    }
}
