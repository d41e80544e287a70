//! Line segments.

use planar_kernel_math::{Point2, PointExt, Tolerance};

use crate::Aabb2;

/// A straight segment from `ps` to `pe`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub ps: Point2,
    /// End point.
    pub pe: Point2,
}

impl Segment {
    /// Create a segment between two points.
    pub fn new(ps: Point2, pe: Point2) -> Self {
        Self { ps, pe }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.ps.distance_to(&self.pe)
    }

    /// Whether start and end coincide within tolerance.
    pub fn is_zero_length(&self) -> bool {
        self.ps.equal_to(&self.pe)
    }

    /// Bounding box spanned by the endpoints.
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2::new(
            self.ps.x.min(self.pe.x),
            self.ps.y.min(self.pe.y),
            self.ps.x.max(self.pe.x),
            self.ps.y.max(self.pe.y),
        )
    }

    /// Whether `pt` lies on the segment within tolerance.
    pub fn contains(&self, pt: &Point2) -> bool {
        self.contains_with(pt, &Tolerance::DEFAULT)
    }

    /// [`Segment::contains`] under an explicit tolerance.
    pub fn contains_with(&self, pt: &Point2, tol: &Tolerance) -> bool {
        tol.eq_0(self.distance_to(pt))
    }

    /// Shortest distance from `pt` to the segment.
    pub fn distance_to(&self, pt: &Point2) -> f64 {
        let d = self.pe - self.ps;
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return self.ps.distance_to(pt);
        }
        let t = ((pt - self.ps).dot(&d) / len_sq).clamp(0.0, 1.0);
        (self.ps + d * t).distance_to(pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_box_normalizes_order() {
        let s = Segment::new(Point2::new(5.0, -1.0), Point2::new(-5.0, 2.0));
        assert_eq!(s.bounding_box(), Aabb2::new(-5.0, -1.0, 5.0, 2.0));
    }

    #[test]
    fn test_segment_length() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_relative_eq!(s.length(), 5.0, epsilon = 1e-9);
        assert!(!s.is_zero_length());
        let z = Segment::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert!(z.is_zero_length());
    }

    #[test]
    fn test_segment_contains() {
        let s = Segment::new(Point2::new(-5.0, 0.0), Point2::new(5.0, 0.0));
        assert!(s.contains(&Point2::new(0.0, 0.0)));
        assert!(s.contains(&Point2::new(5.0, 0.0)));
        assert!(!s.contains(&Point2::new(6.0, 0.0)));
        assert!(!s.contains(&Point2::new(0.0, 0.1)));
    }
}
