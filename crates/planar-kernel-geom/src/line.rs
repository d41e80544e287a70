//! Infinite lines and their intersections with segments, arcs and circles.

use planar_kernel_math::{Point2, PointExt, Tolerance, Vec2, VecExt};

use crate::error::{GeomError, Result};
use crate::{Arc, Circle, Segment};

/// An infinite line through `pt` with unit normal `norm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point on the line.
    pub pt: Point2,
    /// Unit normal of the line.
    pub norm: Vec2,
}

impl Line {
    /// Create a line through `pt` perpendicular to `norm`.
    ///
    /// The normal is normalized; a zero normal is rejected.
    pub fn new(pt: Point2, norm: Vec2) -> Result<Self> {
        let len = norm.norm();
        if Tolerance::DEFAULT.eq_0(len) {
            tracing::debug!(x = norm.x, y = norm.y, "rejecting line with zero normal");
            return Err(GeomError::DegenerateGeometry(format!(
                "line normal ({}, {}) has zero length",
                norm.x, norm.y
            )));
        }
        Ok(Self {
            pt,
            norm: norm / len,
        })
    }

    /// Create the line through two distinct points.
    ///
    /// The normal is the direction `p1 -> p2` rotated 90° counter-clockwise.
    pub fn through_points(p1: Point2, p2: Point2) -> Result<Self> {
        if p1.equal_to(&p2) {
            return Err(GeomError::DegenerateGeometry(format!(
                "line through coincident points ({}, {})",
                p1.x, p1.y
            )));
        }
        Self::new(p1, (p2 - p1).rotate90_ccw())
    }

    /// Whether `pt` lies on the line.
    pub fn contains(&self, pt: &Point2) -> bool {
        self.contains_with(pt, &Tolerance::DEFAULT)
    }

    /// [`Line::contains`] under an explicit tolerance.
    pub fn contains_with(&self, pt: &Point2, tol: &Tolerance) -> bool {
        if tol.points_equal(&self.pt, pt) {
            return true;
        }
        tol.eq_0(self.norm.dot(&(pt - self.pt)))
    }

    /// Orthogonal projection of `pt` onto the line.
    pub fn projection(&self, pt: &Point2) -> Point2 {
        let d = self.norm.dot(&(pt - self.pt));
        pt - self.norm * d
    }

    /// Whether `pt` is strictly on the side the normal points to.
    fn left_to(&self, pt: &Point2, tol: &Tolerance) -> bool {
        tol.gt(self.norm.dot(&(pt - self.pt)), 0.0)
    }

    /// Intersection with another line. Parallel lines give no points.
    pub fn intersect_line(&self, other: &Line) -> Vec<Point2> {
        self.intersect_line_with(other, &Tolerance::DEFAULT)
    }

    /// [`Line::intersect_line`] under an explicit tolerance.
    pub fn intersect_line_with(&self, other: &Line, tol: &Tolerance) -> Vec<Point2> {
        let (a1, b1) = (self.norm.x, self.norm.y);
        let c1 = self.norm.dot(&self.pt.coords);
        let (a2, b2) = (other.norm.x, other.norm.y);
        let c2 = other.norm.dot(&other.pt.coords);

        let det = a1 * b2 - b1 * a2;
        if tol.eq_0(det) {
            return Vec::new();
        }
        let det_x = c1 * b2 - b1 * c2;
        let det_y = a1 * c2 - c1 * a2;
        vec![Point2::new(det_x / det, det_y / det)]
    }

    /// Intersection with a segment: 0, 1 or 2 points.
    ///
    /// Endpoints on the line are reported first (start, then end), so a
    /// segment lying on the line yields both of its endpoints.
    pub fn intersect_segment(&self, seg: &Segment) -> Vec<Point2> {
        self.intersect_segment_with(seg, &Tolerance::DEFAULT)
    }

    /// [`Line::intersect_segment`] under an explicit tolerance.
    pub fn intersect_segment_with(&self, seg: &Segment, tol: &Tolerance) -> Vec<Point2> {
        let mut ip = Vec::new();

        if self.contains_with(&seg.ps, tol) {
            ip.push(seg.ps);
        }
        if self.contains_with(&seg.pe, tol) && !tol.points_equal(&seg.ps, &seg.pe) {
            ip.push(seg.pe);
        }
        if !ip.is_empty() {
            return ip;
        }

        // Both ends on the same side: no crossing
        if self.left_to(&seg.ps, tol) == self.left_to(&seg.pe, tol) {
            return ip;
        }

        match Line::through_points(seg.ps, seg.pe) {
            Ok(carrier) => self.intersect_line_with(&carrier, tol),
            Err(_) => ip,
        }
    }

    /// Intersection with a full circle: 0, 1 (tangent) or 2 points.
    pub fn intersect_circle(&self, circle: &Circle) -> Vec<Point2> {
        self.intersect_circle_with(circle, &Tolerance::DEFAULT)
    }

    /// [`Line::intersect_circle`] under an explicit tolerance.
    pub fn intersect_circle_with(&self, circle: &Circle, tol: &Tolerance) -> Vec<Point2> {
        let prj = self.projection(&circle.pc);
        let dist = circle.pc.distance_to(&prj);

        if tol.eq(dist, circle.r) {
            vec![prj]
        } else if tol.lt(dist, circle.r) {
            let delta = (circle.r * circle.r - dist * dist).sqrt();
            let along = self.norm.rotate90_ccw() * delta;
            vec![prj + along, prj - along]
        } else {
            Vec::new()
        }
    }

    /// Intersection with an arc: the circle crossings that lie on the arc.
    pub fn intersect_arc(&self, arc: &Arc) -> Vec<Point2> {
        self.intersect_arc_with(arc, &Tolerance::DEFAULT)
    }

    /// [`Line::intersect_arc`] under an explicit tolerance.
    pub fn intersect_arc_with(&self, arc: &Arc, tol: &Tolerance) -> Vec<Point2> {
        let circle = Circle::new(arc.pc, arc.r);
        self.intersect_circle_with(&circle, tol)
            .into_iter()
            .filter(|p| arc.contains_with(p, tol))
            .collect()
    }
}
