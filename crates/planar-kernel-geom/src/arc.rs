//! Circles and circular arcs.

use std::f64::consts::{FRAC_PI_2, TAU};

use planar_kernel_math::{unit_vector, Point2, PointExt, Tolerance, VecExt};

use crate::Aabb2;

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center.
    pub pc: Point2,
    /// Radius.
    pub r: f64,
}

impl Circle {
    /// Create a circle from center and radius.
    pub fn new(pc: Point2, r: f64) -> Self {
        Self { pc, r }
    }

    /// Bounding box of the circle.
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2::new(
            self.pc.x - self.r,
            self.pc.y - self.r,
            self.pc.x + self.r,
            self.pc.y + self.r,
        )
    }

    /// Whether `pt` lies on the circle boundary within tolerance.
    pub fn contains(&self, pt: &Point2) -> bool {
        self.contains_with(pt, &Tolerance::DEFAULT)
    }

    /// [`Circle::contains`] under an explicit tolerance.
    pub fn contains_with(&self, pt: &Point2, tol: &Tolerance) -> bool {
        tol.eq(self.pc.distance_to(pt), self.r)
    }
}

/// A circular arc.
///
/// The arc starts at `start_angle` and sweeps towards `end_angle`,
/// counter-clockwise when `counter_clockwise` is set. Angles are in radians
/// measured from the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    /// Center.
    pub pc: Point2,
    /// Radius.
    pub r: f64,
    /// Angle of the start point.
    pub start_angle: f64,
    /// Angle of the end point.
    pub end_angle: f64,
    /// Sweep direction.
    pub counter_clockwise: bool,
}

impl Arc {
    /// Create an arc.
    pub fn new(
        pc: Point2,
        r: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    ) -> Self {
        Self {
            pc,
            r,
            start_angle,
            end_angle,
            counter_clockwise,
        }
    }

    /// Start point.
    pub fn start(&self) -> Point2 {
        self.point_at_angle(self.start_angle)
    }

    /// End point.
    pub fn end(&self) -> Point2 {
        self.point_at_angle(self.end_angle)
    }

    /// Point on the supporting circle at `angle`.
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.pc + unit_vector(angle) * self.r
    }

    /// Swept angle in `[0, 2π]`.
    pub fn sweep(&self) -> f64 {
        sweep_between(
            self.start_angle,
            self.end_angle,
            self.counter_clockwise,
            &Tolerance::DEFAULT,
        )
    }

    /// Arc length.
    pub fn length(&self) -> f64 {
        self.sweep().abs() * self.r
    }

    /// Whether `pt` lies on the arc within tolerance.
    pub fn contains(&self, pt: &Point2) -> bool {
        self.contains_with(pt, &Tolerance::DEFAULT)
    }

    /// [`Arc::contains`] under an explicit tolerance.
    pub fn contains_with(&self, pt: &Point2, tol: &Tolerance) -> bool {
        if !tol.eq(self.pc.distance_to(pt), self.r) {
            return false;
        }
        if tol.points_equal(&self.start(), pt) {
            return true;
        }
        let angle = (pt - self.pc).slope();
        let partial = sweep_between(self.start_angle, angle, self.counter_clockwise, tol);
        tol.le(partial * self.r, self.length())
    }

    /// Bounding box: endpoints plus every axis extreme inside the sweep.
    pub fn bounding_box(&self) -> Aabb2 {
        let mut points = vec![self.start(), self.end()];
        for k in 0..4u8 {
            let angle = f64::from(k) * FRAC_PI_2;
            if self.sweep_covers(angle) {
                points.push(self.point_at_angle(angle));
            }
        }
        Aabb2::from_points(&points)
    }

    fn sweep_covers(&self, angle: f64) -> bool {
        let tol = Tolerance::DEFAULT;
        let partial = sweep_between(self.start_angle, angle, self.counter_clockwise, &tol);
        tol.le(partial, self.sweep()) || tol.angles_equal(self.sweep(), TAU)
    }
}

/// Angle swept going from `from` to `to` in the given direction.
fn sweep_between(from: f64, to: f64, ccw: bool, tol: &Tolerance) -> f64 {
    if tol.eq(from, to) {
        return 0.0;
    }
    if tol.eq((from - to).abs(), TAU) {
        return TAU;
    }
    let mut sweep = if ccw {
        if tol.gt(to, from) {
            to - from
        } else {
            to - from + TAU
        }
    } else if tol.gt(from, to) {
        from - to
    } else {
        from - to + TAU
    };
    if tol.gt(sweep, TAU) {
        sweep -= TAU;
    }
    if tol.lt(sweep, 0.0) {
        sweep += TAU;
    }
    sweep
}

impl From<Circle> for Arc {
    fn from(c: Circle) -> Self {
        Arc::new(c.pc, c.r, 0.0, TAU, true)
    }
}
