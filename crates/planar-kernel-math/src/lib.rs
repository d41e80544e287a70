#![warn(missing_docs)]

//! Math types for the planar geometry kernel.
//!
//! Thin wrappers around nalgebra providing the 2D types used by the
//! kernel: points, vectors, and the tolerance used by every containment
//! and ordering predicate.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use nalgebra::Vector2;

/// A point in the plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the plane.
pub type Vec2 = Vector2<f64>;

/// Tolerance constants for geometric comparisons.
///
/// Every tolerant predicate short-circuits on exact equality first, so
/// infinite values compare equal to themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Tolerance with a custom linear epsilon and the default angular one.
    pub const fn with_linear(linear: f64) -> Self {
        Self {
            linear,
            angular: Self::DEFAULT.angular,
        }
    }

    /// Check if a scalar is effectively zero.
    pub fn eq_0(&self, x: f64) -> bool {
        x.abs() < self.linear
    }

    /// `a == b` within tolerance.
    pub fn eq(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() < self.linear
    }

    /// `a < b` by more than the tolerance.
    pub fn lt(&self, a: f64, b: f64) -> bool {
        !self.eq(a, b) && a < b
    }

    /// `a <= b` within tolerance.
    pub fn le(&self, a: f64, b: f64) -> bool {
        self.eq(a, b) || a < b
    }

    /// `a > b` by more than the tolerance.
    pub fn gt(&self, a: f64, b: f64) -> bool {
        !self.eq(a, b) && a > b
    }

    /// `a >= b` within tolerance.
    pub fn ge(&self, a: f64, b: f64) -> bool {
        self.eq(a, b) || a > b
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() < self.angular
    }

    /// Check if two points are coincident, coordinate by coordinate.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        self.eq(a.x, b.x) && self.eq(a.y, b.y)
    }

    /// Tolerant lexicographic point order: x first, then y.
    ///
    /// Not transitive across chains of near-equal coordinates; use
    /// [`point_cmp`] where a total order is required.
    pub fn point_less_than(&self, a: &Point2, b: &Point2) -> bool {
        self.lt(a.x, b.x) || (self.eq(a.x, b.x) && self.lt(a.y, b.y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Point predicates under the default tolerance.
pub trait PointExt {
    /// Coordinate-wise equality within [`Tolerance::DEFAULT`].
    fn equal_to(&self, other: &Point2) -> bool;

    /// Lexicographic less-than (x, then y) within [`Tolerance::DEFAULT`].
    fn less_than(&self, other: &Point2) -> bool;

    /// Euclidean distance to another point.
    fn distance_to(&self, other: &Point2) -> f64;
}

impl PointExt for Point2 {
    fn equal_to(&self, other: &Point2) -> bool {
        Tolerance::DEFAULT.points_equal(self, other)
    }

    fn less_than(&self, other: &Point2) -> bool {
        Tolerance::DEFAULT.point_less_than(self, other)
    }

    fn distance_to(&self, other: &Point2) -> f64 {
        (other - self).norm()
    }
}

/// Planar vector operations not provided by nalgebra in this form.
pub trait VecExt {
    /// Scalar 2D cross product `self.x * other.y - self.y * other.x`.
    fn cross2(&self, other: &Vec2) -> f64;

    /// Angle against the x axis in `[0, 2π)`.
    fn slope(&self) -> f64;

    /// The vector rotated 90° counter-clockwise.
    fn rotate90_ccw(&self) -> Vec2;

    /// The vector rotated 90° clockwise.
    fn rotate90_cw(&self) -> Vec2;
}

impl VecExt for Vec2 {
    fn cross2(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn slope(&self) -> f64 {
        let angle = self.y.atan2(self.x);
        if angle < 0.0 {
            let wrapped = angle + TAU;
            // Tiny negative angles round up to exactly TAU
            if wrapped >= TAU {
                0.0
            } else {
                wrapped
            }
        } else {
            // atan2 returns -0.0 for (+x, -0.0); fold it to 0.0
            angle + 0.0
        }
    }

    fn rotate90_ccw(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    fn rotate90_cw(&self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }
}

/// Exact lexicographic order on points: x first, then y.
///
/// A total order over all coordinates, infinities included. `-0.0` and
/// `0.0` compare equal. Unlike [`Tolerance::point_less_than`] it is
/// transitive, so it is the order to sort or key by.
pub fn point_cmp(a: &Point2, b: &Point2) -> Ordering {
    fold_zero(a.x)
        .total_cmp(&fold_zero(b.x))
        .then_with(|| fold_zero(a.y).total_cmp(&fold_zero(b.y)))
}

fn fold_zero(v: f64) -> f64 {
    v + 0.0
}

/// Unit vector at `angle` radians from the x axis.
pub fn unit_vector(angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_tolerance_scalars() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.eq_0(1e-7));
        assert!(!tol.eq_0(1e-5));
        assert!(tol.ge(1.0 - 1e-7, 1.0));
        assert!(!tol.ge(1.0 - 1e-3, 1.0));
        assert!(tol.lt(1.0, 2.0));
        assert!(!tol.lt(1.0, 1.0 + 1e-8));
        assert!(tol.le(1.0 + 1e-8, 1.0));
        assert!(tol.gt(2.0, 1.0));
    }

    #[test]
    fn test_tolerance_infinities() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.eq(f64::INFINITY, f64::INFINITY));
        assert!(tol.eq(f64::NEG_INFINITY, f64::NEG_INFINITY));
        assert!(!tol.eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(tol.lt(f64::NEG_INFINITY, 0.0));
    }

    #[test]
    fn test_custom_tolerance() {
        let loose = Tolerance::with_linear(0.1);
        assert!(loose.eq(1.0, 1.05));
        assert!(!Tolerance::DEFAULT.eq(1.0, 1.05));
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-7, 2.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point2::new(1.001, 2.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_point_less_than_is_x_then_y() {
        let a = Point2::new(0.0, 5.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 6.0);
        assert!(a.less_than(&b));
        assert!(!b.less_than(&a));
        assert!(a.less_than(&c));
        assert!(!a.less_than(&a));
    }

    #[test]
    fn test_point_cmp_is_exact_and_transitive() {
        let a = Point2::new(0.0, 1.0);
        let b = Point2::new(6e-7, 0.0);
        let c = Point2::new(1.2e-6, -1.0);
        assert_eq!(point_cmp(&a, &b), Ordering::Less);
        assert_eq!(point_cmp(&b, &c), Ordering::Less);
        assert_eq!(point_cmp(&a, &c), Ordering::Less);
        assert_eq!(point_cmp(&c, &a), Ordering::Greater);
    }

    #[test]
    fn test_point_cmp_zero_and_infinity() {
        let p = Point2::new(-0.0, 0.0);
        let q = Point2::new(0.0, -0.0);
        assert_eq!(point_cmp(&p, &q), Ordering::Equal);
        let inf = Point2::new(f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(point_cmp(&inf, &inf), Ordering::Equal);
        assert_eq!(point_cmp(&p, &inf), Ordering::Less);
    }

    #[test]
    fn test_cross_and_rotation() {
        let v = Vec2::new(5.0, 0.0);
        let n = Vec2::new(0.0, 1.0);
        assert_relative_eq!(v.cross2(&n), 5.0, epsilon = 1e-9);
        assert_eq!(n.rotate90_cw(), Vec2::new(1.0, 0.0));
        assert_eq!(n.rotate90_ccw(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_slope_range() {
        assert_eq!(Vec2::new(1.0, -0.0).slope(), 0.0);
        assert_relative_eq!(Vec2::new(0.0, 1.0).slope(), FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(Vec2::new(-1.0, 0.0).slope(), PI, epsilon = 1e-9);
        assert_relative_eq!(Vec2::new(0.0, -1.0).slope(), 3.0 * FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(Vec2::new(1.0, -1.0).slope(), 7.0 * PI / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_slope_tiny_negative_angle_wraps_to_zero() {
        let s = Vec2::new(1.0, -1e-17).slope();
        assert!(s < TAU);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_unit_vector() {
        let v = unit_vector(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-9);
    }
}
