//! Ray representation, bounding box and point containment.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use planar_kernel_geom::{Aabb2, Line, Shape};
use planar_kernel_math::{Point2, Tolerance, Vec2, VecExt};

use crate::error::{RayError, Result};
use crate::intersect::RayIntersect;

/// A half-infinite ray in the plane.
///
/// The ray starts at `pt` and travels 90° clockwise from its normal
/// `norm`, so the default normal `(0, 1)` gives a ray pointing along +x.
/// The normal is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pt: Point2,
    norm: Vec2,
}

/// One argument of the dynamic ray constructor [`Ray::from_args`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayArg {
    /// A point.
    Point(Point2),
    /// A vector.
    Vector(Vec2),
    /// A bare number.
    Number(f64),
}

impl Default for Ray {
    /// Horizontal ray from the origin pointing along +x.
    fn default() -> Self {
        Self {
            pt: Point2::origin(),
            norm: Vec2::new(0.0, 1.0),
        }
    }
}

impl Ray {
    /// Create a ray from a start point and a normal vector.
    ///
    /// Fails with [`RayError::DegenerateGeometry`] for a zero normal.
    pub fn new(pt: Point2, norm: Vec2) -> Result<Self> {
        Line::new(pt, norm)?;
        Ok(Self { pt, norm })
    }

    /// Horizontal ray starting at `pt`.
    pub fn from_origin(pt: Point2) -> Self {
        Self {
            pt,
            ..Self::default()
        }
    }

    /// Build a ray from a dynamic argument list.
    ///
    /// Accepts `[]`, `[Point]` and `[Point, Vector]`. Anything else,
    /// including a pair of numbers, is [`RayError::InvalidArgument`].
    pub fn from_args(args: &[RayArg]) -> Result<Self> {
        match args {
            [] => Ok(Self::default()),
            [RayArg::Point(pt)] => Ok(Self::from_origin(*pt)),
            [RayArg::Point(pt), RayArg::Vector(norm)] => Self::new(*pt, *norm),
            _ => {
                tracing::debug!(?args, "rejecting ray arguments");
                Err(RayError::InvalidArgument(format!(
                    "expected (), (point) or (point, vector), got {} argument(s)",
                    args.len()
                )))
            }
        }
    }

    /// Start point of the ray.
    pub fn start(&self) -> Point2 {
        self.pt
    }

    /// Normal vector of the ray.
    pub fn normal(&self) -> Vec2 {
        self.norm
    }

    /// Travel direction: the normal rotated 90° clockwise.
    pub fn direction(&self) -> Vec2 {
        self.norm.rotate90_cw()
    }

    /// Point at distance `t` from the start along the ray.
    pub fn at(&self, t: f64) -> Point2 {
        self.pt + self.direction().normalize() * t
    }

    /// Angle of the travel direction against the x axis, in `[0, 2π)`.
    pub fn slope(&self) -> f64 {
        self.direction().slope()
    }

    /// Infinite line carrying the ray.
    pub fn line(&self) -> Line {
        Line {
            pt: self.pt,
            norm: self.norm.normalize(),
        }
    }

    /// Half-infinite bounding box of the ray.
    ///
    /// Each axis is pinned at the start coordinate on the side the ray
    /// leaves from and infinite on the side it travels towards. Axes the
    /// ray runs perpendicular to are pinned on both sides.
    pub fn bounding_box(&self) -> Aabb2 {
        let slope = self.slope();
        let (x, y) = (self.pt.x, self.pt.y);
        let three_half_pi = 3.0 * PI / 2.0;
        Aabb2::new(
            if slope > FRAC_PI_2 && slope < three_half_pi {
                f64::NEG_INFINITY
            } else {
                x
            },
            if (0.0..=PI).contains(&slope) {
                y
            } else {
                f64::NEG_INFINITY
            },
            if (FRAC_PI_2..=three_half_pi).contains(&slope) {
                x
            } else {
                f64::INFINITY
            },
            if (PI..=TAU).contains(&slope) || slope == 0.0 {
                y
            } else {
                f64::INFINITY
            },
        )
    }

    /// Whether `pt` lies on the ray.
    ///
    /// Containment is tolerant while [`Ray::bounding_box`] is exact, so a
    /// point within tolerance of a pinned axis can be contained without
    /// lying inside the box.
    pub fn contains(&self, pt: &Point2) -> bool {
        self.contains_with(pt, &Tolerance::DEFAULT)
    }

    /// [`Ray::contains`] under an explicit tolerance.
    ///
    /// The vector to `pt` must be orthogonal to the normal and must not
    /// point backwards, i.e. its cross product with the normal is
    /// non-negative.
    pub fn contains_with(&self, pt: &Point2, tol: &Tolerance) -> bool {
        if tol.points_equal(&self.pt, pt) {
            return true;
        }
        let v = pt - self.pt;
        tol.eq_0(self.norm.dot(&v)) && tol.ge(v.cross2(&self.norm), 0.0)
    }

    /// Intersection points with a segment or arc.
    pub fn intersect<S: RayIntersect + ?Sized>(&self, shape: &S) -> Vec<Point2> {
        shape.intersected_by_ray(self, &Tolerance::DEFAULT)
    }

    /// [`Ray::intersect`] under an explicit tolerance.
    pub fn intersect_with<S: RayIntersect + ?Sized>(
        &self,
        shape: &S,
        tol: &Tolerance,
    ) -> Vec<Point2> {
        shape.intersected_by_ray(self, tol)
    }

    /// Intersection points with any [`Shape`].
    ///
    /// Only segments and arcs are supported; other shapes fail with
    /// [`RayError::UnsupportedShape`].
    pub fn intersect_shape(&self, shape: &Shape) -> Result<Vec<Point2>> {
        match shape {
            Shape::Segment(segment) => Ok(self.intersect(segment)),
            Shape::Arc(arc) => Ok(self.intersect(arc)),
            other => {
                tracing::debug!(kind = %other.kind(), "no ray intersector for shape");
                Err(RayError::UnsupportedShape(other.kind()))
            }
        }
    }
}

impl TryFrom<&[RayArg]> for Ray {
    type Error = RayError;

    fn try_from(args: &[RayArg]) -> Result<Self> {
        Ray::from_args(args)
    }
}
