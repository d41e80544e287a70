//! Axis-aligned bounding boxes in the plane.

use std::cmp::Ordering;

use planar_kernel_math::{point_cmp, Point2, Tolerance};

/// Axis-aligned bounding box, possibly empty and possibly unbounded.
///
/// An `Empty` box is the identity of [`Aabb2::merge`]: merging it with any
/// box yields that box unchanged. Bounded boxes are expected to satisfy
/// `min <= max` per axis; the type does not check. Bounds may be infinite,
/// which is how half-infinite ray boxes are represented.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Aabb2 {
    /// No extent yet.
    #[default]
    Empty,
    /// A rectangle given by its lower-left and upper-right corners.
    Bounded {
        /// Corner `(xmin, ymin)`.
        min: Point2,
        /// Corner `(xmax, ymax)`.
        max: Point2,
    },
}

impl Aabb2 {
    /// Create a bounded box from its four bounds.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Aabb2::Bounded {
            min: Point2::new(xmin, ymin),
            max: Point2::new(xmax, ymax),
        }
    }

    /// The empty box.
    pub const fn empty() -> Self {
        Aabb2::Empty
    }

    /// Smallest box containing all `points`. Empty for an empty slice.
    pub fn from_points(points: &[Point2]) -> Self {
        points.iter().fold(Aabb2::Empty, |acc, p| {
            acc.merge(&Aabb2::Bounded { min: *p, max: *p })
        })
    }

    /// Whether the box has no extent.
    pub fn is_empty(&self) -> bool {
        matches!(self, Aabb2::Empty)
    }

    /// Minimal x coordinate.
    pub fn xmin(&self) -> Option<f64> {
        self.low().map(|p| p.x)
    }

    /// Minimal y coordinate.
    pub fn ymin(&self) -> Option<f64> {
        self.low().map(|p| p.y)
    }

    /// Maximal x coordinate.
    pub fn xmax(&self) -> Option<f64> {
        self.high().map(|p| p.x)
    }

    /// Maximal y coordinate.
    pub fn ymax(&self) -> Option<f64> {
        self.high().map(|p| p.y)
    }

    /// Lower interval endpoint `(xmin, ymin)`.
    pub fn low(&self) -> Option<Point2> {
        match self {
            Aabb2::Empty => None,
            Aabb2::Bounded { min, .. } => Some(*min),
        }
    }

    /// Upper interval endpoint `(xmax, ymax)`.
    pub fn high(&self) -> Option<Point2> {
        match self {
            Aabb2::Empty => None,
            Aabb2::Bounded { max, .. } => Some(*max),
        }
    }

    /// Widest extent of the box, which is the box itself.
    pub fn max_extent(&self) -> Self {
        *self
    }

    /// Returns `true` if the boxes share no point.
    ///
    /// Comparisons are exact and inclusive: touching boxes intersect.
    /// An empty box intersects nothing.
    pub fn not_intersect(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Aabb2::Bounded { min: a_min, max: a_max },
                Aabb2::Bounded { min: b_min, max: b_max },
            ) => {
                a_max.x < b_min.x || a_min.x > b_max.x || a_max.y < b_min.y || a_min.y > b_max.y
            }
            _ => true,
        }
    }

    /// Returns `true` if the boxes share at least one point.
    pub fn intersect(&self, other: &Self) -> bool {
        !self.not_intersect(other)
    }

    /// Smallest box containing both boxes.
    pub fn merge(&self, other: &Self) -> Self {
        match (self, other) {
            (Aabb2::Empty, b) => *b,
            (a, Aabb2::Empty) => *a,
            (
                Aabb2::Bounded { min: a_min, max: a_max },
                Aabb2::Bounded { min: b_min, max: b_max },
            ) => Aabb2::Bounded {
                min: Point2::new(a_min.x.min(b_min.x), a_min.y.min(b_min.y)),
                max: Point2::new(a_max.x.max(b_max.x), a_max.y.max(b_max.y)),
            },
        }
    }

    /// Strict order: by `low` corner, ties broken by `high` corner.
    ///
    /// Corners compare exactly, x then y, so the order is total and
    /// transitive. The empty box sorts before every bounded box.
    pub fn less_than(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Less
    }

    /// Both corners exactly equal. `Empty` equals only `Empty`.
    pub fn equal_to(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }

    /// Three-way key comparison underlying [`Aabb2::less_than`] and
    /// [`Aabb2::equal_to`].
    pub fn key_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Aabb2::Empty, Aabb2::Empty) => Ordering::Equal,
            (Aabb2::Empty, Aabb2::Bounded { .. }) => Ordering::Less,
            (Aabb2::Bounded { .. }, Aabb2::Empty) => Ordering::Greater,
            (
                Aabb2::Bounded { min: a_min, max: a_max },
                Aabb2::Bounded { min: b_min, max: b_max },
            ) => point_cmp(a_min, b_min).then_with(|| point_cmp(a_max, b_max)),
        }
    }

    /// Both corners equal within `tol`.
    ///
    /// Approximate comparison for callers matching geometry; it is not
    /// the key order and is not transitive.
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        match (self, other) {
            (Aabb2::Empty, Aabb2::Empty) => true,
            (
                Aabb2::Bounded { min: a_min, max: a_max },
                Aabb2::Bounded { min: b_min, max: b_max },
            ) => tol.points_equal(a_min, b_min) && tol.points_equal(a_max, b_max),
            _ => false,
        }
    }

    /// Copy of the box, for tree APIs that materialize node values.
    pub fn output(&self) -> Self {
        *self
    }

    /// Overwrite all four bounds. This is the only in-place mutator.
    pub fn set(&mut self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) {
        *self = Aabb2::new(xmin, ymin, xmax, ymax);
    }

    /// Inclusive, exact point-in-box test.
    pub fn contains_point(&self, p: &Point2) -> bool {
        match self {
            Aabb2::Empty => false,
            Aabb2::Bounded { min, max } => {
                p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
            }
        }
    }
}
