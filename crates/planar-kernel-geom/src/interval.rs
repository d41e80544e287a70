//! Key contract for interval and segment trees.
//!
//! A tree indexing shapes by extent only needs the operations below: the two
//! endpoints of a key, a join that folds child extents into a node extent,
//! and a strict total order for balancing and sorted iteration.

use std::cmp::Ordering;

use planar_kernel_math::{point_cmp, Point2};

use crate::Aabb2;

/// A value usable as an ordered key in an interval tree.
///
/// Implementations must make `maximal_val` associative and commutative and
/// `less_than` a strict total order consistent with `equal_to`: for any two
/// keys exactly one of `a < b`, `b < a`, `a == b` holds.
pub trait IntervalKey: Clone {
    /// Endpoint type of the interval.
    type Endpoint;

    /// Lower endpoint, if the key has one.
    fn low(&self) -> Option<Self::Endpoint>;

    /// Upper endpoint, if the key has one.
    fn high(&self) -> Option<Self::Endpoint>;

    /// Widest extent represented by this key.
    fn max_extent(&self) -> Self;

    /// Strict key order.
    fn less_than(&self, other: &Self) -> bool;

    /// Key equality.
    fn equal_to(&self, other: &Self) -> bool;

    /// Materialize the key value stored in a node.
    fn output(&self) -> Self {
        self.clone()
    }

    /// Join of two extents.
    fn maximal_val(a: &Self, b: &Self) -> Self;

    /// Order on endpoints.
    fn val_less_than(a: &Self::Endpoint, b: &Self::Endpoint) -> bool;

    /// Three-way comparison derived from `less_than` and `equal_to`.
    fn compare(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self.equal_to(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl IntervalKey for Aabb2 {
    type Endpoint = Point2;

    fn low(&self) -> Option<Point2> {
        Aabb2::low(self)
    }

    fn high(&self) -> Option<Point2> {
        Aabb2::high(self)
    }

    fn max_extent(&self) -> Self {
        Aabb2::max_extent(self)
    }

    fn less_than(&self, other: &Self) -> bool {
        Aabb2::less_than(self, other)
    }

    fn equal_to(&self, other: &Self) -> bool {
        Aabb2::equal_to(self, other)
    }

    fn output(&self) -> Self {
        Aabb2::output(self)
    }

    fn maximal_val(a: &Self, b: &Self) -> Self {
        a.merge(b)
    }

    fn val_less_than(a: &Point2, b: &Point2) -> bool {
        point_cmp(a, b) == Ordering::Less
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}
