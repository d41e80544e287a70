//! Closed set of planar shapes.

use std::fmt;

use planar_kernel_math::Point2;

use crate::{Aabb2, Arc, Circle, Line, Segment};

/// The kind of a shape (for match-based dispatch and error reporting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A single point.
    Point,
    /// An infinite line.
    Line,
    /// A line segment.
    Segment,
    /// A circular arc.
    Arc,
    /// A full circle.
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Segment => "segment",
            ShapeKind::Arc => "arc",
            ShapeKind::Circle => "circle",
        };
        f.write_str(name)
    }
}

/// Any planar shape the kernel knows about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A single point.
    Point(Point2),
    /// An infinite line.
    Line(Line),
    /// A line segment.
    Segment(Segment),
    /// A circular arc.
    Arc(Arc),
    /// A full circle.
    Circle(Circle),
}

impl Shape {
    /// The kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Bounding box of the shape. Lines are unbounded on both axes.
    pub fn bounding_box(&self) -> Aabb2 {
        match self {
            Shape::Point(p) => Aabb2::Bounded { min: *p, max: *p },
            Shape::Line(_) => Aabb2::new(
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::INFINITY,
            ),
            Shape::Segment(s) => s.bounding_box(),
            Shape::Arc(a) => a.bounding_box(),
            Shape::Circle(c) => c.bounding_box(),
        }
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Arc> for Shape {
    fn from(a: Arc) -> Self {
        Shape::Arc(a)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Point2> for Shape {
    fn from(p: Point2) -> Self {
        Shape::Point(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_and_box() {
        let seg: Shape = Segment::new(Point2::new(2.0, 0.0), Point2::new(0.0, 1.0)).into();
        assert_eq!(seg.kind(), ShapeKind::Segment);
        assert_eq!(seg.bounding_box(), Aabb2::new(0.0, 0.0, 2.0, 1.0));

        let pt: Shape = Point2::new(1.0, 1.0).into();
        assert_eq!(pt.bounding_box(), Aabb2::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(ShapeKind::Circle.to_string(), "circle");
    }
}
