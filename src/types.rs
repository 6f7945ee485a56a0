//! Geometry primitives: points, offsets and measured rectangles.
//!
//! Coordinates are raw `f64` in whatever space the caller measured in
//! (usually CSS pixels, y pointing down). Nothing here rounds.

use std::fmt;
use std::ops::{Add, Sub};

use glam::{DVec2, dvec2};

use crate::errors::{Axis, GeometryError, check_finite};

/// Tolerance used by [`Rect::try_from_parts`] when checking that the six
/// measured fields agree with each other.
const EDGE_TOLERANCE: f64 = 1e-9;

/// A 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Move by an offset
    pub fn translate(self, by: Offset) -> Self {
        self + by
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        dvec2(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement (not an absolute position). Point + Offset = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }
}

impl Add<Offset> for Point {
    type Output = Point;
    fn add(self, rhs: Offset) -> Point {
        Point { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

impl Sub<Offset> for Point {
    type Output = Point;
    fn sub(self, rhs: Offset) -> Point {
        Point { x: self.x - rhs.dx, y: self.y - rhs.dy }
    }
}

/// Subtract two points to get an offset
impl Sub<Point> for Point {
    type Output = Offset;
    fn sub(self, rhs: Point) -> Offset {
        Offset { dx: self.x - rhs.x, dy: self.y - rhs.y }
    }
}

/// Axis-aligned bounding box, as a layout engine reports it.
///
/// All six fields are stored because the routing formulas read `width`
/// and `right` independently, the same way a DOM rect exposes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    top: f64,
    left: f64,
    right: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Create a rect from its top-left corner and size (unchecked).
    /// Use `try_new` for untrusted measurements.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create a rect from its four edges (unchecked).
    pub const fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create a rect with validation (rejects NaN, infinite, negative size)
    pub fn try_new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        let left = check_finite("left", left)?;
        let top = check_finite("top", top)?;
        let width = non_negative("width", width)?;
        let height = non_negative("height", height)?;
        Ok(Rect::new(left, top, width, height))
    }

    /// Create a rect from edges with validation.
    /// `right < left` or `bottom < top` is reported as a negative size.
    pub fn try_from_edges(
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<Self, GeometryError> {
        let left = check_finite("left", left)?;
        let top = check_finite("top", top)?;
        let right = check_finite("right", right)?;
        let bottom = check_finite("bottom", bottom)?;
        non_negative("width", right - left)?;
        non_negative("height", bottom - top)?;
        Ok(Rect::from_edges(left, top, right, bottom))
    }

    /// Adopt all six fields of an already-measured rect, verifying that
    /// they describe one box.
    pub fn try_from_parts(
        top: f64,
        left: f64,
        right: f64,
        bottom: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, GeometryError> {
        let rect = Rect {
            top: check_finite("top", top)?,
            left: check_finite("left", left)?,
            right: check_finite("right", right)?,
            bottom: check_finite("bottom", bottom)?,
            width: non_negative("width", width)?,
            height: non_negative("height", height)?,
        };
        if ((rect.left + rect.width) - rect.right).abs() > EDGE_TOLERANCE {
            return Err(GeometryError::InconsistentEdges { axis: Axis::X });
        }
        if ((rect.top + rect.height) - rect.bottom).abs() > EDGE_TOLERANCE {
            return Err(GeometryError::InconsistentEdges { axis: Axis::Y });
        }
        Ok(rect)
    }

    pub fn top(&self) -> f64 { self.top }
    pub fn left(&self) -> f64 { self.left }
    pub fn right(&self) -> f64 { self.right }
    pub fn bottom(&self) -> f64 { self.bottom }
    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Horizontal midpoint, measured from the left edge
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint, measured from the top edge
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    let value = check_finite(field, value)?;
    if value < 0.0 {
        Err(GeometryError::NegativeSize { field, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Point/Offset tests ====================

    #[test]
    fn point_plus_offset_gives_point() {
        let p = Point::new(1.0, 2.0);
        let o = Offset::new(3.0, 4.0);
        assert_eq!(p + o, Point::new(4.0, 6.0));
        assert_eq!(p.translate(o), Point::new(4.0, 6.0));
    }

    #[test]
    fn point_minus_point_gives_offset() {
        let offset = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(offset, Offset::new(3.0, 4.0));
    }

    #[test]
    fn point_round_trips_through_dvec2() {
        let v: DVec2 = Point::new(1.5, -2.0).into();
        assert_eq!(v, dvec2(1.5, -2.0));
        assert_eq!(Point::from(v), Point::new(1.5, -2.0));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(5.0, 41.0).to_string(), "(5, 41)");
        assert_eq!(Point::new(0.5, -1.25).to_string(), "(0.5, -1.25)");
    }

    // ==================== Rect tests ====================

    #[test]
    fn rect_new_derives_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.width(), 30.0);
        assert_eq!(r.height(), 40.0);
    }

    #[test]
    fn rect_from_edges_derives_size() {
        let r = Rect::from_edges(10.0, 20.0, 40.0, 60.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0.0, 0.0, 4.0, 6.0);
        assert_eq!(r.center(), Point::new(2.0, 3.0));
        assert_eq!(r.origin(), Point::ORIGIN);
    }

    #[test]
    fn rect_try_new_rejects_bad_numbers() {
        assert_eq!(
            Rect::try_new(f64::NAN, 0.0, 1.0, 1.0),
            Err(GeometryError::NaN { field: "left" })
        );
        assert_eq!(
            Rect::try_new(0.0, f64::INFINITY, 1.0, 1.0),
            Err(GeometryError::Infinite { field: "top" })
        );
        assert_eq!(
            Rect::try_new(0.0, 0.0, -1.0, 1.0),
            Err(GeometryError::NegativeSize { field: "width", value: -1.0 })
        );
        assert!(Rect::try_new(-5.0, -5.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn rect_try_from_edges_rejects_flipped_edges() {
        assert_eq!(
            Rect::try_from_edges(0.0, 10.0, 5.0, 0.0),
            Err(GeometryError::NegativeSize { field: "height", value: -10.0 })
        );
        assert!(Rect::try_from_edges(0.0, 0.0, 5.0, 10.0).is_ok());
    }

    #[test]
    fn rect_try_from_parts_checks_consistency() {
        let ok = Rect::try_from_parts(0.0, 0.0, 10.0, 10.0, 10.0, 10.0);
        assert_eq!(ok, Ok(Rect::new(0.0, 0.0, 10.0, 10.0)));

        assert_eq!(
            Rect::try_from_parts(0.0, 0.0, 12.0, 10.0, 10.0, 10.0),
            Err(GeometryError::InconsistentEdges { axis: Axis::X })
        );
        assert_eq!(
            Rect::try_from_parts(0.0, 0.0, 10.0, 9.0, 10.0, 10.0),
            Err(GeometryError::InconsistentEdges { axis: Axis::Y })
        );
    }
}
