//! Path builder for connector lines.
//!
//! Turns a source box, a target box and an enclosing frame into a
//! four-point elbow path:
//!
//! ```text
//!   source edge ──► midline turn ──► midline turn ──► target edge (minus offset)
//! ```
//!
//! Both turns sit on the midline of the gap between the boxes, so every
//! segment is horizontal or vertical. Points are emitted in the frame's
//! local coordinates (frame top-left is the origin).
//!
//! # Outcomes
//!
//! - `None`: some box hasn't been measured yet. Try again after layout.
//! - `Some(path)` with `path.is_empty()`: the boxes overlap or sit at an
//!   angle no elbow fits. Draw nothing.
//! - `Some(path)` with four points: draw it.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::config::RoutingConfig;
use crate::relation::{Relation, classify_with};
use crate::types::{Point, Rect};

/// A routed connector: either empty or exactly four points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Path {
    /// Inputs were complete but no relation applied
    Unrouted,
    /// Four points in draw order
    Routed {
        relation: Relation,
        points: [Point; 4],
    },
}

impl Path {
    pub fn points(&self) -> &[Point] {
        match self {
            Path::Unrouted => &[],
            Path::Routed { points, .. } => points,
        }
    }

    pub fn len(&self) -> usize {
        self.points().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Path::Unrouted)
    }

    pub fn relation(&self) -> Option<Relation> {
        match self {
            Path::Unrouted => None,
            Path::Routed { relation, .. } => Some(*relation),
        }
    }

    pub fn start(&self) -> Option<Point> {
        self.points().first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points().last().copied()
    }

    /// Consecutive point pairs, in draw order. Each pair is axis-aligned.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points().windows(2).map(|w| (w[0], w[1]))
    }

    /// SVG path data (`M x y L x y ...`); empty for an unrouted path.
    pub fn svg_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points().iter().enumerate() {
            if i == 0 {
                write!(f, "M{} {}", p.x, p.y)?;
            } else {
                write!(f, " L{} {}", p.x, p.y)?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points().iter()
    }
}

/// The node a connector starts from.
///
/// `id` only labels log output; it plays no part in the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceNode {
    pub id: String,
    pub rect: Option<Rect>,
}

impl SourceNode {
    pub fn new(id: impl Into<String>, rect: Option<Rect>) -> Self {
        Self { id: id.into(), rect }
    }
}

/// A target node or the enclosing frame; `rect` is `None` until measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredNode {
    pub rect: Option<Rect>,
}

impl MeasuredNode {
    pub fn new(rect: Option<Rect>) -> Self {
        Self { rect }
    }

    pub fn measured(rect: Rect) -> Self {
        Self { rect: Some(rect) }
    }
}

/// Everything needed to route one connector, any part of which may still
/// be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathRequest {
    pub from: Option<SourceNode>,
    pub to: Option<MeasuredNode>,
    pub root: Option<MeasuredNode>,
}

impl PathRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, node: SourceNode) -> Self {
        self.from = Some(node);
        self
    }

    pub fn target(mut self, node: MeasuredNode) -> Self {
        self.to = Some(node);
        self
    }

    pub fn frame(mut self, node: MeasuredNode) -> Self {
        self.root = Some(node);
        self
    }

    /// Route with default distances.
    pub fn build(&self) -> Option<Path> {
        self.build_with(&RoutingConfig::default())
    }

    /// Route, or `None` while any of the three boxes is unmeasured.
    pub fn build_with(&self, config: &RoutingConfig) -> Option<Path> {
        let from = self.from.as_ref();
        let (Some(source), Some(target), Some(frame)) = (
            from.and_then(|n| n.rect),
            self.to.and_then(|n| n.rect),
            self.root.and_then(|n| n.rect),
        ) else {
            crate::log::debug!(
                from = from.map(|n| n.id.as_str()),
                "connector not ready: unmeasured box"
            );
            return None;
        };

        let path = route_with(&source, &target, &frame, config);
        crate::log::debug!(
            from = from.map(|n| n.id.as_str()),
            relation = path.relation().map(Relation::as_str),
            "connector routed"
        );
        Some(path)
    }
}

/// Build the connector for `request` with default distances.
pub fn path_data(request: &PathRequest) -> Option<Path> {
    request.build()
}

/// Route between two measured boxes with default distances.
pub fn route(source: &Rect, target: &Rect, frame: &Rect) -> Path {
    route_with(source, target, frame, &RoutingConfig::default())
}

/// Route between two measured boxes, emitting points relative to `frame`.
pub fn route_with(source: &Rect, target: &Rect, frame: &Rect, config: &RoutingConfig) -> Path {
    let Some(relation) = classify_with(source, target, config) else {
        return Path::Unrouted;
    };

    let corners = elbow(relation, source, target, config.line_offset());
    let origin = DVec2::from(frame.origin());
    Path::Routed {
        relation,
        points: corners.map(|c| Point::from(c - origin)),
    }
}

/// The four corners in absolute coordinates.
///
/// Each branch keeps its own midline arithmetic; the vertical ones measure
/// back from the source edge, the horizontal ones average the two edges.
fn elbow(relation: Relation, s: &Rect, t: &Rect, offset: f64) -> [DVec2; 4] {
    match relation {
        Relation::BottomToTop => {
            let mid_y = s.bottom() - (s.bottom() - t.top()) / 2.0;
            let (sx, tx) = (s.center_x(), t.center_x());
            [
                dvec2(sx, s.bottom()),
                dvec2(sx, mid_y),
                dvec2(tx, mid_y),
                dvec2(tx, t.top() - offset),
            ]
        }
        Relation::TopToBottom => {
            let mid_y = s.top() - (s.top() - t.bottom()) / 2.0;
            let (sx, tx) = (s.center_x(), t.center_x());
            [
                dvec2(sx, s.top()),
                dvec2(sx, mid_y),
                dvec2(tx, mid_y),
                dvec2(tx, t.bottom() + offset),
            ]
        }
        Relation::RightToLeft => {
            let mid_x = (t.right() + s.left()) / 2.0;
            let (sy, ty) = (s.bottom() - s.height() / 2.0, t.center_y());
            [
                dvec2(s.left(), sy),
                dvec2(mid_x, sy),
                dvec2(mid_x, ty),
                dvec2(t.right() + offset, ty),
            ]
        }
        Relation::LeftToRight => {
            let mid_x = (t.left() + s.right()) / 2.0;
            let (sy, ty) = (s.bottom() - s.height() / 2.0, t.center_y());
            [
                dvec2(s.right(), sy),
                dvec2(mid_x, sy),
                dvec2(mid_x, ty),
                dvec2(t.left() - offset, ty),
            ]
        }
    }
}
