//! Classify how a source box sits relative to a target box.
//!
//! Vertical relations win over horizontal ones, but only when the boxes
//! pass a loose horizontal-overlap test (see [`classify_with`]). Horizontal
//! relations need strict separation on the x axis.

use std::fmt;
use std::str::FromStr;

use crate::config::RoutingConfig;
use crate::errors::ParseRelationError;
use crate::types::Rect;

/// Directional arrangement of source relative to target.
///
/// Each name reads "source edge to target edge": `BottomToTop` leaves the
/// source's bottom edge and arrives at the target's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Source above target
    BottomToTop,
    /// Source below target
    TopToBottom,
    /// Source right of target
    RightToLeft,
    /// Source left of target
    LeftToRight,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::BottomToTop,
        Relation::TopToBottom,
        Relation::RightToLeft,
        Relation::LeftToRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::BottomToTop => "bottom-to-top",
            Relation::TopToBottom => "top-to-bottom",
            Relation::RightToLeft => "right-to-left",
            Relation::LeftToRight => "left-to-right",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = ParseRelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseRelationError { input: s.to_string() })
    }
}

/// Classify with the default alignment margin.
pub fn classify(source: &Rect, target: &Rect) -> Option<Relation> {
    classify_with(source, target, &RoutingConfig::default())
}

/// Classify source against target; `None` when the boxes overlap or no
/// clean orthogonal arrangement exists.
///
/// Boxes are eligible for a top/bottom join when
/// `source.left - margin < target.right` and
/// `source.right + target.width > target.right - margin`.
pub fn classify_with(source: &Rect, target: &Rect, config: &RoutingConfig) -> Option<Relation> {
    let margin = config.alignment_margin();

    let allow_vertical = source.left() - margin < target.right()
        && source.right() + target.width() > target.right() - margin;
    crate::log::trace!(allow_vertical, margin, "vertical eligibility");

    if allow_vertical && source.bottom() < target.top() {
        Some(Relation::BottomToTop)
    } else if allow_vertical && source.top() > target.bottom() {
        Some(Relation::TopToBottom)
    } else if source.left() > target.right() {
        Some(Relation::RightToLeft)
    } else if source.right() < target.left() {
        Some(Relation::LeftToRight)
    } else {
        None
    }
}
