//! Orthogonal connector paths between measured boxes.
//!
//! Given a source box, a target box and the frame they are drawn in,
//! [`path_data`] returns a four-point elbow path (or nothing) ready for a
//! drawing layer:
//!
//! ```
//! use connpath::{MeasuredNode, PathRequest, Point, Rect, SourceNode};
//!
//! let request = PathRequest::new()
//!     .source(SourceNode::new("a", Some(Rect::new(0.0, 0.0, 10.0, 10.0))))
//!     .target(MeasuredNode::measured(Rect::new(0.0, 50.0, 10.0, 10.0)))
//!     .frame(MeasuredNode::measured(Rect::new(0.0, 0.0, 100.0, 100.0)));
//!
//! let path = connpath::path_data(&request).expect("all boxes measured");
//! assert_eq!(path.start(), Some(Point::new(5.0, 10.0)));
//! assert_eq!(path.end(), Some(Point::new(5.0, 41.0)));
//! ```

pub mod config;
pub mod defaults;
pub mod errors;
mod log;
pub mod path_builder;
pub mod relation;
pub mod types;

pub use config::RoutingConfig;
pub use errors::{Axis, ConfigError, GeometryError, ParseRelationError};
pub use path_builder::{
    MeasuredNode, Path, PathRequest, SourceNode, path_data, route, route_with,
};
pub use relation::{Relation, classify, classify_with};
pub use types::{Offset, Point, Rect};
