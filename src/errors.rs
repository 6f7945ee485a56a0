//! Error types with diagnostics using miette
//!
//! Routing itself never fails. These errors come out of the validated
//! constructors only, for callers that feed untrusted measurements in.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors from validating rectangle measurements
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("{field} is NaN")]
    #[diagnostic(code(connpath::geometry::nan))]
    NaN { field: &'static str },

    #[error("{field} is infinite")]
    #[diagnostic(code(connpath::geometry::infinite))]
    Infinite { field: &'static str },

    #[error("{field} is negative: {value}")]
    #[diagnostic(
        code(connpath::geometry::negative_size),
        help("a measured box has a non-negative width and height")
    )]
    NegativeSize { field: &'static str, value: f64 },

    #[error("edges disagree with size on the {axis} axis")]
    #[diagnostic(
        code(connpath::geometry::inconsistent_edges),
        help("expected right = left + width and bottom = top + height")
    )]
    InconsistentEdges { axis: Axis },
}

/// Axis named in [`GeometryError::InconsistentEdges`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Reject NaN and infinite coordinates.
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_nan() {
        Err(GeometryError::NaN { field })
    } else if value.is_infinite() {
        Err(GeometryError::Infinite { field })
    } else {
        Ok(value)
    }
}

// ============================================================================
// Config Errors
// ============================================================================

/// Errors from building a [`crate::RoutingConfig`]
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    #[diagnostic(
        code(connpath::config::invalid_offset),
        help("routing distances must be finite and non-negative")
    )]
    InvalidOffset { name: &'static str, value: f64 },
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Unknown relation tag passed to `Relation::from_str`
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown relation: {input}")]
#[diagnostic(
    code(connpath::parse::unknown_relation),
    help("expected one of bottom-to-top, top-to-bottom, right-to-left, left-to-right")
)]
pub struct ParseRelationError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finite_accepts_plain_values() {
        assert_eq!(check_finite("left", -3.5), Ok(-3.5));
        assert_eq!(check_finite("left", 0.0), Ok(0.0));
    }

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert_eq!(check_finite("top", f64::NAN), Err(GeometryError::NaN { field: "top" }));
        assert_eq!(
            check_finite("top", f64::NEG_INFINITY),
            Err(GeometryError::Infinite { field: "top" })
        );
    }

    #[test]
    fn messages_name_the_field() {
        let err = GeometryError::NegativeSize { field: "width", value: -2.0 };
        assert_eq!(err.to_string(), "width is negative: -2");

        let err = GeometryError::InconsistentEdges { axis: Axis::Y };
        assert_eq!(err.to_string(), "edges disagree with size on the y axis");
    }

    #[test]
    fn diagnostics_carry_codes() {
        let err = ConfigError::InvalidOffset { name: "line_offset", value: -1.0 };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("connpath::config::invalid_offset"));
    }
}
