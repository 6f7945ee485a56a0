//! Tunable routing distances.

use crate::defaults;
use crate::errors::ConfigError;

/// Distances used by classification and path building.
///
/// `RoutingConfig::default()` reproduces the stock connector look; the
/// plain `classify`/`route` entry points always use it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoutingConfig {
    line_offset: f64,
    alignment_margin: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            line_offset: defaults::LINE_OFFSET,
            alignment_margin: defaults::Y_ALIGNMENT_MARGIN,
        }
    }
}

impl RoutingConfig {
    /// Create a config with validation (rejects NaN, infinite, negative)
    pub fn try_new(line_offset: f64, alignment_margin: f64) -> Result<Self, ConfigError> {
        Ok(RoutingConfig {
            line_offset: distance("line_offset", line_offset)?,
            alignment_margin: distance("alignment_margin", alignment_margin)?,
        })
    }

    pub fn with_line_offset(self, line_offset: f64) -> Result<Self, ConfigError> {
        Ok(RoutingConfig {
            line_offset: distance("line_offset", line_offset)?,
            ..self
        })
    }

    pub fn with_alignment_margin(self, alignment_margin: f64) -> Result<Self, ConfigError> {
        Ok(RoutingConfig {
            alignment_margin: distance("alignment_margin", alignment_margin)?,
            ..self
        })
    }

    /// Gap between the last point and the target edge
    pub fn line_offset(&self) -> f64 {
        self.line_offset
    }

    /// Slack for the top/bottom eligibility test
    pub fn alignment_margin(&self) -> f64 {
        self.alignment_margin
    }
}

fn distance(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidOffset { name, value })
    }
}
