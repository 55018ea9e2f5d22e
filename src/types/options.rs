//! Run-wide options: composite mode, coordinate distribution and point size.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScatterError};
use crate::sampling::rand_inclusive;

/// How a drawn shape combines with the pixels already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeMode {
    /// Shape pixels overwrite the canvas, alpha included.
    #[default]
    Replace,
    /// Shape pixels are alpha-blended over the canvas.
    Blend,
}

impl FromStr for CompositeMode {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "replace" => Ok(CompositeMode::Replace),
            "blend" => Ok(CompositeMode::Blend),
            _ => Err(ScatterError::UnsupportedToken {
                kind: "mode",
                value: s.to_string(),
                expected: "replace, blend",
            }),
        }
    }
}

impl fmt::Display for CompositeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompositeMode::Replace => "replace",
            CompositeMode::Blend => "blend",
        })
    }
}

/// Statistical law for scatter coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Flat over the canvas.
    #[default]
    Uniform,
    /// Per-axis Gaussian centred on the canvas, sigma a quarter of the extent.
    Normal,
}

impl FromStr for DistributionKind {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uniform" => Ok(DistributionKind::Uniform),
            "normal" => Ok(DistributionKind::Normal),
            _ => Err(ScatterError::UnsupportedToken {
                kind: "distribution",
                value: s.to_string(),
                expected: "uniform, normal",
            }),
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Normal => "normal",
        })
    }
}

/// Size of each scatter point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSize {
    Fixed(u32),
    /// Uniform over `min..=max`.
    Range { min: u32, max: u32 },
}

impl PointSize {
    /// Build from one value (fixed) or two values (inclusive range).
    pub fn from_values(values: &[u32]) -> Result<Self> {
        let size = match *values {
            [size] => PointSize::Fixed(size),
            [min, max] => PointSize::Range { min, max },
            _ => return Err(ScatterError::InvalidPointSizeArity { got: values.len() }),
        };

        match size {
            PointSize::Fixed(0) | PointSize::Range { min: 0, .. } => {
                Err(ScatterError::InvalidPointSize {
                    message: "point sizes must be positive".to_string(),
                })
            }
            PointSize::Range { min, max } if min > max => Err(ScatterError::InvalidPointSize {
                message: format!("range {} {} is reversed", min, max),
            }),
            size => Ok(size),
        }
    }

    /// Size for one point. A `Range` consumes one draw from `rng`, even when
    /// degenerate.
    pub fn resolve(&self, rng: &mut dyn RngCore) -> u32 {
        match *self {
            PointSize::Fixed(size) => size,
            PointSize::Range { min, max } => rand_inclusive(rng, min, max),
        }
    }
}

impl fmt::Display for PointSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointSize::Fixed(size) => write!(f, "{}", size),
            PointSize::Range { min, max } => write!(f, "{}..={}", min, max),
        }
    }
}
