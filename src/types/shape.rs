//! Shape kinds placed at each scatter point.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;

use crate::error::{Result, ScatterError};
use crate::sampling::rand_index;

/// One of the concrete shapes the rasterizer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A single pixel at the centre.
    Pixel,
    /// A filled disc.
    Circle,
    /// A filled axis-aligned square.
    Square,
    /// An upward isosceles triangle, three radii tall.
    Triangle,
    /// A filled five-point star.
    Star,
}

impl ShapeKind {
    /// All concrete shape kinds, in the order `random` chooses between them.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Pixel,
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    /// Token used on the command line and in recipes.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Pixel => "pixel",
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ScatterError::UnsupportedToken {
                kind: "shape",
                value: s.to_string(),
                expected: "pixel, circle, square, triangle, star, random",
            })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the shape of each scatter point is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSpec {
    Fixed(ShapeKind),
    /// Uniform choice over [`ShapeKind::ALL`] per point.
    Random,
}

impl ShapeSpec {
    /// Produce the shape for one point. `Random` consumes one draw from `rng`.
    pub fn resolve(&self, rng: &mut dyn RngCore) -> ShapeKind {
        match self {
            ShapeSpec::Fixed(kind) => *kind,
            ShapeSpec::Random => ShapeKind::ALL[rand_index(rng, ShapeKind::ALL.len())],
        }
    }
}

impl FromStr for ShapeSpec {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "random" {
            Ok(ShapeSpec::Random)
        } else {
            s.parse().map(ShapeSpec::Fixed)
        }
    }
}

impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeSpec::Fixed(kind) => kind.fmt(f),
            ShapeSpec::Random => f.write_str("random"),
        }
    }
}
