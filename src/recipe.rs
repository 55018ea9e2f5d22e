//! Scatter recipes (scatter.yaml).
//!
//! A recipe stores any subset of the `generate` options so a look can be
//! re-run without retyping every flag. Values given on the command line
//! override the recipe.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScatterError};
use crate::scatter::{CanvasInput, ScatterRequest};

/// Default recipe filename.
pub const RECIPE_FILENAME: &str = "scatter.yaml";

/// Starter recipe written by `scatter init`.
pub const STARTER_RECIPE: &str = "\
# scatter recipe: every key is optional, command-line flags win.
output: scatter.png

# Either an input image...
# input: photo.png
# ...or a new canvas:
size: [800, 600]
background: \"#101018\"

# Point count: explicit `num`, or `density` in points per pixel.
density: 0.002

color: random            # #RRGGBB, #RRGGBBAA or random
pointsize: [4, 16]       # fixed size, or inclusive [min, max]
shape: random            # pixel, circle, square, triangle, star, random
mode: blend              # replace or blend
distribution: normal     # uniform or normal
# seed: 42
";

/// Options loaded from a recipe file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Recipe {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub size: Option<[u32; 2]>,
    pub background: Option<String>,
    pub num: Option<u64>,
    pub density: Option<f64>,
    pub color: Option<String>,
    pub pointsize: Option<Vec<u32>>,
    pub shape: Option<String>,
    pub mode: Option<String>,
    pub distribution: Option<String>,
    pub seed: Option<u64>,
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScatterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read recipe: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a recipe from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ScatterError::Parse {
            message: format!("Invalid recipe: {}", e),
            help: Some(format!("Check {} syntax", RECIPE_FILENAME)),
        })
    }

    /// Layer `overrides` on top of `self`; any value set in `overrides` wins.
    ///
    /// The canvas source (`input` against `size`/`background`) and the point
    /// count (`num` against `density`) are overridden as groups: setting one
    /// side in `overrides` drops the other side from `self`.
    pub fn overlay(mut self, overrides: Recipe) -> Recipe {
        if overrides.input.is_some() {
            self.size = None;
            self.background = None;
        } else if overrides.size.is_some() || overrides.background.is_some() {
            self.input = None;
        }
        if overrides.num.is_some() {
            self.density = None;
        } else if overrides.density.is_some() {
            self.num = None;
        }

        Recipe {
            input: overrides.input.or(self.input),
            output: overrides.output.or(self.output),
            size: overrides.size.or(self.size),
            background: overrides.background.or(self.background),
            num: overrides.num.or(self.num),
            density: overrides.density.or(self.density),
            color: overrides.color.or(self.color),
            pointsize: overrides.pointsize.or(self.pointsize),
            shape: overrides.shape.or(self.shape),
            mode: overrides.mode.or(self.mode),
            distribution: overrides.distribution.or(self.distribution),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Build the raw scatter request. Validation happens later, in the
    /// pipeline.
    pub fn to_request(&self) -> ScatterRequest {
        ScatterRequest {
            input: self.input.clone().map(CanvasInput::Path),
            size: self.size.map(|[w, h]| (w, h)),
            background: self.background.clone(),
            color: self.color.clone(),
            point_size: self.pointsize.clone().unwrap_or_default(),
            shape: self.shape.clone(),
            mode: self.mode.clone(),
            distribution: self.distribution.clone(),
            count: self.num,
            density: self.density,
        }
    }
}
