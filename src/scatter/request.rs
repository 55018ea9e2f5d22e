//! Scatter requests and their validation into typed plans.
//!
//! A [`ScatterRequest`] holds the raw inputs exactly as a caller gathered
//! them (strings, optional values). [`ScatterRequest::validate`] checks all
//! of them up front and produces a [`ScatterPlan`]; nothing is allocated or
//! drawn until validation has passed.

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, ScatterError};
use crate::render::{load_canvas, Canvas};
use crate::types::{
    Colour, ColourSpec, CompositeMode, DistributionKind, PointSize, ShapeSpec,
};

/// An existing image to scatter over.
#[derive(Debug, Clone)]
pub enum CanvasInput {
    /// An image file, decoded when the canvas is prepared.
    Path(PathBuf),
    /// An already-decoded canvas.
    Canvas(Canvas),
}

/// Raw, unvalidated inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct ScatterRequest {
    /// Existing image to draw on. Excludes `size` and `background`.
    pub input: Option<CanvasInput>,
    /// Size of a new canvas as (width, height).
    pub size: Option<(u32, u32)>,
    /// Background colour of a new canvas.
    pub background: Option<String>,
    /// Point colour: hex or `random`.
    pub color: Option<String>,
    /// One value (fixed size) or two (inclusive range).
    pub point_size: Vec<u32>,
    /// Shape token or `random`.
    pub shape: Option<String>,
    /// `replace` or `blend`.
    pub mode: Option<String>,
    /// `uniform` (default) or `normal`.
    pub distribution: Option<String>,
    /// Explicit number of points. Takes precedence over `density`.
    pub count: Option<u64>,
    /// Points per pixel.
    pub density: Option<f64>,
}

/// Where the canvas for a run comes from.
#[derive(Debug, Clone)]
pub enum CanvasPlan {
    Load(CanvasInput),
    Blank {
        width: u32,
        height: u32,
        background: Colour,
    },
}

impl CanvasPlan {
    /// Load or allocate the canvas.
    pub fn prepare(self) -> Result<Canvas> {
        match self {
            CanvasPlan::Load(CanvasInput::Path(path)) => load_canvas(&path),
            CanvasPlan::Load(CanvasInput::Canvas(canvas)) => Ok(canvas),
            CanvasPlan::Blank {
                width,
                height,
                background,
            } => Canvas::new(width, height, background),
        }
    }
}

/// How many points a run places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointCount {
    Exact(u64),
    /// Points per pixel of canvas area.
    Density(f64),
}

impl PointCount {
    /// Resolve against the canvas size: `floor(width * height * density)`
    /// for densities.
    pub fn resolve(&self, width: u32, height: u32) -> u64 {
        match *self {
            PointCount::Exact(n) => n,
            PointCount::Density(d) => (width as f64 * height as f64 * d).floor() as u64,
        }
    }
}

/// A validated run description.
#[derive(Debug, Clone)]
pub struct ScatterPlan {
    pub canvas: CanvasPlan,
    pub colour: ColourSpec,
    pub point_size: PointSize,
    pub shape: ShapeSpec,
    pub mode: CompositeMode,
    pub distribution: DistributionKind,
    pub count: PointCount,
}

impl ScatterRequest {
    /// Check every input and build a plan. Fails on the first problem.
    pub fn validate(self) -> Result<ScatterPlan> {
        let canvas = match (self.input, self.size, self.background.as_deref()) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(ScatterError::ConflictingCanvasSource)
            }
            (Some(input), None, None) => CanvasPlan::Load(input),
            (None, Some((width, height)), Some(background)) => {
                if width == 0 || height == 0 {
                    return Err(ScatterError::InvalidCanvasSize { width, height });
                }
                CanvasPlan::Blank {
                    width,
                    height,
                    background: Colour::from_hex(background)?,
                }
            }
            (None, _, _) => return Err(ScatterError::MissingCanvasSource),
        };

        let count = match (self.count, self.density) {
            (Some(n), density) if n > 0 => {
                if density.is_some() {
                    debug!("Explicit count {} given; ignoring density.", n);
                }
                PointCount::Exact(n)
            }
            (_, Some(d)) if d != 0.0 => {
                if !d.is_finite() || d < 0.0 {
                    return Err(ScatterError::InvalidDensity { value: d });
                }
                PointCount::Density(d)
            }
            _ => return Err(ScatterError::MissingPointCount),
        };

        let point_size = PointSize::from_values(&self.point_size)?;

        let shape: ShapeSpec = required(self.shape.as_deref(), "shape")?.parse()?;
        let mode: CompositeMode = required(self.mode.as_deref(), "mode")?.parse()?;
        let distribution: DistributionKind = match self.distribution.as_deref() {
            Some(token) => token.parse()?,
            None => DistributionKind::default(),
        };

        let colour = ColourSpec::parse(required(self.color.as_deref(), "color")?)?;

        Ok(ScatterPlan {
            canvas,
            colour,
            point_size,
            shape,
            mode,
            distribution,
            count,
        })
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    value.ok_or(ScatterError::MissingOption { name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn blank_request() -> ScatterRequest {
        ScatterRequest {
            size: Some((10, 10)),
            background: Some("#000000".to_string()),
            color: Some("#ffffffff".to_string()),
            point_size: vec![1],
            shape: Some("pixel".to_string()),
            mode: Some("replace".to_string()),
            count: Some(5),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_blank_request() {
        let plan = blank_request().validate().unwrap();
        assert!(matches!(
            plan.canvas,
            CanvasPlan::Blank {
                width: 10,
                height: 10,
                background: Colour::BLACK
            }
        ));
        assert_eq!(plan.colour, ColourSpec::Fixed(Colour::WHITE));
        assert_eq!(plan.point_size, PointSize::Fixed(1));
        assert_eq!(plan.shape, ShapeSpec::Fixed(ShapeKind::Pixel));
        assert_eq!(plan.mode, CompositeMode::Replace);
        assert_eq!(plan.distribution, DistributionKind::Uniform);
        assert_eq!(plan.count, PointCount::Exact(5));
    }

    #[test]
    fn test_input_and_size_conflict() {
        let request = ScatterRequest {
            input: Some(CanvasInput::Path(PathBuf::from("in.png"))),
            background: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::ConflictingCanvasSource)
        ));
    }

    #[test]
    fn test_input_and_background_conflict() {
        let request = ScatterRequest {
            input: Some(CanvasInput::Path(PathBuf::from("in.png"))),
            size: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::ConflictingCanvasSource)
        ));
    }

    #[test]
    fn test_missing_canvas_source() {
        let request = ScatterRequest {
            size: None,
            background: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::MissingCanvasSource)
        ));

        // Size without background is not a canvas source either.
        let request = ScatterRequest {
            background: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::MissingCanvasSource)
        ));
    }

    #[test]
    fn test_input_only_is_accepted() {
        let canvas = Canvas::new(4, 4, Colour::WHITE).unwrap();
        let request = ScatterRequest {
            input: Some(CanvasInput::Canvas(canvas)),
            size: None,
            background: None,
            ..blank_request()
        };
        let plan = request.validate().unwrap();
        assert!(matches!(plan.canvas, CanvasPlan::Load(_)));
    }

    #[test]
    fn test_missing_point_count() {
        let request = ScatterRequest {
            count: None,
            density: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::MissingPointCount)
        ));

        let request = ScatterRequest {
            count: Some(0),
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::MissingPointCount)
        ));
    }

    #[test]
    fn test_count_wins_over_density() {
        let request = ScatterRequest {
            count: Some(7),
            density: Some(0.5),
            ..blank_request()
        };
        assert_eq!(request.validate().unwrap().count, PointCount::Exact(7));
    }

    #[test]
    fn test_invalid_density() {
        for d in [-0.5, f64::NAN, f64::INFINITY] {
            let request = ScatterRequest {
                count: None,
                density: Some(d),
                ..blank_request()
            };
            assert!(matches!(
                request.validate(),
                Err(ScatterError::InvalidDensity { .. })
            ));
        }
    }

    #[test]
    fn test_density_resolution() {
        assert_eq!(PointCount::Density(0.01).resolve(100, 100), 100);
        assert_eq!(PointCount::Density(0.5).resolve(3, 3), 4);
        assert_eq!(PointCount::Density(0.001).resolve(10, 10), 0);
        assert_eq!(PointCount::Exact(12).resolve(1, 1), 12);
    }

    #[test]
    fn test_point_size_arity() {
        let request = ScatterRequest {
            point_size: vec![1, 2, 3],
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::InvalidPointSizeArity { got: 3 })
        ));
    }

    #[test]
    fn test_bad_tokens() {
        let request = ScatterRequest {
            shape: Some("hexagon".to_string()),
            ..blank_request()
        };
        assert!(request.validate().unwrap_err().is_validation());

        let request = ScatterRequest {
            mode: Some("overlay".to_string()),
            ..blank_request()
        };
        assert!(request.validate().unwrap_err().is_validation());

        let request = ScatterRequest {
            distribution: Some("cauchy".to_string()),
            ..blank_request()
        };
        assert!(request.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_missing_required_options() {
        let request = ScatterRequest {
            color: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::MissingOption { name: "color" })
        ));

        let request = ScatterRequest {
            mode: None,
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::MissingOption { name: "mode" })
        ));
    }

    #[test]
    fn test_bad_colours() {
        let request = ScatterRequest {
            background: Some("black".to_string()),
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::InvalidColorFormat { .. })
        ));

        let request = ScatterRequest {
            color: Some("#fff".to_string()),
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn test_zero_canvas_size() {
        let request = ScatterRequest {
            size: Some((0, 10)),
            ..blank_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ScatterError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_random_specs() {
        let request = ScatterRequest {
            color: Some("Random".to_string()),
            shape: Some("random".to_string()),
            point_size: vec![2, 8],
            ..blank_request()
        };
        let plan = request.validate().unwrap();
        assert_eq!(plan.colour, ColourSpec::Random);
        assert_eq!(plan.shape, ShapeSpec::Random);
        assert_eq!(plan.point_size, PointSize::Range { min: 2, max: 8 });
    }
}
