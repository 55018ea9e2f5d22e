use miette::Diagnostic;
use thiserror::Error;

/// Main error type for scatter operations
#[derive(Error, Diagnostic, Debug)]
pub enum ScatterError {
    #[error("Conflicting canvas source: an input image cannot be combined with size or background")]
    #[diagnostic(
        code(scatter::validate::canvas),
        help("Pass either --input, or --size together with --background")
    )]
    ConflictingCanvasSource,

    #[error("Missing canvas source")]
    #[diagnostic(
        code(scatter::validate::canvas),
        help("Pass either --input, or --size together with --background")
    )]
    MissingCanvasSource,

    #[error("Missing point count: give an explicit count or a density")]
    #[diagnostic(code(scatter::validate::count), help("Use --num N or --density D"))]
    MissingPointCount,

    #[error("Missing required option: {name}")]
    #[diagnostic(
        code(scatter::validate::missing),
        help("Pass it on the command line or set it in the recipe")
    )]
    MissingOption { name: &'static str },

    #[error("Point size takes 1 or 2 values, got {got}")]
    #[diagnostic(
        code(scatter::validate::pointsize),
        help("Use one value for a fixed size, or two for an inclusive random range")
    )]
    InvalidPointSizeArity { got: usize },

    #[error("Invalid point size: {message}")]
    #[diagnostic(code(scatter::validate::pointsize))]
    InvalidPointSize { message: String },

    #[error("Invalid density: {value}")]
    #[diagnostic(
        code(scatter::validate::count),
        help("Density is points per pixel and must be a positive finite number")
    )]
    InvalidDensity { value: f64 },

    #[error("Invalid canvas size: {width}x{height}")]
    #[diagnostic(code(scatter::validate::canvas), help("Width and height must both be positive"))]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("Unsupported {kind}: {value} (expected one of: {expected})")]
    #[diagnostic(code(scatter::validate::token))]
    UnsupportedToken {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid colour format: {value}")]
    #[diagnostic(
        code(scatter::colour),
        help("Use #RRGGBB, #RRGGBBAA, or the word `random`")
    )]
    InvalidColorFormat { value: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(scatter::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error: {message}")]
    #[diagnostic(code(scatter::image))]
    Image { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(scatter::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{} already exists", path.display())]
    #[diagnostic(code(scatter::init), help("Use --force to overwrite"))]
    AlreadyExists { path: std::path::PathBuf },

    #[error("Generation cancelled")]
    #[diagnostic(code(scatter::cancelled))]
    Cancelled,
}

impl ScatterError {
    /// Whether the error was raised while validating a request, before any
    /// canvas was allocated.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ConflictingCanvasSource
                | Self::MissingCanvasSource
                | Self::MissingPointCount
                | Self::MissingOption { .. }
                | Self::InvalidPointSizeArity { .. }
                | Self::InvalidPointSize { .. }
                | Self::InvalidDensity { .. }
                | Self::InvalidCanvasSize { .. }
                | Self::UnsupportedToken { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScatterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ScatterError::MissingPointCount.is_validation());
        assert!(ScatterError::InvalidPointSizeArity { got: 3 }.is_validation());
        assert!(!ScatterError::InvalidColorFormat {
            value: "#12".to_string()
        }
        .is_validation());
        assert!(!ScatterError::Cancelled.is_validation());
    }

    #[test]
    fn test_messages() {
        let err = ScatterError::UnsupportedToken {
            kind: "shape",
            value: "hexagon".to_string(),
            expected: "pixel, circle",
        };
        assert_eq!(
            err.to_string(),
            "Unsupported shape: hexagon (expected one of: pixel, circle)"
        );

        let err = ScatterError::InvalidPointSizeArity { got: 0 };
        assert_eq!(err.to_string(), "Point size takes 1 or 2 values, got 0");
    }
}
