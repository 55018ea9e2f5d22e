//! scatter - Procedural scatter image generator
//!
//! Scatters shapes (pixels, circles, squares, triangles, stars) over a new
//! or existing RGBA image. Coordinates come from a uniform or normal
//! distribution; each shape either replaces the pixels under it or
//! alpha-blends over them.

pub mod cli;
pub mod error;
pub mod output;
pub mod recipe;
pub mod render;
pub mod sampling;
pub mod scatter;
pub mod types;

pub use error::{Result, ScatterError};
pub use recipe::Recipe;
pub use render::{load_canvas, write_png, Canvas, Compositor};
pub use sampling::{CoordinateSampling, DistributionSpec};
pub use scatter::{
    CanvasInput, EventSink, ScatterEvent, ScatterOutput, ScatterPipeline, ScatterRequest,
};
pub use types::{Colour, ColourSpec, CompositeMode, DistributionKind, PointSize, ShapeKind, ShapeSpec};
