//! Rendering module for scatter.
//!
//! This module handles the canvas, rasterizing individual shapes onto it,
//! compositing them under the run's mode, and reading/writing image files.

mod canvas;
mod composite;
mod png;
mod raster;

pub use canvas::{Canvas, Extent, Layer, Surface};
pub use composite::{merge, Compositor};
pub use png::{load_canvas, write_png};
pub use raster::{draw_shape, fill_polygon, footprint, polygon};
