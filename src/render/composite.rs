//! Compositor - combines each drawn shape with the canvas.

use crate::types::{Colour, CompositeMode, ShapeKind};

use super::canvas::{Canvas, Layer, Surface};
use super::raster::{draw_shape, footprint};

/// Draws shapes onto a canvas under one composite mode for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compositor {
    mode: CompositeMode,
}

impl Compositor {
    pub fn new(mode: CompositeMode) -> Self {
        Self { mode }
    }

    /// Draw one shape.
    ///
    /// `Replace` rasterizes straight onto the canvas. `Blend` rasterizes into
    /// a transparent layer over the shape's footprint, then blends every
    /// painted layer pixel onto the canvas with [`Colour::blend`]. Each call
    /// sees the canvas as left by the previous one.
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        centre: (i64, i64),
        radius: u32,
        kind: ShapeKind,
        colour: Colour,
    ) {
        match self.mode {
            CompositeMode::Replace => draw_shape(canvas, centre, radius, kind, colour),
            CompositeMode::Blend => {
                let mut layer = Layer::over(canvas, footprint(kind, centre, radius));
                if layer.extent().is_empty() {
                    return;
                }
                draw_shape(&mut layer, centre, radius, kind, colour);
                merge(canvas, &layer);
            }
        }
    }
}

/// Blend every painted pixel of `layer` onto `canvas`.
pub fn merge(canvas: &mut Canvas, layer: &Layer) {
    for (x, y, overlay) in layer.painted() {
        if let Some(base) = canvas.get(x, y) {
            canvas.put(x, y, Colour::blend(base, overlay));
        }
    }
}
