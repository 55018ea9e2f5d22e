//! Pixel surfaces: the run's canvas and the transient layers shapes are
//! drawn into before blending.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, ScatterError};
use crate::types::Colour;

/// A rectangle of pixels, `x0..x1` by `y0..y1` (exclusive ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Extent {
    /// Extent covering the inclusive box `[x0, x1] x [y0, y1]`.
    pub fn inclusive(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            x0,
            y0,
            x1: x1 + 1,
            y1: y1 + 1,
        }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    pub fn intersect(&self, other: &Extent) -> Extent {
        Extent {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    pub fn width(&self) -> i64 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.y1 - self.y0).max(0)
    }
}

/// Something shapes can be rasterized onto.
///
/// Writes outside [`Surface::extent`] are silently clipped.
pub trait Surface {
    /// The writable region in canvas coordinates.
    fn extent(&self) -> Extent;

    /// Write one pixel, overwriting whatever was there.
    fn put(&mut self, x: i64, y: i64, colour: Colour);

    /// Write the inclusive horizontal run `x0..=x1` on row `y`.
    fn fill_span(&mut self, y: i64, x0: i64, x1: i64, colour: Colour) {
        let extent = self.extent();
        if y < extent.y0 || y >= extent.y1 {
            return;
        }
        for x in x0.max(extent.x0)..=x1.min(extent.x1 - 1) {
            self.put(x, y, colour);
        }
    }
}

/// The image being generated: a fixed-size RGBA grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidCanvasSize { width, height });
        }
        let image = ImageBuffer::from_pixel(width, height, Rgba(background.to_rgba()));
        Ok(Self { image })
    }

    /// Wrap an already-decoded image.
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ScatterError::InvalidCanvasSize { width, height });
        }
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether `(x, y)` lies on the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.extent().contains(x, y)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: i64, y: i64) -> Option<Colour> {
        if !self.contains(x, y) {
            return None;
        }
        Some(Colour::from_rgba(self.image.get_pixel(x as u32, y as u32).0))
    }

    /// Count the pixels that differ from `colour`.
    pub fn count_not(&self, colour: Colour) -> usize {
        let rgba = colour.to_rgba();
        self.image.pixels().filter(|p| p.0 != rgba).count()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Surface for Canvas {
    fn extent(&self) -> Extent {
        Extent {
            x0: 0,
            y0: 0,
            x1: self.image.width() as i64,
            y1: self.image.height() as i64,
        }
    }

    fn put(&mut self, x: i64, y: i64, colour: Colour) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }
    }
}

/// A transparent scratch surface covering part of a canvas.
///
/// Shapes are drawn here first so overlapping writes within one shape
/// collapse to a single pixel before the layer is blended onto the canvas.
#[derive(Debug, Clone)]
pub struct Layer {
    extent: Extent,
    pixels: Vec<Colour>,
}

impl Layer {
    /// A fully transparent layer over `region`, clipped to `canvas`.
    pub fn over(canvas: &Canvas, region: Extent) -> Self {
        let extent = canvas.extent().intersect(&region);
        let len = (extent.width() * extent.height()) as usize;
        Self {
            extent,
            pixels: vec![Colour::TRANSPARENT; len],
        }
    }

    fn index(&self, x: i64, y: i64) -> usize {
        ((y - self.extent.y0) * self.extent.width() + (x - self.extent.x0)) as usize
    }

    /// Iterate `(x, y, colour)` for every pixel with non-zero alpha.
    pub fn painted(&self) -> impl Iterator<Item = (i64, i64, Colour)> + '_ {
        let width = self.extent.width().max(1);
        let (x0, y0) = (self.extent.x0, self.extent.y0);
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_transparent())
            .map(move |(i, &c)| {
                let i = i as i64;
                (x0 + i % width, y0 + i / width, c)
            })
    }
}

impl Surface for Layer {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn put(&mut self, x: i64, y: i64, colour: Colour) {
        if self.extent.contains(x, y) {
            let i = self.index(x, y);
            self.pixels[i] = colour;
        }
    }
}
