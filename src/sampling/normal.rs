//! Gaussian coordinate sampling centred on the canvas.
use rand::RngCore;

use crate::sampling::{box_muller_pair, Coord, CoordinateSampling};

/// Per-axis Gaussian with mean at the canvas midpoint and standard deviation
/// a quarter of the axis extent.
///
/// Samples are truncated toward zero and are not clamped: positions outside
/// the canvas are returned as drawn so the density keeps its true tails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalSampling;

impl CoordinateSampling for NormalSampling {
    fn sample(&self, width: u32, height: u32, rng: &mut dyn RngCore) -> Coord {
        let (w, h) = (width as f64, height as f64);
        let (nx, ny) = box_muller_pair(rng);
        let x = w / 2.0 + nx * (w / 4.0);
        let y = h / 2.0 + ny * (h / 4.0);
        (x.trunc() as i64, y.trunc() as i64)
    }
}
