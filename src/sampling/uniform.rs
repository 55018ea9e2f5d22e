//! Uniform coordinate sampling.
use rand::RngCore;

use crate::sampling::{rand_inclusive, Coord, CoordinateSampling};

/// Independent uniform draws over `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampling;

impl CoordinateSampling for UniformSampling {
    fn sample(&self, width: u32, height: u32, rng: &mut dyn RngCore) -> Coord {
        let x = rand_inclusive(rng, 0, width.saturating_sub(1));
        let y = rand_inclusive(rng, 0, height.saturating_sub(1));
        (x as i64, y as i64)
    }
}
