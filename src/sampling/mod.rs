//! Coordinate sampling for scatter points.
//!
//! A sampler produces the full sequence of candidate positions for a run.
//! Positions are canvas-space integers; samplers whose law has unbounded
//! support (such as [`NormalSampling`]) may return positions outside the
//! canvas, and it is up to the consumer to skip them.
use rand::RngCore;

pub mod normal;
pub mod uniform;

pub use normal::NormalSampling;
pub use uniform::UniformSampling;

use crate::types::DistributionKind;

/// A canvas-space position `(x, y)`, y increasing downward.
pub type Coord = (i64, i64);

/// Trait for coordinate sampling.
pub trait CoordinateSampling {
    /// Draw one position for a `width` x `height` canvas. Both extents are
    /// non-zero.
    fn sample(&self, width: u32, height: u32, rng: &mut dyn RngCore) -> Coord;
}

/// Number and law of the coordinates for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionSpec {
    pub kind: DistributionKind,
    pub count: u64,
}

impl DistributionSpec {
    pub fn new(kind: DistributionKind, count: u64) -> Self {
        Self { kind, count }
    }

    /// Box the strategy implementing this spec.
    pub fn sampler(&self) -> Box<dyn CoordinateSampling> {
        match self.kind {
            DistributionKind::Uniform => Box::new(UniformSampling),
            DistributionKind::Normal => Box::new(NormalSampling),
        }
    }

    /// Lazily sample the coordinates for a `width` x `height` canvas.
    ///
    /// Nothing is buffered, so the count may exceed what fits in memory.
    /// A zero extent yields no coordinates.
    pub fn generate<'a>(
        &self,
        width: u32,
        height: u32,
        rng: &'a mut dyn RngCore,
    ) -> Coordinates<'a> {
        let remaining = if width == 0 || height == 0 { 0 } else { self.count };
        Coordinates {
            sampler: self.sampler(),
            width,
            height,
            remaining,
            rng,
        }
    }
}

/// Iterator returned by [`DistributionSpec::generate`].
pub struct Coordinates<'a> {
    sampler: Box<dyn CoordinateSampling>,
    width: u32,
    height: u32,
    remaining: u64,
    rng: &'a mut dyn RngCore,
}

impl Iterator for Coordinates<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.sample(self.width, self.height, self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Uniform integer in `lo..=hi`. Requires `lo <= hi`.
#[inline]
pub(crate) fn rand_inclusive(rng: &mut dyn RngCore, lo: u32, hi: u32) -> u32 {
    debug_assert!(lo <= hi);
    let span = (hi - lo) as u64 + 1;
    lo + ((rng.next_u32() as u64 * span) >> 32) as u32
}

/// Uniform index in `0..len`. Requires `len > 0`.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0);
    ((rng.next_u32() as u64 * len as u64) >> 32) as usize
}

/// Two independent standard normal deviates (Box-Muller).
pub(crate) fn box_muller_pair(rng: &mut dyn RngCore) -> (f64, f64) {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;

    (r * theta.cos(), r * theta.sin())
}
