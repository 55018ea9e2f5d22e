//! The scatter pipeline: validate, prepare the canvas, sample coordinates,
//! then draw one shape per coordinate.

use std::time::Instant;

use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::{Result, ScatterError};
use crate::render::{Canvas, Compositor};
use crate::sampling::{CoordinateSampling, DistributionSpec};
use crate::scatter::events::{EventSink, Progress, RunSummary, ScatterEvent, ScatterEventKind};
use crate::scatter::request::{ScatterPlan, ScatterRequest};
use crate::types::{Colour, ShapeKind};

/// One shape about to be drawn. Built per coordinate and dropped once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterPoint {
    pub position: (i64, i64),
    /// Point size; shapes are drawn with half of it as radius.
    pub size: u32,
    pub kind: ShapeKind,
    pub colour: Colour,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct ScatterOutput {
    pub canvas: Canvas,
    pub summary: RunSummary,
}

/// Runs one validated [`ScatterPlan`].
///
/// Points are processed strictly in sampling order; in blend mode each
/// point composites over the canvas left by all earlier points.
#[derive(Debug, Clone)]
pub struct ScatterPipeline {
    plan: ScatterPlan,
}

impl ScatterPipeline {
    /// Validate a request. No canvas is loaded or allocated here.
    pub fn new(request: ScatterRequest) -> Result<Self> {
        Ok(Self::from_plan(request.validate()?))
    }

    pub fn from_plan(plan: ScatterPlan) -> Self {
        Self { plan }
    }

    /// Run without observing events.
    pub fn run(self, rng: &mut dyn RngCore) -> Result<ScatterOutput> {
        self.run_with_events(rng, &mut ())
    }

    /// Run, reporting to `sink`. All randomness is drawn from `rng`, so a
    /// seeded generator reproduces the same canvas.
    ///
    /// Per point the draws are, in order: the coordinate, the colour (drawn
    /// even when the point turns out to be off canvas), then size and shape
    /// for points that are drawn.
    pub fn run_with_events(
        self,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<ScatterOutput> {
        let ScatterPlan {
            canvas,
            colour,
            point_size,
            shape,
            mode,
            distribution,
            count,
        } = self.plan;

        let mut canvas = canvas.prepare()?;
        let (width, height) = canvas.size();
        let total = count.resolve(width, height);

        info!(
            "Scattering {} point(s) over {}x{} | {} mode, {} distribution.",
            total, width, height, mode, distribution
        );
        debug!(
            "Colour {} | size {} | shape {}.",
            colour, point_size, shape
        );
        if total == 0 {
            warn!("Point count resolved to zero; the canvas is returned unchanged.");
        }

        if sink.wants(ScatterEventKind::RunStarted) {
            sink.send(ScatterEvent::RunStarted {
                total,
                width,
                height,
            });
        }

        let compositor = Compositor::new(mode);
        let sampler = DistributionSpec::new(distribution, total).sampler();
        let start = Instant::now();

        let mut placed = 0;
        let mut skipped = 0;

        // Coordinates are drawn one per point; nothing is buffered.
        for i in 0..total {
            if sink.should_stop() {
                info!("Run cancelled after {} of {} point(s).", i, total);
                return Err(ScatterError::Cancelled);
            }

            let (x, y) = sampler.sample(width, height, rng);
            let point_colour = colour.resolve(rng);

            if canvas.contains(x, y) {
                let point = ScatterPoint {
                    position: (x, y),
                    size: point_size.resolve(rng),
                    kind: shape.resolve(rng),
                    colour: point_colour,
                };
                compositor.draw(
                    &mut canvas,
                    point.position,
                    point.size / 2,
                    point.kind,
                    point.colour,
                );
                placed += 1;
            } else {
                debug!("Skipping out-of-bounds point ({}, {}).", x, y);
                skipped += 1;
            }

            if sink.wants(ScatterEventKind::Progress) {
                let completed = i + 1;
                let elapsed = start.elapsed().as_secs_f64();
                let throughput = if elapsed > 0.0 {
                    completed as f64 / elapsed
                } else {
                    0.0
                };
                sink.send(ScatterEvent::Progress(Progress {
                    completed,
                    total,
                    throughput,
                }));
            }
        }

        let summary = RunSummary {
            total,
            placed,
            skipped,
            elapsed: start.elapsed(),
        };
        info!(
            "Placed {} point(s), skipped {} out of bounds in {:.2?}.",
            placed, skipped, summary.elapsed
        );

        if sink.wants(ScatterEventKind::RunFinished) {
            sink.send(ScatterEvent::RunFinished { summary });
        }

        Ok(ScatterOutput { canvas, summary })
    }
}
