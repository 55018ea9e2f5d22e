//! Scatter runs: request validation, the pipeline, and progress events.
//!
//! A run goes through `validate -> prepare canvas -> sample -> draw each
//! point -> finish`. Every validation failure is reported before the canvas
//! is touched, and a failed run returns no canvas at all.

pub mod events;
mod pipeline;
mod request;

pub use events::{EventSink, FnSink, Progress, RunSummary, ScatterEvent, ScatterEventKind, VecSink};
pub use pipeline::{ScatterOutput, ScatterPipeline, ScatterPoint};
pub use request::{CanvasInput, CanvasPlan, PointCount, ScatterPlan, ScatterRequest};
