//! Event types and sinks for observing scatter runs.
//!
//! [`ScatterPipeline`](crate::scatter::ScatterPipeline) reports its progress
//! through an [`EventSink`]: one [`ScatterEvent::RunStarted`], one
//! [`ScatterEvent::Progress`] per coordinate (placed or skipped), and one
//! [`ScatterEvent::RunFinished`].
use std::time::Duration;

use serde::Serialize;

/// Progress after one coordinate has been handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Coordinates handled so far, skipped ones included.
    pub completed: u64,
    /// Coordinates in the run.
    pub total: u64,
    /// `completed` per second of wall time since sampling began; zero when no
    /// time has elapsed.
    pub throughput: f64,
}

impl Progress {
    /// Completed fraction in `[0, 1]`. An empty run counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    /// Coordinates sampled.
    pub total: u64,
    /// Shapes drawn.
    pub placed: u64,
    /// Coordinates that fell outside the canvas.
    pub skipped: u64,
    /// Wall time from sampling to the last point.
    #[serde(serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

/// Describes events emitted by a scatter run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ScatterEvent {
    /// Emitted once the canvas is ready and the point count is known.
    RunStarted {
        total: u64,
        width: u32,
        height: u32,
    },

    /// Emitted after every coordinate.
    Progress(Progress),

    /// Emitted after the last coordinate.
    RunFinished { summary: RunSummary },
}

impl ScatterEvent {
    pub fn kind(&self) -> ScatterEventKind {
        match self {
            ScatterEvent::RunStarted { .. } => ScatterEventKind::RunStarted,
            ScatterEvent::Progress(_) => ScatterEventKind::Progress,
            ScatterEvent::RunFinished { .. } => ScatterEventKind::RunFinished,
        }
    }
}

/// Discriminant of [`ScatterEvent`], used to skip building unwanted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScatterEventKind {
    RunStarted,
    Progress,
    RunFinished,
}

/// A generic event sink that accepts [`ScatterEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: ScatterEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: ScatterEventKind) -> bool {
        true
    }

    /// Polled before each coordinate; returning true cancels the run.
    fn should_stop(&self) -> bool {
        false
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: ScatterEvent) {}

    #[inline]
    fn wants(&self, _kind: ScatterEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    #[inline]
    fn send(&mut self, event: ScatterEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ScatterEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<ScatterEvent> {
        self.events
    }

    /// The progress events, in order.
    pub fn progress(&self) -> impl Iterator<Item = &Progress> {
        self.events.iter().filter_map(|e| match e {
            ScatterEvent::Progress(p) => Some(p),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: ScatterEvent) {
        self.events.push(event);
    }
}
