//! Terminal output formatting for the scatter CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs and
//! a self-overwriting progress line. All of it goes to stderr.

use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use crate::scatter::{EventSink, Progress, ScatterEvent, ScatterEventKind};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const CLEAR_LINE: &str = "\x1b[2K";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Cells in the progress bar.
const BAR_WIDTH: usize = 30;

/// Minimum time between progress redraws (about 30 per second).
const REDRAW_INTERVAL: Duration = Duration::from_millis(33);

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "  Generating out.png (seed 42)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress bar sink for scatter runs.
///
/// Redraws one stderr line in place, at most every [`REDRAW_INTERVAL`]
/// (the final point is always drawn), and clears it when the run finishes.
/// Does nothing unless enabled and stderr is a terminal.
pub struct ProgressLine {
    enabled: bool,
    last_draw: Option<Instant>,
}

impl ProgressLine {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && io::stderr().is_terminal(),
            last_draw: None,
        }
    }

    fn draw(&mut self, progress: &Progress) {
        let now = Instant::now();
        let finished = progress.completed >= progress.total;
        if let Some(last) = self.last_draw {
            if !finished && now.duration_since(last) < REDRAW_INTERVAL {
                return;
            }
        }
        self.last_draw = Some(now);

        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{CLEAR_LINE}{}", render_bar(progress, BAR_WIDTH));
        let _ = stderr.flush();
    }

    fn clear(&mut self) {
        if self.last_draw.take().is_some() {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "\r{CLEAR_LINE}");
            let _ = stderr.flush();
        }
    }
}

impl EventSink for ProgressLine {
    fn send(&mut self, event: ScatterEvent) {
        match event {
            ScatterEvent::Progress(progress) => self.draw(&progress),
            ScatterEvent::RunFinished { .. } => self.clear(),
            _ => {}
        }
    }

    fn wants(&self, kind: ScatterEventKind) -> bool {
        self.enabled && kind != ScatterEventKind::RunStarted
    }
}

/// Format one progress line: `[####......] 42% 420/1000 1234.5 pts/s`.
pub fn render_bar(progress: &Progress, width: usize) -> String {
    let fraction = progress.fraction().clamp(0.0, 1.0);
    let filled = ((fraction * width as f64) as usize).min(width);
    format!(
        "[{}{}] {:>3.0}% {}/{} {:.1} pts/s",
        "#".repeat(filled),
        ".".repeat(width - filled),
        fraction * 100.0,
        progress.completed,
        progress.total,
        progress.throughput
    )
}

/// Pluralize a count: `plural(1, "point", "points")` → "1 point".
pub fn plural(n: u64, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "point", "points"), "1 point");
    }

    #[test]
    fn test_plural_zero() {
        assert_eq!(plural(0, "point", "points"), "0 points");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(5, "shape", "shapes"), "5 shapes");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        // An absolute path outside cwd should stay absolute
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }

    #[test]
    fn test_render_bar_partial() {
        let p = Progress {
            completed: 420,
            total: 1000,
            throughput: 1234.56,
        };
        assert_eq!(
            render_bar(&p, 10),
            "[####......]  42% 420/1000 1234.6 pts/s"
        );
    }

    #[test]
    fn test_render_bar_complete_and_empty() {
        let done = Progress {
            completed: 3,
            total: 3,
            throughput: 0.0,
        };
        assert_eq!(render_bar(&done, 4), "[####] 100% 3/3 0.0 pts/s");

        let empty = Progress {
            completed: 0,
            total: 0,
            throughput: 0.0,
        };
        assert_eq!(render_bar(&empty, 4), "[####] 100% 0/0 0.0 pts/s");
    }

    #[test]
    fn test_disabled_progress_wants_nothing() {
        let line = ProgressLine::new(false);
        assert!(!line.wants(ScatterEventKind::Progress));
        assert!(!line.wants(ScatterEventKind::RunFinished));
    }
}
