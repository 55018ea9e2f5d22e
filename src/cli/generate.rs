//! Generate command implementation.
//!
//! Merges the recipe with command-line flags, runs the scatter pipeline and
//! writes the resulting PNG.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, ScatterError};
use crate::output::{display_path, plural, Printer, ProgressLine};
use crate::recipe::{Recipe, RECIPE_FILENAME};
use crate::render::write_png;
use crate::scatter::{RunSummary, ScatterPipeline};

/// Scatter shapes over a new or existing image
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Image to draw on (excludes --size and --background)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// PNG file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Size of a new canvas
    #[arg(short, long, num_args = 2, value_names = ["W", "H"])]
    pub size: Option<Vec<u32>>,

    /// Background colour of a new canvas (#RRGGBB or #RRGGBBAA)
    #[arg(long, visible_alias = "bg")]
    pub background: Option<String>,

    /// Number of points
    #[arg(short, long)]
    pub num: Option<u64>,

    /// Points per pixel, used when --num is not given
    #[arg(short, long)]
    pub density: Option<f64>,

    /// Point colour (#RRGGBB, #RRGGBBAA or random)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Point size, or an inclusive MIN MAX range
    #[arg(long, visible_alias = "ps", num_args = 1..)]
    pub pointsize: Option<Vec<u32>>,

    /// pixel, circle, square, triangle, star or random
    #[arg(long, visible_alias = "sh")]
    pub shape: Option<String>,

    /// replace or blend
    #[arg(short, long)]
    pub mode: Option<String>,

    /// uniform (default) or normal
    #[arg(long, visible_alias = "dist")]
    pub distribution: Option<String>,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Recipe to load (default: ./scatter.yaml when present)
    #[arg(long)]
    pub recipe: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// The options given on the command line, as a recipe layer.
    fn overrides(&self) -> Recipe {
        Recipe {
            input: self.input.clone(),
            output: self.output.clone(),
            size: self.size.as_deref().and_then(|s| match *s {
                [w, h] => Some([w, h]),
                _ => None,
            }),
            background: self.background.clone(),
            num: self.num,
            density: self.density,
            color: self.color.clone(),
            pointsize: self.pointsize.clone(),
            shape: self.shape.clone(),
            mode: self.mode.clone(),
            distribution: self.distribution.clone(),
            seed: self.seed,
        }
    }
}

/// JSON report written with `--report`.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    seed: u64,
    width: u32,
    height: u32,
    options: &'a Recipe,
    #[serde(flatten)]
    summary: RunSummary,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let recipe = load_recipe(args.recipe.as_deref())?.overlay(args.overrides());

    let output = recipe
        .output
        .clone()
        .ok_or(ScatterError::MissingOption { name: "output" })?;

    // Validate everything before touching the filesystem.
    let pipeline = ScatterPipeline::new(recipe.to_request())?;

    let seed = match recipe.seed {
        Some(seed) => seed,
        None => {
            let seed = clock_seed();
            info!("No seed given; using {} from the clock.", seed);
            seed
        }
    };

    printer.status(
        "Generating",
        &format!("{} (seed {})", display_path(&output), seed),
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut progress = ProgressLine::new(!args.quiet);
    let result = pipeline.run_with_events(&mut rng, &mut progress)?;

    write_png(&result.canvas, &output)?;

    let (width, height) = result.canvas.size();
    if let Some(report_path) = &args.report {
        write_report(
            report_path,
            &RunReport {
                seed,
                width,
                height,
                options: &recipe,
                summary: result.summary,
            },
        )?;
        printer.info("Reported", &display_path(report_path));
    }

    let summary = result.summary;
    let mut message = format!(
        "{} ({}x{}, {}",
        display_path(&output),
        width,
        height,
        plural(summary.placed, "point", "points")
    );
    if summary.skipped > 0 {
        message.push_str(&format!(", {} off canvas", summary.skipped));
    }
    message.push_str(&format!(") in {:.2?}", summary.elapsed));
    printer.success("Finished", &message);

    Ok(())
}

/// Load the named recipe, or `./scatter.yaml` when none is named and it
/// exists. Without either, start from an empty recipe.
fn load_recipe(path: Option<&Path>) -> Result<Recipe> {
    match path {
        Some(path) => Recipe::load(path),
        None => {
            let default = Path::new(RECIPE_FILENAME);
            if default.is_file() {
                info!("Using recipe {}.", RECIPE_FILENAME);
                Recipe::load(default)
            } else {
                Ok(Recipe::default())
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn write_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| ScatterError::Parse {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScatterError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create report directory: {}", e),
        })?;
    }

    fs::write(path, json).map_err(|e| ScatterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write report: {}", e),
    })
}
