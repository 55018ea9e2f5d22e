pub mod completions;
pub mod generate;
pub mod init;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// scatter - Procedural scatter image generator
#[derive(Parser, Debug)]
#[command(name = "scatter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scatter shapes over a new or existing image
    Generate(generate::GenerateArgs),

    /// Write a starter scatter.yaml recipe
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
