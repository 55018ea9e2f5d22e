use clap::Parser;
use miette::Result;
use scatter::cli::{init_tracing, Cli, Commands};
use scatter::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => scatter::cli::generate::run(args, &printer)?,
        Commands::Init(args) => scatter::cli::init::run(args, &printer)?,
        Commands::Completions(args) => scatter::cli::completions::run(args)?,
    }

    Ok(())
}
