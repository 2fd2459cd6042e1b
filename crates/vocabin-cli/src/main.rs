mod commands;
mod input_output;
mod logging;
mod vocab_selector;

use clap::Parser;
use commands::Commands;

/// vocabin: compile, inspect, and serve binary BPE vocabularies.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    pub logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging
        .setup_logging(args.command.default_log_level())?;

    args.command.run()
}
