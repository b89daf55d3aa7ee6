mod commands;
mod config_args;
mod input_output;
mod logging;
mod tokenizer_mode;

use clap::Parser;
use commands::Commands;
pub use logging::LogArgs;

/// The token ID type used by the CLI.
pub type T = u32;

/// mchipper: morphological tokenizer CLI
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
