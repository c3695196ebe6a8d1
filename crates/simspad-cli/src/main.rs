// crates/simspad-cli/src/main.rs

use clap::{Parser, Subcommand};

use simspad_cli::cmd;
use simspad_cli::io::logging;

#[derive(Parser)]
#[command(name = "simspad")]
#[command(about = "SimSPAD SiPM simulation client", long_about = None)]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub silent: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List built-in device presets (or print one as a YAML device file)
    Presets(cmd::presets::PresetsArgs),

    /// Encode a device + CSV stimulus into a binary file
    Encode(cmd::encode::EncodeArgs),

    /// Print the device fields and signal stats of a binary file
    Inspect(cmd::inspect::InspectArgs),

    /// Send a device + CSV stimulus to the simulation oracle and store the response
    Simulate(cmd::simulate::SimulateArgs),

    /// Export the signal of a binary file as CSV with a time column
    Export(cmd::export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.silent);

    match cli.cmd {
        Commands::Presets(args) => cmd::presets::run(args),
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Simulate(args) => cmd::simulate::run(args),
        Commands::Export(args) => cmd::export::run(args),
    }
}
