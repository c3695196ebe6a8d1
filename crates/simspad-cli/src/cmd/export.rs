// crates/simspad-cli/src/cmd/export.rs

use clap::Args;
use tracing::info;

use crate::io::csv_signal::write_signal;
use crate::io::recording::{load, ReadFormat};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input file (raw or framed)
    #[arg(long)]
    pub r#in: String,

    /// Output CSV path
    #[arg(long)]
    pub out: String,

    #[arg(long, value_enum, default_value_t = ReadFormat::Auto)]
    pub format: ReadFormat,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let f = load(&args.r#in, args.format)?;
    write_signal(&args.out, f.model.dt(), &f.channels)?;

    info!(
        "export ok: in={} out={} samples={} channels={} dt={:e}",
        args.r#in,
        args.out,
        f.channels.len(),
        f.channels.count(),
        f.model.dt()
    );
    Ok(())
}
