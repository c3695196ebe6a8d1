// crates/simspad-cli/src/cmd/encode.rs

use clap::Args;
use simspad_core::device::id::device_id_hex;
use simspad_core::file::framed::{Recording, SignalRole};
use tracing::info;

use crate::cmd::input::{prepare, InputArgs};
use crate::io::recording::{store, WriteFormat};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file path
    #[arg(long)]
    pub out: String,

    /// Output layout. `raw` is what the simulator binary loads.
    #[arg(long, value_enum, default_value_t = WriteFormat::Raw)]
    pub format: WriteFormat,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let p = prepare(&args.input)?;
    let rec = Recording::new(p.model, SignalRole::Stimulus, p.stimulus);
    store(&args.out, args.format, &rec)?;

    info!(
        "encode ok: device={} samples={} channels={} format={:?} out={} device_id={}",
        p.device_name,
        rec.channels.len(),
        rec.channels.count(),
        args.format,
        args.out,
        device_id_hex(&rec.model)
    );
    Ok(())
}
