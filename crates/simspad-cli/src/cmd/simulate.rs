// crates/simspad-cli/src/cmd/simulate.rs

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, ValueEnum};
use simspad_core::file::framed::{Recording, SignalRole};
use simspad_core::summary::{format_eng, RunSummary};
use simspad_core::{simulate, Channels, Framing, SipmModel};
use tracing::info;

use crate::cmd::input::{prepare, InputArgs};
use crate::io::csv_signal::write_signal;
use crate::io::http::HttpTransport;
use crate::io::recording::{store, WriteFormat};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FramingArg {
    /// 10 header values + 1 trailer, what the deployed oracle sends.
    Legacy,
    /// Header sized to the model sent (11 values for dual-channel devices).
    Model,
}

fn framing_for(f: FramingArg, model: &SipmModel) -> Framing {
    match f {
        FramingArg::Legacy => Framing::LEGACY,
        FramingArg::Model => Framing::for_model(model),
    }
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Oracle endpoint
    #[arg(long, default_value = "http://localhost:33232/simspad")]
    pub url: String,

    /// Response file path
    #[arg(long)]
    pub out: String,

    #[arg(long, value_enum, default_value_t = WriteFormat::Framed)]
    pub format: WriteFormat,

    /// Also write the response as `time, qOut` CSV
    #[arg(long)]
    pub csv: Option<String>,

    #[arg(long, value_enum, default_value_t = FramingArg::Legacy)]
    pub framing: FramingArg,

    /// Connect/read/write timeout for the oracle request
    #[arg(long, default_value_t = 30_000)]
    pub timeout_ms: u64,
}

pub fn run(args: SimulateArgs) -> anyhow::Result<()> {
    let p = prepare(&args.input)?;
    let framing = framing_for(args.framing, &p.model);
    let transport = HttpTransport::new(Duration::from_millis(args.timeout_ms));

    let start = Instant::now();
    let response = simulate(&transport, &args.url, &p.model, &p.stimulus, framing)
        .with_context(|| format!("simulate via {}", args.url))?;
    let elapsed = start.elapsed();
    let s = RunSummary::new(p.model.dt(), &response);

    let rec = Recording::new(p.model, SignalRole::Response, Channels::Single(response));
    store(&args.out, args.format, &rec)?;

    if let Some(csv) = args.csv.as_deref() {
        write_signal(csv, rec.model.dt(), &rec.channels)?;
    }

    info!(
        "simulate ok: device={} samples={} elapsed={} simulated={} ibias={} out={}",
        p.device_name,
        s.time_steps,
        format_eng(elapsed.as_secs_f64(), "s"),
        format_eng(s.simulated_time, "s"),
        format_eng(s.bias_current, "A"),
        args.out
    );
    Ok(())
}
