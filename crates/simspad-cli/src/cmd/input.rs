// crates/simspad-cli/src/cmd/input.rs

use clap::Args;
use simspad_core::device::id::device_id_hex;
use simspad_core::validate::validate_model;
use simspad_core::{Channels, SipmModel};
use tracing::{info, warn};

use crate::io::{csv_signal, device_file};

/// Device + stimulus selection shared by `encode` and `simulate`.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Device preset name (see `presets`) or path to a YAML device file
    #[arg(long)]
    pub device: String,

    /// Stimulus CSV: `time, photons` or `time, ch1, ch2`, with a header row
    #[arg(long)]
    pub stimulus: String,

    /// Override the device time step (seconds)
    #[arg(long)]
    pub dt: Option<f64>,

    /// Use the mean spacing of the stimulus time column as the time step
    #[arg(long, conflicts_with = "dt")]
    pub dt_from_csv: bool,

    /// Divide every stimulus sample by this ratio (e.g. detector area ratio)
    #[arg(long, default_value_t = 1.0)]
    pub area_ratio: f64,

    /// Fail instead of warning when device parameters look implausible
    #[arg(long)]
    pub strict: bool,
}

pub struct Prepared {
    pub device_name: String,
    pub model: SipmModel,
    pub stimulus: Channels,
}

pub fn prepare(args: &InputArgs) -> anyhow::Result<Prepared> {
    let (device_name, mut model) = device_file::resolve_device(&args.device)?;
    let csv = csv_signal::read_stimulus(&args.stimulus)?;

    if let Some(dt) = args.dt {
        model = model.with_dt(dt);
    } else if args.dt_from_csv {
        let dt = csv
            .dt()
            .ok_or_else(|| anyhow::anyhow!("{}: need at least two rows to derive dt", args.stimulus))?;
        model = model.with_dt(dt);
    }

    if let Err(e) = validate_model(&model) {
        if args.strict {
            return Err(e.into());
        }
        warn!(device = %device_name, "{e}");
    }

    if csv.channels.is_empty() {
        anyhow::bail!("{}: stimulus has no samples", args.stimulus);
    }
    if csv.channels.count() != model.channel_count() {
        anyhow::bail!(
            "device {} has {} channel(s) but {} has {}",
            device_name,
            model.channel_count(),
            args.stimulus,
            csv.channels.count()
        );
    }

    if args.area_ratio <= 0.0 || !args.area_ratio.is_finite() {
        anyhow::bail!("--area-ratio must be a positive number, got {}", args.area_ratio);
    }
    let stimulus = if args.area_ratio == 1.0 {
        csv.channels
    } else {
        csv.channels.scaled(1.0 / args.area_ratio)
    };

    info!(
        device = %device_name,
        device_id = %device_id_hex(&model),
        kind = model.kind().label(),
        dt = model.dt(),
        samples = stimulus.len(),
        "input ready"
    );

    Ok(Prepared {
        device_name,
        model,
        stimulus,
    })
}
