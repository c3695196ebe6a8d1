// crates/simspad-cli/src/cmd/inspect.rs

use clap::Args;
use simspad_core::device::id::device_id_hex;
use simspad_core::file::framed::SignalRole;
use simspad_core::summary::{format_eng, RunSummary};
use simspad_core::validate::validate_model;
use simspad_core::Channels;

use crate::io::recording::{load, ReadFormat};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input file (raw or framed)
    #[arg(long)]
    pub r#in: String,

    #[arg(long, value_enum, default_value_t = ReadFormat::Auto)]
    pub format: ReadFormat,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let f = load(&args.r#in, args.format)?;
    let m = &f.model;

    println!("file         = {}", args.r#in);
    println!("format       = {:?}", f.format);
    println!("kind         = {}", m.kind().label());
    match f.role {
        Some(role) => println!("role         = {role:?}"),
        None => println!("role         = unknown"),
    }
    println!("device_id    = {}", device_id_hex(m));

    for (name, v) in m.field_names().iter().zip(m.values()) {
        println!("{name:<18} = {v:e}");
    }

    println!("channels     = {}", f.channels.count());
    println!("samples      = {}", f.channels.len());
    if let Channels::Dual(a, b) = &f.channels {
        println!("peak         = ch1 {:e} / ch2 {:e}", peak(a), peak(b));
    }

    // Charge and bias current only mean something for oracle output.
    if let (Channels::Single(signal), Some(SignalRole::Response) | None) = (&f.channels, f.role) {
        let s = RunSummary::new(m.dt(), signal);
        println!("--- summary ---");
        println!("time_steps     = {}", s.time_steps);
        println!("dt             = {}", format_eng(s.dt, "s"));
        println!("simulated_time = {}", format_eng(s.simulated_time, "s"));
        println!("total_charge   = {}", format_eng(s.total_charge, "C"));
        println!("bias_current   = {}", format_eng(s.bias_current, "A"));
    }

    println!("--- diagnostics ---");
    match validate_model(m) {
        Ok(()) => println!("ok"),
        Err(e) => println!("WARN: {e}"),
    }
    Ok(())
}

fn peak(v: &[f64]) -> f64 {
    v.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
