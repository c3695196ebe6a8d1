// crates/simspad-cli/src/cmd/presets.rs

use clap::Args;
use simspad_core::device::defaults::{preset, presets};
use simspad_core::device::id::device_id_hex;

use crate::io::device_file::{to_yaml, DeviceFile};

#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print this preset as a YAML device file instead of listing
    #[arg(long)]
    pub show: Option<String>,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    if let Some(name) = args.show.as_deref() {
        let model = preset(name).ok_or_else(|| anyhow::anyhow!("unknown preset {name:?}"))?;
        let dev = DeviceFile::from_model(Some(name.to_string()), &model);
        print!("{}", to_yaml(&dev)?);
        return Ok(());
    }

    for p in presets() {
        println!(
            "{:<14} {:<15} id={}  {}",
            p.name,
            p.model.kind().label(),
            device_id_hex(&p.model),
            p.description
        );
    }
    Ok(())
}
