// crates/simspad-cli/src/io/device_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use simspad_core::device::defaults;
use simspad_core::{DualChannelParams, SingleChannelParams, SipmModel};

/// YAML device description.
///
/// ```yaml
/// name: J30020
/// dt: 1.0e-11
/// num_microcell: 14410
/// v_bias: 27.5
/// v_br: 24.5
/// tau_recovery: 3.08e-8
/// pde:
///   single: 0.46        # or `dual: [0.46, 0.124]`
/// v_chr: 2.04
/// c_cell: 4.6e-14
/// tau_fwhm: 1.5e-9
/// digital_threshold: 0.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceFile {
    #[serde(default)]
    pub name: Option<String>,
    pub dt: f64,
    pub num_microcell: u32,
    pub v_bias: f64,
    pub v_br: f64,
    pub tau_recovery: f64,
    pub pde: PdeSpec,
    pub v_chr: f64,
    pub c_cell: f64,
    pub tau_fwhm: f64,
    #[serde(default)]
    pub digital_threshold: f64,
}

/// Peak PDE, tagged by channel layout so the model variant is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdeSpec {
    Single(f64),
    Dual([f64; 2]),
}

impl DeviceFile {
    pub fn to_model(&self) -> SipmModel {
        match self.pde {
            PdeSpec::Single(pde) => SingleChannelParams::new(
                self.dt,
                self.num_microcell as f64,
                self.v_bias,
                self.v_br,
                self.tau_recovery,
                pde,
                self.v_chr,
                self.c_cell,
                self.tau_fwhm,
                self.digital_threshold,
            )
            .into(),
            PdeSpec::Dual([pde1, pde2]) => DualChannelParams::new(
                self.dt,
                self.num_microcell as f64,
                self.v_bias,
                self.v_br,
                self.tau_recovery,
                pde1,
                pde2,
                self.v_chr,
                self.c_cell,
                self.tau_fwhm,
                self.digital_threshold,
            )
            .into(),
        }
    }

    pub fn from_model(name: Option<String>, m: &SipmModel) -> Self {
        match m {
            SipmModel::SingleChannel(p) => Self {
                name,
                dt: p.dt(),
                num_microcell: p.num_microcell().round() as u32,
                v_bias: p.v_bias(),
                v_br: p.v_br(),
                tau_recovery: p.tau_recovery(),
                pde: PdeSpec::Single(p.pde_max()),
                v_chr: p.v_chr(),
                c_cell: p.c_cell(),
                tau_fwhm: p.tau_fwhm(),
                digital_threshold: p.digital_threshold(),
            },
            SipmModel::DualChannel(p) => Self {
                name,
                dt: p.dt(),
                num_microcell: p.num_microcell().round() as u32,
                v_bias: p.v_bias(),
                v_br: p.v_br(),
                tau_recovery: p.tau_recovery(),
                pde: PdeSpec::Dual([p.pde_max1(), p.pde_max2()]),
                v_chr: p.v_chr(),
                c_cell: p.c_cell(),
                tau_fwhm: p.tau_fwhm(),
                digital_threshold: p.digital_threshold(),
            },
        }
    }
}

pub fn load_device_file(path: &str) -> Result<DeviceFile> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read device file {path}"))?;
    let dev: DeviceFile =
        serde_yaml::from_str(&text).with_context(|| format!("parse device file {path}"))?;
    Ok(dev)
}

/// Resolve `--device`: a preset name first, otherwise a YAML file path.
/// Returns a display name alongside the model.
pub fn resolve_device(device: &str) -> Result<(String, SipmModel)> {
    if let Some(model) = defaults::preset(device) {
        return Ok((device.to_ascii_lowercase(), model));
    }
    if !Path::new(device).exists() {
        anyhow::bail!("unknown device {device:?}: not a preset and no such file");
    }
    let dev = load_device_file(device)?;
    let name = dev.name.clone().unwrap_or_else(|| device.to_string());
    Ok((name, dev.to_model()))
}

pub fn to_yaml(dev: &DeviceFile) -> Result<String> {
    serde_yaml::to_string(dev).context("serialize device file")
}
