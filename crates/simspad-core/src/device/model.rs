// crates/simspad-core/src/device/model.rs

use crate::error::{Result, SimspadError};

pub const SINGLE_FIELD_COUNT: usize = 10;
pub const DUAL_FIELD_COUNT: usize = 11;

/// Which parameter layout a value tuple should be read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    SingleChannel,
    DualChannel,
}

impl ModelKind {
    pub fn field_count(self) -> usize {
        match self {
            ModelKind::SingleChannel => SINGLE_FIELD_COUNT,
            ModelKind::DualChannel => DUAL_FIELD_COUNT,
        }
    }

    pub fn channel_count(self) -> usize {
        match self {
            ModelKind::SingleChannel => 1,
            ModelKind::DualChannel => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::SingleChannel => "single-channel",
            ModelKind::DualChannel => "dual-channel",
        }
    }
}

/// SiPM parameters with one photon detection efficiency.
///
/// Wire/disk order (10 values):
/// dt, num_microcell, v_bias, v_br, tau_recovery, pde_max, v_chr, c_cell, tau_fwhm, digital_threshold
///
/// Every field is kept as the exact `f64` that travels on the wire, so a
/// decoded model re-encodes bit-for-bit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleChannelParams {
    dt: f64,
    num_microcell: f64,
    v_bias: f64,
    v_br: f64,
    tau_recovery: f64,
    pde_max: f64,
    v_chr: f64,
    c_cell: f64,
    tau_fwhm: f64,
    digital_threshold: f64,
}

impl SingleChannelParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dt: f64,
        num_microcell: f64,
        v_bias: f64,
        v_br: f64,
        tau_recovery: f64,
        pde_max: f64,
        v_chr: f64,
        c_cell: f64,
        tau_fwhm: f64,
        digital_threshold: f64,
    ) -> Self {
        Self {
            dt,
            num_microcell,
            v_bias,
            v_br,
            tau_recovery,
            pde_max,
            v_chr,
            c_cell,
            tau_fwhm,
            digital_threshold,
        }
    }

    /// Rebuild from a decoded value tuple. Exactly 10 values.
    pub fn from_values(v: &[f64]) -> Result<Self> {
        if v.len() != SINGLE_FIELD_COUNT {
            return Err(SimspadError::FieldCount {
                kind: ModelKind::SingleChannel.label(),
                expected: SINGLE_FIELD_COUNT,
                got: v.len(),
            });
        }
        Ok(Self::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9]))
    }

    pub fn values(&self) -> [f64; SINGLE_FIELD_COUNT] {
        [
            self.dt,
            self.num_microcell,
            self.v_bias,
            self.v_br,
            self.tau_recovery,
            self.pde_max,
            self.v_chr,
            self.c_cell,
            self.tau_fwhm,
            self.digital_threshold,
        ]
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }
    pub fn num_microcell(&self) -> f64 {
        self.num_microcell
    }
    pub fn v_bias(&self) -> f64 {
        self.v_bias
    }
    pub fn v_br(&self) -> f64 {
        self.v_br
    }
    pub fn tau_recovery(&self) -> f64 {
        self.tau_recovery
    }
    pub fn pde_max(&self) -> f64 {
        self.pde_max
    }
    pub fn v_chr(&self) -> f64 {
        self.v_chr
    }
    pub fn c_cell(&self) -> f64 {
        self.c_cell
    }
    pub fn tau_fwhm(&self) -> f64 {
        self.tau_fwhm
    }
    pub fn digital_threshold(&self) -> f64 {
        self.digital_threshold
    }
}

/// SiPM parameters with one PDE per wavelength channel.
///
/// Wire/disk order (11 values):
/// dt, num_microcell, v_bias, v_br, tau_recovery, pde_max1, pde_max2, v_chr, c_cell, tau_fwhm, digital_threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualChannelParams {
    dt: f64,
    num_microcell: f64,
    v_bias: f64,
    v_br: f64,
    tau_recovery: f64,
    pde_max1: f64,
    pde_max2: f64,
    v_chr: f64,
    c_cell: f64,
    tau_fwhm: f64,
    digital_threshold: f64,
}

impl DualChannelParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dt: f64,
        num_microcell: f64,
        v_bias: f64,
        v_br: f64,
        tau_recovery: f64,
        pde_max1: f64,
        pde_max2: f64,
        v_chr: f64,
        c_cell: f64,
        tau_fwhm: f64,
        digital_threshold: f64,
    ) -> Self {
        Self {
            dt,
            num_microcell,
            v_bias,
            v_br,
            tau_recovery,
            pde_max1,
            pde_max2,
            v_chr,
            c_cell,
            tau_fwhm,
            digital_threshold,
        }
    }

    /// Rebuild from a decoded value tuple. Exactly 11 values.
    pub fn from_values(v: &[f64]) -> Result<Self> {
        if v.len() != DUAL_FIELD_COUNT {
            return Err(SimspadError::FieldCount {
                kind: ModelKind::DualChannel.label(),
                expected: DUAL_FIELD_COUNT,
                got: v.len(),
            });
        }
        Ok(Self::new(
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9], v[10],
        ))
    }

    pub fn values(&self) -> [f64; DUAL_FIELD_COUNT] {
        [
            self.dt,
            self.num_microcell,
            self.v_bias,
            self.v_br,
            self.tau_recovery,
            self.pde_max1,
            self.pde_max2,
            self.v_chr,
            self.c_cell,
            self.tau_fwhm,
            self.digital_threshold,
        ]
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }
    pub fn num_microcell(&self) -> f64 {
        self.num_microcell
    }
    pub fn v_bias(&self) -> f64 {
        self.v_bias
    }
    pub fn v_br(&self) -> f64 {
        self.v_br
    }
    pub fn tau_recovery(&self) -> f64 {
        self.tau_recovery
    }
    pub fn pde_max1(&self) -> f64 {
        self.pde_max1
    }
    pub fn pde_max2(&self) -> f64 {
        self.pde_max2
    }
    pub fn v_chr(&self) -> f64 {
        self.v_chr
    }
    pub fn c_cell(&self) -> f64 {
        self.c_cell
    }
    pub fn tau_fwhm(&self) -> f64 {
        self.tau_fwhm
    }
    pub fn digital_threshold(&self) -> f64 {
        self.digital_threshold
    }
}

/// A device configuration, tagged by channel layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SipmModel {
    SingleChannel(SingleChannelParams),
    DualChannel(DualChannelParams),
}

impl SipmModel {
    /// Rebuild a model of an explicitly chosen kind from its value tuple.
    pub fn from_values(kind: ModelKind, v: &[f64]) -> Result<Self> {
        match kind {
            ModelKind::SingleChannel => SingleChannelParams::from_values(v).map(Self::SingleChannel),
            ModelKind::DualChannel => DualChannelParams::from_values(v).map(Self::DualChannel),
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            SipmModel::SingleChannel(_) => ModelKind::SingleChannel,
            SipmModel::DualChannel(_) => ModelKind::DualChannel,
        }
    }

    pub fn field_count(&self) -> usize {
        self.kind().field_count()
    }

    pub fn channel_count(&self) -> usize {
        self.kind().channel_count()
    }

    /// Field values in wire order (10 or 11 entries).
    pub fn values(&self) -> Vec<f64> {
        match self {
            SipmModel::SingleChannel(p) => p.values().to_vec(),
            SipmModel::DualChannel(p) => p.values().to_vec(),
        }
    }

    pub fn dt(&self) -> f64 {
        match self {
            SipmModel::SingleChannel(p) => p.dt(),
            SipmModel::DualChannel(p) => p.dt(),
        }
    }

    pub fn num_microcell(&self) -> f64 {
        match self {
            SipmModel::SingleChannel(p) => p.num_microcell(),
            SipmModel::DualChannel(p) => p.num_microcell(),
        }
    }

    pub fn v_bias(&self) -> f64 {
        match self {
            SipmModel::SingleChannel(p) => p.v_bias(),
            SipmModel::DualChannel(p) => p.v_bias(),
        }
    }

    pub fn v_br(&self) -> f64 {
        match self {
            SipmModel::SingleChannel(p) => p.v_br(),
            SipmModel::DualChannel(p) => p.v_br(),
        }
    }

    /// Peak PDE per channel: one entry for single-channel, two for dual.
    pub fn pde_max(&self) -> Vec<f64> {
        match self {
            SipmModel::SingleChannel(p) => vec![p.pde_max()],
            SipmModel::DualChannel(p) => vec![p.pde_max1(), p.pde_max2()],
        }
    }

    /// Field names in wire order, for reports.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            SipmModel::SingleChannel(_) => &SINGLE_FIELD_NAMES,
            SipmModel::DualChannel(_) => &DUAL_FIELD_NAMES,
        }
    }

    /// Return a copy with a different time step; all other fields unchanged.
    pub fn with_dt(&self, dt: f64) -> Self {
        let mut v = self.values();
        v[0] = dt;
        match self {
            SipmModel::SingleChannel(_) => {
                Self::SingleChannel(SingleChannelParams::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9]))
            }
            SipmModel::DualChannel(_) => Self::DualChannel(DualChannelParams::new(
                v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9], v[10],
            )),
        }
    }
}

impl From<SingleChannelParams> for SipmModel {
    fn from(p: SingleChannelParams) -> Self {
        SipmModel::SingleChannel(p)
    }
}

impl From<DualChannelParams> for SipmModel {
    fn from(p: DualChannelParams) -> Self {
        SipmModel::DualChannel(p)
    }
}

const SINGLE_FIELD_NAMES: [&str; SINGLE_FIELD_COUNT] = [
    "dt",
    "num_microcell",
    "v_bias",
    "v_br",
    "tau_recovery",
    "pde_max",
    "v_chr",
    "c_cell",
    "tau_fwhm",
    "digital_threshold",
];

const DUAL_FIELD_NAMES: [&str; DUAL_FIELD_COUNT] = [
    "dt",
    "num_microcell",
    "v_bias",
    "v_br",
    "tau_recovery",
    "pde_max1",
    "pde_max2",
    "v_chr",
    "c_cell",
    "tau_fwhm",
    "digital_threshold",
];
