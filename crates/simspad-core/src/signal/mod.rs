// crates/simspad-core/src/signal/mod.rs

pub mod interleave;

use crate::error::Result;

/// One or two sample channels, each one value per `dt`.
///
/// `Single` is used both for optical stimuli of single-channel devices and
/// for every oracle response. `Dual` carries the two wavelength channels of
/// a dual-channel stimulus; both must have the same length to be encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum Channels {
    Single(Vec<f64>),
    Dual(Vec<f64>, Vec<f64>),
}

impl Channels {
    pub fn count(&self) -> usize {
        match self {
            Channels::Single(_) => 1,
            Channels::Dual(_, _) => 2,
        }
    }

    /// Samples per channel (the first channel's length for `Dual`).
    pub fn len(&self) -> usize {
        match self {
            Channels::Single(s) => s.len(),
            Channels::Dual(a, _) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat sample sequence as it appears after the header fields.
    pub fn flatten(&self) -> Result<Vec<f64>> {
        match self {
            Channels::Single(s) => Ok(s.clone()),
            Channels::Dual(a, b) => interleave::interleave(a, b),
        }
    }

    /// Scale every sample by `k` (e.g. the caller's detector area ratio).
    pub fn scaled(&self, k: f64) -> Channels {
        let scale = |v: &[f64]| v.iter().map(|x| x * k).collect::<Vec<_>>();
        match self {
            Channels::Single(s) => Channels::Single(scale(s)),
            Channels::Dual(a, b) => Channels::Dual(scale(a), scale(b)),
        }
    }
}

/// Sample instants `0, dt, 2dt, ...` for a series of `len` values.
pub fn time_axis(dt: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 * dt).collect()
}
