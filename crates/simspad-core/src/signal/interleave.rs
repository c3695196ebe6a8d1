// crates/simspad-core/src/signal/interleave.rs

use crate::error::{Result, SimspadError};

/// Merge two equal-length channels: `out[2i] = a[i]`, `out[2i+1] = b[i]`.
///
/// Values are copied untouched; any amplitude normalisation belongs to the caller.
pub fn interleave(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(SimspadError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let mut out = Vec::with_capacity(a.len() * 2);
    for (&x, &y) in a.iter().zip(b.iter()) {
        out.push(x);
        out.push(y);
    }
    Ok(out)
}

/// Inverse of [`interleave`]. An odd-length input cannot be split evenly.
pub fn deinterleave(v: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if v.len() % 2 != 0 {
        return Err(SimspadError::LengthMismatch {
            left: v.len() / 2 + 1,
            right: v.len() / 2,
        });
    }
    let a = v.iter().step_by(2).copied().collect();
    let b = v.iter().skip(1).step_by(2).copied().collect();
    Ok((a, b))
}
