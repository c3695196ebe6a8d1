// crates/simspad-core/src/file/raw.rs

use std::path::Path;

use tracing::debug;

use crate::device::model::{SingleChannelParams, SipmModel, SINGLE_FIELD_COUNT};
use crate::error::{Result, SimspadError};
use crate::file::write_atomic;
use crate::signal::Channels;
use crate::wire::encode_values;
use crate::wire::values::{bytes_to_values, values_to_bytes};

/// Raw layout (little-endian f64, no magic, no length prefix):
/// fields[10 | 11]
/// samples[..]      (interleaved when two channels are written)
///
/// Byte-for-byte the request body, which is what the simulator loads from disk.
/// [`decode_raw`] treats the last value as the simulator's terminator, so a
/// raw write read back loses its final sample; use the framed format when
/// the signal must survive intact.
pub fn encode_raw(model: &SipmModel, channels: &Channels) -> Result<Vec<u8>> {
    let values = encode_values(model, channels)?;
    Ok(values_to_bytes(&values))
}

/// Read a raw dump back as `(signal, model)`.
///
/// The first 10 values are always taken as a single-channel model and the
/// final value is discarded, matching what the simulator writes. A file
/// written from a dual-channel model is therefore read with its 11th field
/// shifted into the signal; use the framed format to persist those.
pub fn decode_raw(bytes: &[u8]) -> Result<(Vec<f64>, SingleChannelParams)> {
    let values = bytes_to_values(bytes).map_err(SimspadError::TruncatedFile)?;
    if values.len() < SINGLE_FIELD_COUNT + 1 {
        return Err(SimspadError::TruncatedFile(format!(
            "{} values, need at least {}",
            values.len(),
            SINGLE_FIELD_COUNT + 1
        )));
    }
    let model = SingleChannelParams::from_values(&values[..SINGLE_FIELD_COUNT])?;
    let signal = values[SINGLE_FIELD_COUNT..values.len() - 1].to_vec();
    Ok((signal, model))
}

pub fn write_raw(path: impl AsRef<Path>, model: &SipmModel, channels: &Channels) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_raw(model, channels)?;
    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote raw file");
    Ok(())
}

pub fn read_raw(path: impl AsRef<Path>) -> Result<(Vec<f64>, SingleChannelParams)> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_raw(&bytes)
}
