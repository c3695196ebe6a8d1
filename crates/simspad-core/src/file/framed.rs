// crates/simspad-core/src/file/framed.rs

use std::path::Path;

use tracing::debug;

use crate::device::model::{ModelKind, SipmModel};
use crate::error::{Result, SimspadError};
use crate::file::write_atomic;
use crate::signal::interleave::deinterleave;
use crate::signal::Channels;
use crate::wire::values::VALUE_BYTES;

const MAGIC: &[u8; 4] = b"SPD1";
const VERSION: u16 = 1;

/// magic + version + kind + role + channels + reserved + field_count + sample_count
const HEADER_BYTES: usize = 4 + 2 + 1 + 1 + 1 + 1 + 2 + 8;
const CRC_BYTES: usize = 4;

/// What a stored signal represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalRole {
    /// Optical input handed to the oracle.
    Stimulus,
    /// Oracle output.
    Response,
}

/// A device configuration together with one stored signal.
#[derive(Clone, Debug, PartialEq)]
pub struct Recording {
    pub model: SipmModel,
    pub role: SignalRole,
    pub channels: Channels,
}

impl Recording {
    pub fn new(model: SipmModel, role: SignalRole, channels: Channels) -> Self {
        Self { model, role, channels }
    }
}

pub fn has_magic(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && &bytes[0..4] == MAGIC
}

/// Framed layout (little-endian):
/// MAGIC[4]            "SPD1"
/// version:u16
/// kind:u8             0=single-channel model, 1=dual-channel model
/// role:u8             0=stimulus, 1=response
/// channels:u8         1 or 2
/// reserved:u8
/// field_count:u16     must agree with kind (10 or 11)
/// sample_count:u64    number of f64 sample values after the fields
/// fields:f64[field_count]
/// samples:f64[sample_count]   (interleaved when channels == 2)
/// crc32:u32           (over everything before crc32)
pub fn encode_framed(rec: &Recording) -> Result<Vec<u8>> {
    let fields = rec.model.values();
    let samples = rec.channels.flatten()?;

    let mut b = Vec::with_capacity(HEADER_BYTES + (fields.len() + samples.len()) * VALUE_BYTES + CRC_BYTES);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.push(kind_tag(rec.model.kind()));
    b.push(role_tag(rec.role));
    b.push(rec.channels.count() as u8);
    b.push(0);
    b.extend_from_slice(&(fields.len() as u16).to_le_bytes());
    b.extend_from_slice(&(samples.len() as u64).to_le_bytes());

    for v in fields.iter().chain(samples.iter()) {
        b.extend_from_slice(&v.to_le_bytes());
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    Ok(b)
}

pub fn decode_framed(bytes: &[u8]) -> Result<Recording> {
    if !has_magic(bytes) {
        return Err(SimspadError::Format("bad magic".into()));
    }
    if bytes.len() < HEADER_BYTES + CRC_BYTES {
        return Err(SimspadError::TruncatedFile(format!(
            "{} bytes, framed header needs {}",
            bytes.len(),
            HEADER_BYTES + CRC_BYTES
        )));
    }

    let crc_off = bytes.len() - CRC_BYTES;
    let crc_expected = u32::from_le_bytes([
        bytes[crc_off],
        bytes[crc_off + 1],
        bytes[crc_off + 2],
        bytes[crc_off + 3],
    ]);
    if crc_expected != crc32(&bytes[..crc_off]) {
        return Err(SimspadError::Format("crc32 mismatch".into()));
    }

    let mut i = 4usize;
    let version = read_u16(bytes, &mut i)?;
    if version != VERSION {
        return Err(SimspadError::Format(format!("unsupported version {version}")));
    }
    let kind = unpack_kind(read_u8(bytes, &mut i)?)?;
    let role = unpack_role(read_u8(bytes, &mut i)?)?;
    let channel_count = read_u8(bytes, &mut i)?;
    let _reserved = read_u8(bytes, &mut i)?;
    let field_count = read_u16(bytes, &mut i)? as usize;
    let sample_count = read_u64(bytes, &mut i)?;

    if channel_count != 1 && channel_count != 2 {
        return Err(SimspadError::Format(format!("bad channel count {channel_count}")));
    }
    if field_count != kind.field_count() {
        return Err(SimspadError::Format(format!(
            "{} model stored with {} fields",
            kind.label(),
            field_count
        )));
    }

    let payload = crc_off - i;
    let expected = (field_count as u64)
        .checked_add(sample_count)
        .and_then(|n| n.checked_mul(VALUE_BYTES as u64));
    if expected != Some(payload as u64) {
        return Err(SimspadError::Format(format!(
            "payload is {payload} bytes, header declares {field_count} fields + {sample_count} samples"
        )));
    }

    let mut fields = Vec::with_capacity(field_count);
    for _ in 0..field_count {
        fields.push(read_f64(bytes, &mut i)?);
    }
    let mut samples = Vec::with_capacity(sample_count as usize);
    for _ in 0..sample_count {
        samples.push(read_f64(bytes, &mut i)?);
    }

    let model = SipmModel::from_values(kind, &fields)?;
    let channels = if channel_count == 2 {
        let (a, b) = deinterleave(&samples)?;
        Channels::Dual(a, b)
    } else {
        Channels::Single(samples)
    };

    Ok(Recording { model, role, channels })
}

pub fn write_framed(path: impl AsRef<Path>, rec: &Recording) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_framed(rec)?;
    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), role = ?rec.role, "wrote framed file");
    Ok(())
}

pub fn read_framed(path: impl AsRef<Path>) -> Result<Recording> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_framed(&bytes)
}

fn kind_tag(k: ModelKind) -> u8 {
    match k {
        ModelKind::SingleChannel => 0,
        ModelKind::DualChannel => 1,
    }
}

fn unpack_kind(tag: u8) -> Result<ModelKind> {
    match tag {
        0 => Ok(ModelKind::SingleChannel),
        1 => Ok(ModelKind::DualChannel),
        _ => Err(SimspadError::Format(format!("unknown model kind {tag}"))),
    }
}

fn role_tag(r: SignalRole) -> u8 {
    match r {
        SignalRole::Stimulus => 0,
        SignalRole::Response => 1,
    }
}

fn unpack_role(tag: u8) -> Result<SignalRole> {
    match tag {
        0 => Ok(SignalRole::Stimulus),
        1 => Ok(SignalRole::Response),
        _ => Err(SimspadError::Format(format!("unknown signal role {tag}"))),
    }
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(SimspadError::TruncatedFile("unexpected eof".into()));
    }
    Ok(())
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut a = [0u8; N];
    a.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(a)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    Ok(take::<1>(bytes, i)?[0])
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    take::<2>(bytes, i).map(u16::from_le_bytes)
}

fn read_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    take::<8>(bytes, i).map(u64::from_le_bytes)
}

fn read_f64(bytes: &[u8], i: &mut usize) -> Result<f64> {
    take::<8>(bytes, i).map(f64::from_le_bytes)
}
