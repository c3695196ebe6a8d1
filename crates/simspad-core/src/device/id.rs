// crates/simspad-core/src/device/id.rs

use crate::device::model::SipmModel;
use crate::wire::values::values_to_bytes;

/// Stable 16-byte identifier of a device configuration:
/// blake3 over the model's encoded field values, truncated to 16 bytes.
/// Single- and dual-channel models never collide because their encodings
/// differ in length.
pub fn device_id_16(model: &SipmModel) -> [u8; 16] {
    let bytes = values_to_bytes(&model.values());
    let hash = blake3::hash(&bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn device_id_hex(model: &SipmModel) -> String {
    hex16(&device_id_16(model))
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
