// crates/simspad-core/src/wire/values.rs

pub const VALUE_BYTES: usize = 8;

/// Pack values as consecutive little-endian IEEE-754 doubles.
pub fn values_to_bytes(values: &[f64]) -> Vec<u8> {
    let mut b = Vec::with_capacity(values.len() * VALUE_BYTES);
    for v in values {
        b.extend_from_slice(&v.to_le_bytes());
    }
    b
}

/// Reinterpret a byte buffer as little-endian doubles.
/// Fails (with a reason) when the length is not a whole number of values.
pub fn bytes_to_values(bytes: &[u8]) -> Result<Vec<f64>, String> {
    if bytes.len() % VALUE_BYTES != 0 {
        return Err(format!(
            "length {} is not a multiple of {}",
            bytes.len(),
            VALUE_BYTES
        ));
    }
    Ok(bytes
        .chunks_exact(VALUE_BYTES)
        .map(|c| {
            let mut a = [0u8; VALUE_BYTES];
            a.copy_from_slice(c);
            f64::from_le_bytes(a)
        })
        .collect())
}
