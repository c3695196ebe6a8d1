// crates/simspad-core/src/file/mod.rs

pub mod framed;
pub mod raw;

use std::path::Path;

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    /// Headerless value dump, readable by the original simulator.
    Raw,
    /// `SPD1` container with kind/role/channel tags and a crc32.
    Framed,
}

/// Guess the format from the leading bytes.
pub fn sniff(bytes: &[u8]) -> FileFormat {
    if framed::has_magic(bytes) {
        FileFormat::Framed
    } else {
        FileFormat::Raw
    }
}

/// Write `bytes` to a sibling temp file, then rename it over `path`,
/// so a failed write leaves neither a half-written target nor the temp file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".partial");
    let tmp = std::path::PathBuf::from(tmp);
    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
