// crates/simspad-cli/src/io/recording.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use simspad_core::file::framed::{self, Recording, SignalRole};
use simspad_core::file::{raw, sniff, FileFormat};
use simspad_core::{Channels, SipmModel};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReadFormat {
    /// Framed if the file starts with the SPD1 magic, raw otherwise.
    Auto,
    Raw,
    Framed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WriteFormat {
    /// Headerless f64 dump the simulator reads directly (single-channel header on read).
    Raw,
    /// SPD1 container: tagged model kind, signal role, channel count, crc32.
    Framed,
}

/// A stored file, whichever format it came from.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub format: FileFormat,
    pub model: SipmModel,
    /// Raw files do not record what their signal is.
    pub role: Option<SignalRole>,
    pub channels: Channels,
}

pub fn load(path: &str, format: ReadFormat) -> Result<Loaded> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    let format = match format {
        ReadFormat::Auto => sniff(&bytes),
        ReadFormat::Raw => FileFormat::Raw,
        ReadFormat::Framed => FileFormat::Framed,
    };

    match format {
        FileFormat::Raw => {
            let (signal, model) = raw::decode_raw(&bytes).with_context(|| format!("decode raw {path}"))?;
            Ok(Loaded {
                format,
                model: model.into(),
                role: None,
                channels: Channels::Single(signal),
            })
        }
        FileFormat::Framed => {
            let rec = framed::decode_framed(&bytes).with_context(|| format!("decode framed {path}"))?;
            Ok(Loaded {
                format,
                model: rec.model,
                role: Some(rec.role),
                channels: rec.channels,
            })
        }
    }
}

pub fn store(path: &str, format: WriteFormat, rec: &Recording) -> Result<()> {
    match format {
        WriteFormat::Raw => raw::write_raw(path, &rec.model, &rec.channels),
        WriteFormat::Framed => framed::write_framed(path, rec),
    }
    .with_context(|| format!("write {path}"))
}
