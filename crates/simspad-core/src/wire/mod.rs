// crates/simspad-core/src/wire/mod.rs

pub mod framing;
pub mod values;

use tracing::{debug, warn};

use crate::device::model::SipmModel;
use crate::error::{Result, SimspadError};
use crate::signal::Channels;
use crate::wire::framing::Framing;
use crate::wire::values::{bytes_to_values, values_to_bytes};

/// Flat value layout shared by requests and stored files:
/// `[model fields in wire order][samples, interleaved when dual]`.
pub fn encode_values(model: &SipmModel, channels: &Channels) -> Result<Vec<f64>> {
    let samples = channels.flatten()?;
    let mut out = Vec::with_capacity(model.field_count() + samples.len());
    out.extend(model.values());
    out.extend(samples);
    Ok(out)
}

/// Build the full request body for the oracle.
///
/// Request layout (little-endian f64):
/// fields[10 | 11]
/// samples[N]        (single channel)
/// samples[2N]       (dual channel: ch1[0], ch2[0], ch1[1], ...)
///
/// The stimulus must carry as many channels as the model has PDE values.
pub fn encode_request(model: &SipmModel, stimulus: &Channels) -> Result<Vec<u8>> {
    if stimulus.count() != model.channel_count() {
        return Err(SimspadError::ChannelMismatch {
            model: model.channel_count(),
            stimulus: stimulus.count(),
        });
    }
    let values = encode_values(model, stimulus)?;
    let body = values_to_bytes(&values);
    debug!(
        fields = model.field_count(),
        samples = values.len() - model.field_count(),
        bytes = body.len(),
        "encoded request"
    );
    Ok(body)
}

/// Decode an oracle reply with the deployed framing (10 header values, 1 trailer).
pub fn decode_reply(bytes: &[u8]) -> Result<Vec<f64>> {
    decode_reply_with(bytes, Framing::LEGACY)
}

/// Decode an oracle reply, dropping `framing.header` leading and
/// `framing.trailer` trailing values.
pub fn decode_reply_with(bytes: &[u8], framing: Framing) -> Result<Vec<f64>> {
    let values = bytes_to_values(bytes).map_err(SimspadError::MalformedReply)?;
    let min = framing.overhead().ok_or_else(|| {
        SimspadError::MalformedReply(format!(
            "framing {}+{} values cannot fit any reply",
            framing.header, framing.trailer
        ))
    })?;
    if values.len() < min {
        return Err(SimspadError::MalformedReply(format!(
            "reply holds {} values, framing needs at least {}",
            values.len(),
            min
        )));
    }
    let response = values[framing.header..values.len() - framing.trailer].to_vec();
    debug!(
        bytes = bytes.len(),
        header = framing.header,
        samples = response.len(),
        "decoded reply"
    );
    Ok(response)
}

/// Log when a reply header will not line up with the model that was sent
/// (the deployed 10-value header against a dual-channel request).
pub fn check_framing(model: &SipmModel, framing: Framing) {
    if framing.header != model.field_count() {
        warn!(
            header = framing.header,
            fields = model.field_count(),
            "reply header length differs from model field count"
        );
    }
}
