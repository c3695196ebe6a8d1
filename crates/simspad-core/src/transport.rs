// crates/simspad-core/src/transport.rs

use tracing::debug;

use crate::device::model::SipmModel;
use crate::error::{Result, SimspadError, TransportError};
use crate::signal::Channels;
use crate::wire::framing::Framing;
use crate::wire::{check_framing, decode_reply_with, encode_request};

/// One binary-safe request/response round trip.
///
/// Implementations must deliver `body` byte-for-byte and hand back the reply
/// body unchanged. Retries, timeouts and connection handling are theirs; the
/// codec never retries.
pub trait Transport {
    fn exchange(&self, destination: &str, body: &[u8]) -> std::result::Result<Vec<u8>, TransportError>;
}

/// Encode, exchange, decode. Returns the oracle's response series.
pub fn simulate<T: Transport + ?Sized>(
    transport: &T,
    destination: &str,
    model: &SipmModel,
    stimulus: &Channels,
    framing: Framing,
) -> Result<Vec<f64>> {
    let body = encode_request(model, stimulus)?;
    check_framing(model, framing);

    debug!(destination, bytes = body.len(), "exchanging request");
    let reply = transport
        .exchange(destination, &body)
        .map_err(SimspadError::Transport)?;

    decode_reply_with(&reply, framing)
}
