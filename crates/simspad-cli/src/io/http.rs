// crates/simspad-cli/src/io/http.rs

use std::io::Read;
use std::time::Duration;

use simspad_core::error::TransportError;
use simspad_core::Transport;

/// Oracle transport over HTTP POST.
///
/// The request body is sent as `application/octet-stream` and the reply body
/// is read as raw bytes, so every byte value survives in both directions.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self { agent }
    }
}

impl Transport for HttpTransport {
    fn exchange(&self, destination: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let resp = match self
            .agent
            .post(destination)
            .set("Content-Type", "application/octet-stream")
            .send_bytes(body)
        {
            Ok(r) => r,
            Err(ureq::Error::Status(code, r)) => {
                let text = r.into_string().unwrap_or_default();
                return Err(format!("oracle returned status {code}: {}", text.trim()).into());
            }
            Err(e) => return Err(e.into()),
        };

        let mut out = Vec::new();
        resp.into_reader().read_to_end(&mut out)?;
        Ok(out)
    }
}
