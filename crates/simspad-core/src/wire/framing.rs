// crates/simspad-core/src/wire/framing.rs

use crate::device::model::{SipmModel, SINGLE_FIELD_COUNT};

/// How many values surround the response series in an oracle reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Framing {
    pub header: usize,
    pub trailer: usize,
}

impl Framing {
    /// What the deployed oracle sends: a 10-value echo of the single-channel
    /// header, then the response, then one terminator value. It does not grow
    /// for dual-channel models.
    pub const LEGACY: Framing = Framing {
        header: SINGLE_FIELD_COUNT,
        trailer: 1,
    };

    /// Header sized to the model actually sent.
    pub fn for_model(model: &SipmModel) -> Framing {
        Framing {
            header: model.field_count(),
            trailer: 1,
        }
    }

    /// Values that surround the response; `None` if the sum overflows.
    pub fn overhead(&self) -> Option<usize> {
        self.header.checked_add(self.trailer)
    }
}

impl Default for Framing {
    fn default() -> Self {
        Framing::LEGACY
    }
}
