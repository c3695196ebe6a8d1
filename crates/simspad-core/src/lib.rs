pub mod error;
pub mod validate;

pub mod device;
pub mod file;
pub mod signal;
pub mod summary;
pub mod transport;
pub mod wire;

pub use crate::device::model::{DualChannelParams, ModelKind, SingleChannelParams, SipmModel};
pub use crate::error::{Result, SimspadError};
pub use crate::signal::Channels;
pub use crate::transport::{simulate, Transport};
pub use crate::wire::framing::Framing;
