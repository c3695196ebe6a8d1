// crates/simspad-core/src/device/mod.rs

pub mod defaults;
pub mod id;
pub mod model;
