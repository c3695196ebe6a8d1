// crates/simspad-cli/src/cmd/mod.rs

pub mod encode;
pub mod export;
pub mod input;
pub mod inspect;
pub mod presets;
pub mod simulate;
