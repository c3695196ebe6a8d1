// crates/simspad-cli/src/io/mod.rs

pub mod csv_signal;
pub mod device_file;
pub mod http;
pub mod logging;
pub mod recording;
