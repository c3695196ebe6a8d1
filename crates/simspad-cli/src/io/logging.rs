// crates/simspad-cli/src/io/logging.rs

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber once per process.
///
/// `RUST_LOG` picks the filter (default `info`); `silent` pins it to `warn`.
pub fn init_tracing(silent: bool) {
    if INITIALISED.set(()).is_err() {
        return;
    }

    let filter = if silent {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    // A subscriber installed by an embedding host wins; ignore the error.
    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}
