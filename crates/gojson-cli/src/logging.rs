//! Logging setup
//!
//! Log output goes to stderr. When running as a protoc plugin, stdout belongs
//! to the plugin protocol and generated code.

use gojson_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `RUST_LOG`, or by `verbosity` when
/// `RUST_LOG` is unset
pub fn init_logging(verbosity: u8) {
    let level = LogLevel::from_verbosity(verbosity);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
