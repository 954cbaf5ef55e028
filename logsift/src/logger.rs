// logsift/src/logger.rs
//! Logging bootstrap shared by the binary and the integration tests.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes the global logger, honoring `RUST_LOG` unless an explicit
/// level is given. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
