// regex-filter/src/logger.rs
//! Logger setup for the `regex-filter` binary.
//! License: MIT OR Apache-2.0

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`, writing to stderr.
///
/// `RUST_LOG` is honoured unless `level` is given, in which case it overrides
/// the default level for every module. Calling this more than once is a no-op.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);

    if builder.try_init().is_err() {
        log::trace!("Logger already initialized");
    }
}
