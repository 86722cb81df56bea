//! Logger initialization.
//!
//! `RUST_LOG` is read with the full env_logger filter syntax (`relperm=debug`,
//! `info,relperm::io=trace`, ...) and defaults to `warn`. An explicit
//! `--log-level` replaces it with a single global level.
//! Lines go to stderr so they never mix with tables and plots on stdout.

use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Parse the `--log-level` value. Unrecognised values are ignored.
pub fn explicit_level(explicit: Option<&str>) -> Option<LevelFilter> {
    explicit.and_then(|l| l.parse::<LevelFilter>().ok())
}

/// Builder seeded from `RUST_LOG` (or `warn`), overridden by `explicit`.
fn builder(explicit: Option<&str>) -> Builder {
    let mut builder = match explicit_level(explicit) {
        Some(level) => {
            let mut b = Builder::new();
            b.filter_level(level);
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.format(|buf, record| {
        writeln!(buf, "[{} {:5}] {}", Local::now().format("%H:%M:%S"), record.level(), record.args())
    });
    builder
}

/// Install the global logger. Calling it twice is harmless.
pub fn init_logging(level: Option<&str>) {
    if builder(level).try_init().is_ok() {
        log::debug!("logger initialized (max level: {})", log::max_level());
    }
}
