//! Logger setup using `log` with the `env_logger` backend
//!
//! Verbosity comes from the `-v` count; `RUST_LOG` overrides it when set.
//! Records go to stderr so they never interleave with preview output.

use std::io::Write;

use log::LevelFilter;

/// Map the `-v` count and `--quiet` flag to a level filter
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger. Safe to call more than once.
pub fn init(verbosity: u8, quiet: bool) {
    let level = level_for(verbosity, quiet);

    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "{:<5} {}", record.level(), record.args()))
        .filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    let _ = builder.try_init();
    log::debug!("Logger initialized with level: {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), LevelFilter::Warn);
        assert_eq!(level_for(1, false), LevelFilter::Info);
        assert_eq!(level_for(2, false), LevelFilter::Debug);
        assert_eq!(level_for(7, false), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(level_for(3, true), LevelFilter::Error);
    }
}
