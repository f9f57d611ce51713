// src/log.rs
//
// tracing setup for frontends. Library code only emits events.
// Output goes to stderr so stdout stays clean for exports.

use std::fmt;
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// `hh:mm:ss.mmm` from a millisecond count.
pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Time since the subscriber was installed, as `[hh:mm:ss.mmm]`.
struct Elapsed(Instant);

impl FormatTime for Elapsed {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", fmt_elapsed(self.0.elapsed().as_millis()))
    }
}

/// Default filter for a `-v` count. `RUST_LOG` overrides it.
pub fn default_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Elapsed(Instant::now()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_layout() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_045), "01:02:03.045");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(3, true), "error");
        assert_eq!(default_level(0, false), "warn");
        assert_eq!(default_level(9, false), "trace");
    }
}
