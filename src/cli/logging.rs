//! Logging setup
//!
//! Logs go to stderr so they never interleave with menu output on stdout.
//! Filter priority: $FLIGHTS_LOG, then `-v` flags, then the config file's
//! `log_filter`, then `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full tracing filter directive
pub const LOG_ENV: &str = "FLIGHTS_LOG";

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8, config_filter: Option<&str>) {
    let directive = filter_directive(verbosity, std::env::var(LOG_ENV).ok(), config_filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn filter_directive(verbosity: u8, env: Option<String>, config_filter: Option<&str>) -> String {
    if let Some(directive) = env.filter(|d| !d.is_empty()) {
        return directive;
    }
    if verbosity == 0 {
        if let Some(directive) = config_filter {
            return directive.to_string();
        }
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_directive(0, None, None), "warn");
        assert_eq!(filter_directive(1, None, None), "info");
        assert_eq!(filter_directive(2, None, None), "debug");
        assert_eq!(filter_directive(7, None, None), "trace");
    }

    #[test]
    fn test_env_overrides_everything() {
        assert_eq!(
            filter_directive(2, Some("flight_records=trace".to_string()), Some("info")),
            "flight_records=trace"
        );
    }

    #[test]
    fn test_config_used_without_flags() {
        assert_eq!(filter_directive(0, None, Some("error")), "error");
    }

    #[test]
    fn test_flags_override_config() {
        assert_eq!(filter_directive(2, None, Some("error")), "debug");
    }
}
