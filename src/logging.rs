//! Console logging setup.
//!
//! Logs go to stderr so that stdout carries only compiler output.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Level kept when logging is disabled.
const DISABLED_LEVEL: &str = "error";

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level unless logging is disabled. Calling this more than
/// once is harmless.
pub fn init(config: &LoggingConfig) {
    let filter = if config.enabled {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(config)))
    } else {
        EnvFilter::new(level(config))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.colorize)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Filter directive used when `RUST_LOG` does not apply.
fn level(config: &LoggingConfig) -> &str {
    if config.enabled {
        config.level.as_str()
    } else {
        DISABLED_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        let config = LoggingConfig {
            colorize: false,
            ..LoggingConfig::default()
        };
        init(&config);
        init(&config);
    }

    #[test]
    fn disabled_logging_keeps_errors() {
        let config = LoggingConfig {
            enabled: false,
            level: "trace".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(level(&config), "error");
        init(&config);
    }

    #[test]
    fn enabled_logging_uses_configured_level() {
        let config = LoggingConfig {
            level: "waml=debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(level(&config), "waml=debug");
    }
}
