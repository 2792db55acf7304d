//! Logger initialization.
//!
//! The library writes through the `log` facade: slider updates at `debug`,
//! the chosen GPU adapter at `info`. Rejected inputs and a missing GPU are
//! returned as errors for the host to report. The demo binary calls
//! [`init_logging`] before replaying input so those records reach
//! `env_logger`.

use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax. Use
/// "uniforma=debug" to see each slider update, and "wgpu=warn" to quiet the
/// backend during device setup. When unset, `RUST_LOG` is used, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override `RUST_LOG` with an explicit filter.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

static INIT: Once = Once::new();

/// Routes `log` records to `env_logger`. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        // A test harness may already own the global logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_kept() {
        let config = LoggingConfig::new().filter("uniforma=debug,wgpu=warn");
        assert_eq!(config.env_filter.as_deref(), Some("uniforma=debug,wgpu=warn"));
        assert!(LoggingConfig::default().env_filter.is_none());
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::new().filter("debug"));
        init_logging(LoggingConfig::default());
        log::debug!("still alive");
    }
}
