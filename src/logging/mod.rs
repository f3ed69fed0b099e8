//! Logging setup
//!
//! Installs a `tracing_subscriber` formatter so that diagnostics emitted by the
//! default [`TracingSink`](crate::diagnostics::TracingSink) reach stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::LoggingConfig;

/// Initialize the global subscriber from logging configuration
///
/// `RUST_LOG` directives, when set, refine the configured level.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left untouched.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let level = config.level.to_tracing_level();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Configure timestamps
    let installed = if config.timestamps {
        subscriber.try_init().is_ok()
    } else {
        subscriber.without_time().try_init().is_ok()
    };

    if installed {
        tracing::debug!(?level, "logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_init_logging_twice() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            timestamps: false,
        };
        init_logging(&config);
        assert!(!init_logging(&config));
    }
}
