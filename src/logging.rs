//! Logging setup
//!
//! Logs go to stderr so stdout carries only conversion output. `RUST_LOG`
//! takes precedence over the level chosen from the command line.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Include the module path of each event
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            Self {
                level: "debug".into(),
                include_target: true,
            }
        } else {
            Self::default()
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global subscriber. A second call is a no-op.
    pub fn init(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_target(self.include_target)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
