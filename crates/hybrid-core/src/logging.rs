//! Tracing subscriber setup

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "HYBRID_LOG";

static INSTALLED: OnceCell<bool> = OnceCell::new();

/// Logging configuration options
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Filter used when `HYBRID_LOG` is unset, e.g. `info` or `hybrid_template=debug`
    pub level: String,
    /// Colored output
    pub ansi: bool,
    /// Include the module path of each event
    pub with_target: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            with_target: false,
        }
    }
}

impl LogOptions {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }
}

/// Install a global fmt subscriber writing to stderr.
///
/// Only the first call has an effect. Returns whether this process's
/// subscriber is ours; `false` when another subscriber was already set.
pub fn init_logging(options: &LogOptions) -> bool {
    *INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&options.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(options.ansi)
            .with_target(options.with_target)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    })
}
