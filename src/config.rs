//! Driver configuration.
//!
//! The trampoline loop itself has no tunable semantics; configuration only
//! controls how much the driver reports about long-running loops.
//!
//! Sources, in the order the CLI applies them:
//! 1. `TrampolineConfig::default()`
//! 2. Environment (`TAILCALL_PROGRESS_INTERVAL`, `TAILCALL_LONG_RUN_WARNING`)
//! 3. A TOML file passed with `--config` (replaces the environment values)

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

/// Environment variable for `progress_interval`
pub const PROGRESS_INTERVAL_VAR: &str = "TAILCALL_PROGRESS_INTERVAL";
/// Environment variable for `long_run_warning` (0 disables)
pub const LONG_RUN_WARNING_VAR: &str = "TAILCALL_LONG_RUN_WARNING";

/// Default iteration count after which a loop is reported as long-running
pub const DEFAULT_LONG_RUN_WARNING: u64 = 10_000_000;

static GLOBAL_CONFIG: OnceLock<TrampolineConfig> = OnceLock::new();

/// Reporting configuration for the trampoline driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrampolineConfig {
    /// Emit a `debug!` progress event every N iterations (0 = never)
    pub progress_interval: u64,
    /// Emit a single `warn!` once a loop passes this many iterations.
    /// The loop keeps running either way.
    pub long_run_warning: Option<u64>,
}

impl Default for TrampolineConfig {
    fn default() -> Self {
        Self {
            progress_interval: 0,
            long_run_warning: Some(DEFAULT_LONG_RUN_WARNING),
        }
    }
}

impl TrampolineConfig {
    /// Configuration with all reporting switched off
    pub fn quiet() -> Self {
        Self {
            progress_interval: 0,
            long_run_warning: None,
        }
    }

    pub fn with_progress_interval(mut self, every: u64) -> Self {
        self.progress_interval = every;
        self
    }

    pub fn with_long_run_warning(mut self, after: Option<u64>) -> Self {
        self.long_run_warning = after.filter(|n| *n > 0);
        self
    }

    /// Defaults overridden by any well-formed environment variables.
    /// Malformed values are logged and ignored.
    pub fn from_env() -> Self {
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        let config: TrampolineConfig = toml::from_str(src)?;
        Ok(config.with_long_run_warning(config.long_run_warning))
    }

    fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(PROGRESS_INTERVAL_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(every) => self.progress_interval = every,
                Err(e) => warn!(var = PROGRESS_INTERVAL_VAR, value = %raw, error = %e, "ignoring malformed value"),
            }
        }
        if let Some(raw) = lookup(LONG_RUN_WARNING_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(after) => self = self.with_long_run_warning(Some(after)),
                Err(e) => warn!(var = LONG_RUN_WARNING_VAR, value = %raw, error = %e, "ignoring malformed value"),
            }
        }
        self
    }
}

/// Install the process-wide configuration used by the free driver functions.
///
/// Can only succeed once; a later call hands the rejected config back.
pub fn configure(config: TrampolineConfig) -> Result<(), TrampolineConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Process-wide configuration, initialized from the environment on first use
pub fn global() -> &'static TrampolineConfig {
    GLOBAL_CONFIG.get_or_init(TrampolineConfig::from_env)
}
