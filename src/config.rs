//! # Coordinator configuration.
//!
//! [`Config`] defines the wind-down behavior: how long to wait for tracked
//! work to drain, and whether to force-terminate the process afterwards.
//!
//! Populating the struct from files or environment variables is the job of
//! the surrounding application; the fields are public for that reason. The
//! coordinator only validates the values at construction time.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use winddown::Config;
//!
//! let mut cfg = Config::default();
//! cfg.timeout = Duration::from_secs(10);
//! cfg.force = false;
//!
//! assert!(cfg.validate().is_ok());
//! ```

use std::time::Duration;

use crate::error::CoordinatorError;

/// Wind-down configuration, immutable after the coordinator is built.
///
/// ## Field semantics
/// - `timeout`: grace period between "stop accepting work" and forced
///   termination; must be strictly positive.
/// - `force`: whether grace-timeout expiry terminates the process (through
///   the exit seam) rather than merely reporting it. A shutdown that drains
///   within the grace period never exits.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Maximum time to wait for tracked work to drain before the shutdown
    /// scope is force-cancelled.
    pub timeout: Duration,

    /// Whether to terminate the process after the grace race resolves.
    pub force: bool,
}

impl Config {
    /// Validates the configuration.
    ///
    /// A zero timeout is rejected: `Duration` is unsigned, so this is the
    /// whole "strictly positive" check.
    pub fn validate(&self) -> Result<(), CoordinatorError> {
        if self.timeout.is_zero() {
            return Err(CoordinatorError::InvalidTimeout {
                timeout: self.timeout,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `timeout = 3s`
    /// - `force = true`
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(3),
            force: true,
        }
    }
}
