//! Error types used by the winddown coordinator and tracked services.
//!
//! This module defines two main error enums:
//!
//! - [`CoordinatorError`] — errors raised by the coordination core itself.
//! - [`ServiceError`] — errors raised by tracked services' start/stop calls.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by the coordinator.
///
/// These represent failures in the lifecycle coordination itself: registering
/// work after wind-down began, a service refusing to start, the grace period
/// running out, or an invalid configuration at construction time.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// A task or service was registered after the runtime scope was cancelled.
    #[error("runtime scope already cancelled")]
    ScopeClosed,

    /// A tracked service's start call returned an error.
    #[error("starting service: {source}")]
    StartFailed {
        /// The underlying service error.
        #[source]
        source: ServiceError,
    },

    /// The grace period elapsed before all tracked work drained.
    #[error("shutdown timed out after {timeout:?}; {pending} still pending")]
    GraceTimeout {
        /// The configured grace duration.
        timeout: Duration,
        /// Number of tasks/services still tracked when the timer fired.
        pending: usize,
    },

    /// The configured grace timeout is not strictly positive.
    #[error("shutdown timeout must be positive, got {timeout:?}")]
    InvalidTimeout {
        /// The rejected timeout value.
        timeout: Duration,
    },
}

impl CoordinatorError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use winddown::CoordinatorError;
    ///
    /// assert_eq!(CoordinatorError::ScopeClosed.as_label(), "scope_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CoordinatorError::ScopeClosed => "scope_closed",
            CoordinatorError::StartFailed { .. } => "start_failed",
            CoordinatorError::GraceTimeout { .. } => "grace_timeout",
            CoordinatorError::InvalidTimeout { .. } => "invalid_timeout",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            CoordinatorError::ScopeClosed => "runtime scope already cancelled".to_string(),
            CoordinatorError::StartFailed { source } => format!("start failed: {source}"),
            CoordinatorError::GraceTimeout { timeout, pending } => {
                format!("grace exceeded after {timeout:?}; pending={pending}")
            }
            CoordinatorError::InvalidTimeout { timeout } => {
                format!("invalid timeout: {timeout:?}")
            }
        }
    }
}

/// # Errors produced by tracked services.
///
/// Returned from [`Trackable::start`](crate::Trackable::start) and
/// [`Trackable::stop`](crate::Trackable::stop). Start errors are propagated
/// to the caller of [`Coordinator::track`](crate::Coordinator::track); stop
/// errors are published at error severity and never propagated, so one
/// misbehaving service cannot block the wind-down of the others.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Service operation failed.
    #[error("service failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Service observed scope cancellation and gave up.
    #[error("scope cancelled")]
    Canceled,
}

impl ServiceError {
    /// Creates a [`ServiceError::Fail`] from any displayable error.
    ///
    /// # Example
    /// ```
    /// use winddown::ServiceError;
    ///
    /// let err = ServiceError::fail("connection refused");
    /// assert_eq!(err.as_label(), "service_failed");
    /// ```
    pub fn fail(error: impl std::fmt::Display) -> Self {
        ServiceError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ServiceError::Fail { .. } => "service_failed",
            ServiceError::Canceled => "service_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ServiceError::Fail { error } => format!("error: {error}"),
            ServiceError::Canceled => "scope cancelled".to_string(),
        }
    }
}
