//! # Lifecycle events emitted by the coordinator.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Signal events**: inbound OS signals and listener setup problems.
//! - **Wind-down events**: drain/shutdown intent and how the episode resolved.
//! - **Tracking events**: tasks and services entering or leaving the tracked set.
//!
//! The [`Event`] struct carries metadata such as timestamps, the service name,
//! and a free-form reason. Every kind maps to a [`Severity`], which is the
//! whole logging surface of the core: the coordinator publishes, subscribers
//! decide destination and format.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use winddown::{Event, EventKind, Severity};
//!
//! let ev = Event::new(EventKind::ServiceStopFailed)
//!     .with_service("http-server")
//!     .with_reason("listener already closed");
//!
//! assert_eq!(ev.kind, EventKind::ServiceStopFailed);
//! assert_eq!(ev.kind.severity(), Severity::Error);
//! assert_eq!(ev.service.as_deref(), Some("http-server"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Severity level of an event, for subscribers that forward to a leveled logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Fine-grained bookkeeping (task launched, service starting).
    Debug,
    /// Normal lifecycle transitions.
    Info,
    /// Unusual but recoverable conditions.
    Warn,
    /// Failures an operator should look at.
    Error,
}

impl Severity {
    /// Returns a short stable label (lowercase) for log prefixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Classification of coordinator events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Signal events ===
    /// An OS-level signal reached the dispatcher.
    ///
    /// Sets:
    /// - `reason`: `"terminate"` or `"drain"`
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SignalReceived,

    /// OS signal listener registration failed; the dispatcher keeps running
    /// on whatever sources did register.
    ///
    /// Sets:
    /// - `reason`: the registration error
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SignalSetupFailed,

    // === Wind-down events ===
    /// Drain initiated: the runtime scope is being cancelled, the process
    /// stays alive.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    DrainRequested,

    /// Shutdown initiated: the runtime scope is being cancelled and the
    /// grace race begins.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ShutdownRequested,

    /// Every tracked task and service has finished.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AllTasksCompleted,

    /// Shutdown completed gracefully within the grace period.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ShutdownCompleted,

    /// Grace period elapsed with work still pending; the shutdown scope was
    /// force-cancelled.
    ///
    /// Sets:
    /// - `reason`: pending count
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    GraceExceeded,

    /// The process is about to terminate through the exit seam.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ForcedExit,

    // === Tracking events ===
    /// A background task was launched under the runtime scope.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskLaunched,

    /// A tracked service's start call is about to run.
    ///
    /// Sets:
    /// - `service`: service name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ServiceStarting,

    /// A tracked service's stop call returned an error (published, never
    /// propagated).
    ///
    /// Sets:
    /// - `service`: service name
    /// - `reason`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ServiceStopFailed,
}

impl EventKind {
    /// Maps the kind to its log severity.
    ///
    /// Total mapping; new kinds must pick a level here.
    pub fn severity(&self) -> Severity {
        match self {
            EventKind::TaskLaunched | EventKind::ServiceStarting => Severity::Debug,
            EventKind::SignalReceived
            | EventKind::DrainRequested
            | EventKind::ShutdownRequested
            | EventKind::AllTasksCompleted
            | EventKind::ShutdownCompleted => Severity::Info,
            EventKind::ForcedExit => Severity::Warn,
            EventKind::SignalSetupFailed
            | EventKind::GraceExceeded
            | EventKind::ServiceStopFailed => Severity::Error,
        }
    }
}

/// A single coordinator event with metadata.
///
/// Construct with [`Event::new`] and attach context with the `with_*` builders.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event classification.
    pub kind: EventKind,
    /// Wall-clock timestamp at creation.
    pub at: SystemTime,
    /// Globally monotonic sequence number.
    pub seq: u64,
    /// Service name, when the event concerns a tracked service.
    pub service: Option<String>,
    /// Free-form context (error message, signal name, pending count).
    pub reason: Option<String>,
}

impl Event {
    /// Creates an event stamped with the current time and the next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            at: SystemTime::now(),
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed) + 1,
            service: None,
            reason: None,
        }
    }

    /// Attaches a service name.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Attaches a free-form reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::DrainRequested);
        let b = Event::new(EventKind::ShutdownRequested);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_attach_context() {
        let ev = Event::new(EventKind::ServiceStopFailed)
            .with_service("db-pool")
            .with_reason("timed out");
        assert_eq!(ev.service.as_deref(), Some("db-pool"));
        assert_eq!(ev.reason.as_deref(), Some("timed out"));
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(EventKind::TaskLaunched.severity(), Severity::Debug);
        assert_eq!(EventKind::ShutdownCompleted.severity(), Severity::Info);
        assert_eq!(EventKind::ForcedExit.severity(), Severity::Warn);
        assert_eq!(EventKind::GraceExceeded.severity(), Severity::Error);
    }
}
