//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout, one line
//! per event, prefixed with the kind's severity. Use it for tests or demos;
//! real deployments plug their own [`Subscribe`] into their logging stack.
//!
//! ## Example output
//! ```text
//! [info] [shutdown-requested]
//! [debug] [service-starting] service="http-server"
//! [error] [service-stop-failed] service="http-server" reason="listener already closed"
//! [info] [all-tasks-completed]
//! [info] [shutdown-completed]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn kind_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::SignalReceived => "signal-received",
        EventKind::SignalSetupFailed => "signal-setup-failed",
        EventKind::DrainRequested => "drain-requested",
        EventKind::ShutdownRequested => "shutdown-requested",
        EventKind::AllTasksCompleted => "all-tasks-completed",
        EventKind::ShutdownCompleted => "shutdown-completed",
        EventKind::GraceExceeded => "grace-exceeded",
        EventKind::ForcedExit => "forced-exit",
        EventKind::TaskLaunched => "task-launched",
        EventKind::ServiceStarting => "service-starting",
        EventKind::ServiceStopFailed => "service-stop-failed",
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let mut line = format!("[{}] [{}]", e.kind.severity().as_str(), kind_label(e.kind));
        if let Some(service) = &e.service {
            line.push_str(&format!(" service={service:?}"));
        }
        if let Some(reason) = &e.reason {
            line.push_str(&format!(" reason={reason:?}"));
        }
        println!("{line}");
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
