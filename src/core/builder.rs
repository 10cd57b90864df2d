//! # Coordinator builder.
//!
//! Wires the optional pieces around the [`Coordinator`]: event subscribers,
//! the process-exit seam, the signal source, and the bus capacity.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::config::Config;
use crate::core::coordinator::{Coordinator, ExitFn};
use crate::core::signals::{self, SignalEvent};
use crate::error::CoordinatorError;
use crate::events::Bus;
use crate::subscribers::Subscribe;

const DEFAULT_BUS_CAPACITY: usize = 64;
const SIGNAL_QUEUE_CAPACITY: usize = 8;

/// Where the dispatcher's inbound signal queue is fed from.
enum SignalMode {
    /// Spawn OS listeners (SIGINT/SIGTERM/SIGUSR1, or Ctrl-C) at build time.
    Os,
    /// Caller-supplied queue; nothing OS-level is registered.
    Source(mpsc::Receiver<SignalEvent>),
    /// No dispatcher at all; drain/shutdown are purely programmatic.
    Disabled,
}

/// Builder for constructing a [`Coordinator`] with optional features.
pub struct CoordinatorBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
    exit_fn: Option<ExitFn>,
    bus_capacity: usize,
    signals: SignalMode,
}

impl CoordinatorBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            exit_fn: None,
            bus_capacity: DEFAULT_BUS_CAPACITY,
            signals: SignalMode::Os,
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive lifecycle events (wind-down transitions, stop
    /// failures, signal receipt) each through a dedicated listener task.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Adds a single event subscriber.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn Subscribe>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Replaces the process-termination call.
    ///
    /// Defaults to [`std::process::exit`]; tests substitute a recording stub
    /// so a forced exit can be asserted instead of suffered.
    pub fn with_exit_fn(mut self, exit_fn: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.exit_fn = Some(Arc::new(exit_fn));
        self
    }

    /// Feeds the signal dispatcher from a caller-owned queue instead of OS
    /// listeners.
    ///
    /// Closing the queue has the same effect as a termination signal: the
    /// dispatcher loop exits and shutdown runs.
    pub fn with_signal_source(mut self, source: mpsc::Receiver<SignalEvent>) -> Self {
        self.signals = SignalMode::Source(source);
        self
    }

    /// Disables signal dispatch entirely (embedding mode).
    ///
    /// Wind-down then only happens through explicit
    /// [`Coordinator::drain`]/[`Coordinator::shutdown`] calls.
    pub fn without_signals(mut self) -> Self {
        self.signals = SignalMode::Disabled;
        self
    }

    /// Sets the event bus ring-buffer capacity (default 64, minimum 1).
    pub fn with_bus_capacity(mut self, capacity: usize) -> Self {
        self.bus_capacity = capacity;
        self
    }

    /// Validates the configuration and builds the coordinator.
    ///
    /// Spawns one listener task per subscriber plus, depending on the signal
    /// mode, the dispatcher and the OS forwarder. Must be called inside a
    /// tokio runtime.
    pub fn build(self) -> Result<Coordinator, CoordinatorError> {
        self.cfg.validate()?;

        let bus = Bus::new(self.bus_capacity);
        for subscriber in self.subscribers {
            spawn_listener(&bus, subscriber);
        }

        let exit_fn: ExitFn = self.exit_fn.unwrap_or_else(|| {
            Arc::new(|code| {
                std::process::exit(code);
            })
        });
        let coordinator = Coordinator::new_internal(self.cfg, bus.clone(), exit_fn);

        match self.signals {
            SignalMode::Os => {
                let (tx, rx) = mpsc::channel(SIGNAL_QUEUE_CAPACITY);
                tokio::spawn(signals::forward_os_signals(tx, bus));
                tokio::spawn(signals::dispatch(coordinator.clone(), rx));
            }
            SignalMode::Source(rx) => {
                tokio::spawn(signals::dispatch(coordinator.clone(), rx));
            }
            SignalMode::Disabled => {}
        }

        Ok(coordinator)
    }
}

/// Drives one subscriber from its own bus receiver.
///
/// Lagging skips the oldest events for this subscriber only; the loop ends
/// when the bus is dropped.
fn spawn_listener(bus: &Bus, subscriber: Arc<dyn Subscribe>) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ev) => subscriber.on_event(&ev).await,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
