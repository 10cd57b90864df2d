//! # OS signal dispatch.
//!
//! Translates process-level signals into coordinator calls. Nothing here is
//! ambient or global: each coordinator owns an inbound [`SignalEvent`] queue,
//! fed either by the OS forwarder spawned in the default builder mode or by a
//! caller-supplied sender (tests, embedders). Several coordinators in one
//! process never cross-route each other's signals.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal) → [`SignalEvent::Terminate`]
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes) → [`SignalEvent::Terminate`]
//! - `SIGUSR1` (operator-triggered pre-shutdown) → [`SignalEvent::Drain`]
//!
//! **Windows platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`] → [`SignalEvent::Terminate`]

use tokio::sync::mpsc;

use crate::core::coordinator::Coordinator;
use crate::events::{Event, EventKind};

/// A termination or drain request on its way to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    /// Full shutdown: stop accepting work, wind down, possibly exit.
    Terminate,
    /// Drain only: stop accepting work, keep the process alive.
    Drain,
}

/// Drives the coordinator from the inbound signal queue.
///
/// `Drain` keeps the loop alive so a later `Terminate` still reaches
/// [`Coordinator::shutdown`]; `Terminate` or a closed queue breaks out.
/// Shutdown runs on every loop exit, so it is invoked at least once no matter
/// which branch ended the loop.
pub(crate) async fn dispatch(coordinator: Coordinator, mut rx: mpsc::Receiver<SignalEvent>) {
    loop {
        match rx.recv().await {
            Some(SignalEvent::Drain) => {
                coordinator.publish(Event::new(EventKind::SignalReceived).with_reason("drain"));
                coordinator.drain();
            }
            Some(SignalEvent::Terminate) => {
                coordinator
                    .publish(Event::new(EventKind::SignalReceived).with_reason("terminate"));
                break;
            }
            None => break,
        }
    }
    let _ = coordinator.shutdown().await;
}

/// Forwards OS signals into the dispatcher queue until the queue closes.
///
/// Each call creates independent signal listeners. Registration failures are
/// published on the bus and the affected source is simply absent; `ctrl_c`
/// remains as the fallback.
#[cfg(unix)]
pub(crate) async fn forward_os_signals(
    tx: mpsc::Sender<SignalEvent>,
    bus: crate::events::Bus,
) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => Some(s),
        Err(err) => {
            bus.publish(Event::new(EventKind::SignalSetupFailed).with_reason(err.to_string()));
            None
        }
    };
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => Some(s),
        Err(err) => {
            bus.publish(Event::new(EventKind::SignalSetupFailed).with_reason(err.to_string()));
            None
        }
    };
    let mut sigusr1 = match signal(SignalKind::user_defined1()) {
        Ok(s) => Some(s),
        Err(err) => {
            bus.publish(Event::new(EventKind::SignalSetupFailed).with_reason(err.to_string()));
            None
        }
    };

    loop {
        let event = tokio::select! {
            _ = tokio::signal::ctrl_c() => SignalEvent::Terminate,
            _ = recv_some(&mut sigint) => SignalEvent::Terminate,
            _ = recv_some(&mut sigterm) => SignalEvent::Terminate,
            _ = recv_some(&mut sigusr1) => SignalEvent::Drain,
        };
        if tx.send(event).await.is_err() {
            return;
        }
    }
}

/// Awaits the next signal on a listener that may have failed to register.
///
/// A missing listener pends forever so the surrounding `select!` falls
/// through to the sources that did register.
#[cfg(unix)]
async fn recv_some(listener: &mut Option<tokio::signal::unix::Signal>) {
    match listener {
        Some(s) => {
            s.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Forwards OS signals into the dispatcher queue until the queue closes.
///
/// Each call creates independent signal listeners.
#[cfg(not(unix))]
pub(crate) async fn forward_os_signals(
    tx: mpsc::Sender<SignalEvent>,
    bus: crate::events::Bus,
) {
    loop {
        if let Err(err) = tokio::signal::ctrl_c().await {
            bus.publish(Event::new(EventKind::SignalSetupFailed).with_reason(err.to_string()));
            return;
        }
        if tx.send(SignalEvent::Terminate).await.is_err() {
            return;
        }
    }
}
