//! # winddown
//!
//! **Winddown** is a graceful-lifecycle coordinator for long-running tokio
//! services that host multiple concurrent components: network listeners,
//! background workers, periodic jobs.
//!
//! Independent components register themselves, run under a cancellable
//! execution scope, and the coordinator detects termination requests
//! (operator signal or programmatic call), drives an orderly two-phase
//! wind-down — stop accepting new work, then wait for in-flight work to
//! finish within a grace period — and escalates to a forced process exit if
//! the grace period is exceeded.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Trackable   │   │  Trackable   │   │ launch(task) │
//!     │ (start/stop) │   │ (start/stop) │   │  (bg worker) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Coordinator                                                      │
//! │  - runtime scope    (live while the process does work)            │
//! │  - shutdown scope   (live while wind-down is in progress)         │
//! │  - task tracker     (pending count + wait-for-zero)               │
//! │  - Bus              (broadcast lifecycle events)                  │
//! └──────┬──────────────────────────────────────────────┬─────────────┘
//!        │                                              │
//!        ▼                                              ▼
//! ┌─────────────────────┐                   ┌────────────────────────┐
//! │  signal dispatcher  │                   │  subscriber listeners  │
//! │  SIGINT/SIGTERM ──► │ shutdown()        │  (one per Subscribe)   │
//! │  SIGUSR1 ─────────► │ drain()           └────────────────────────┘
//! └─────────────────────┘
//! ```
//!
//! ### Wind-down protocol
//! ```text
//! Running ──drain()/shutdown()──► Draining ──► { Completed | TimedOut }
//!
//! phase 1: cancel runtime scope
//!   ├─► every tracked service's waiter fires → svc.stop(shutdown scope)
//!   └─► launched tasks observe the cancellation hint cooperatively
//!
//! phase 2 (shutdown only): race
//!   ├─ tracker reaches zero first → shutdown scope cancelled, "completed"
//!   └─ grace timeout first        → shutdown scope force-cancelled,
//!                                   "grace exceeded", and if `force`:
//!                                   exit_fn(EXIT_CODE_SIGTERM)   // 143
//!
//! wait()/completion(): ready after both scopes are cancelled
//! ```
//!
//! ## Features
//! | Area             | Description                                                       | Key types / traits                      |
//! |------------------|-------------------------------------------------------------------|-----------------------------------------|
//! | **Registration** | Launch tracked tasks, attach start/stop services.                 | [`Coordinator`], [`Trackable`], [`ServiceFn`] |
//! | **Wind-down**    | Drain without terminating, or shut down with a grace race.        | [`Coordinator::drain`], [`Coordinator::shutdown`] |
//! | **Signals**      | SIGINT/SIGTERM → shutdown, SIGUSR1 → drain, injectable for tests. | [`SignalEvent`], [`CoordinatorBuilder`] |
//! | **Observability**| Severity-leveled structured events, fan-out to subscribers.       | [`Event`], [`Severity`], [`Subscribe`]  |
//! | **Errors**       | Typed errors for registration, wind-down, and services.           | [`CoordinatorError`], [`ServiceError`]  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use winddown::{Config, Coordinator, ServiceError, ServiceFn, ServiceRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = Config::default();
//!     cfg.timeout = Duration::from_secs(5);
//!     cfg.force = false;
//!
//!     // `without_signals` keeps the example self-driving; real services use
//!     // `Coordinator::new(cfg)` to get SIGINT/SIGTERM/SIGUSR1 dispatch.
//!     let coordinator = Coordinator::builder(cfg).without_signals().build()?;
//!
//!     // A background worker that honors the cancellation hint.
//!     coordinator.launch(|ctx: CancellationToken| async move {
//!         ctx.cancelled().await;
//!     })?;
//!
//!     // A service with explicit start/stop operations.
//!     let server: ServiceRef = ServiceFn::arc(
//!         "echo-server",
//!         |_ctx| async move { Ok::<_, ServiceError>(()) },
//!         |_ctx| async move { Ok::<_, ServiceError>(()) },
//!     );
//!     coordinator.track(Some(server)).await?;
//!
//!     coordinator.shutdown().await?;
//!     coordinator.wait().await;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod services;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use core::{Coordinator, CoordinatorBuilder, EXIT_CODE_SIGTERM, SignalEvent};
pub use error::{CoordinatorError, ServiceError};
pub use events::{Event, EventKind, Severity};
pub use services::{ServiceFn, ServiceRef, Trackable};
pub use subscribers::Subscribe;

// Optional: expose a simple built-in event printer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
