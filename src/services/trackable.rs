//! # The trackable-service contract.
//!
//! A [`Trackable`] is a unit of work with explicit start/stop operations that
//! registers with the [`Coordinator`](crate::Coordinator) for lifecycle
//! management: the coordinator calls `start` with the runtime scope, and once
//! that scope is cancelled calls `stop` with the shutdown scope.
//! The common handle type is [`ServiceRef`], an `Arc<dyn Trackable>` suitable
//! for sharing across the runtime.

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::ServiceError;

/// Shared handle to a trackable service.
pub type ServiceRef = Arc<dyn Trackable>;

/// # A unit of work with explicit start and stop operations.
///
/// `start` runs under the runtime scope and should return once the service is
/// up (or failed to come up); `stop` runs under the shutdown scope and must
/// return promptly once resources are released — the coordinator does not
/// bound `stop` itself, the overall grace timeout is the only bound.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use winddown::{ServiceError, Trackable};
///
/// struct Listener;
///
/// #[async_trait]
/// impl Trackable for Listener {
///     fn name(&self) -> &str { "listener" }
///
///     async fn start(&self, _ctx: CancellationToken) -> Result<(), ServiceError> {
///         // bind socket, spawn accept loop...
///         Ok(())
///     }
///
///     async fn stop(&self, _ctx: CancellationToken) -> Result<(), ServiceError> {
///         // close socket, drain connections...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Trackable: Send + Sync + 'static {
    /// Returns a human-readable service name, used only for event context.
    fn name(&self) -> &str {
        "service"
    }

    /// Brings the service up under the runtime scope.
    ///
    /// Errors are wrapped and returned to the caller of
    /// [`Coordinator::track`](crate::Coordinator::track); the coordinator
    /// never retries starts.
    async fn start(&self, ctx: CancellationToken) -> Result<(), ServiceError>;

    /// Winds the service down under the shutdown scope.
    ///
    /// Errors are published at error severity and never propagated, so one
    /// stop failure cannot block the other services' wind-down.
    async fn stop(&self, ctx: CancellationToken) -> Result<(), ServiceError>;
}
