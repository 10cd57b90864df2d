//! # Closure-backed service (`ServiceFn`)
//!
//! [`ServiceFn`] builds a [`Trackable`] from two closures, one per lifecycle
//! operation. Each invocation produces a fresh future owning its own state;
//! shared state goes through an explicit `Arc` inside the closures.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use winddown::{ServiceError, ServiceFn, ServiceRef, Trackable};
//!
//! let svc: ServiceRef = ServiceFn::arc(
//!     "heartbeat",
//!     |_ctx: CancellationToken| async move { Ok::<_, ServiceError>(()) },
//!     |_ctx: CancellationToken| async move { Ok::<_, ServiceError>(()) },
//! );
//!
//! assert_eq!(svc.name(), "heartbeat");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ServiceError;
use crate::services::trackable::Trackable;

/// Closure-backed service implementation.
///
/// Wraps a start closure and a stop closure that each *create* a new future
/// per call.
pub struct ServiceFn<S, T> {
    name: Cow<'static, str>,
    start: S,
    stop: T,
}

impl<S, T> ServiceFn<S, T> {
    /// Creates a new closure-backed service.
    ///
    /// Prefer [`ServiceFn::arc`] when you immediately need a
    /// [`ServiceRef`](crate::ServiceRef).
    pub fn new(name: impl Into<Cow<'static, str>>, start: S, stop: T) -> Self {
        Self {
            name: name.into(),
            start,
            stop,
        }
    }

    /// Creates the service and returns it as a shared handle (`Arc<Self>`).
    pub fn arc(name: impl Into<Cow<'static, str>>, start: S, stop: T) -> Arc<Self> {
        Arc::new(Self::new(name, start, stop))
    }
}

#[async_trait]
impl<S, T, SF, TF> Trackable for ServiceFn<S, T>
where
    S: Fn(CancellationToken) -> SF + Send + Sync + 'static,
    T: Fn(CancellationToken) -> TF + Send + Sync + 'static,
    SF: Future<Output = Result<(), ServiceError>> + Send + 'static,
    TF: Future<Output = Result<(), ServiceError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn start(&self, ctx: CancellationToken) -> Result<(), ServiceError> {
        (self.start)(ctx).await
    }

    async fn stop(&self, ctx: CancellationToken) -> Result<(), ServiceError> {
        (self.stop)(ctx).await
    }
}
