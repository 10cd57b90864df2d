//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging event handlers into the
//! coordinator: loggers, metrics, audit trails. Each subscriber is driven by
//! a dedicated listener task with its own broadcast receiver, so a slow
//! subscriber lags (and eventually skips) rather than blocking publishers or
//! other subscribers.
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching, retries) — they do **not**
//!   block the publisher nor other subscribers.
//! - A subscriber that falls more than the bus capacity behind skips the
//!   oldest events.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
///
/// Called from a subscriber-dedicated listener task. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event for this subscriber.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
