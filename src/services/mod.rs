//! Trackable services: the consumer-implemented start/stop contract and a
//! closure-backed implementation for quick composition.

mod service_fn;
mod trackable;

pub use service_fn::ServiceFn;
pub use trackable::{ServiceRef, Trackable};
