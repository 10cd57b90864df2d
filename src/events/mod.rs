//! Lifecycle events and the broadcast bus that carries them.
//!
//! - [`event`]: event kinds, severities, and metadata;
//! - [`bus`]: non-blocking broadcast wrapper shared by all publishers.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind, Severity};
