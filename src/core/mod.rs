//! Coordination core: scopes, tracking, and wind-down.
//!
//! Internal modules:
//! - [`coordinator`]: the two-scope lifecycle coordinator and grace race;
//! - [`builder`]: wiring of subscribers, exit seam, and signal source;
//! - [`signals`]: OS signal forwarding and the dispatcher loop.

mod builder;
mod coordinator;
mod signals;

pub use builder::CoordinatorBuilder;
pub use coordinator::{Coordinator, EXIT_CODE_SIGTERM};
pub use signals::SignalEvent;
