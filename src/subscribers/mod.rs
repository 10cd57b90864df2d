//! Subscribers: the injected observability seam.
//!
//! The coordinator publishes [`Event`](crate::Event)s; implementations of
//! [`Subscribe`] decide what to do with them. The builder spawns one listener
//! task per subscriber.

mod subscribe;

pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
