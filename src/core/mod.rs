//! Signal-to-cancellation core.
//!
//! The public API from this module is [`SignalCancel`] and [`ShutdownCoordinator`].
//!
//! Internal modules:
//! - [`adapter`]: one token, cancelled on the first subscribed signal;
//! - [`coordinator`]: graceful + harsh adapters under one parent;
//! - [`listener`]: the background task each adapter spawns.

mod adapter;
mod coordinator;
mod listener;

pub use adapter::{SignalCancel, on_interrupt};
pub use coordinator::ShutdownCoordinator;
