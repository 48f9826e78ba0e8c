//! Signal identifiers and the sources that deliver them.
//!
//! ## Contents
//! - [`SignalId`] names a signal (parse/display for config and logs)
//! - [`SignalSource`], [`Delivery`] the subscription contract adapters consume
//! - [`OsSignals`] process signals via `tokio::signal`
//! - [`ManualSignals`] in-process source raised by hand

mod id;
mod manual;
mod os;
mod source;

pub use id::SignalId;
pub use manual::ManualSignals;
pub use os::OsSignals;
pub use source::{Delivery, SignalSource};
