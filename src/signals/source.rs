//! # Signal source contract
//!
//! [`SignalSource`] is the injected capability through which adapters learn
//! about signals. Signal delivery is process-wide state; keeping it behind a
//! trait lets adapters run against [`OsSignals`](crate::OsSignals) in
//! production and [`ManualSignals`](crate::ManualSignals) in tests.
//!
//! ## Contract
//! - [`SignalSource::subscribe`] registers interest **synchronously** and
//!   returns a [`Delivery`]. Failing to register is reported immediately.
//! - Every subscriber gets its own [`Delivery`]; one raised signal resolves
//!   one pending [`Delivery::wait`] on each of them.
//! - [`Delivery::wait`] returns `None` once the source can never deliver again.
//!
//! ## Example (skeleton)
//! ```rust
//! use async_trait::async_trait;
//! use sigcancel::{Delivery, SignalError, SignalId, SignalSource};
//!
//! struct Never;
//!
//! struct Silent;
//!
//! #[async_trait]
//! impl Delivery for Silent {
//!     async fn wait(&mut self) -> Option<()> {
//!         None
//!     }
//! }
//!
//! impl SignalSource for Never {
//!     fn subscribe(&self, _signal: SignalId) -> Result<Box<dyn Delivery>, SignalError> {
//!         Ok(Box::new(Silent))
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::error::SignalError;
use crate::signals::SignalId;

/// A per-subscriber stream of signal notifications.
#[async_trait]
pub trait Delivery: Send + 'static {
    /// Waits for the next delivery.
    ///
    /// Returns `Some(())` per raised signal and `None` when the source is closed.
    async fn wait(&mut self) -> Option<()>;
}

/// Something that can hand out signal deliveries.
pub trait SignalSource: Send + Sync {
    /// Registers interest in `signal`.
    ///
    /// # Errors
    /// [`SignalError::Unsupported`] when the source cannot deliver `signal`,
    /// [`SignalError::Subscribe`] when registration with the OS fails.
    fn subscribe(&self, signal: SignalId) -> Result<Box<dyn Delivery>, SignalError>;

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
