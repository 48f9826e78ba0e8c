//! # ManualSignals: in-process signal source
//!
//! A [`SignalSource`] whose signals are raised by calling
//! [`ManualSignals::raise`] instead of by the OS. Use it in tests, or to wire
//! adapters to an application-level trigger.
//!
//! The supported set is fixed at construction, so raising and subscribing
//! never take a lock: each supported signal owns one broadcast channel.
//!
//! ```rust
//! use sigcancel::{ManualSignals, SignalId};
//!
//! let signals = ManualSignals::new([SignalId::User1]);
//! assert!(signals.raise(SignalId::User1));
//! assert!(!signals.raise(SignalId::User2));
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::error::SignalError;
use crate::signals::{Delivery, SignalId, SignalSource};

/// Each raise only needs to wake pending waiters; lagging receivers still see a delivery.
const CHANNEL_CAPACITY: usize = 1;

/// Signal source driven by [`ManualSignals::raise`].
#[derive(Debug)]
pub struct ManualSignals {
    channels: HashMap<SignalId, broadcast::Sender<()>>,
}

impl ManualSignals {
    /// Creates a source that supports exactly the given signals.
    pub fn new(supported: impl IntoIterator<Item = SignalId>) -> Self {
        let channels = supported
            .into_iter()
            .map(|id| (id, broadcast::channel::<()>(CHANNEL_CAPACITY).0))
            .collect();
        Self { channels }
    }

    /// Delivers `signal` to every current subscriber.
    ///
    /// Returns `false` if `signal` is not supported by this source.
    /// Subscribers created after the call do not see it.
    pub fn raise(&self, signal: SignalId) -> bool {
        match self.channels.get(&signal) {
            Some(tx) => {
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    /// Number of live subscriptions for `signal`.
    pub fn subscribers(&self, signal: SignalId) -> usize {
        self.channels
            .get(&signal)
            .map_or(0, broadcast::Sender::receiver_count)
    }

    /// Whether `signal` can be subscribed to.
    pub fn supports(&self, signal: SignalId) -> bool {
        self.channels.contains_key(&signal)
    }
}

impl Default for ManualSignals {
    /// Supports every named [`SignalId`].
    fn default() -> Self {
        Self::new(SignalId::NAMED)
    }
}

struct ManualDelivery(broadcast::Receiver<()>);

#[async_trait]
impl Delivery for ManualDelivery {
    async fn wait(&mut self) -> Option<()> {
        match self.0.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => Some(()),
            Err(RecvError::Closed) => None,
        }
    }
}

impl SignalSource for ManualSignals {
    fn subscribe(&self, signal: SignalId) -> Result<Box<dyn Delivery>, SignalError> {
        let tx = self
            .channels
            .get(&signal)
            .ok_or(SignalError::Unsupported { signal })?;
        Ok(Box::new(ManualDelivery(tx.subscribe())))
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}
