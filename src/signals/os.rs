//! # Process signals through tokio.
//!
//! [`OsSignals`] is the production [`SignalSource`]. Each subscription is an
//! independent tokio signal listener, so several adapters may watch the same
//! signal and each of them is notified.
//!
//! ## Signals
//! **Unix platforms:**
//! - every named [`SignalId`] (`SIGINT`, `SIGTERM`, `SIGQUIT`, `SIGHUP`, `SIGUSR1`, `SIGUSR2`)
//! - [`SignalId::Raw`] with a positive number; the OS may still refuse it
//!   (`SIGKILL`, `SIGSTOP`, `SIGSEGV`, ...), which surfaces as [`SignalError::Subscribe`]
//!
//! **Windows platforms:**
//! - [`SignalId::Interrupt`] via `Ctrl-C`
//! - [`SignalId::Terminate`] via console close
//!
//! Subscribing requires a running tokio runtime with signal support enabled.

use async_trait::async_trait;

use crate::error::SignalError;
use crate::signals::{Delivery, SignalId, SignalSource};

/// Signal source backed by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSignals;

impl OsSignals {
    /// Construct a new [`OsSignals`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
mod platform {
    use tokio::signal::unix::{Signal, SignalKind, signal};

    use super::*;

    pub(super) struct UnixDelivery(Signal);

    #[async_trait]
    impl Delivery for UnixDelivery {
        async fn wait(&mut self) -> Option<()> {
            self.0.recv().await
        }
    }

    fn kind(id: SignalId) -> Result<SignalKind, SignalError> {
        Ok(match id {
            SignalId::Interrupt => SignalKind::interrupt(),
            SignalId::Terminate => SignalKind::terminate(),
            SignalId::Quit => SignalKind::quit(),
            SignalId::Hangup => SignalKind::hangup(),
            SignalId::User1 => SignalKind::user_defined1(),
            SignalId::User2 => SignalKind::user_defined2(),
            SignalId::Raw(n) if n > 0 => SignalKind::from_raw(n),
            SignalId::Raw(_) => return Err(SignalError::Unsupported { signal: id }),
        })
    }

    pub(super) fn subscribe(id: SignalId) -> Result<Box<dyn Delivery>, SignalError> {
        let sig = signal(kind(id)?).map_err(|source| SignalError::Subscribe { signal: id, source })?;
        Ok(Box::new(UnixDelivery(sig)))
    }
}

#[cfg(windows)]
mod platform {
    use tokio::signal::windows::{CtrlC, CtrlClose, ctrl_c, ctrl_close};

    use super::*;

    pub(super) enum WindowsDelivery {
        CtrlC(CtrlC),
        Close(CtrlClose),
    }

    #[async_trait]
    impl Delivery for WindowsDelivery {
        async fn wait(&mut self) -> Option<()> {
            match self {
                WindowsDelivery::CtrlC(s) => s.recv().await,
                WindowsDelivery::Close(s) => s.recv().await,
            }
        }
    }

    pub(super) fn subscribe(id: SignalId) -> Result<Box<dyn Delivery>, SignalError> {
        let subscribed = match id {
            SignalId::Interrupt => ctrl_c().map(WindowsDelivery::CtrlC),
            SignalId::Terminate => ctrl_close().map(WindowsDelivery::Close),
            _ => return Err(SignalError::Unsupported { signal: id }),
        };
        let delivery = subscribed.map_err(|source| SignalError::Subscribe { signal: id, source })?;
        Ok(Box::new(delivery))
    }
}

#[cfg(not(any(unix, windows)))]
mod platform {
    use super::*;

    pub(super) fn subscribe(id: SignalId) -> Result<Box<dyn Delivery>, SignalError> {
        Err(SignalError::Unsupported { signal: id })
    }
}

impl SignalSource for OsSignals {
    fn subscribe(&self, signal: SignalId) -> Result<Box<dyn Delivery>, SignalError> {
        platform::subscribe(signal)
    }

    fn name(&self) -> &'static str {
        "os"
    }
}
