//! # SignalCancel: cancels a token on the first subscribed signal.
//!
//! [`SignalCancel`] derives a child [`CancellationToken`] from a parent,
//! subscribes to one or more signals, and spawns a single listener task that
//! cancels the token on the first delivery.
//!
//! ```text
//! SignalCancel::with_source(parent, signals, source)
//!   ├─► source.subscribe(sig) for every sig   (any error ─► return Err, nothing spawned)
//!   ├─► token = parent.child_token()
//!   └─► tracker.spawn(listen(token, subscriptions))
//!
//! cancel_now() ──────────────┐
//! listener: first signal ────┼─► token.cancel()   (idempotent, one observable transition)
//! parent.cancel() ───────────┘
//!                                  └─► listener exits, receivers dropped
//!                                      (OS handlers stay installed)
//! ```
//!
//! ## Rules
//! - Construction must happen inside a tokio runtime.
//! - `handle()` returns a child view of the token: cancelling the view does
//!   not cancel the adapter.
//! - Dropping the adapter does not stop the listener; it keeps watching until
//!   a signal arrives or the token is cancelled.
//! - OS signal handlers are process-wide and never uninstalled. Once an adapter
//!   has subscribed to a signal, that signal no longer takes its default action
//!   (e.g. terminating on `SIGINT`), even after the listener retires.
//!
//! ## Example
//! ```rust
//! use sigcancel::{ManualSignals, SignalCancel, SignalId};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), sigcancel::SignalError> {
//!     let signals = ManualSignals::default();
//!     let root = CancellationToken::new();
//!     let adapter = SignalCancel::with_source(&root, &[SignalId::Interrupt], &signals)?;
//!
//!     let handle = adapter.handle();
//!     assert!(!handle.is_cancelled());
//!
//!     signals.raise(SignalId::Interrupt);
//!     handle.cancelled().await;
//!     assert!(adapter.is_cancelled());
//!     Ok(())
//! }
//! ```

use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::debug;

use crate::core::listener::{self, Subscription};
use crate::error::SignalError;
use crate::signals::{OsSignals, SignalId, SignalSource};

/// Cancels its token on the first delivery of any subscribed signal.
#[derive(Debug)]
pub struct SignalCancel {
    token: CancellationToken,
    tracker: TaskTracker,
    signals: Vec<SignalId>,
}

impl SignalCancel {
    /// Subscribes to `signals` through the operating system.
    ///
    /// # Errors
    /// See [`SignalCancel::with_source`].
    ///
    /// # Panics
    /// Outside a tokio runtime (signal registration and the listener spawn need one).
    pub fn new(parent: &CancellationToken, signals: &[SignalId]) -> Result<Self, SignalError> {
        Self::with_source(parent, signals, &OsSignals)
    }

    /// Subscribes to `signals` through `source` and starts listening.
    ///
    /// # Errors
    /// - [`SignalError::NoSignals`] when `signals` is empty;
    /// - whatever [`SignalSource::subscribe`] returns for the first signal it rejects.
    ///
    /// # Panics
    /// Outside a tokio runtime (the listener is spawned on the current one).
    pub fn with_source(
        parent: &CancellationToken,
        signals: &[SignalId],
        source: &dyn SignalSource,
    ) -> Result<Self, SignalError> {
        if signals.is_empty() {
            return Err(SignalError::NoSignals);
        }

        let subs = signals
            .iter()
            .map(|&signal| {
                let delivery = source.subscribe(signal)?;
                Ok(Subscription { signal, delivery })
            })
            .collect::<Result<Vec<_>, SignalError>>()?;
        debug!(source = source.name(), ?signals, "subscribed to signals");

        let token = parent.child_token();
        let tracker = TaskTracker::new();
        tracker.spawn(listener::listen(token.clone(), subs));
        tracker.close();

        Ok(Self {
            token,
            tracker,
            signals: signals.to_vec(),
        })
    }

    /// Returns a handle for observing cancellation.
    ///
    /// The handle is a child of the adapter's token: it is cancelled whenever
    /// the adapter is, but cancelling it has no effect on the adapter.
    pub fn handle(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Whether the adapter's token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels the token now, pre-empting the listener.
    ///
    /// Safe to call any number of times, from any thread, before or after a signal.
    pub fn cancel_now(&self) {
        if !self.token.is_cancelled() {
            debug!(signals = ?self.signals, "manual cancel");
        }
        self.token.cancel();
    }

    /// Resolves once the listener task has exited.
    ///
    /// The listener exits after a signal, a manual cancel, or cancellation of the parent.
    pub async fn retired(&self) {
        self.tracker.wait().await;
    }

    /// The signals this adapter listens for.
    pub fn signals(&self) -> &[SignalId] {
        &self.signals
    }
}

/// Creates a fresh root token cancelled on the interrupt signal (Ctrl-C).
///
/// The returned adapter is both the observation side ([`SignalCancel::handle`])
/// and the cancel function ([`SignalCancel::cancel_now`]).
///
/// # Errors
/// [`SignalError::Subscribe`] if the OS refuses the registration.
///
/// # Panics
/// Outside a tokio runtime.
pub fn on_interrupt() -> Result<SignalCancel, SignalError> {
    SignalCancel::new(&CancellationToken::new(), &[SignalId::Interrupt])
}
