//! # ShutdownCoordinator: two-phase shutdown from two signal adapters.
//!
//! Pairs a graceful [`SignalCancel`] (interrupt) with a harsh one (terminate).
//! Both derive from the same parent token but not from each other.
//!
//! ```text
//!                 parent
//!               ┌───┴────┐
//!          graceful     harsh
//!         (SIGINT)     (SIGTERM)
//!
//! parent.cancel()          ─► both cancelled
//! graceful.cancel_now()    ─► graceful only
//! SIGTERM                  ─► harsh only
//! ```
//!
//! Typical use: wait on the graceful handle to start draining, then race the
//! harsh handle against a deadline. The coordinator only supplies the two
//! handles; sequencing and deadlines are up to the caller.

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::SignalCancel;
use crate::error::SignalError;
use crate::signals::{OsSignals, SignalSource};

/// Graceful and harsh shutdown handles driven by OS signals.
#[derive(Debug)]
pub struct ShutdownCoordinator {
    graceful: SignalCancel,
    harsh: SignalCancel,
}

impl ShutdownCoordinator {
    /// Graceful on `SIGINT`, harsh on `SIGTERM`, through the operating system.
    ///
    /// # Errors
    /// See [`SignalCancel::with_source`].
    ///
    /// # Panics
    /// Outside a tokio runtime.
    pub fn new(parent: &CancellationToken) -> Result<Self, SignalError> {
        Self::with_source(parent, &OsSignals)
    }

    /// Default phase bindings, through `source`.
    ///
    /// # Errors
    /// See [`SignalCancel::with_source`].
    ///
    /// # Panics
    /// Outside a tokio runtime.
    pub fn with_source(
        parent: &CancellationToken,
        source: &dyn SignalSource,
    ) -> Result<Self, SignalError> {
        Self::with_config(parent, &Config::default(), source)
    }

    /// Phase bindings from `cfg`, through `source`.
    ///
    /// If the harsh phase fails to subscribe, the already started graceful
    /// listener is retired before the error is returned.
    ///
    /// # Errors
    /// See [`SignalCancel::with_source`].
    ///
    /// # Panics
    /// Outside a tokio runtime.
    pub fn with_config(
        parent: &CancellationToken,
        cfg: &Config,
        source: &dyn SignalSource,
    ) -> Result<Self, SignalError> {
        let graceful = SignalCancel::with_source(parent, &cfg.graceful, source)?;
        let harsh = match SignalCancel::with_source(parent, &cfg.harsh, source) {
            Ok(harsh) => harsh,
            Err(e) => {
                graceful.cancel_now();
                return Err(e);
            }
        };
        Ok(Self { graceful, harsh })
    }

    /// Handle cancelled when the graceful phase begins.
    pub fn graceful_handle(&self) -> CancellationToken {
        self.graceful.handle()
    }

    /// Handle cancelled when the harsh phase begins.
    pub fn harsh_handle(&self) -> CancellationToken {
        self.harsh.handle()
    }

    /// The graceful-phase adapter (for manual cancellation).
    pub fn graceful(&self) -> &SignalCancel {
        &self.graceful
    }

    /// The harsh-phase adapter (for manual cancellation).
    pub fn harsh(&self) -> &SignalCancel {
        &self.harsh
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;
    use crate::signals::{ManualSignals, SignalId};

    const BOUND: Duration = Duration::from_secs(1);
    const QUIET: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn test_parent_cancel_cancels_both() {
        let signals = ManualSignals::default();
        let parent = CancellationToken::new();
        let coord = ShutdownCoordinator::with_source(&parent, &signals).unwrap();
        let (graceful, harsh) = (coord.graceful_handle(), coord.harsh_handle());
        assert!(!graceful.is_cancelled());
        assert!(!harsh.is_cancelled());

        parent.cancel();
        assert!(graceful.is_cancelled());
        assert!(harsh.is_cancelled());
    }

    #[tokio::test]
    async fn test_graceful_cancel_leaves_harsh_running() {
        let signals = ManualSignals::default();
        let parent = CancellationToken::new();
        let coord = ShutdownCoordinator::with_source(&parent, &signals).unwrap();

        coord.graceful().cancel_now();
        assert!(coord.graceful_handle().is_cancelled());
        assert!(!coord.harsh_handle().is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn test_interrupt_starts_graceful_phase_only() {
        let signals = ManualSignals::default();
        let coord = ShutdownCoordinator::with_source(&CancellationToken::new(), &signals).unwrap();

        signals.raise(SignalId::Interrupt);
        timeout(BOUND, coord.graceful_handle().cancelled()).await.unwrap();
        assert!(timeout(QUIET, coord.harsh_handle().cancelled()).await.is_err());
    }

    #[tokio::test]
    async fn test_terminate_starts_harsh_phase_only() {
        let signals = ManualSignals::default();
        let coord = ShutdownCoordinator::with_source(&CancellationToken::new(), &signals).unwrap();

        signals.raise(SignalId::Terminate);
        timeout(BOUND, coord.harsh_handle().cancelled()).await.unwrap();
        assert!(!coord.graceful().is_cancelled());
    }

    #[tokio::test]
    async fn test_custom_bindings() {
        let signals = ManualSignals::default();
        let cfg = Config {
            graceful: vec![SignalId::Hangup, SignalId::Interrupt],
            harsh: vec![SignalId::Quit],
        };
        let coord =
            ShutdownCoordinator::with_config(&CancellationToken::new(), &cfg, &signals).unwrap();
        assert_eq!(coord.graceful().signals(), &[SignalId::Hangup, SignalId::Interrupt]);

        signals.raise(SignalId::Terminate);
        signals.raise(SignalId::Hangup);
        timeout(BOUND, coord.graceful_handle().cancelled()).await.unwrap();
        assert!(!coord.harsh().is_cancelled());

        signals.raise(SignalId::Quit);
        timeout(BOUND, coord.harsh_handle().cancelled()).await.unwrap();
    }

    #[tokio::test]
    async fn test_harsh_failure_retires_graceful_listener() {
        let signals = ManualSignals::new([SignalId::Interrupt]);
        let err = ShutdownCoordinator::with_source(&CancellationToken::new(), &signals).unwrap_err();
        assert!(matches!(err, SignalError::Unsupported { signal: SignalId::Terminate }));

        timeout(BOUND, async {
            while signals.subscribers(SignalId::Interrupt) > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("graceful listener released its subscription");
    }

    #[tokio::test]
    async fn test_empty_phase_is_rejected() {
        let signals = ManualSignals::default();
        let cfg = Config {
            graceful: vec![SignalId::Interrupt],
            harsh: Vec::new(),
        };
        let err = ShutdownCoordinator::with_config(&CancellationToken::new(), &cfg, &signals)
            .unwrap_err();
        assert!(matches!(err, SignalError::NoSignals));
    }
}
