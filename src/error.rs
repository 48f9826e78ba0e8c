//! Error types used by signal subscription.
//!
//! [`SignalError`] is the only error in the crate: it is raised while an
//! adapter subscribes to its signals, or while parsing a signal name.
//! Cancelling and waiting never fail.
//!
//! Like the rest of the crate it provides [`SignalError::as_label`] for logs/metrics.

use thiserror::Error;

use crate::signals::SignalId;

/// # Errors produced while subscribing to signals.
///
/// All of them are construction-time conditions: an adapter either
/// subscribes to every requested signal or is never built.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SignalError {
    /// No signal identifiers were given.
    #[error("at least one signal is required")]
    NoSignals,

    /// The signal is not supported by the platform or by the signal source.
    #[error("signal {signal} is not supported on this platform")]
    Unsupported {
        /// The rejected identifier.
        signal: SignalId,
    },

    /// The operating system refused to register a handler for the signal.
    #[error("failed to subscribe to {signal}: {source}")]
    Subscribe {
        /// The signal being registered.
        signal: SignalId,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A signal name could not be parsed.
    #[error("unknown signal name {name:?}")]
    UnknownName {
        /// The name as given.
        name: String,
    },
}

impl SignalError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use sigcancel::{SignalError, SignalId};
    ///
    /// let err = SignalError::Unsupported { signal: SignalId::Raw(9) };
    /// assert_eq!(err.as_label(), "signal_unsupported");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SignalError::NoSignals => "signal_none",
            SignalError::Unsupported { .. } => "signal_unsupported",
            SignalError::Subscribe { .. } => "signal_subscribe_failed",
            SignalError::UnknownName { .. } => "signal_unknown_name",
        }
    }

    /// The signal this error is about, if any.
    pub fn signal(&self) -> Option<SignalId> {
        match self {
            SignalError::Unsupported { signal } | SignalError::Subscribe { signal, .. } => {
                Some(*signal)
            }
            SignalError::NoSignals | SignalError::UnknownName { .. } => None,
        }
    }
}
