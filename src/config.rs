//! # Shutdown configuration.
//!
//! Provides [`Config`]: which signals drive each phase of a
//! [`ShutdownCoordinator`](crate::ShutdownCoordinator).
//!
//! The defaults are the conventional pair: `SIGINT` starts the graceful
//! phase, `SIGTERM` starts the harsh phase.

use crate::error::SignalError;
use crate::signals::SignalId;

/// Signal bindings for the two shutdown phases.
///
/// ## Field semantics
/// - `graceful`: signals that cancel the graceful handle (stop accepting work, drain)
/// - `harsh`: signals that cancel the harsh handle (abort what is still running)
///
/// Neither list may be empty; the coordinator rejects an empty phase with
/// [`SignalError::NoSignals`]. A signal listed in both phases cancels both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Signals that start the graceful phase.
    pub graceful: Vec<SignalId>,

    /// Signals that start the harsh phase.
    pub harsh: Vec<SignalId>,
}

impl Config {
    /// Parses a comma-separated list of signal names, e.g. `"SIGINT, hup, 34"`.
    ///
    /// Empty items are skipped.
    ///
    /// # Errors
    /// [`SignalError::UnknownName`] for the first item that is not a signal.
    ///
    /// # Example
    /// ```
    /// use sigcancel::{Config, SignalId};
    ///
    /// let graceful = Config::parse_signals("SIGINT, hup").unwrap();
    /// assert_eq!(graceful, vec![SignalId::Interrupt, SignalId::Hangup]);
    /// ```
    pub fn parse_signals(list: &str) -> Result<Vec<SignalId>, SignalError> {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `graceful = [SIGINT]`
    /// - `harsh = [SIGTERM]`
    fn default() -> Self {
        Self {
            graceful: vec![SignalId::Interrupt],
            harsh: vec![SignalId::Terminate],
        }
    }
}
