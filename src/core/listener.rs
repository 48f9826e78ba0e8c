//! # The per-adapter listener task.
//!
//! One listener runs per [`SignalCancel`](crate::SignalCancel). It performs
//! exactly one wait and at most one cancel, then exits.
//!
//! ```text
//! listen(token, subscriptions)
//!   select {
//!     token.cancelled()        ─► exit (cancelled manually or via parent)
//!     first_signal(subs)       ─► token.cancel(), exit
//!   }
//!
//! first_signal(subs)
//!   loop {
//!     select_all(sub.wait() for sub in subs)
//!       ├─ Some(()) ─► return sub.signal
//!       └─ None     ─► drop closed sub; pend forever if none left
//!   }
//! ```
//!
//! ## Rules
//! - No loop after the cancel, no re-arming.
//! - Exiting drops every [`Delivery`]. For [`OsSignals`](crate::OsSignals) that
//!   releases the receiver only: the process-wide handler stays installed, so the
//!   signal is swallowed instead of taking its default action.
//! - A closed delivery never cancels.

use futures::future::select_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::signals::{Delivery, SignalId};

/// A delivery tagged with the signal it was subscribed for.
pub(crate) struct Subscription {
    pub(crate) signal: SignalId,
    pub(crate) delivery: Box<dyn Delivery>,
}

/// Waits for the first delivered signal or for `token` to be cancelled elsewhere.
pub(crate) async fn listen(token: CancellationToken, mut subs: Vec<Subscription>) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("signal listener retired: token already cancelled");
        }
        signal = first_signal(&mut subs) => {
            info!(%signal, "signal received, cancelling");
            token.cancel();
        }
    }
}

/// Resolves with the first signal any live subscription delivers.
async fn first_signal(subs: &mut Vec<Subscription>) -> SignalId {
    loop {
        if subs.is_empty() {
            return std::future::pending().await;
        }

        let (delivered, idx) = {
            let waits = subs.iter_mut().map(|s| s.delivery.wait());
            let (delivered, idx, _) = select_all(waits).await;
            (delivered, idx)
        };

        match delivered {
            Some(()) => return subs[idx].signal,
            None => {
                let closed = subs.swap_remove(idx);
                debug!(signal = %closed.signal, "signal delivery closed");
            }
        }
    }
}
