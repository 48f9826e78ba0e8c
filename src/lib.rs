//! # sigcancel
//!
//! **sigcancel** turns OS termination signals into
//! [`CancellationToken`](tokio_util::sync::CancellationToken) cancellation.
//!
//! It provides a single-shot latch, [`SignalCancel`], that cancels its token
//! on the first delivery of any subscribed signal, and a two-phase
//! [`ShutdownCoordinator`] built from two of them.
//!
//! ## Architecture
//! ```text
//!   SignalSource (OsSignals | ManualSignals | custom)
//!        │ subscribe(SignalId) ─► Delivery
//!        ▼
//! ┌───────────────────────────────────────────────┐
//! │ SignalCancel                                  │
//! │  - token = parent.child_token()               │
//! │  - listener task: first delivery ─► cancel()  │
//! │  - cancel_now(): same cancel, manually        │
//! └───────────────────────┬───────────────────────┘
//!                         │ handle()
//!                         ▼
//!            long-running work: token.cancelled().await
//!
//! ShutdownCoordinator(parent)
//!   ├─► graceful: SignalCancel(parent, [SIGINT])
//!   └─► harsh:    SignalCancel(parent, [SIGTERM])
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types                              |
//! |-------------------|----------------------------------------------------------|----------------------------------------|
//! | **Adapter**       | Cancel a token on the first signal, or manually.         | [`SignalCancel`], [`on_interrupt`]     |
//! | **Two-phase**     | Graceful and harsh handles under one parent.             | [`ShutdownCoordinator`], [`Config`]    |
//! | **Sources**       | OS signals, or an in-process fake for tests.             | [`OsSignals`], [`ManualSignals`]       |
//! | **Errors**        | Typed subscription errors.                               | [`SignalError`]                        |
//!
//! ## Example
//! ```rust,no_run
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use sigcancel::ShutdownCoordinator;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let root = CancellationToken::new();
//!     let shutdown = ShutdownCoordinator::new(&root)?;
//!
//!     let graceful = shutdown.graceful_handle();
//!     let worker = tokio::spawn(async move {
//!         while !graceful.is_cancelled() {
//!             tokio::time::sleep(Duration::from_millis(250)).await;
//!         }
//!     });
//!
//!     // SIGINT stops the worker; SIGTERM or the deadline aborts the wait.
//!     let harsh = shutdown.harsh_handle();
//!     tokio::select! {
//!         _ = worker => {}
//!         _ = harsh.cancelled() => {}
//!     }
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod signals;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::{ShutdownCoordinator, SignalCancel, on_interrupt};
pub use error::SignalError;
pub use signals::{Delivery, ManualSignals, OsSignals, SignalId, SignalSource};
