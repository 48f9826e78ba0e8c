//! # Example: two_phase
//!
//! Demonstrates two-phase shutdown with [`ShutdownCoordinator`].
//!
//! Shows how to:
//! - Stop accepting work on `SIGINT` (graceful handle)
//! - Give in-flight work a drain deadline
//! - Abort early on `SIGTERM` (harsh handle)
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► ShutdownCoordinator::new(root)
//!   ├─► spawn workers (each loops until graceful handle is cancelled)
//!   ├─► graceful.cancelled().await          ◄── Ctrl-C / SIGINT
//!   └─► select {
//!         all workers joined  ─► clean exit
//!         harsh.cancelled()   ─► abort       ◄── SIGTERM
//!         sleep(drain)        ─► abort
//!       }
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example two_phase
//! # then press Ctrl-C, or `kill -TERM <pid>` to skip the drain
//! ```

use std::time::Duration;

use sigcancel::ShutdownCoordinator;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const WORKERS: usize = 3;
const DRAIN: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sigcancel=debug,two_phase=info".into()),
        )
        .init();

    let root = CancellationToken::new();
    let shutdown = ShutdownCoordinator::new(&root)?;
    info!(pid = std::process::id(), "running; Ctrl-C to drain, SIGTERM to abort");

    let mut workers = JoinSet::new();
    for id in 0..WORKERS {
        let graceful = shutdown.graceful_handle();
        workers.spawn(async move {
            let mut jobs = 0u64;
            while !graceful.is_cancelled() {
                tokio::time::sleep(Duration::from_millis(300 * (id as u64 + 1))).await;
                jobs += 1;
            }
            // finish the job in hand before exiting
            tokio::time::sleep(Duration::from_secs(id as u64 + 1)).await;
            info!(worker = id, jobs, "worker drained");
        });
    }

    shutdown.graceful_handle().cancelled().await;
    info!(deadline = ?DRAIN, "graceful shutdown started");

    let harsh = shutdown.harsh_handle();
    tokio::select! {
        _ = async { while workers.join_next().await.is_some() {} } => {
            info!("all workers drained");
        }
        _ = harsh.cancelled() => {
            warn!(remaining = workers.len(), "terminate received, aborting workers");
            workers.abort_all();
        }
        _ = tokio::time::sleep(DRAIN) => {
            warn!(remaining = workers.len(), "drain deadline exceeded, aborting workers");
            workers.abort_all();
        }
    }
    Ok(())
}
