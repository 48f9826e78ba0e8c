//! Real OS signal delivery.
//!
//! Uses `SIGUSR1`/`SIGUSR2` so the test process is never interrupted; the
//! adapter registers its handler synchronously, so raising right after
//! construction is safe.
#![cfg(unix)]

use std::time::Duration;

use nix::sys::signal::{Signal, raise};
use sigcancel::{Config, OsSignals, ShutdownCoordinator, SignalCancel, SignalId, on_interrupt};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

const BOUND: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_raised_signal_cancels_adapter() {
    let root = CancellationToken::new();
    let adapter = SignalCancel::new(&root, &[SignalId::User1]).unwrap();
    assert!(!adapter.is_cancelled());

    raise(Signal::SIGUSR1).unwrap();
    timeout(BOUND, adapter.handle().cancelled())
        .await
        .expect("SIGUSR1 cancels the adapter");
    assert!(adapter.is_cancelled());
    assert!(!root.is_cancelled(), "cancellation does not flow upwards");

    timeout(BOUND, adapter.retired()).await.unwrap();
}

#[tokio::test]
async fn test_coordinator_phases_follow_configured_signals() {
    let cfg = Config {
        graceful: vec![SignalId::User2],
        harsh: vec![SignalId::Raw(nix::libc::SIGWINCH)],
    };
    let coord = ShutdownCoordinator::with_config(&CancellationToken::new(), &cfg, &OsSignals)
        .unwrap();

    raise(Signal::SIGUSR2).unwrap();
    timeout(BOUND, coord.graceful_handle().cancelled()).await.unwrap();
    assert!(!coord.harsh().is_cancelled());

    raise(Signal::SIGWINCH).unwrap();
    timeout(BOUND, coord.harsh_handle().cancelled()).await.unwrap();
}

#[tokio::test]
async fn test_uncatchable_signal_is_rejected() {
    let err = SignalCancel::new(&CancellationToken::new(), &[SignalId::Raw(nix::libc::SIGKILL)])
        .unwrap_err();
    assert_eq!(err.signal(), Some(SignalId::Raw(nix::libc::SIGKILL)));
}

#[tokio::test]
async fn test_on_interrupt_starts_uncancelled_and_cancels_manually() {
    let interrupt = on_interrupt().unwrap();
    assert_eq!(interrupt.signals(), &[SignalId::Interrupt]);
    assert!(!interrupt.is_cancelled());

    interrupt.cancel_now();
    assert!(interrupt.handle().is_cancelled());
    timeout(BOUND, interrupt.retired()).await.unwrap();
}

#[tokio::test]
async fn test_os_handler_outlives_retired_listener() {
    let first = SignalCancel::new(&CancellationToken::new(), &[SignalId::Quit]).unwrap();
    first.cancel_now();
    timeout(BOUND, first.retired()).await.unwrap();
    drop(first);

    // the process-wide handler is still installed: SIGQUIT no longer dumps core
    raise(Signal::SIGQUIT).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // and later adapters on the same signal still receive it
    let second = SignalCancel::new(&CancellationToken::new(), &[SignalId::Quit]).unwrap();
    raise(Signal::SIGQUIT).unwrap();
    timeout(BOUND, second.handle().cancelled())
        .await
        .expect("SIGQUIT reaches the new adapter");
}
