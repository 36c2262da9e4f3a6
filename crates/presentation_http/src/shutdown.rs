//! Graceful shutdown with a bounded drain
//!
//! The drain timer starts when the shutdown signal fires, not when the
//! server starts.

use std::{future::IntoFuture, time::Duration};

use tokio::{signal, sync::Notify};
use tracing::{error, info};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain<T> {
    /// Every connection closed; carries the server's result
    Completed(T),
    /// Connections were still open when the drain timeout elapsed
    TimedOut,
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Run `server` to completion, giving up `timeout` after `draining` is notified
///
/// `draining` must be notified with [`Notify::notify_one`] so the permit is
/// kept if the drain timer has not been polled yet.
pub async fn drain_within<F>(server: F, draining: &Notify, timeout: Duration) -> Drain<F::Output>
where
    F: IntoFuture,
{
    let deadline = async {
        draining.notified().await;
        info!("Waiting up to {:?} for connections to close", timeout);
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        output = server.into_future() => Drain::Completed(output),
        () = deadline => Drain::TimedOut,
    }
}

#[cfg(test)]
mod tests {
    use std::future::pending;

    use super::*;

    #[tokio::test]
    async fn finished_server_completes() {
        let draining = Notify::new();

        let drain = drain_within(async { 7 }, &draining, Duration::from_secs(5)).await;

        assert_eq!(drain, Drain::Completed(7));
    }

    #[tokio::test]
    async fn stuck_server_times_out_after_signal() {
        let draining = Notify::new();
        draining.notify_one();

        let drain = drain_within(pending::<()>(), &draining, Duration::from_millis(10)).await;

        assert_eq!(drain, Drain::TimedOut);
    }

    #[tokio::test]
    async fn no_timeout_before_signal() {
        let draining = Notify::new();

        let waited = tokio::time::timeout(
            Duration::from_millis(50),
            drain_within(pending::<()>(), &draining, Duration::from_millis(1)),
        )
        .await;

        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn server_finishing_during_drain_completes() {
        let draining = Notify::new();
        let server = async {
            draining.notify_one();
            tokio::time::sleep(Duration::from_millis(5)).await;
            "closed"
        };

        let drain = drain_within(server, &draining, Duration::from_secs(5)).await;

        assert_eq!(drain, Drain::Completed("closed"));
    }
}
