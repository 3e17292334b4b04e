use std::future;

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    /// Ctrl-C.
    Interrupt,
    /// Ctrl-Z (SIGTSTP).
    Suspend,
}

impl StopSignal {
    pub fn message(self) -> &'static str {
        match self {
            StopSignal::Interrupt => "User aborted. Exiting...",
            StopSignal::Suspend => "User paused execution. Use 'fg' to resume.",
        }
    }
}

/// Resolves on the first interrupt or suspend signal delivered to the process.
pub async fn wait_for_stop() -> StopSignal {
    tokio::select! {
        _ = interrupt() => StopSignal::Interrupt,
        _ = suspend() => StopSignal::Suspend,
    }
}

async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {}", e);
        future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn suspend() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::from_raw(libc::SIGTSTP)) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            warn!("failed to listen for SIGTSTP: {}", e);
            future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn suspend() {
    future::pending::<()>().await;
}
