//! Scoped cancellation for component operations
//!
//! A pipeline runner cancels a step from outside the step's own control
//! flow. [`ExecutionContext`] is the scoped registration for that signal:
//! entering the scope arms a cancel handler, leaving it on any path
//! (normal return or error) releases the registration.

use std::future::Future;
use tokio::sync::watch;
use tracing::{info, warn};

/// Handle that trips the paired [`CancelSignal`]
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation. Idempotent; repeated calls are no-ops.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Level-triggered cancellation flag
///
/// Cloneable; every clone observes the same flag. A signal whose every
/// handle is dropped without tripping never fires.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

/// Create a connected handle/signal pair
pub fn cancel_channel() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

impl CancelSignal {
    /// A signal that trips when the process receives SIGINT or SIGTERM —
    /// what a pipeline runner delivers to a cancelled step's container.
    pub fn from_process_signals() -> Self {
        let (handle, signal) = cancel_channel();

        tokio::spawn(async move {
            wait_for_termination().await;
            info!("Termination signal received, propagating cancellation");
            handle.cancel();
        });

        signal
    }

    /// Completes once cancellation has been signalled.
    ///
    /// Returns immediately if the signal tripped before this call.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // All handles dropped without tripping: cancellation can
                // never arrive anymore.
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(unix)]
async fn wait_for_termination() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        warn!("Failed to listen for SIGINT: {}", e);
                        std::future::pending::<()>().await;
                    }
                }
                _ = term.recv() => {}
            }
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Scoped execution wrapper that propagates external cancellation
///
/// Runs an operation with a cancel handler registered for the duration of
/// the scope. If the signal trips while the operation is in flight, the
/// handler runs exactly once and the operation keeps being driven to
/// completion, so a cancelled remote job is still observed reaching its
/// terminal state.
pub struct ExecutionContext {
    signal: CancelSignal,
}

impl ExecutionContext {
    /// Create a context listening on `signal`
    pub fn new(signal: CancelSignal) -> Self {
        Self { signal }
    }

    /// Run `op` under this context, with `on_cancel` armed until `op`
    /// completes.
    ///
    /// Completion wins races: once `op` has produced its output the scope
    /// exits, a pending signal is ignored, and `on_cancel` is not invoked.
    pub async fn run<T, Op, C, Fut>(mut self, op: Op, on_cancel: C) -> T
    where
        Op: Future<Output = T>,
        C: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        tokio::pin!(op);

        tokio::select! {
            biased;
            out = &mut op => return out,
            _ = self.signal.cancelled() => {
                info!("Cancellation requested, invoking cancel handler");
                on_cancel().await;
            }
        }

        op.await
    }
}
