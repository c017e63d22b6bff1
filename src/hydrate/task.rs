//! Spawned, cancellable hydration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::{hydrate, Extracted, Hydrated};
use crate::error::GatewayError;
use crate::gateway::GatewayClient;
use crate::traits::Response;

/// A hydration running on its own task.
///
/// Subscribers first see the loading default and then, exactly once, the
/// resolved state. After [`cancel`](Self::cancel) or drop, nothing more is
/// published.
///
/// The cancel flag is checked while the channel is locked for the publish.
/// The guarantee is exact on a current-thread runtime, which is how the CLI
/// drives these tasks. On a multi-threaded runtime a `cancel` landing in the
/// instant between that check and the write may still see the result.
pub struct HydrationTask<T> {
    /// Latest published state
    state_rx: watch::Receiver<Hydrated<T>>,
    /// Set once the consumer is gone
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl<T> HydrationTask<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawn a hydration of `endpoint` on the current runtime.
    pub fn spawn<F>(gateway: GatewayClient, endpoint: impl Into<String>, default: T, extract: F) -> Self
    where
        F: FnOnce(&Response, &T) -> Result<Extracted<T>, GatewayError> + Send + 'static,
    {
        let endpoint = endpoint.into();
        let (state_tx, state_rx) = watch::channel(Hydrated::loading(default.clone()));
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_clone = cancelled.clone();

        let handle = tokio::spawn(async move {
            let resolved = hydrate(&gateway, &endpoint, default, extract).await;

            let published = state_tx.send_if_modified(|state| {
                if cancelled_clone.load(Ordering::SeqCst) {
                    return false;
                }
                *state = resolved;
                true
            });
            if !published {
                debug!("Hydration of {} cancelled, dropping result", endpoint);
            }
        });

        Self {
            state_rx,
            cancelled,
            handle,
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> Hydrated<T> {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<Hydrated<T>> {
        self.state_rx.clone()
    }

    /// Wait until the hydration resolved, or return the last published
    /// (still loading) state if it was cancelled first.
    pub async fn finished(&self) -> Hydrated<T> {
        let mut rx = self.state_rx.clone();
        loop {
            if !rx.borrow().is_loading {
                break;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
        let state = rx.borrow().clone();
        state
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Stop the hydration. A response arriving afterwards is ignored.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.handle.abort();
    }
}

impl<T> Drop for HydrationTask<T> {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.handle.abort();
    }
}
