//! Page-scoped background work.
//!
//! A page's loads run inside a `ScopedTask`. Leaving the page cancels the
//! task's token; the load then resolves to `None` and whatever it fetched
//! is dropped instead of reaching a page that is no longer shown.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Run `fut` until it completes or `token` is cancelled.
pub async fn run_scoped<F>(token: &CancellationToken, fut: F) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        out = fut => Some(out),
    }
}

/// A spawned future tied to a cancellation token. Dropping the task cancels it.
pub struct ScopedTask<T> {
    token: CancellationToken,
    handle: Option<JoinHandle<Option<T>>>,
}

impl<T: Send + 'static> ScopedTask<T> {
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move { run_scoped(&child, fut).await });
        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!("Cancelling scoped task");
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the output; `None` if the task was cancelled or panicked.
    pub async fn join(mut self) -> Option<T> {
        let handle = self.handle.take()?;
        handle.await.ok().flatten()
    }
}

impl<T> Drop for ScopedTask<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
