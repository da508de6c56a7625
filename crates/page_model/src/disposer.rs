//! Explicit subscription teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tokio::task::JoinHandle;

/// Handle that tears down a monitoring subscription.
///
/// Disposal stops the subscription's timers and detaches its watchers by
/// aborting the owning task. Calling [`dispose`](Disposer::dispose) more
/// than once is a no-op after the first call.
///
/// A `Disposer` that is dropped without being disposed leaves the
/// subscription running: teardown is always an explicit host action tied to
/// the page lifecycle, never an implicit side effect of reclamation.
pub struct Disposer {
    disposed: AtomicBool,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl std::fmt::Debug for Disposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposer")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl Disposer {
    /// A disposer with nothing to tear down.
    ///
    /// Returned from entry points that degraded to a no-op because the
    /// platform API was absent, so callers can treat every subscription
    /// uniformly.
    pub fn noop() -> Self {
        Self {
            disposed: AtomicBool::new(false),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// A disposer owning a single background task.
    pub fn for_task(task: JoinHandle<()>) -> Self {
        Self::for_tasks(vec![task])
    }

    /// A disposer owning several background tasks, torn down together.
    pub fn for_tasks(tasks: Vec<JoinHandle<()>>) -> Self {
        Self {
            disposed: AtomicBool::new(false),
            tasks: Mutex::new(tasks),
        }
    }

    /// Tear down the subscription. Idempotent.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let tasks = match self.tasks.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return,
        };
        tracing::trace!(
            target: "page_model::lifecycle",
            tasks = tasks.len(),
            "subscription disposed"
        );
        for task in tasks {
            task.abort();
        }
    }

    /// Whether this subscription has been torn down.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_dispose_idempotent() {
        let disposer = Disposer::noop();
        assert!(!disposer.is_disposed());

        disposer.dispose();
        assert!(disposer.is_disposed());

        // Second call must not panic or change anything.
        disposer.dispose();
        assert!(disposer.is_disposed());
    }

    #[tokio::test]
    async fn test_dispose_aborts_task() {
        let task = tokio::spawn(async {
            std::future::pending::<()>().await;
        });
        let disposer = Disposer::for_task(task);

        disposer.dispose();
        disposer.dispose();
        assert!(disposer.is_disposed());
    }
}
