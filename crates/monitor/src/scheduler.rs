//! Continuous scan scheduling with debounced re-scans.

use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior, Sleep};

use page_model::{Disposer, MutationEvent};

/// Drives a scan callback on a periodic interval, with mutation-triggered
/// re-scans coalesced through a quiet window.
///
/// Everything runs inside one task: the interval tick, the mutation watch,
/// and the debounce sleep. The scan callback is synchronous within that
/// task, so two scans can never overlap; mutual exclusion falls out of the
/// structure rather than a lock.
///
/// A mutation re-arms the quiet window; only when the window elapses with
/// no further mutations does exactly one re-scan run. Disposing the
/// returned handle cancels the interval, the pending debounce, and the
/// mutation watch together, and is idempotent.
#[derive(Debug, Clone)]
pub struct ScanScheduler {
    interval: Duration,
    quiet_window: Duration,
}

impl ScanScheduler {
    pub fn new(interval: Duration, quiet_window: Duration) -> Self {
        Self {
            interval,
            quiet_window,
        }
    }

    /// Start scheduling. The first interval tick fires immediately, so the
    /// caller gets an initial scan without asking.
    ///
    /// `mutations` may be `None` when the host supports no mutation
    /// watching; scheduling then degrades to interval-only. A mutation
    /// channel that closes mid-flight degrades the same way.
    pub fn start<F>(&self, mut on_scan: F, mutations: Option<UnboundedReceiver<MutationEvent>>) -> Disposer
    where
        F: FnMut() + Send + 'static,
    {
        let period = self.interval;
        let quiet_window = self.quiet_window;

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut mutations = mutations;
            let mut pending_rescan: Option<Pin<Box<Sleep>>> = None;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        on_scan();
                    }
                    event = next_mutation(&mut mutations) => {
                        match event {
                            Some(_) => {
                                // Re-arm the quiet window; bursts collapse
                                // into the single pending re-scan.
                                pending_rescan =
                                    Some(Box::pin(time::sleep(quiet_window)));
                            }
                            None => {
                                tracing::debug!(
                                    target: "monitor::scheduler",
                                    "mutation watcher closed, continuing interval-only"
                                );
                                mutations = None;
                            }
                        }
                    }
                    _ = quiet_elapsed(&mut pending_rescan) => {
                        pending_rescan = None;
                        on_scan();
                    }
                }
            }
        });

        Disposer::for_task(task)
    }
}

/// Next mutation event, or never when watching is unsupported/closed.
async fn next_mutation(
    mutations: &mut Option<UnboundedReceiver<MutationEvent>>,
) -> Option<MutationEvent> {
    match mutations.as_mut() {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

/// Completion of the pending quiet window, or never when none is armed.
async fn quiet_elapsed(pending: &mut Option<Pin<Box<Sleep>>>) {
    match pending.as_mut() {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}
