//! Subscription to platform instrumentation signals.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use page_model::{Disposer, EntryKind, PageContext, TimingSource};

use crate::metric::{Metric, MetricFamily};

/// Callback invoked with each normalized metric.
pub type MetricCallback = Arc<dyn Fn(Metric) + Send + Sync>;

/// Normalizes paint/input/navigation instrumentation into [`Metric`]s.
///
/// One collector is constructed per engine instance; it owns all of its
/// state, so several independent monitors on one host never share data.
///
/// Resolution policy per family:
/// - FCP and FID: the first captured entry wins, later entries are dropped.
/// - LCP: the latest entry wins; every upward revision re-emits with the
///   delta from the previous observation.
/// - TTFB: a single synchronous navigation-timing read when observation
///   starts; no ongoing subscription.
pub struct VitalsCollector {
    context: PageContext,
    latest: Arc<Mutex<HashMap<String, Metric>>>,
}

impl VitalsCollector {
    pub fn new(context: PageContext) -> Self {
        Self {
            context,
            latest: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Attach to the given instrumentation source and emit a [`Metric`] for
    /// each occurrence.
    ///
    /// In a non-instrumentable environment (the source exposes neither
    /// navigation timing nor an entry stream) this is a safe no-op and the
    /// returned disposer has nothing to tear down.
    pub fn observe<S>(&self, source: &S, on_metric: MetricCallback) -> Disposer
    where
        S: TimingSource + ?Sized,
    {
        if let Some(nav) = source.navigation_timing() {
            self.emit(MetricFamily::Ttfb, nav.response_start_ms, &on_metric);
        }

        let Some(mut entries) = source.entries() else {
            tracing::debug!(
                target: "vitals::collect",
                "no paint/input instrumentation available, skipping subscription"
            );
            return Disposer::noop();
        };

        let latest = Arc::clone(&self.latest);
        let context = self.context.clone();
        let task = tokio::spawn(async move {
            let mut fcp_seen = false;
            let mut fid_seen = false;

            while let Some(entry) = entries.recv().await {
                let family = match entry.kind {
                    EntryKind::LargestContentfulPaint => MetricFamily::Lcp,
                    EntryKind::FirstContentfulPaint => {
                        if fcp_seen {
                            continue;
                        }
                        fcp_seen = true;
                        MetricFamily::Fcp
                    }
                    EntryKind::FirstInput => {
                        if fid_seen {
                            continue;
                        }
                        fid_seen = true;
                        MetricFamily::Fid
                    }
                };
                emit_metric(family, entry.value_ms, &latest, &context, &on_metric);
            }
        });

        Disposer::for_task(task)
    }

    fn emit(&self, family: MetricFamily, value_ms: f64, on_metric: &MetricCallback) {
        emit_metric(family, value_ms, &self.latest, &self.context, on_metric);
    }

    /// Latest observed metric for the given name, if any.
    pub fn latest(&self, name: &str) -> Option<Metric> {
        self.latest.lock().ok()?.get(name).cloned()
    }

    /// Snapshot of the latest metric per name.
    pub fn snapshot(&self) -> HashMap<String, Metric> {
        self.latest
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

fn emit_metric(
    family: MetricFamily,
    value_ms: f64,
    latest: &Arc<Mutex<HashMap<String, Metric>>>,
    context: &PageContext,
    on_metric: &MetricCallback,
) {
    let previous = latest
        .lock()
        .ok()
        .and_then(|guard| guard.get(family.name()).map(|m| m.value));
    let delta = match previous {
        Some(prev) => value_ms - prev,
        None => value_ms,
    };

    let metric = Metric::new(family, value_ms, delta, &context.url);
    tracing::trace!(
        target: "vitals::collect",
        metric = metric.name.as_str(),
        value_ms,
        delta,
        "metric captured"
    );

    if let Ok(mut guard) = latest.lock() {
        guard.insert(metric.name.clone(), metric.clone());
    }
    on_metric(metric);
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_model::mock::MockPage;
    use page_model::{NavigationTiming, TimingEntry};

    fn collected() -> (MetricCallback, Arc<Mutex<Vec<Metric>>>) {
        let sink: Arc<Mutex<Vec<Metric>>> = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&sink);
        let callback: MetricCallback = Arc::new(move |metric| {
            writer.lock().unwrap().push(metric);
        });
        (callback, sink)
    }

    #[tokio::test]
    async fn test_observe_without_instrumentation_is_noop() {
        let page = MockPage::new("https://example.com");
        let collector = VitalsCollector::new(PageContext::new("https://example.com"));
        let (callback, sink) = collected();

        let disposer = collector.observe(&page, callback);
        disposer.dispose();

        assert!(sink.lock().unwrap().is_empty());
        assert!(collector.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_ttfb_single_read_at_start() {
        let page = MockPage::new("https://example.com").with_navigation(NavigationTiming {
            response_start_ms: 640.0,
        });
        let collector = VitalsCollector::new(PageContext::new("https://example.com"));
        let (callback, sink) = collected();

        let disposer = collector.observe(&page, callback);

        let metrics = sink.lock().unwrap().clone();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].name, "TTFB");
        assert_eq!(metrics[0].value, 640.0);
        assert_eq!(metrics[0].delta, 640.0);
        disposer.dispose();
    }

    #[tokio::test]
    async fn test_first_entry_wins_for_fcp_and_fid() {
        let page = MockPage::new("https://example.com");
        let tx = page.timing_sender();
        let collector = VitalsCollector::new(PageContext::new("https://example.com"));
        let (callback, sink) = collected();

        let disposer = collector.observe(&page, callback);

        tx.send(TimingEntry::new(EntryKind::FirstContentfulPaint, 900.0))
            .unwrap();
        tx.send(TimingEntry::new(EntryKind::FirstContentfulPaint, 1500.0))
            .unwrap();
        tx.send(TimingEntry::new(EntryKind::FirstInput, 40.0)).unwrap();
        tx.send(TimingEntry::new(EntryKind::FirstInput, 90.0)).unwrap();
        tokio::task::yield_now().await;

        let metrics = sink.lock().unwrap().clone();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].name, "FCP");
        assert_eq!(metrics[0].value, 900.0);
        assert_eq!(metrics[1].name, "FID");
        assert_eq!(metrics[1].value, 40.0);
        disposer.dispose();
    }

    #[tokio::test]
    async fn test_latest_entry_wins_for_lcp() {
        let page = MockPage::new("https://example.com");
        let tx = page.timing_sender();
        let collector = VitalsCollector::new(PageContext::new("https://example.com"));
        let (callback, sink) = collected();

        let disposer = collector.observe(&page, callback);

        tx.send(TimingEntry::new(EntryKind::LargestContentfulPaint, 1800.0))
            .unwrap();
        tx.send(TimingEntry::new(EntryKind::LargestContentfulPaint, 2600.0))
            .unwrap();
        tokio::task::yield_now().await;

        let metrics = sink.lock().unwrap().clone();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[1].value, 2600.0);
        assert_eq!(metrics[1].delta, 800.0);

        // Introspection retains only the latest value per name.
        let latest = collector.latest("LCP").unwrap();
        assert_eq!(latest.value, 2600.0);
        disposer.dispose();
    }

    #[tokio::test]
    async fn test_dispose_stops_collection() {
        let page = MockPage::new("https://example.com");
        let tx = page.timing_sender();
        let collector = VitalsCollector::new(PageContext::new("https://example.com"));
        let (callback, sink) = collected();

        let disposer = collector.observe(&page, callback);
        disposer.dispose();
        tokio::task::yield_now().await;

        tx.send(TimingEntry::new(EntryKind::LargestContentfulPaint, 1000.0))
            .ok();
        tokio::task::yield_now().await;

        assert!(sink.lock().unwrap().is_empty());
    }
}
