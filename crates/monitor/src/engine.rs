//! The quality monitor facade.

use std::collections::HashMap;
use std::sync::Arc;

use a11y::Scanner;
use page_model::{Disposer, MutationSource, PageHost};
use reporting::{
    AnalyticsTransport, ComplianceCallback, PerformanceCallback, ReportSink, TransportConfig,
};
use vitals::{Budget, Metric, MetricCallback, VitalsCollector};

use crate::config::MonitorConfig;
use crate::scheduler::ScanScheduler;

/// One engine instance bound to one host page.
///
/// The monitor owns every piece of its state — budget, collector snapshot,
/// scanner battery — so independent instances (several embedded widgets on
/// one page, or tests running in parallel) never interfere. Both monitoring
/// paths run concurrently and independently; each `start_*` call returns
/// its own disposer and the host tears them down in any order.
///
/// No internal failure escapes into the host: absent platform APIs degrade
/// to no-ops, failed checks fail open, and failed deliveries are logged and
/// dropped. The monitor must never be the reason a page crashes.
pub struct QualityMonitor {
    host: Arc<dyn PageHost>,
    config: MonitorConfig,
    budget: Budget,
    collector: VitalsCollector,
    scanner: Arc<Scanner>,
}

impl QualityMonitor {
    pub fn new(host: Arc<dyn PageHost>, config: MonitorConfig) -> Self {
        let budget = config.budget();
        let collector = VitalsCollector::new(host.context());
        let scanner = Arc::new(Scanner::with_touch_target_minimum(
            config.touch_target_minimum,
        ));
        Self {
            host,
            config,
            budget,
            collector,
            scanner,
        }
    }

    /// Start the performance path: collect metrics, evaluate them against
    /// the budget, and deliver the resulting reports.
    ///
    /// `forward_to_analytics` additionally posts each report to the
    /// configured endpoint, best-effort. Without platform instrumentation
    /// this is a safe no-op.
    pub fn start_performance_monitoring(
        &self,
        on_report: Option<PerformanceCallback>,
        forward_to_analytics: bool,
    ) -> Disposer {
        let mut sink = ReportSink::new(self.host.context());
        if let Some(callback) = on_report {
            sink = sink.with_performance_callback(callback);
        }
        if forward_to_analytics && !self.config.endpoint.is_empty() {
            sink = sink.with_transport(AnalyticsTransport::with_config(TransportConfig::new(
                &self.config.endpoint,
            )));
        }

        let sink = Arc::new(sink);
        let budget = self.budget.clone();
        let on_metric: MetricCallback = Arc::new(move |metric| {
            if let Some(report) = vitals::evaluate(&metric, &budget) {
                sink.deliver_performance(&report);
            }
        });

        self.collector.observe(self.host.as_ref(), on_metric)
    }

    /// Start the accessibility path.
    ///
    /// Runs one scan immediately. With `continuous`, the scheduler keeps
    /// re-scanning on the configured interval and after mutation bursts
    /// until the returned disposer is invoked; otherwise the disposer has
    /// nothing to tear down.
    pub fn start_accessibility_monitoring(
        &self,
        on_report: Option<ComplianceCallback>,
        continuous: bool,
    ) -> Disposer {
        let mut sink = ReportSink::new(self.host.context());
        if let Some(callback) = on_report {
            sink = sink.with_compliance_callback(callback);
        }
        let sink = Arc::new(sink);

        let host = Arc::clone(&self.host);
        let scanner = Arc::clone(&self.scanner);
        let run_scan = move || {
            let dom = host.document();
            let report = scanner.scan(dom.as_ref());
            sink.deliver_compliance(&report);
        };

        if !continuous {
            run_scan();
            return Disposer::noop();
        }

        let scheduler = ScanScheduler::new(self.config.scan_interval, self.config.quiet_window);
        scheduler.start(run_scan, self.host.mutations())
    }

    /// Latest observed metric per name, for introspection.
    pub fn latest_metrics(&self) -> HashMap<String, Metric> {
        self.collector.snapshot()
    }

    /// Latest observed metric for one name.
    pub fn latest_metric(&self, name: &str) -> Option<Metric> {
        self.collector.latest(name)
    }

    /// The active budget (defaults with overrides merged).
    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// The monitor configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
