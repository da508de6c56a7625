//! The report sink.

use std::sync::Arc;

use a11y::ComplianceReport;
use page_model::PageContext;
use vitals::PerformanceReport;

use crate::console;
use crate::payload::AnalyticsPayload;
use crate::transport::AnalyticsTransport;

/// Callback invoked with each performance report.
pub type PerformanceCallback = Arc<dyn Fn(&PerformanceReport) + Send + Sync>;

/// Callback invoked with each compliance report.
pub type ComplianceCallback = Arc<dyn Fn(&ComplianceReport) + Send + Sync>;

/// Delivers reports to the registered callback and, for performance
/// reports, forwards them to the analytics transport when one is attached.
///
/// Callback invocation is synchronous and on the delivering turn; a panic
/// inside a callback is not caught. Outbound forwarding is fire-and-forget.
pub struct ReportSink {
    context: PageContext,
    on_performance: Option<PerformanceCallback>,
    on_compliance: Option<ComplianceCallback>,
    transport: Option<Arc<AnalyticsTransport>>,
    dev_console: bool,
}

impl std::fmt::Debug for ReportSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportSink")
            .field("context", &self.context)
            .field("has_performance_callback", &self.on_performance.is_some())
            .field("has_compliance_callback", &self.on_compliance.is_some())
            .field("has_transport", &self.transport.is_some())
            .field("dev_console", &self.dev_console)
            .finish()
    }
}

impl ReportSink {
    /// A sink for the given page. Dev diagnostics switch on automatically
    /// for loopback pages.
    pub fn new(context: PageContext) -> Self {
        let dev_console = console::is_local_host(&context.url);
        Self {
            context,
            on_performance: None,
            on_compliance: None,
            transport: None,
            dev_console,
        }
    }

    /// Register the performance report callback.
    pub fn with_performance_callback(mut self, callback: PerformanceCallback) -> Self {
        self.on_performance = Some(callback);
        self
    }

    /// Register the compliance report callback.
    pub fn with_compliance_callback(mut self, callback: ComplianceCallback) -> Self {
        self.on_compliance = Some(callback);
        self
    }

    /// Attach the outbound analytics transport.
    pub fn with_transport(mut self, transport: AnalyticsTransport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Deliver one performance report.
    pub fn deliver_performance(&self, report: &PerformanceReport) {
        if let Some(callback) = &self.on_performance {
            callback(report);
        }
        if let Some(transport) = &self.transport {
            transport.send_detached(AnalyticsPayload::from_report(report, &self.context));
        }
        if self.dev_console {
            console::log_performance_report(report);
        }
    }

    /// Deliver one compliance report.
    pub fn deliver_compliance(&self, report: &ComplianceReport) {
        if let Some(callback) = &self.on_compliance {
            callback(report);
        }
        if self.dev_console {
            console::log_compliance_summary(report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use vitals::{evaluate, Budget, Metric, MetricFamily};

    fn report() -> PerformanceReport {
        let metric = Metric::new(MetricFamily::Lcp, 2000.0, 2000.0, "https://example.com");
        evaluate(&metric, &Budget::default()).unwrap()
    }

    #[test]
    fn test_performance_callback_invoked_once_per_report() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sink = ReportSink::new(PageContext::new("https://example.com"))
            .with_performance_callback(Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

        sink.deliver_performance(&report());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sink.deliver_performance(&report());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_delivery_without_callback_is_quiet() {
        let sink = ReportSink::new(PageContext::new("https://example.com"));
        sink.deliver_performance(&report());

        let scan = a11y::Scanner::new().scan(&page_model::mock::MockDom::new());
        sink.deliver_compliance(&scan);
    }

    #[test]
    fn test_compliance_callback_receives_report() {
        let seen = Arc::new(AtomicUsize::new(0));
        let writer = Arc::clone(&seen);
        let sink = ReportSink::new(PageContext::new("http://localhost:3000"))
            .with_compliance_callback(Arc::new(move |report| {
                writer.store(report.compliance as usize, Ordering::SeqCst);
            }));

        let scan = a11y::Scanner::new().scan(&page_model::mock::MockDom::new());
        sink.deliver_compliance(&scan);
        assert_eq!(seen.load(Ordering::SeqCst), 100);
    }
}
