//! Report Delivery
//!
//! The sink is the single egress point for both monitor pipelines:
//!
//! - Synchronous delivery to at most one caller callback per report kind.
//!   Callback panics are the caller's problem and are deliberately not
//!   caught here.
//! - Best-effort, fire-and-forget forwarding of performance reports to an
//!   analytics endpoint. Failures are caught, logged, and dropped — never
//!   retried, never surfaced to the host.
//! - Cosmetic console diagnostics when the page is served from a loopback
//!   address.

mod console;
mod error;
mod payload;
mod sink;
mod transport;

pub use console::{is_local_host, log_compliance_summary, log_performance_report};
pub use error::{ReportError, ReportResult};
pub use payload::{AnalyticsPayload, MetricBody};
pub use sink::{ComplianceCallback, PerformanceCallback, ReportSink};
pub use transport::{AnalyticsTransport, TransportConfig, ANALYTICS_PATH};
