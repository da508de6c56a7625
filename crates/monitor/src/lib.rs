//! Runtime Quality Monitor
//!
//! The facade over the two client-side quality pipelines:
//!
//! - **Performance**: platform paint/input/navigation signals are
//!   normalized into rated metrics, evaluated against a configurable
//!   budget, and delivered as [`PerformanceReport`]s.
//! - **Accessibility**: a six-check battery scans the document snapshot
//!   and delivers [`ComplianceReport`]s, either once or continuously with
//!   periodic and mutation-debounced re-scans.
//!
//! Both paths run concurrently and independently on the host's event loop;
//! the engine spawns no thread of its own beyond cooperative tasks. Every
//! subscription is torn down explicitly through its [`Disposer`], tied to
//! the host page lifecycle.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use monitor::{MonitorConfig, QualityMonitor};
//! use page_model::mock::MockPage;
//!
//! # async fn run() {
//! let page = Arc::new(MockPage::new("https://example.com/donate"));
//! let config = MonitorConfig::new()
//!     .with_endpoint("https://telemetry.example.com")
//!     .with_budget_limit("LCP", 2000.0);
//!
//! let engine = QualityMonitor::new(page, config);
//!
//! let perf = engine.start_performance_monitoring(
//!     Some(Arc::new(|report| println!("{report}"))),
//!     true,
//! );
//! let a11y = engine.start_accessibility_monitoring(None, true);
//!
//! // ... at unmount:
//! perf.dispose();
//! a11y.dispose();
//! # }
//! ```

mod config;
mod engine;
mod scheduler;

pub use config::MonitorConfig;
pub use engine::QualityMonitor;
pub use scheduler::ScanScheduler;

pub use a11y::{ComplianceReport, Severity, Violation, ViolationKind};
pub use page_model::Disposer;
pub use reporting::{ComplianceCallback, PerformanceCallback};
pub use vitals::{Budget, Metric, MetricFamily, PerformanceReport, Rating};
