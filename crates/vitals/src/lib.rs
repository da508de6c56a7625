//! Web Vitals Pipeline
//!
//! This crate implements the performance half of the quality monitor:
//! - Normalization of platform paint/input/navigation signals into rated
//!   [`Metric`] records
//! - Fixed per-family rating thresholds (good / needs-improvement / poor)
//! - Configurable per-metric budgets with exceedance evaluation
//!
//! The pipeline is stateless beyond a latest-value-per-name snapshot kept
//! for introspection. Every metric flows through once:
//!
//! ```text
//! TimingSource entries → VitalsCollector → evaluate() → PerformanceReport
//! ```
//!
//! A metric whose name has no budget entry produces no report; that case is
//! logged as a warning and never an error.

mod budget;
mod collector;
mod metric;

pub use budget::{evaluate, Budget, PerformanceReport};
pub use collector::{MetricCallback, VitalsCollector};
pub use metric::{Metric, MetricFamily, Rating, RatingThresholds};
