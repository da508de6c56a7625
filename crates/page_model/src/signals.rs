//! Lifecycle and instrumentation signals supplied by the host page.
//!
//! Signals arrive as unbounded channels so delivery stays on whichever turn
//! of the host event loop produced the underlying platform event. A source
//! returning `None` means the platform API is not available in this
//! environment; consumers must degrade to a safe no-op rather than error.

use tokio::sync::mpsc::UnboundedReceiver;

use crate::context::PageContext;
use crate::element::DomView;

/// Kind of a paint/input instrumentation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A largest-content paint candidate. The platform may revise this
    /// upward as more content paints, so later entries supersede earlier
    /// ones.
    LargestContentfulPaint,
    /// First paint of any content. Never revised backward; the first entry
    /// is authoritative.
    FirstContentfulPaint,
    /// Delay between the first user input and the handler running.
    FirstInput,
}

/// One normalized instrumentation occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingEntry {
    pub kind: EntryKind,
    /// Measured value in milliseconds.
    pub value_ms: f64,
}

impl TimingEntry {
    pub fn new(kind: EntryKind, value_ms: f64) -> Self {
        Self { kind, value_ms }
    }
}

/// One-shot navigation timing read, available once the first response byte
/// has arrived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationTiming {
    /// Time from navigation start to the first response byte, in
    /// milliseconds.
    pub response_start_ms: f64,
}

/// A batch of document mutations observed by the host.
///
/// The scheduler only coalesces these; the contents are informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationEvent {
    pub added_nodes: usize,
    pub removed_nodes: usize,
}

/// Platform paint/input/navigation instrumentation.
pub trait TimingSource: Send + Sync {
    /// Subscribe to the stream of paint and input timing entries.
    ///
    /// Returns `None` when the platform exposes no instrumentation API.
    /// Each call returns a fresh stream; a host that can only support one
    /// subscriber may return `None` on subsequent calls.
    fn entries(&self) -> Option<UnboundedReceiver<TimingEntry>>;

    /// Synchronous navigation timing read. `None` when unavailable.
    fn navigation_timing(&self) -> Option<NavigationTiming>;
}

/// Document mutation notifications.
pub trait MutationSource: Send + Sync {
    /// Subscribe to mutation events. `None` when mutation watching is
    /// unsupported on this host.
    fn mutations(&self) -> Option<UnboundedReceiver<MutationEvent>>;
}

/// The full host-page contract the engine observes.
pub trait PageHost: TimingSource + MutationSource {
    /// Identity of the observed page.
    fn context(&self) -> PageContext;

    /// A fresh snapshot of the current document. Called once per scan.
    fn document(&self) -> Box<dyn DomView + Send>;
}
