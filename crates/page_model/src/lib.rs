//! Host Page Surface
//!
//! This crate defines everything the quality monitors consume from the host
//! page, and nothing else:
//!
//! - A narrow element-inspection capability ([`ElementView`], [`DomView`])
//!   covering bounding boxes, resolved styles, and attribute lookup, so rule
//!   checks can run against synthetic elements in tests exactly as they run
//!   against a live document adapter.
//! - Instrumentation signal sources ([`TimingSource`], [`MutationSource`],
//!   [`PageHost`]) delivered as channels. A source that returns `None` means
//!   the platform API is absent and the consumer degrades to a no-op.
//! - Explicit lifecycle teardown via [`Disposer`]. There is no `Drop`-based
//!   cleanup: the host owns the subscription lifetime and must invoke the
//!   disposer at unmount.
//!
//! The relationship is one-directional. The engine observes the page through
//! these traits; the page never depends on the engine.

mod context;
mod disposer;
mod element;
pub mod mock;
mod signals;

pub use context::PageContext;
pub use disposer::Disposer;
pub use element::{DomView, ElementView, Rect, StyleState};
pub use signals::{
    EntryKind, MutationEvent, MutationSource, NavigationTiming, PageHost, TimingEntry,
    TimingSource,
};
