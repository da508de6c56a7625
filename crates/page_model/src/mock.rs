//! Synthetic pages for tests.
//!
//! [`MockElement`] and [`MockDom`] satisfy the inspection traits without a
//! real document; [`MockPage`] implements the full [`PageHost`] contract
//! with test-controlled signal channels.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::context::PageContext;
use crate::element::{DomView, ElementView, Rect, StyleState};
use crate::signals::{
    MutationEvent, MutationSource, NavigationTiming, PageHost, TimingEntry, TimingSource,
};

/// A synthetic element, built up with builder methods.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    tag: String,
    rect: Rect,
    attrs: HashMap<String, String>,
    styles: HashMap<(StyleState, String), String>,
    text: bool,
    locator: Option<String>,
}

impl MockElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Set the rendered size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.rect = Rect::new(width, height);
        self
    }

    /// Set an attribute. An empty value models a bare attribute such as
    /// `alt=""`.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Set a resolved style value for the normal state.
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.styles
            .insert((StyleState::Normal, property.to_string()), value.to_string());
        self
    }

    /// Set a resolved style value for the focus-visible state.
    pub fn with_focus_style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(
            (StyleState::FocusVisible, property.to_string()),
            value.to_string(),
        );
        self
    }

    /// Mark the element as directly carrying rendered text.
    pub fn with_text(mut self) -> Self {
        self.text = true;
        self
    }

    /// Override the reported locator.
    pub fn with_locator(mut self, locator: &str) -> Self {
        self.locator = Some(locator.to_string());
        self
    }
}

impl ElementView for MockElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn style(&self, state: StyleState, property: &str) -> Option<String> {
        self.styles
            .get(&(state, property.to_string()))
            .cloned()
            .or_else(|| {
                // Focus-visible lookups fall back to the normal value, the
                // same resolution a host adapter would report when no focus
                // rule applies.
                match state {
                    StyleState::FocusVisible => self
                        .styles
                        .get(&(StyleState::Normal, property.to_string()))
                        .cloned(),
                    StyleState::Normal => None,
                }
            })
    }

    fn has_text(&self) -> bool {
        self.text
    }

    fn locator(&self) -> String {
        self.locator.clone().unwrap_or_else(|| self.tag.clone())
    }
}

/// A synthetic document snapshot.
#[derive(Debug, Clone, Default)]
pub struct MockDom {
    elements: Vec<MockElement>,
}

impl MockDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: MockElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: MockElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl DomView for MockDom {
    fn elements(&self) -> Vec<&dyn ElementView> {
        self.elements.iter().map(|e| e as &dyn ElementView).collect()
    }
}

/// A synthetic host page with test-controlled signals.
///
/// Timing and mutation channels only exist after the corresponding
/// `*_sender` call; before that the page reports the platform API as absent.
pub struct MockPage {
    context: PageContext,
    dom: Mutex<MockDom>,
    navigation: Mutex<Option<NavigationTiming>>,
    timing_rx: Mutex<Option<UnboundedReceiver<TimingEntry>>>,
    mutation_rx: Mutex<Option<UnboundedReceiver<MutationEvent>>>,
}

impl MockPage {
    pub fn new(url: &str) -> Self {
        Self {
            context: PageContext::new(url).with_user_agent("mock-page/1.0"),
            dom: Mutex::new(MockDom::new()),
            navigation: Mutex::new(None),
            timing_rx: Mutex::new(None),
            mutation_rx: Mutex::new(None),
        }
    }

    pub fn with_dom(self, dom: MockDom) -> Self {
        *self.dom.lock().unwrap() = dom;
        self
    }

    pub fn with_navigation(self, timing: NavigationTiming) -> Self {
        *self.navigation.lock().unwrap() = Some(timing);
        self
    }

    /// Replace the current document, as a host would after a re-render.
    pub fn set_dom(&self, dom: MockDom) {
        *self.dom.lock().unwrap() = dom;
    }

    /// Install the paint/input instrumentation channel and return the
    /// sending half for the test to push entries through.
    pub fn timing_sender(&self) -> UnboundedSender<TimingEntry> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.timing_rx.lock().unwrap() = Some(rx);
        tx
    }

    /// Install the mutation channel and return the sending half.
    pub fn mutation_sender(&self) -> UnboundedSender<MutationEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.mutation_rx.lock().unwrap() = Some(rx);
        tx
    }
}

impl TimingSource for MockPage {
    fn entries(&self) -> Option<UnboundedReceiver<TimingEntry>> {
        self.timing_rx.lock().unwrap().take()
    }

    fn navigation_timing(&self) -> Option<NavigationTiming> {
        *self.navigation.lock().unwrap()
    }
}

impl MutationSource for MockPage {
    fn mutations(&self) -> Option<UnboundedReceiver<MutationEvent>> {
        self.mutation_rx.lock().unwrap().take()
    }
}

impl PageHost for MockPage {
    fn context(&self) -> PageContext {
        self.context.clone()
    }

    fn document(&self) -> Box<dyn DomView + Send> {
        Box::new(self.dom.lock().unwrap().clone())
    }
}
