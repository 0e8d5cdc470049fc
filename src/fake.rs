//! In-memory DOM and log capture used by the unit tests.
//!
//! Every mutation is appended to a journal shared by all elements of one
//! [`FakePage`], so tests can assert both the end state and the order in
//! which handlers touched the page. [`capture_logs`] records `log` output
//! per test thread so tests can assert what a handler logged.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::dom::{ClickTarget, Display, DomElement, PageLookup};

// =============================================================================
// LOG CAPTURE
// =============================================================================

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let entry = (record.level(), record.args().to_string());
        RECORDS.with(|records| records.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Route `log` into the capture buffer and empty this thread's records.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Records logged on this thread since the last [`capture_logs`].
pub fn captured_logs() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.borrow().clone())
}

/// Captured records at `level`.
pub fn logs_at(level: Level) -> Vec<String> {
    captured_logs()
        .into_iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message)
        .collect()
}

// =============================================================================
// DOM
// =============================================================================

type Journal = Rc<RefCell<Vec<String>>>;

struct Node {
    id: String,
    tag: String,
    class: String,
    display: RefCell<Option<Display>>,
    text: RefCell<String>,
    children: RefCell<Vec<FakeElement>>,
    parent: RefCell<Weak<Node>>,
    journal: Journal,
}

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl FakeElement {
    fn new(tag: &str, id: &str, class: &str, journal: &Journal) -> Self {
        Self(Rc::new(Node {
            id: id.to_owned(),
            tag: tag.to_owned(),
            class: class.to_owned(),
            display: RefCell::new(None),
            text: RefCell::new(String::new()),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            journal: Rc::clone(journal),
        }))
    }

    fn adopt(&self, child: &FakeElement) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    fn record(&self, entry: String) {
        self.0.journal.borrow_mut().push(entry);
    }

    fn label(&self) -> &str {
        if self.0.id.is_empty() { &self.0.tag } else { &self.0.id }
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.0.class.split_whitespace().any(|c| c == class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.0.id == id
        } else {
            self.0.tag.eq_ignore_ascii_case(selector)
        }
    }

    fn find(&self, selector: &str) -> Option<FakeElement> {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    /// Set text without journaling, for page setup.
    pub fn seed_text(&self, text: &str) -> &Self {
        *self.0.text.borrow_mut() = text.to_owned();
        self
    }

    pub fn display(&self) -> Option<Display> {
        *self.0.display.borrow()
    }

    pub fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    /// Text of each direct child, in order.
    pub fn items(&self) -> Vec<String> {
        self.0.children.borrow().iter().map(FakeElement::text).collect()
    }

    pub fn is_same(&self, other: &FakeElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl DomElement for FakeElement {
    fn set_display(&self, display: Display) {
        *self.0.display.borrow_mut() = Some(display);
        self.record(format!("{}:display={}", self.label(), display.as_css()));
    }

    fn set_text(&self, text: &str) {
        *self.0.text.borrow_mut() = text.to_owned();
        self.record(format!("{}:text", self.label()));
    }

    fn clear_children(&self) {
        self.0.children.borrow_mut().clear();
        self.record(format!("{}:clear", self.label()));
    }

    fn append_list_item(&self, text: &str) {
        let item = FakeElement::new("li", "", "", &self.0.journal);
        item.seed_text(text);
        self.adopt(&item);
        self.record(format!("{}:li", self.label()));
    }

    fn visible_text(&self) -> Option<String> {
        let mut text = self.text();
        for child in self.0.children.borrow().iter() {
            if let Some(inner) = child.visible_text() {
                text.push_str(&inner);
            }
        }
        Some(text)
    }

    fn closest(&self, tag: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.0.tag.eq_ignore_ascii_case(tag) {
                return Some(element);
            }
            current = element.0.parent.borrow().upgrade().map(FakeElement);
        }
        None
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.find(selector)
    }
}

/// A page of fake elements with lookup by id and selector.
#[derive(Default)]
pub struct FakePage {
    elements: RefCell<Vec<FakeElement>>,
    journal: Journal,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element.
    pub fn add(&self, tag: &str, id: &str) -> FakeElement {
        let element = FakeElement::new(tag, id, "", &self.journal);
        self.elements.borrow_mut().push(element.clone());
        element
    }

    /// Add `tag#id` under `parent`.
    pub fn add_child(&self, parent: &FakeElement, tag: &str, id: &str) -> FakeElement {
        self.add_child_with_class(parent, tag, id, "")
    }

    pub fn add_child_with_class(&self, parent: &FakeElement, tag: &str, id: &str, class: &str) -> FakeElement {
        let element = FakeElement::new(tag, id, class, &self.journal);
        parent.adopt(&element);
        self.elements.borrow_mut().push(element.clone());
        element
    }

    /// Mutations recorded so far, oldest first.
    pub fn journal(&self) -> Vec<String> {
        self.journal.borrow().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }
}

impl PageLookup for FakePage {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.elements.borrow().iter().find(|e| e.0.id == id).cloned()
    }

    fn select(&self, selector: &str) -> Option<FakeElement> {
        self.elements.borrow().iter().find(|e| e.matches(selector)).cloned()
    }
}

/// A click target the handlers cannot write to, like an SVG child of a node.
pub struct ForeignTarget {
    parent: FakeElement,
}

impl ForeignTarget {
    pub fn inside(parent: &FakeElement) -> Self {
        Self { parent: parent.clone() }
    }
}

impl ClickTarget<FakeElement> for ForeignTarget {
    fn closest_node(&self, tag: &str) -> Option<FakeElement> {
        self.parent.closest(tag)
    }
}
