//! Browser bindings: `web-sys` implementations of the DOM traits and the
//! wasm entry point.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `Closure::forget` once attached.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, DocumentReadyState, Element, ErrorEvent, Event, EventTarget, HtmlElement, Window};

use crate::config::PageIds;
use crate::consts::{CONFIG_GLOBAL, RESULTS_GLOBAL};
use crate::controller::{Handler, Wiring};
use crate::diagnostics::{self, ResultsContext, ScriptError};
use crate::dom::{ClickTarget, Display, DomElement, PageLookup};

// =============================================================================
// DOM TRAITS
// =============================================================================

fn as_html(element: Element) -> Option<HtmlElement> {
    let Ok(html) = element.dyn_into::<HtmlElement>() else {
        return None;
    };
    Some(html)
}

fn found(result: Result<Option<Element>, JsValue>, what: &str) -> Option<HtmlElement> {
    match result {
        Ok(element) => element.and_then(as_html),
        Err(err) => {
            log::debug!("lookup {what} failed: {err:?}");
            None
        }
    }
}

impl DomElement for HtmlElement {
    fn set_display(&self, display: Display) {
        if let Err(err) = self.style().set_property("display", display.as_css()) {
            log::debug!("set display failed: {err:?}");
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn clear_children(&self) {
        self.set_inner_html("");
    }

    fn append_list_item(&self, text: &str) {
        let Some(document) = self.owner_document() else {
            return;
        };
        match document.create_element("li") {
            Ok(item) => {
                item.set_text_content(Some(text));
                if let Err(err) = self.append_child(&item) {
                    log::debug!("append list item failed: {err:?}");
                }
            }
            Err(err) => log::debug!("create list item failed: {err:?}"),
        }
    }

    fn visible_text(&self) -> Option<String> {
        Some(self.inner_text())
    }

    fn closest(&self, tag: &str) -> Option<Self> {
        found(Element::closest(self, tag), tag)
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        found(Element::query_selector(self, selector), selector)
    }
}

/// Click targets are plain elements: an SVG or MathML descendant of a node
/// still resolves to its HTML node ancestor.
impl ClickTarget<HtmlElement> for Element {
    fn closest_node(&self, tag: &str) -> Option<HtmlElement> {
        found(self.closest(tag), tag)
    }
}

impl PageLookup for Document {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.get_element_by_id(id).and_then(as_html)
    }

    fn select(&self, selector: &str) -> Option<HtmlElement> {
        found(self.query_selector(selector), selector)
    }
}

// =============================================================================
// GLOBALS
// =============================================================================

/// `window[key]`, or `None` when unset or `null`.
fn global(window: &Window, key: &str) -> Option<JsValue> {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(key)) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("read window.{key} failed: {err:?}");
            return None;
        }
    };
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value)
}

/// JSON text of `value`, or `None` if it cannot be serialized.
fn to_json(value: &JsValue, what: &str) -> Option<String> {
    match js_sys::JSON::stringify(value) {
        Ok(json) => json.as_string(),
        Err(err) => {
            log::debug!("serialize {what} failed: {err:?}");
            None
        }
    }
}

fn page_ids(window: &Window) -> PageIds {
    let Some(value) = global(window, CONFIG_GLOBAL) else {
        return PageIds::default();
    };
    let Some(json) = to_json(&value, CONFIG_GLOBAL) else {
        log::warn!("ignoring window.{CONFIG_GLOBAL}: not serializable");
        return PageIds::default();
    };
    match PageIds::from_json(&json) {
        Ok(ids) => ids,
        Err(err) => {
            log::warn!("ignoring window.{CONFIG_GLOBAL}: {err}");
            PageIds::default()
        }
    }
}

/// `identifier` read straight off the object, for results JSON cannot carry.
fn reflected_identifier(value: &JsValue) -> Option<String> {
    let id = match js_sys::Reflect::get(value, &JsValue::from_str("identifier")) {
        Ok(id) => id,
        Err(err) => {
            log::debug!("read results identifier failed: {err:?}");
            return None;
        }
    };
    if id.is_undefined() || id.is_null() {
        return None;
    }
    id.as_string().or_else(|| id.as_f64().map(|n| n.to_string()))
}

/// Any non-null `window.results` counts as present, readable or not.
fn results_context(window: &Window) -> Option<ResultsContext> {
    let value = global(window, RESULTS_GLOBAL)?;
    let Some(json) = to_json(&value, RESULTS_GLOBAL) else {
        return Some(ResultsContext { identifier: reflected_identifier(&value) });
    };
    match ResultsContext::from_json(&json) {
        Ok(ctx) => Some(ctx),
        Err(err) => {
            log::debug!("unreadable window.{RESULTS_GLOBAL}: {err}");
            Some(ResultsContext { identifier: reflected_identifier(&value) })
        }
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> bool {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => {
            closure.forget();
            true
        }
        Err(err) => {
            log::warn!("could not attach {event} listener: {err:?}");
            false
        }
    }
}

fn event_target(ev: &Event) -> Option<Element> {
    let target = ev.target()?;
    let Ok(element) = target.dyn_into::<Element>() else {
        return None;
    };
    Some(element)
}

fn script_error(ev: &Event) -> ScriptError {
    match ev.dyn_ref::<ErrorEvent>() {
        Some(err) => ScriptError { message: err.message(), filename: err.filename(), lineno: err.lineno() },
        None => ScriptError { message: ev.type_(), ..ScriptError::default() },
    }
}

/// Attach every listener the page supports. Runs once per page load.
fn boot(window: &Window, document: &Document) {
    log::info!("page controller initialized; mitigation fetch disabled, static guidance active");

    let ids = page_ids(window);
    let wiring = Wiring::resolve(document, &ids);
    diagnostics::log_results(results_context(window).as_ref());

    let mut attached = 0_usize;

    for handler in wiring.handlers() {
        let ok = match handler {
            Handler::SubmitSpinner => match &wiring.form {
                Some(form) => {
                    let submit = wiring.submit.clone();
                    listen(form, "submit", move |_| submit.on_submit())
                }
                None => false,
            },
            Handler::CloseModal => match &wiring.close_button {
                Some(button) => {
                    let modal = Rc::clone(&wiring.modal);
                    listen(button, "click", move |_| modal.close())
                }
                None => false,
            },
            Handler::ErrorLogger => {
                listen(window, "error", |ev| diagnostics::report_script_error(&script_error(&ev)))
            }
            Handler::MindmapRelay => match &wiring.mindmap {
                Some(relay) => {
                    let relay = relay.clone();
                    let container = relay.container().clone();
                    listen(&container, "click", move |ev| {
                        relay.on_click(event_target(&ev).as_ref());
                    })
                }
                None => false,
            },
        };
        if ok {
            attached += 1;
            log::debug!("attached {handler}");
        }
    }

    log::info!("mind-map and static guidance ready ({attached} handlers)");
}

/// Entry point run when the wasm module is instantiated.
///
/// Boots immediately if the document is already parsed, otherwise on
/// `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() != DocumentReadyState::Loading {
        boot(&window, &document);
        return;
    }

    let target = document.clone();
    let mut booted = false;
    listen(&target, "DOMContentLoaded", move |_| {
        if !booted {
            booted = true;
            boot(&window, &document);
        }
    });
}
