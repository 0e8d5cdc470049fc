//! Page interaction controller.
//!
//! DESIGN
//! ======
//! Registration runs once per page load. [`Wiring::resolve`] looks up every
//! element a handler needs and hands the handles to the handler types, so no
//! handler performs its own lookups. The browser layer then attaches one
//! listener per entry in [`Wiring::handlers`]. Absent optional elements drop
//! their handler from the list rather than failing registration.

use std::fmt;
use std::rc::Rc;

use crate::config::PageIds;
use crate::dom::{DomElement, PageLookup};
use crate::form::SubmitSpinner;
use crate::mindmap::MindmapRelay;
use crate::modal::ModalController;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// A listener the browser layer should attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    /// `submit` on the form: swap button for spinner. Needs the form and at
    /// least one of button or spinner.
    SubmitSpinner,
    /// `click` on the modal close button.
    CloseModal,
    /// `click` on the mind-map container.
    MindmapRelay,
    /// `error` on the window.
    ErrorLogger,
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SubmitSpinner => "submit-spinner",
            Self::CloseModal => "close-modal",
            Self::MindmapRelay => "mindmap-relay",
            Self::ErrorLogger => "error-logger",
        })
    }
}

/// Handles resolved for one page load.
pub struct Wiring<E: DomElement> {
    pub form: Option<E>,
    pub submit: SubmitSpinner<E>,
    pub modal: Rc<ModalController<E>>,
    pub close_button: Option<E>,
    pub mindmap: Option<MindmapRelay<E>>,
}

impl<E: DomElement> Wiring<E> {
    /// Resolve every handle named by `ids` against `page`.
    pub fn resolve<P>(page: &P, ids: &PageIds) -> Self
    where
        P: PageLookup<Element = E>,
    {
        let form = page.select(&ids.form_selector);
        let submit = SubmitSpinner::new(page.element_by_id(&ids.submit_button), page.element_by_id(&ids.spinner));

        let modal = Rc::new(ModalController::new(
            page.element_by_id(&ids.modal),
            page.element_by_id(&ids.modal_title),
            page.element_by_id(&ids.mitigation_list),
            page.element_by_id(&ids.prevention_list),
        ));
        let close_button = modal
            .container()
            .and_then(|container| container.query_selector(&ids.close_button_selector));

        let mindmap = page
            .element_by_id(&ids.mindmap_container)
            .map(|container| MindmapRelay::new(container, ids.node_tag.clone(), Rc::clone(&modal)));

        for (present, what) in [
            (form.is_some(), "form"),
            (submit.has_effect(), "submit button and spinner"),
            (close_button.is_some(), "modal close button"),
            (mindmap.is_some(), "mind-map container"),
        ] {
            if !present {
                log::debug!("{what} not found; its handler is skipped");
            }
        }

        Self { form, submit, modal, close_button, mindmap }
    }

    /// Listeners to attach, in registration order.
    pub fn handlers(&self) -> Vec<Handler> {
        let mut handlers = Vec::with_capacity(4);
        if self.form.is_some() && self.submit.has_effect() {
            handlers.push(Handler::SubmitSpinner);
        }
        if self.close_button.is_some() {
            handlers.push(Handler::CloseModal);
        }
        handlers.push(Handler::ErrorLogger);
        if self.mindmap.is_some() {
            handlers.push(Handler::MindmapRelay);
        }
        handlers
    }
}
