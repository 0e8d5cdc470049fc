//! Mind-map click relay.
//!
//! The mind-map library renders each concept as a custom-tagged node inside
//! one container. A single click listener on the container finds the node
//! that was clicked and opens the guidance modal for its label.

use std::rc::Rc;

use crate::consts::NO_TEXT_PLACEHOLDER;
use crate::dom::{ClickTarget, DomElement};
use crate::modal::ModalController;

#[cfg(test)]
#[path = "mindmap_test.rs"]
mod mindmap_test;

/// Trimmed node text, or the placeholder when there is none.
#[must_use]
pub fn node_label(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_owned(),
        _ => NO_TEXT_PLACEHOLDER.to_owned(),
    }
}

#[derive(Clone)]
pub struct MindmapRelay<E: DomElement> {
    container: E,
    node_tag: String,
    modal: Rc<ModalController<E>>,
}

impl<E: DomElement> MindmapRelay<E> {
    #[must_use]
    pub fn new(container: E, node_tag: impl Into<String>, modal: Rc<ModalController<E>>) -> Self {
        Self { container, node_tag: node_tag.into(), modal }
    }

    /// The element the click listener belongs on.
    #[must_use]
    pub fn container(&self) -> &E {
        &self.container
    }

    /// Handle a click whose target is `target`.
    ///
    /// Returns the label relayed to the modal, or `None` when the click did
    /// not land on or inside a node.
    pub fn on_click<T: ClickTarget<E>>(&self, target: Option<&T>) -> Option<String> {
        let node = target?.closest_node(&self.node_tag)?;
        let label = node_label(node.visible_text().as_deref());
        log::info!("mind-map click: {label}");

        if let Err(err) = self.modal.show(&label) {
            log::error!("cannot display guidance for {label:?}: {err}");
        }
        Some(label)
    }
}
