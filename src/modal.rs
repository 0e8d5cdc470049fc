//! Guidance modal.
//!
//! DESIGN
//! ======
//! `show` needs four slots (container, title, two lists). They are checked
//! together as a [`ModalSlots`] bundle before anything is written, so a page
//! missing one slot is left exactly as it was. `close` only needs the
//! container.

use crate::dom::{Display, DomElement};
use crate::error::PageError;
use crate::guidance::{self, MITIGATION_POINTS, PREVENTION_POINTS};

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Every slot `show` writes to, validated as a unit.
pub struct ModalSlots<'a, E: DomElement> {
    pub container: &'a E,
    pub title: &'a E,
    pub mitigation_list: &'a E,
    pub prevention_list: &'a E,
}

/// Shows and hides the guidance modal.
pub struct ModalController<E: DomElement> {
    container: Option<E>,
    title: Option<E>,
    mitigation_list: Option<E>,
    prevention_list: Option<E>,
}

impl<E: DomElement> ModalController<E> {
    #[must_use]
    pub fn new(container: Option<E>, title: Option<E>, mitigation_list: Option<E>, prevention_list: Option<E>) -> Self {
        Self { container, title, mitigation_list, prevention_list }
    }

    /// The modal container, if the page has one.
    #[must_use]
    pub fn container(&self) -> Option<&E> {
        self.container.as_ref()
    }

    /// Borrow all four slots, or name the first one missing.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] if any slot is absent.
    pub fn slots(&self) -> Result<ModalSlots<'_, E>, PageError> {
        Ok(ModalSlots {
            container: self.container.as_ref().ok_or(PageError::MissingElement("modal container"))?,
            title: self.title.as_ref().ok_or(PageError::MissingElement("modal title"))?,
            mitigation_list: self
                .mitigation_list
                .as_ref()
                .ok_or(PageError::MissingElement("mitigation list"))?,
            prevention_list: self
                .prevention_list
                .as_ref()
                .ok_or(PageError::MissingElement("prevention list"))?,
        })
    }

    /// Fill the modal with the static guidance for `title` and make it visible.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] without touching the page if any
    /// of the four slots is absent.
    pub fn show(&self, title: &str) -> Result<(), PageError> {
        let slots = self.slots()?;

        slots.title.set_text(&guidance::modal_title(title));
        fill_list(slots.mitigation_list, &MITIGATION_POINTS);
        fill_list(slots.prevention_list, &PREVENTION_POINTS);
        slots.container.set_display(Display::Flex);
        Ok(())
    }

    /// Hide the modal. No-op without a container.
    pub fn close(&self) {
        if let Some(container) = &self.container {
            container.set_display(Display::None);
        }
    }
}

fn fill_list<E: DomElement>(list: &E, points: &[&str]) {
    list.clear_children();
    for point in points {
        list.append_list_item(point);
    }
}
