//! Submit button / spinner swap for the search form.

use crate::dom::{Display, DomElement};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Handles for the form's submit affordances.
///
/// Either handle may be absent; its half of the swap is skipped. The native
/// submission is never prevented and there is no restore path: the page
/// reloads with the results.
#[derive(Clone)]
pub struct SubmitSpinner<E: DomElement> {
    button: Option<E>,
    spinner: Option<E>,
}

impl<E: DomElement> SubmitSpinner<E> {
    #[must_use]
    pub fn new(button: Option<E>, spinner: Option<E>) -> Self {
        Self { button, spinner }
    }

    /// Hide the submit button, then show the spinner.
    pub fn on_submit(&self) {
        if let Some(button) = &self.button {
            button.set_display(Display::None);
        }
        if let Some(spinner) = &self.spinner {
            spinner.set_display(Display::Block);
        }
    }

    /// Whether submitting would change anything on the page.
    pub fn has_effect(&self) -> bool {
        self.button.is_some() || self.spinner.is_some()
    }
}
