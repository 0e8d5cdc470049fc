//! Element ids and selectors the controller resolves.
//!
//! Defaults match the results page template. A page that renames elements
//! can set `window.breachboardConfig` to an object naming only the keys it
//! changes; unknown keys are rejected so a typo does not silently fall back
//! to the default.

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageIds {
    pub form_selector: String,
    pub submit_button: String,
    pub spinner: String,
    pub modal: String,
    pub modal_title: String,
    pub mitigation_list: String,
    pub prevention_list: String,
    /// Resolved inside the modal container, not the whole page.
    pub close_button_selector: String,
    pub mindmap_container: String,
    pub node_tag: String,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            form_selector: consts::FORM_SELECTOR.to_owned(),
            submit_button: consts::SUBMIT_BUTTON_ID.to_owned(),
            spinner: consts::SPINNER_ID.to_owned(),
            modal: consts::MODAL_ID.to_owned(),
            modal_title: consts::MODAL_TITLE_ID.to_owned(),
            mitigation_list: consts::MITIGATION_LIST_ID.to_owned(),
            prevention_list: consts::PREVENTION_LIST_ID.to_owned(),
            close_button_selector: consts::CLOSE_BUTTON_SELECTOR.to_owned(),
            mindmap_container: consts::MINDMAP_CONTAINER_ID.to_owned(),
            node_tag: consts::NODE_TAG.to_owned(),
        }
    }
}

impl PageIds {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Json`] for malformed JSON, non-string values,
    /// or unknown keys.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }
}
