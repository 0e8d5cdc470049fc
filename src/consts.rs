//! Default element ids, selectors and placeholder text.

// ── Form ────────────────────────────────────────────────────────

/// Selector for the search form whose submission starts the spinner.
pub const FORM_SELECTOR: &str = "form";

pub const SUBMIT_BUTTON_ID: &str = "submit-button";

pub const SPINNER_ID: &str = "spinner";

// ── Modal ───────────────────────────────────────────────────────

pub const MODAL_ID: &str = "mitigation-modal";

pub const MODAL_TITLE_ID: &str = "modal-title";

pub const MITIGATION_LIST_ID: &str = "modal-mitigation-list";

pub const PREVENTION_LIST_ID: &str = "modal-prevention-list";

/// Selector for the close button, resolved inside the modal container.
pub const CLOSE_BUTTON_SELECTOR: &str = ".modal-close-button";

// ── Mind-map ────────────────────────────────────────────────────

pub const MINDMAP_CONTAINER_ID: &str = "jsmind_container";

/// Custom tag the mind-map library uses for clickable nodes.
pub const NODE_TAG: &str = "jmnode";

/// Label used when a clicked node has no visible text.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text)";

// ── Globals ─────────────────────────────────────────────────────

/// `window` property holding the server-rendered results object.
pub const RESULTS_GLOBAL: &str = "results";

/// `window` property a page may set to override [`crate::config::PageIds`].
pub const CONFIG_GLOBAL: &str = "breachboardConfig";
