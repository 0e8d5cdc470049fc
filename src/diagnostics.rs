//! Console diagnostics: uncaught script errors and the results-object probe.
//!
//! Both are observational. Nothing here changes page state or control flow.

use std::fmt;

use serde_json::Value;

use crate::error::PageError;

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

// =============================================================================
// SCRIPT ERRORS
// =============================================================================

/// An uncaught error reported by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptError {
    pub message: String,
    pub filename: String,
    pub lineno: u32,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = if self.filename.is_empty() { "<unknown>" } else { &self.filename };
        write!(f, "{} at {}:{}", self.message, file, self.lineno)
    }
}

/// Log an uncaught script error.
pub fn report_script_error(error: &ScriptError) {
    log::error!("uncaught script error: {error}");
}

// =============================================================================
// RESULTS PROBE
// =============================================================================

/// The part of the server-rendered `window.results` object the page reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsContext {
    /// `identifier` as the page would print it. Non-string values keep
    /// their JSON text.
    pub identifier: Option<String>,
}

impl ResultsContext {
    /// Read the JSON form of `window.results`.
    ///
    /// Only `identifier` is looked at. A value that is not an object, or an
    /// object without `identifier`, is still a results context: the global
    /// exists, it just has nothing to report.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Json`] if `json` is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let identifier = match value.get("identifier") {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self { identifier }
    }
}

/// What the probe found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsNotice {
    /// No results object; the mind-map has probably not been rendered.
    Missing,
    Detected { identifier: Option<String> },
}

impl ResultsNotice {
    #[must_use]
    pub fn from_context(context: Option<&ResultsContext>) -> Self {
        match context {
            None => Self::Missing,
            Some(ctx) => Self::Detected { identifier: ctx.identifier.clone() },
        }
    }
}

impl fmt::Display for ResultsNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("no results object found; mind-map may not be rendered yet"),
            Self::Detected { identifier: Some(id) } => write!(f, "results detected for: {id}"),
            Self::Detected { identifier: None } => f.write_str("results detected for: <no identifier>"),
        }
    }
}

/// Log the probe outcome: a warning when results are missing, info otherwise.
pub fn log_results(context: Option<&ResultsContext>) -> ResultsNotice {
    let notice = ResultsNotice::from_context(context);
    match notice {
        ResultsNotice::Missing => log::warn!("{notice}"),
        ResultsNotice::Detected { .. } => log::info!("{notice}"),
    }
    notice
}
