//! Crate error type.

/// Failures the page controller can observe.
///
/// Handlers never let these escape to the page; they are logged at the
/// handler boundary and the affected effect is skipped.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
