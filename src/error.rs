//! Error types for binding components and touching browser state.

/// A component could not be bound to the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A required element is absent from the markup.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    /// The page-supplied config overrides could not be decoded.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl BindError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

/// Browser state could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("local storage rejected write for key {key}")]
    StorageWrite { key: String },
}

/// The video modal refused a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("not a playable video link: {0}")]
    InvalidVideoLink(String),
}
