// src/error.rs
use thiserror::Error;

/// A select control referenced by id does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("select control \"{0}\" not found")]
    Missing(String),
}

/// A result field could not be formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{field} is not a number: {value}")]
    NotANumber { field: &'static str, value: String },
}

/// Everything that can end a search invocation in the failure state.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network unreachable, request could not be built, body unreadable.
    #[error("{0}")]
    Transport(String),

    /// Server answered outside 2xx.
    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => SearchError::Status(status.as_u16()),
            None => SearchError::Transport(e.to_string()),
        }
    }
}
