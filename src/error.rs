//! Error types for date parsing, page binding and venue deletion.

use thiserror::Error;

/// Errors produced while turning a timestamp string into an instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected 7 numeric fields, found {found}")]
    MissingFields { found: usize },

    #[error("{field} value '{token}' does not fit")]
    FieldOverflow { field: &'static str, token: String },

    #[error("{field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },

    #[error("no such UTC instant: {0}")]
    InvalidInstant(String),
}

/// Errors from locating the delete control in a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("no element with id '{0}'")]
    NotFound(String),

    #[error("{count} elements share id '{id}'")]
    Duplicate { id: String, count: usize },
}

/// Failures of a single delete invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    #[error("click target has no data-id attribute")]
    MissingVenueId,

    #[error("venue id '{0}' does not name a single venue")]
    InvalidVenueId(String),

    #[error("invalid base url: {0}")]
    BaseUrl(String),

    #[error("network error: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("delete handler stopped in state {0}")]
    Unsettled(String),
}

impl From<reqwest::Error> for DeleteError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for DeleteError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<url::ParseError> for DeleteError {
    fn from(e: url::ParseError) -> Self {
        Self::BaseUrl(e.to_string())
    }
}
