use serde_json::Value;
use std::fmt;

use crate::error::DeleteError;

/// Opaque venue identifier taken from the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VenueId(String);

impl VenueId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An id must name one venue: empty, `.` and `..` would address the
    /// collection once placed in a path.
    #[must_use]
    pub fn is_single_segment(&self) -> bool {
        !matches!(self.0.as_str(), "" | "." | "..")
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded body of a `DELETE /venues/{id}` response.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionResponse {
    /// True only when the body carried the JSON literal `true`.
    pub success: bool,
    pub body: Value,
}

impl DeletionResponse {
    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// `Decode` when the body is not JSON, or is JSON `null` (there is no
    /// field to read from it).
    pub fn from_body(bytes: &[u8]) -> Result<Self, DeleteError> {
        let body: Value = serde_json::from_slice(bytes)?;
        Self::from_value(body)
    }

    /// # Errors
    ///
    /// `Decode` when `body` is `null`.
    pub fn from_value(body: Value) -> Result<Self, DeleteError> {
        if body.is_null() {
            return Err(DeleteError::Decode("response body is null".into()));
        }
        let success = matches!(body.get("success"), Some(Value::Bool(true)));
        Ok(Self { success, body })
    }
}

/// How a completed delete invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server confirmed deletion and the page was sent to this href.
    Navigated(String),
    /// The server answered without `success: true`; the page stays put.
    NotDeleted,
}
