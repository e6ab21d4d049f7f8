use serde::Serialize;
use thiserror::Error;

/// Category reported in the `status` field of an error response
///
/// Client faults (4xx) report `fail`, everything else reports `error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Fail,
    Error,
}

impl StatusClass {
    /// Derive the category from an HTTP status code
    pub const fn from_status(status_code: u16) -> Self {
        if matches!(status_code, 400..=499) {
            Self::Fail
        } else {
            Self::Error
        }
    }

}

/// An expected fault carrying a message safe to expose to callers
///
/// Everything constructed through this type is operational by definition.
/// Errors that never become an `OperationalError` are treated as unexpected
/// and have their details withheld outside verbose mode.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct OperationalError {
    message: String,
    status_code: u16,
}

impl OperationalError {
    /// Create an operational error with an explicit status code
    ///
    /// `status_code` is not range-checked; out-of-range values propagate
    /// unchanged and are coerced to 500 only at response emission.
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Create a 400 operational error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Category derived from the status code
    pub const fn status_class(&self) -> StatusClass {
        StatusClass::from_status(self.status_code)
    }
}
