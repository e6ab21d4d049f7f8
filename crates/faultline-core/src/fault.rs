use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde_json::Value;

use crate::error::{OperationalError, StatusClass};

/// A raw fault as produced by handlers or upstream libraries
///
/// The shape is untrusted: every field beyond `name` and `message` is
/// optional and read defensively by classifiers.
#[derive(Clone, Debug, Default)]
pub struct RawFault {
    /// Discriminator used for classifier lookup
    pub name: String,
    pub message: String,
    /// Diagnostic trace attached by the producer; never sent to callers
    /// outside verbose mode
    pub trace: Option<String>,
    /// Driver-specific numeric code, e.g. a unique-constraint violation
    pub code: Option<i64>,
    /// Status code the producer already attached, if any
    pub status_code: Option<u16>,
    /// Offending path for malformed-reference faults
    pub path: Option<String>,
    /// Offending value for malformed-reference faults
    pub value: Option<Value>,
    /// Per-field failures for validation faults, keyed by field name
    pub fields: BTreeMap<String, FieldFailure>,
    /// Conflicting key/value payload for unique-constraint faults
    pub key_value: Option<Value>,
}

/// A single field failure inside a validation fault
#[derive(Clone, Debug)]
pub struct FieldFailure {
    pub message: String,
}

impl FieldFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RawFault {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Capture a std error and its `source()` chain as the trace
    pub fn from_error(name: impl Into<String>, error: &(dyn std::error::Error + 'static)) -> Self {
        let mut trace = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(trace, "\ncaused by: {cause}");
            source = cause.source();
        }

        Self {
            name: name.into(),
            message: error.to_string(),
            trace: Some(trace),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    #[must_use]
    pub fn with_path_value(mut self, path: impl Into<String>, value: Value) -> Self {
        self.path = Some(path.into());
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, failure: FieldFailure) -> Self {
        self.fields.insert(field.into(), failure);
        self
    }

    #[must_use]
    pub fn with_key_value(mut self, key_value: Value) -> Self {
        self.key_value = Some(key_value);
        self
    }

    /// Status code with the 500 default applied
    pub const fn effective_status_code(&self) -> u16 {
        match self.status_code {
            Some(code) => code,
            None => 500,
        }
    }
}

/// A fault entering the pipeline
///
/// Either already operational (application code raised a known condition)
/// or still raw and awaiting classification. Classification replaces a
/// `Raw` value with an `Operational` one; nothing is mutated in place.
#[derive(Clone, Debug)]
pub enum Fault {
    Operational(OperationalError),
    Raw(RawFault),
}

impl Fault {
    pub fn message(&self) -> &str {
        match self {
            Self::Operational(op) => op.message(),
            Self::Raw(raw) => &raw.message,
        }
    }

    pub fn trace(&self) -> Option<&str> {
        match self {
            Self::Operational(_) => None,
            Self::Raw(raw) => raw.trace.as_deref(),
        }
    }

    /// Status code with the 500 default applied for raw faults
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Operational(op) => op.status_code(),
            Self::Raw(raw) => raw.effective_status_code(),
        }
    }

    pub const fn status_class(&self) -> StatusClass {
        StatusClass::from_status(self.status_code())
    }

    pub const fn is_operational(&self) -> bool {
        matches!(self, Self::Operational(_))
    }
}

impl From<OperationalError> for Fault {
    fn from(error: OperationalError) -> Self {
        Self::Operational(error)
    }
}

impl From<RawFault> for Fault {
    fn from(fault: RawFault) -> Self {
        Self::Raw(fault)
    }
}
