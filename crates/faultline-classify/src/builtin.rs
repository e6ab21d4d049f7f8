//! Built-in classifiers for well-known raw fault shapes

use faultline_core::{OperationalError, RawFault};
use serde_json::Value;

use crate::registry::{ClassifierRegistry, Discriminator};

pub(crate) fn install(registry: &mut ClassifierRegistry) {
    registry.register(Discriminator::name("CastError"), cast_error);
    registry.register(Discriminator::name("ValidationError"), validation_error);
    registry.register(Discriminator::UniqueViolation, duplicate_field);
    registry.register(Discriminator::name("JsonWebTokenError"), invalid_token);
    registry.register(Discriminator::name("TokenExpiredError"), expired_token);
}

/// Malformed identifier or reference
fn cast_error(fault: &RawFault) -> Option<OperationalError> {
    let path = fault.path.as_deref()?;
    let value = fault.value.as_ref()?;
    Some(OperationalError::bad_request(format!(
        "Invalid {path}: {}.",
        render(value)
    )))
}

/// All field failures joined into a single caller-facing message
fn validation_error(fault: &RawFault) -> Option<OperationalError> {
    if fault.fields.is_empty() {
        return None;
    }

    let joined = fault
        .fields
        .values()
        .map(|failure| failure.message.as_str())
        .collect::<Vec<_>>()
        .join(". ");

    Some(OperationalError::bad_request(format!(
        "Invalid input data. {joined}"
    )))
}

/// Unique-constraint violation on an indexed field
fn duplicate_field(fault: &RawFault) -> Option<OperationalError> {
    let key_value = fault.key_value.as_ref()?;
    let serialized = serde_json::to_string(key_value).ok()?;
    Some(OperationalError::bad_request(format!(
        "Duplicate field value: {serialized}"
    )))
}

fn invalid_token(_fault: &RawFault) -> Option<OperationalError> {
    Some(OperationalError::new(
        "Invalid token. Please log in again.",
        401,
    ))
}

fn expired_token(_fault: &RawFault) -> Option<OperationalError> {
    Some(OperationalError::new(
        "Token expired. Please log in again.",
        401,
    ))
}

/// Render a JSON value for a message, without quoting plain strings
fn render(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToOwned::to_owned)
}
