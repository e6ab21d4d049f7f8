use faultline_core::{Fault, StatusClass};
use serde::Serialize;

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: StatusClass,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Notice sent for unexpected faults outside verbose mode
const GENERIC_MESSAGE: &str = "Something went very wrong!";

/// Shape a fault into a status code and JSON body
///
/// Verbose responses carry the message and diagnostic trace as-is.
/// Restricted responses expose operational messages only; unexpected
/// faults collapse to a generic 500.
pub fn format(fault: &Fault, verbose: bool) -> (u16, ErrorBody) {
    if verbose {
        return (
            fault.status_code(),
            ErrorBody {
                status: fault.status_class(),
                message: fault.message().to_owned(),
                stack: Some(fault.trace().unwrap_or_default().to_owned()),
            },
        );
    }

    match fault {
        Fault::Operational(op) => (
            op.status_code(),
            ErrorBody {
                status: op.status_class(),
                message: op.message().to_owned(),
                stack: None,
            },
        ),
        Fault::Raw(_) => (
            500,
            ErrorBody {
                status: StatusClass::Error,
                message: GENERIC_MESSAGE.to_owned(),
                stack: None,
            },
        ),
    }
}
