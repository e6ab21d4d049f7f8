#![allow(clippy::must_use_candidate)]

//! Axum-facing error pipeline
//!
//! Turns classified faults into uniform JSON responses and, when
//! configured, appends a structured record per fault to an external
//! log sink. Registered as the terminal fault handler of a router;
//! it never forwards to further handlers.

mod boundary;
mod log;
mod pipeline;
mod request;
mod response;

pub use boundary::guard;
pub use log::{FileSink, LogSink};
pub use pipeline::ErrorPipeline;
pub use request::RequestInfo;
pub use response::{ErrorBody, format};
