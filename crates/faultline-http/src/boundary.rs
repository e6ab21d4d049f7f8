//! Funnels async handler failures into the pipeline

use std::future::Future;

use axum::response::{IntoResponse, Response};
use faultline_core::Fault;

use crate::pipeline::ErrorPipeline;
use crate::request::RequestInfo;

/// Run an async operation, converting a failure into the pipeline's response
///
/// A successful operation's response passes through unchanged; the first
/// failure is handled exactly once. No retry, no suppression.
pub async fn guard<F, T, E>(pipeline: &ErrorPipeline, request: &RequestInfo, operation: F) -> Response
where
    F: Future<Output = Result<T, E>>,
    T: IntoResponse,
    E: Into<Fault>,
{
    match operation.await {
        Ok(value) => value.into_response(),
        Err(fault) => pipeline.handle(fault.into(), request),
    }
}
