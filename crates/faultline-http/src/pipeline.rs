use std::sync::Arc;

use axum::Json;
use axum::response::{IntoResponse, Response};
use faultline_classify::ClassifierRegistry;
use faultline_config::Config;
use faultline_core::Fault;
use http::StatusCode;

use crate::log::{self, FileSink, LogSink};
use crate::request::RequestInfo;
use crate::response;

/// Terminal fault handler
///
/// Classifies a fault, shapes the response for the configured mode, and
/// optionally appends a log record. Produces exactly one response and
/// never forwards to downstream handlers.
pub struct ErrorPipeline {
    registry: ClassifierRegistry,
    sink: Option<Arc<dyn LogSink>>,
    verbose: bool,
}

impl ErrorPipeline {
    /// Pipeline without a log sink
    pub fn new(registry: ClassifierRegistry, verbose: bool) -> Self {
        Self {
            registry,
            sink: None,
            verbose,
        }
    }

    /// Pipeline wired from configuration
    ///
    /// Attaches a file sink at the configured path when logging is enabled.
    pub fn from_config(config: &Config, registry: ClassifierRegistry) -> Self {
        let mut pipeline = Self::new(registry, config.mode.is_verbose());
        if config.logging.enabled {
            pipeline.sink = Some(Arc::new(FileSink::new(config.logging.path.clone())));
        }
        pipeline
    }

    /// Replace the log sink
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Handle one fault and produce its response
    ///
    /// Log emission failures are reported via `tracing` and never affect
    /// the response.
    pub fn handle(&self, fault: impl Into<Fault>, request: &RequestInfo) -> Response {
        let fault = fault.into();

        if let Some(ref sink) = self.sink {
            let block = log::render_block(&fault, request, jiff::Timestamp::now());
            if let Err(e) = sink.append(&block) {
                tracing::warn!(error = %e, "error log emission failed");
            }
        }

        tracing::error!(
            method = %request.method,
            uri = %request.uri,
            error = fault.message(),
            "request failed"
        );

        let fault = match fault {
            Fault::Raw(raw) => match self.registry.classify(&raw) {
                Some(operational) => Fault::Operational(operational),
                None => Fault::Raw(raw),
            },
            Fault::Operational(operational) => Fault::Operational(operational),
        };

        let (status_code, body) = response::format(&fault, self.verbose);
        let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
