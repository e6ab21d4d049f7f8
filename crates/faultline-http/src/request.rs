use std::net::SocketAddr;

use axum::extract::ConnectInfo;

/// Request metadata captured for log records
///
/// Only what the error log needs; the request itself stays with the host
/// framework.
#[derive(Clone, Debug)]
pub struct RequestInfo {
    pub method: http::Method,
    pub uri: String,
    pub client_addr: Option<String>,
}

impl RequestInfo {
    pub fn new(method: http::Method, uri: impl Into<String>, client_addr: Option<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            client_addr,
        }
    }

    /// Capture metadata from request parts
    ///
    /// Reads the client address from axum's `ConnectInfo` extension when
    /// the host installed it.
    pub fn from_parts(parts: &http::request::Parts) -> Self {
        let client_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string());

        Self {
            method: parts.method.clone(),
            uri: parts.uri.to_string(),
            client_addr,
        }
    }
}
