//! Blocking HTTP GET and body draining.
//!
//! # Design
//! `Transport` is the only I/O seam in the crate. It returns the status and an
//! unread body; `execute` then reads the body to the end regardless of the
//! status and drops the reader before returning, so every exit path leaves the
//! connection ready for reuse. Status codes are never interpreted here, and
//! nothing is logged: callers report through their own `Logger`.

use std::io::Read;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// A response whose body has not been read yet.
pub struct RawResponse {
    pub status: u16,
    pub body: Box<dyn Read>,
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Performs exactly one blocking GET per call.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError>;
}

/// `Transport` backed by a shared `ureq::Agent`.
///
/// Non-2xx statuses are returned as responses rather than errors so the
/// client decides what they mean.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.into_body().into_reader();
        Ok(RawResponse {
            status,
            body: Box::new(body),
        })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        (**self).get(url)
    }
}

/// Send `request` and read the whole body.
///
/// The body reader is dropped before this returns, on success and on error.
pub fn execute<T: Transport + ?Sized>(
    transport: &T,
    request: &HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let RawResponse { status, mut body } = transport.get(&request.url)?;

    let mut bytes = Vec::new();
    let read = body.read_to_end(&mut bytes);
    drop(body);
    read?;

    Ok(HttpResponse {
        status,
        body: bytes,
    })
}
