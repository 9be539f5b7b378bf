//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe requests and responses as plain data. `HereClient`
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; a `Transport` (or a non-Rust host going through the
//! FFI crate) performs the actual GET in between.
//!
//! Every HERE operation is a GET with all parameters in the query string, so a
//! request is fully described by its URL. Response bodies are bytes because
//! map tiles are images.

/// An HTTP GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

impl HttpRequest {
    /// The URL with the `app_code` value masked, for logs.
    pub fn redacted_url(&self) -> String {
        let Some((base, query)) = self.url.split_once('?') else {
            return self.url.clone();
        };
        let query = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some(("app_code", _)) => "app_code=***",
                _ => pair,
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{base}?{query}")
    }
}

/// An HTTP response whose body has already been read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body as text for diagnostics; invalid UTF-8 is replaced.
    pub fn body_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
