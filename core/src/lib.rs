//! Synchronous client for the HERE geocoding, map image and places APIs.
//!
//! # Overview
//! Three operations, each one blocking GET: geocode an address to
//! coordinates, fetch a map-tile image, and look up autosuggestions near a
//! point.
//!
//! # Design
//! - `url` builds each request URL with a fixed query-parameter order.
//! - `HereClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`, so the I/O boundary is explicit.
//! - `Transport` performs the GET and `execute` drains the body on every path.
//! - `HereApi` wires the three together. Its `try_*` methods return typed
//!   errors; the plain methods and the `get_*` functions collapse failures to
//!   empty defaults and report them through an injected `Logger`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod log;
pub mod transport;
pub mod types;
pub mod url;

#[cfg(test)]
mod testing;

pub use api::{get_autosuggestions, get_coordinates, get_picture, HereApi};
pub use client::HereClient;
pub use config::{HereConfig, Hosts};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use log::{Logger, NullLogger, TracingLogger};
pub use transport::{execute, RawResponse, Transport, UreqTransport};
pub use types::{
    AutosuggestionResponse, Credentials, GeoCoordinate, MapTileParams, Suggestion,
};
pub use url::{AutosuggestionUrl, GeocodingUrl, MapTileUrl};
