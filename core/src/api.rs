//! The public facade: build, send, decode.
//!
//! # Design
//! `HereApi` offers each operation twice. The `try_*` methods return
//! `Result<_, ApiError>`. The plain methods never fail: transport and status
//! failures become an empty default, and every failure is reported to the
//! injected `Logger` before it is discarded.
//!
//! Geocoding keeps one distinction when collapsing. A response that arrived
//! but could not be decoded renders as `"0||0"`; a request that produced no
//! usable response renders as `""`.

use crate::client::HereClient;
use crate::config::HereConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::log::{Logger, TracingLogger};
use crate::transport::{execute, Transport, UreqTransport};
use crate::types::{AutosuggestionResponse, Credentials, GeoCoordinate, MapTileParams};

#[derive(Debug, Clone)]
pub struct HereApi<T = UreqTransport, L = TracingLogger> {
    client: HereClient,
    transport: T,
    logger: L,
}

impl HereApi {
    /// Public hosts, a fresh `ureq` agent, and `tracing` for reports.
    pub fn new(config: HereConfig) -> Self {
        Self::with_parts(HereClient::from_config(config), UreqTransport::new(), TracingLogger)
    }
}

impl<T: Transport, L: Logger> HereApi<T, L> {
    pub fn with_parts(client: HereClient, transport: T, logger: L) -> Self {
        Self {
            client,
            transport,
            logger,
        }
    }

    pub fn client(&self) -> &HereClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut HereClient {
        &mut self.client
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.redacted_url();
        self.logger.debug(&format!("GET {url}"));
        let response = execute(&self.transport, &request)?;
        self.logger.debug(&format!(
            "GET {url} -> {} ({} bytes)",
            response.status,
            response.body.len()
        ));
        Ok(response)
    }

    pub fn try_coordinates(&self, search_text: &str) -> Result<GeoCoordinate, ApiError> {
        let response = self.send(self.client.build_geocode(search_text))?;
        self.client.parse_geocode(response)
    }

    pub fn try_picture(&self, params: &MapTileParams) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.client.build_map_tile(params))?;
        self.client.parse_map_tile(response)
    }

    pub fn try_autosuggestions(
        &self,
        search_text: &str,
        near: GeoCoordinate,
    ) -> Result<AutosuggestionResponse, ApiError> {
        let response = self.send(self.client.build_autosuggest(search_text, near))?;
        self.client.parse_autosuggest(response)
    }

    /// `"{lat}||{lon}"`, `"0||0"` when the body was unusable, `""` otherwise.
    pub fn coordinates(&self, search_text: &str) -> String {
        match self.try_coordinates(search_text) {
            Ok(coordinate) => coordinate.to_pair_string(),
            Err(err) if err.is_decode() => {
                self.logger.report("can't decode geocoding response", &err);
                GeoCoordinate::default().to_pair_string()
            }
            Err(err) => {
                self.logger.report("geocoding request failed", &err);
                String::new()
            }
        }
    }

    /// Tile image bytes, empty on any failure.
    pub fn picture(&self, params: &MapTileParams) -> Vec<u8> {
        self.try_picture(params).unwrap_or_else(|err| {
            self.logger.report("map tile request failed", &err);
            Vec::new()
        })
    }

    /// Suggestions, or an empty list on any failure.
    pub fn autosuggestions(&self, search_text: &str, near: GeoCoordinate) -> AutosuggestionResponse {
        self.try_autosuggestions(search_text, near)
            .unwrap_or_else(|err| {
                self.logger.report("autosuggestion request failed", &err);
                AutosuggestionResponse::default()
            })
    }
}

fn one_shot(app_id: &str, app_token: &str) -> HereApi {
    HereApi::new(HereConfig::new(Credentials::new(app_id, app_token)))
}

/// Geocode `search_text` to `"{lat}||{lon}"`. See [`HereApi::coordinates`].
pub fn get_coordinates(app_id: &str, app_token: &str, search_text: &str) -> String {
    one_shot(app_id, app_token).coordinates(search_text)
}

/// Fetch a map tile centred on (`lat`, `lon`). Empty on failure.
pub fn get_picture(
    app_id: &str,
    app_token: &str,
    lat: f64,
    lon: f64,
    height: u32,
    width: u32,
    dpi: u32,
) -> Vec<u8> {
    let params = MapTileParams {
        coordinate: GeoCoordinate::new(lat, lon),
        width,
        height,
        dpi,
    };
    one_shot(app_id, app_token).picture(&params)
}

/// Suggestions for `search_text` near (`lat`, `lon`). Empty on failure.
pub fn get_autosuggestions(
    app_id: &str,
    app_token: &str,
    search_text: &str,
    lat: f64,
    lon: f64,
) -> AutosuggestionResponse {
    one_shot(app_id, app_token).autosuggestions(search_text, GeoCoordinate::new(lat, lon))
}
