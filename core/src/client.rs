//! Stateless request builder and response parser for the HERE API.
//!
//! # Design
//! `HereClient` holds only credentials and hosts and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the round-trip in between, keeping this
//! type deterministic and free of I/O.

use crate::config::{HereConfig, Hosts};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{
    AutosuggestionResponse, Credentials, GeoCoordinate, GeocodingResponse, MapTileParams,
};
use crate::url::{AutosuggestionUrl, GeocodingUrl, MapTileUrl};

#[derive(Debug, Clone)]
pub struct HereClient {
    credentials: Credentials,
    hosts: Hosts,
}

impl HereClient {
    /// Client for the public HERE hosts.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            hosts: Hosts::default(),
        }
    }

    pub fn from_config(config: HereConfig) -> Self {
        Self {
            credentials: config.credentials,
            hosts: config.hosts,
        }
    }

    pub fn with_hosts(mut self, hosts: Hosts) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn hosts(&self) -> &Hosts {
        &self.hosts
    }

    /// Redirect services in place, e.g. from a long-lived handle.
    pub fn hosts_mut(&mut self) -> &mut Hosts {
        &mut self.hosts
    }

    pub fn build_geocode(&self, search_text: &str) -> HttpRequest {
        let url = GeocodingUrl::new()
            .host(self.hosts.geocoding.as_str())
            .credentials(&self.credentials)
            .search_text(search_text)
            .build();
        HttpRequest { url }
    }

    pub fn build_map_tile(&self, params: &MapTileParams) -> HttpRequest {
        let url = MapTileUrl::new()
            .host(self.hosts.map_tile.as_str())
            .credentials(&self.credentials)
            .coordinate(params.coordinate)
            .width(params.width)
            .height(params.height)
            .dpi(params.dpi)
            .build();
        HttpRequest { url }
    }

    pub fn build_autosuggest(&self, search_text: &str, near: GeoCoordinate) -> HttpRequest {
        let url = AutosuggestionUrl::new()
            .host(self.hosts.autosuggestion.as_str())
            .credentials(&self.credentials)
            .coordinate(near)
            .search_text(search_text)
            .build();
        HttpRequest { url }
    }

    /// Display position of the first result.
    pub fn parse_geocode(&self, response: HttpResponse) -> Result<GeoCoordinate, ApiError> {
        check_status(&response)?;
        let doc: GeocodingResponse = serde_json::from_slice(&response.body)?;
        doc.first_display_position().ok_or(ApiError::NoResult)
    }

    /// Raw image bytes; the content is not inspected.
    pub fn parse_map_tile(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }

    pub fn parse_autosuggest(
        &self,
        response: HttpResponse,
    ) -> Result<AutosuggestionResponse, ApiError> {
        check_status(&response)?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Anything but 200 is an error; codes are not told apart.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_ok() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body_lossy(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HereClient {
        HereClient::new(Credentials::new("xxx", "yyy")).with_hosts(Hosts::all("http://localhost:3000"))
    }

    #[test]
    fn build_geocode_produces_correct_url() {
        let req = client().build_geocode("Berlin");
        assert_eq!(
            req.url,
            "http://localhost:3000/6.2/geocode.json?app_id=xxx&app_code=yyy&searchtext=Berlin"
        );
    }

    #[test]
    fn build_map_tile_produces_correct_url() {
        let params = MapTileParams {
            coordinate: GeoCoordinate::new(11.11, 22.22),
            width: 23,
            height: 12,
            dpi: 1,
        };
        let req = client().build_map_tile(&params);
        assert_eq!(
            req.url,
            "http://localhost:3000/mia/1.6/mapview?app_id=xxx&app_code=yyy&c=11.11,22.22&h=12&w=23&ppi=1&z=18&u=10"
        );
    }

    #[test]
    fn build_autosuggest_produces_correct_url() {
        let req = client().build_autosuggest("Pizza", GeoCoordinate::new(52.5, 13.4));
        assert_eq!(
            req.url,
            "http://localhost:3000/places/v1/autosuggest?app_id=xxx&app_code=yyy&at=52.5,13.4&q=Pizza"
        );
    }

    #[test]
    fn default_hosts_are_used_without_override() {
        let client = HereClient::new(Credentials::new("xxx", "yyy"));
        assert!(client
            .build_geocode("a")
            .url
            .starts_with("https://geocoder.cit.api.here.com/6.2/geocode.json?"));
        assert!(client
            .build_map_tile(&MapTileParams::default())
            .url
            .starts_with("https://image.maps.cit.api.here.com/mia/1.6/mapview?"));
        assert!(client
            .build_autosuggest("a", GeoCoordinate::default())
            .url
            .starts_with("https://places.cit.api.here.com/places/v1/autosuggest?"));
    }

    #[test]
    fn hosts_mut_redirects_one_service() {
        let mut client = HereClient::new(Credentials::new("xxx", "yyy"));
        client.hosts_mut().autosuggestion = "http://proxy".to_string();
        let url = client.build_autosuggest("a", GeoCoordinate::new(1.0, 2.0)).url;
        assert!(url.starts_with("http://proxy/places/v1/autosuggest?"));
        assert!(client.build_geocode("a").url.starts_with(crate::config::DEFAULT_GEOCODING_HOST));
    }

    #[test]
    fn from_config_uses_configured_hosts() {
        let config = HereConfig::new(Credentials::new("a", "b")).with_hosts(Hosts::all("http://proxy"));
        let client = HereClient::from_config(config);
        assert_eq!(client.hosts().map_tile, "http://proxy");
        assert_eq!(client.credentials().app_id, "a");
    }

    #[test]
    fn parse_geocode_success() {
        let body = r#"{"Response":{"View":[{"Result":[{"Location":{"DisplayPosition":{"Latitude":52.53086,"Longitude":13.38469}}}]}]}}"#;
        let coordinate = client().parse_geocode(HttpResponse::new(200, body)).unwrap();
        assert_eq!(coordinate, GeoCoordinate::new(52.53086, 13.38469));
    }

    #[test]
    fn parse_geocode_empty_result_is_no_result() {
        let body = r#"{"Response":{"View":[{"Result":[]}]}}"#;
        let err = client().parse_geocode(HttpResponse::new(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::NoResult));
    }

    #[test]
    fn parse_geocode_bad_json() {
        let err = client()
            .parse_geocode(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_geocode_wrong_status() {
        let err = client()
            .parse_geocode(HttpResponse::new(401, "unauthorized"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpStatus { status: 401, .. }));
    }

    #[test]
    fn parse_map_tile_passes_bytes_through() {
        let bytes = vec![0x89, b'P', b'N', b'G', 0x00, 0xff];
        let tile = client()
            .parse_map_tile(HttpResponse::new(200, bytes.clone()))
            .unwrap();
        assert_eq!(tile, bytes);
    }

    #[test]
    fn parse_map_tile_wrong_status() {
        for status in [400, 404, 500] {
            let err = client()
                .parse_map_tile(HttpResponse::new(status, "nope"))
                .unwrap_err();
            assert!(matches!(err, ApiError::HttpStatus { status: s, .. } if s == status));
        }
    }

    #[test]
    fn parse_autosuggest_success() {
        let body = r#"{"results":[{"title":"Pizza Hut","vicinity":"Berlin"},{"title":"Pizza","type":"urn:nlp-types:category"}]}"#;
        let parsed = client()
            .parse_autosuggest(HttpResponse::new(200, body))
            .unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].vicinity(), Some("Berlin"));
    }

    #[test]
    fn parse_autosuggest_bad_json() {
        let err = client()
            .parse_autosuggest(HttpResponse::new(200, "[1,2"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
