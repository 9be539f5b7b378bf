//! Fluent URL builders, one per HERE operation.
//!
//! # Design
//! `UrlBuilder<E>` carries what every request shares (host override and
//! credentials) and delegates the operation-specific tail of the query string
//! to the `Endpoint` type parameter. Setters take `self` by value and return
//! it, and `build` consumes the builder, so a finished builder cannot be
//! reused and no state is shared between URLs.
//!
//! Query parameters are always written in the same order: `app_id`,
//! `app_code`, then the coordinate or search fields, then fixed
//! operation-specific fields. Callers compare URLs as strings, so the order is
//! part of the contract.
//!
//! Credentials and free text are percent-encoded. Hosts are trusted as given
//! (minus a trailing `/`). Coordinates use `f64`'s `Display`, which is the
//! shortest decimal that round-trips and never switches to exponent notation.

use crate::config::{DEFAULT_AUTOSUGGESTION_HOST, DEFAULT_GEOCODING_HOST, DEFAULT_MAP_TILE_HOST};
use crate::types::{Credentials, GeoCoordinate};

/// Zoom level sent with every map-tile request.
pub const ZOOM_LEVEL: u32 = 18;

/// Value of the map-tile `u` parameter (uncertainty radius around the centre).
pub const UNCERTAINTY: u32 = 10;

/// Operation-specific part of a URL.
pub trait Endpoint: Default {
    const DEFAULT_HOST: &'static str;
    const PATH: &'static str;

    /// Append `&key=value` pairs after the credentials.
    fn append_query(&self, url: &mut String);
}

/// Endpoints whose query carries a coordinate.
pub trait Positioned {
    fn coordinate_mut(&mut self) -> &mut GeoCoordinate;
}

/// Endpoints whose query carries free text.
pub trait Searchable {
    fn search_text_mut(&mut self) -> &mut String;
}

#[derive(Debug, Clone, Default)]
pub struct UrlBuilder<E> {
    host: Option<String>,
    app_id: String,
    app_token: String,
    endpoint: E,
}

pub type GeocodingUrl = UrlBuilder<Geocoding>;
pub type MapTileUrl = UrlBuilder<MapTile>;
pub type AutosuggestionUrl = UrlBuilder<Autosuggestion>;

impl<E: Endpoint> UrlBuilder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default host, e.g. `http://example.com`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn app_token(mut self, app_token: impl Into<String>) -> Self {
        self.app_token = app_token.into();
        self
    }

    pub fn credentials(self, credentials: &Credentials) -> Self {
        self.app_id(credentials.app_id.as_str())
            .app_token(credentials.app_token.as_str())
    }

    pub fn build(self) -> String {
        let host = self
            .host
            .as_deref()
            .unwrap_or(E::DEFAULT_HOST)
            .trim_end_matches('/');
        let mut url = format!(
            "{host}{path}?app_id={id}&app_code={code}",
            path = E::PATH,
            id = urlencoding::encode(&self.app_id),
            code = urlencoding::encode(&self.app_token),
        );
        self.endpoint.append_query(&mut url);
        url
    }
}

impl<E: Endpoint + Positioned> UrlBuilder<E> {
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.endpoint.coordinate_mut().latitude = latitude;
        self
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.endpoint.coordinate_mut().longitude = longitude;
        self
    }

    pub fn coordinate(mut self, coordinate: GeoCoordinate) -> Self {
        *self.endpoint.coordinate_mut() = coordinate;
        self
    }
}

impl<E: Endpoint + Searchable> UrlBuilder<E> {
    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        *self.endpoint.search_text_mut() = text.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Geocoding {
    search_text: String,
}

impl Endpoint for Geocoding {
    const DEFAULT_HOST: &'static str = DEFAULT_GEOCODING_HOST;
    const PATH: &'static str = "/6.2/geocode.json";

    fn append_query(&self, url: &mut String) {
        url.push_str("&searchtext=");
        url.push_str(&urlencoding::encode(&self.search_text));
    }
}

impl Searchable for Geocoding {
    fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }
}

// ---------------------------------------------------------------------------
// Map tile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MapTile {
    coordinate: GeoCoordinate,
    width: u32,
    height: u32,
    dpi: u32,
}

impl Endpoint for MapTile {
    const DEFAULT_HOST: &'static str = DEFAULT_MAP_TILE_HOST;
    const PATH: &'static str = "/mia/1.6/mapview";

    fn append_query(&self, url: &mut String) {
        url.push_str(&format!(
            "&c={c}&h={h}&w={w}&ppi={ppi}&z={ZOOM_LEVEL}&u={UNCERTAINTY}",
            c = self.coordinate.to_query_value(),
            h = self.height,
            w = self.width,
            ppi = self.dpi,
        ));
    }
}

impl Positioned for MapTile {
    fn coordinate_mut(&mut self) -> &mut GeoCoordinate {
        &mut self.coordinate
    }
}

impl UrlBuilder<MapTile> {
    pub fn width(mut self, width: u32) -> Self {
        self.endpoint.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.endpoint.height = height;
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.endpoint.dpi = dpi;
        self
    }
}

// ---------------------------------------------------------------------------
// Autosuggestion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Autosuggestion {
    coordinate: GeoCoordinate,
    search_text: String,
}

impl Endpoint for Autosuggestion {
    const DEFAULT_HOST: &'static str = DEFAULT_AUTOSUGGESTION_HOST;
    const PATH: &'static str = "/places/v1/autosuggest";

    fn append_query(&self, url: &mut String) {
        url.push_str(&format!(
            "&at={at}&q={q}",
            at = self.coordinate.to_query_value(),
            q = urlencoding::encode(&self.search_text),
        ));
    }
}

impl Positioned for Autosuggestion {
    fn coordinate_mut(&mut self) -> &mut GeoCoordinate {
        &mut self.coordinate
    }
}

impl Searchable for Autosuggestion {
    fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }
}
