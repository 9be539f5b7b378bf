//! Domain values and upstream wire models for the HERE API.
//!
//! # Design
//! The geocoding model only spells out the path the client consumes
//! (`Response.View[0].Result[0].Location.DisplayPosition`); every other field
//! in the upstream document is ignored. The upstream API answers in
//! PascalCase, but camelCase spellings are accepted as aliases so hand-written
//! fixtures and proxies that normalise keys keep working.
//!
//! Autosuggestion results are passed through to callers untouched: each entry
//! keeps the upstream JSON object, and typed accessors read the common fields.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Application credentials sent as `app_id` / `app_code` on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub app_id: String,
    pub app_token: String,
}

impl Credentials {
    pub fn new(app_id: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_token: app_token.into(),
        }
    }
}

/// A latitude/longitude pair in degrees. No bounds checking is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Render as `"{lat}||{lon}"` using the shortest round-trip decimal form.
    pub fn to_pair_string(&self) -> String {
        format!("{}||{}", self.latitude, self.longitude)
    }

    /// Render as `"{lat},{lon}"`, the form used in query strings.
    pub(crate) fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Inputs for a single map-tile image request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapTileParams {
    pub coordinate: GeoCoordinate,
    pub width: u32,
    pub height: u32,
    pub dpi: u32,
}

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// Top-level geocoding document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingResponse {
    #[serde(rename = "Response", alias = "response", default)]
    pub response: GeocodingBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingBody {
    #[serde(rename = "View", alias = "view", default)]
    pub view: Vec<GeocodingView>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingView {
    #[serde(rename = "Result", alias = "result", default)]
    pub result: Vec<GeocodingResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingResult {
    #[serde(rename = "Location", alias = "location", default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(rename = "DisplayPosition", alias = "displayPosition", default)]
    pub display_position: Option<DisplayPosition>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DisplayPosition {
    #[serde(rename = "Latitude", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude", alias = "longitude")]
    pub longitude: f64,
}

impl GeocodingResponse {
    /// Display position of the first result of the first view, if any.
    pub fn first_display_position(&self) -> Option<GeoCoordinate> {
        let position = self
            .response
            .view
            .first()?
            .result
            .first()?
            .location
            .as_ref()?
            .display_position?;
        Some(GeoCoordinate::new(position.latitude, position.longitude))
    }
}

// ---------------------------------------------------------------------------
// Autosuggestion
// ---------------------------------------------------------------------------

/// Ranked completions for a partial search phrase near a location.
///
/// Entries of `results` that are not JSON objects are skipped rather than
/// failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutosuggestionResponse {
    #[serde(default, deserialize_with = "object_entries")]
    pub results: Vec<Suggestion>,
}

fn object_entries<'de, D>(deserializer: D) -> Result<Vec<Suggestion>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(fields) => Some(Suggestion { fields }),
            _ => None,
        })
        .collect())
}

/// A single autosuggestion entry, kept exactly as the upstream sent it.
///
/// Accessors return `None` when a field is absent or has an unexpected type,
/// so one odd field never hides the rest of the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestion {
    fields: Map<String, Value>,
}

impl Suggestion {
    /// Every field as received, including ones without an accessor.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn highlighted_title(&self) -> Option<&str> {
        self.text("highlightedTitle")
    }

    pub fn vicinity(&self) -> Option<&str> {
        self.text("vicinity")
    }

    pub fn highlighted_vicinity(&self) -> Option<&str> {
        self.text("highlightedVicinity")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    pub fn category_title(&self) -> Option<&str> {
        self.text("categoryTitle")
    }

    pub fn href(&self) -> Option<&str> {
        self.text("href")
    }

    /// The upstream `type` field.
    pub fn kind(&self) -> Option<&str> {
        self.text("type")
    }

    pub fn result_type(&self) -> Option<&str> {
        self.text("resultType")
    }

    pub fn id(&self) -> Option<&str> {
        self.text("id")
    }

    /// `position` as `[latitude, longitude]`.
    pub fn position(&self) -> Option<GeoCoordinate> {
        match self.fields.get("position")?.as_array()?.as_slice() {
            [lat, lon] => Some(GeoCoordinate::new(lat.as_f64()?, lon.as_f64()?)),
            _ => None,
        }
    }

    /// Distance from the search location in metres.
    pub fn distance(&self) -> Option<f64> {
        self.fields.get("distance").and_then(Value::as_f64)
    }
}

impl From<Map<String, Value>> for Suggestion {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
