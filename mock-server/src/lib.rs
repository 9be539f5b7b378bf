use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

pub const APP_ID: &str = "mock-app-id";
pub const APP_CODE: &str = "mock-app-code";

/// First bytes of every tile; the rest of the body echoes the request.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Search text answered with a 200 whose body is not JSON.
pub const MALFORMED_QUERY: &str = "malformed";

/// Known addresses and their display positions.
pub const PLACES: &[(&str, f64, f64)] = &[
    ("Berlin", 52.51604, 13.37691),
    ("Invalidenstrasse 116 Berlin", 52.53086, 13.38469),
    ("Fish & Chips, London", 51.5, -0.12),
];

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    pub vicinity: String,
    pub position: [f64; 2],
    #[serde(rename = "type")]
    pub kind: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/6.2/geocode.json", get(geocode))
        .route("/mia/1.6/mapview", get(map_view))
        .route("/places/v1/autosuggest", get(autosuggest))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type Params = Query<HashMap<String, String>>;

fn authorize(params: &HashMap<String, String>) -> Result<(), Response> {
    let id = params.get("app_id").map(String::as_str);
    let code = params.get("app_code").map(String::as_str);
    if id == Some(APP_ID) && code == Some(APP_CODE) {
        return Ok(());
    }
    Err((
        StatusCode::UNAUTHORIZED,
        Json(json!({"_type": "ns2:Error", "type": "PermissionError", "subtype": "InvalidCredentials"})),
    )
        .into_response())
}

fn bad_request(details: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"type": "ApplicationError", "Details": details})),
    )
        .into_response()
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or_default()
}

fn parse_pair(value: &str) -> Option<(f64, f64)> {
    let (lat, lon) = value.split_once(',')?;
    Some((lat.parse().ok()?, lon.parse().ok()?))
}

async fn geocode(Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&params) {
        return rejection;
    }
    let Some(text) = params.get("searchtext").filter(|t| !t.is_empty()) else {
        return bad_request("searchtext is required");
    };
    if text == MALFORMED_QUERY {
        return (StatusCode::OK, "this is not json").into_response();
    }

    let results: Vec<_> = PLACES
        .iter()
        .filter(|(name, _, _)| name.eq_ignore_ascii_case(text))
        .map(|(name, lat, lon)| {
            json!({
                "Relevance": 1.0,
                "MatchLevel": "street",
                "Location": {
                    "LocationType": "point",
                    "DisplayPosition": {"Latitude": lat, "Longitude": lon},
                    "Address": {"Label": name},
                }
            })
        })
        .collect();

    Json(json!({
        "Response": {
            "MetaInfo": {"Timestamp": "2016-01-01T00:00:00.000+0000"},
            "View": [{"_type": "SearchResultsViewType", "ViewId": 0, "Result": results}],
        }
    }))
    .into_response()
}

async fn map_view(Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&params) {
        return rejection;
    }

    if parse_pair(param(&params, "c")).is_none() {
        return bad_request("c must be lat,lon");
    }
    let (Ok(width), Ok(height)) = (
        param(&params, "w").parse::<u32>(),
        param(&params, "h").parse::<u32>(),
    ) else {
        return bad_request("w and h must be integers");
    };
    if width == 0 || height == 0 {
        return bad_request("w and h must be positive");
    }

    let mut body = PNG_SIGNATURE.to_vec();
    body.extend_from_slice(
        format!(
            "c={}&w={width}&h={height}&ppi={}&z={}&u={}",
            param(&params, "c"),
            param(&params, "ppi"),
            param(&params, "z"),
            param(&params, "u")
        )
        .as_bytes(),
    );
    ([(header::CONTENT_TYPE, "image/png")], body).into_response()
}

async fn autosuggest(Query(params): Params) -> Response {
    if let Err(rejection) = authorize(&params) {
        return rejection;
    }
    let Some((lat, lon)) = params.get("at").and_then(|at| parse_pair(at)) else {
        return bad_request("at must be lat,lon");
    };
    let query = params.get("q").map(|q| q.to_lowercase()).unwrap_or_default();

    let results: Vec<Suggestion> = PLACES
        .iter()
        .filter(|(name, _, _)| !query.is_empty() && name.to_lowercase().starts_with(&query))
        .map(|(name, place_lat, place_lon)| Suggestion {
            title: name.to_string(),
            vicinity: format!("near {lat},{lon}"),
            position: [*place_lat, *place_lon],
            kind: "urn:nlp-types:place".to_string(),
        })
        .collect();

    Json(json!({ "results": results })).into_response()
}
