//! C-ABI wrapper around `hereapi-core`.
//!
//! # Overview
//! Exposes the three HERE operations through `extern "C"` functions so mobile
//! or other non-Rust hosts can call them without touching Rust types.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `here_api_get_*` mirror the collapsing facade: they never report errors,
//!   they return an empty string, `"0||0"`, empty bytes or an empty
//!   suggestion list. Failures are logged through `tracing`.
//! - `here_api_build_*_url` return the request URL for hosts that prefer to
//!   perform the GET themselves.
//! - The C caller owns all returned pointers and must release them with the
//!   matching `here_free_*` function.

pub mod types;

use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use hereapi_core::{Credentials, GeoCoordinate, HereConfig, MapTileParams};

use types::*;

// ---------------------------------------------------------------------------
// Handle lifecycle
// ---------------------------------------------------------------------------

/// Create a handle for the given credentials, pointing at the public hosts.
///
/// Returns null if either argument is null or if an internal panic occurs.
/// The caller must free the returned pointer with `here_api_free`.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_new(app_id: *const c_char, app_token: *const c_char) -> *mut FfiHereApi {
    catch_unwind(|| {
        let (Some(app_id), Some(app_token)) = (read_str(app_id), read_str(app_token)) else {
            return std::ptr::null_mut();
        };
        let config = HereConfig::new(Credentials::new(app_id, app_token));
        Box::into_raw(Box::new(FfiHereApi::new(config)))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a handle created by `here_api_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_free(api: *mut FfiHereApi) {
    if !api.is_null() {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(api) });
        }));
    }
}

/// Redirect one service to `host` (e.g. a proxy).
///
/// Returns false if `api` or `host` is null.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_set_host(
    api: *mut FfiHereApi,
    service: FfiService,
    host: *const c_char,
) -> bool {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return false;
        }
        let Some(host) = read_str(host) else {
            return false;
        };
        let api = unsafe { &mut *api };
        let hosts = api.api.client_mut().hosts_mut();
        let slot = match service {
            FfiService::Geocoding => &mut hosts.geocoding,
            FfiService::MapTile => &mut hosts.map_tile,
            FfiService::Autosuggestion => &mut hosts.autosuggestion,
        };
        *slot = host.into_owned();
        true
    }))
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Geocode `search_text` to `"{lat}||{lon}"`.
///
/// Returns `""` when the request fails, `"0||0"` when the response cannot be
/// decoded, and null only if an argument is null.
/// The caller must free the returned string with `here_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_get_coordinates(
    api: *const FfiHereApi,
    search_text: *const c_char,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let Some(text) = read_str(search_text) else {
            return std::ptr::null_mut();
        };
        let api = unsafe { &*api };
        into_c_string(api.api.coordinates(&text))
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Fetch the map tile centred on (`lat`, `lon`).
///
/// Returns empty bytes on any failure. Free with `here_free_bytes`.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_get_picture(
    api: *const FfiHereApi,
    lat: f64,
    lon: f64,
    height: u32,
    width: u32,
    dpi: u32,
) -> FfiBytes {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return FfiBytes::empty();
        }
        let api = unsafe { &*api };
        let params = MapTileParams {
            coordinate: GeoCoordinate::new(lat, lon),
            width,
            height,
            dpi,
        };
        FfiBytes::from_vec(api.api.picture(&params))
    }))
    .unwrap_or_else(|_| FfiBytes::empty())
}

/// Suggestions for `search_text` near (`lat`, `lon`) as a JSON document
/// `{"results":[...]}`. An empty list on any failure; null only if an
/// argument is null. Free with `here_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_get_autosuggestions(
    api: *const FfiHereApi,
    search_text: *const c_char,
    lat: f64,
    lon: f64,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let Some(text) = read_str(search_text) else {
            return std::ptr::null_mut();
        };
        let api = unsafe { &*api };
        let suggestions = api.api.autosuggestions(&text, GeoCoordinate::new(lat, lon));
        let json = serde_json::to_string(&suggestions).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "can't encode autosuggestions");
            r#"{"results":[]}"#.to_string()
        });
        into_c_string(json)
    }))
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// URL building
// ---------------------------------------------------------------------------

/// URL of the geocoding request for `search_text`. Null if an argument is null.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_build_geocode_url(
    api: *const FfiHereApi,
    search_text: *const c_char,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let Some(text) = read_str(search_text) else {
            return std::ptr::null_mut();
        };
        let api = unsafe { &*api };
        into_c_string(api.client().build_geocode(&text).url)
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// URL of the map-tile request. Null if `api` is null.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_build_map_tile_url(
    api: *const FfiHereApi,
    lat: f64,
    lon: f64,
    height: u32,
    width: u32,
    dpi: u32,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let api = unsafe { &*api };
        let params = MapTileParams {
            coordinate: GeoCoordinate::new(lat, lon),
            width,
            height,
            dpi,
        };
        into_c_string(api.client().build_map_tile(&params).url)
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// URL of the autosuggestion request. Null if an argument is null.
#[unsafe(no_mangle)]
pub extern "C" fn here_api_build_autosuggest_url(
    api: *const FfiHereApi,
    search_text: *const c_char,
    lat: f64,
    lon: f64,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if api.is_null() {
            return std::ptr::null_mut();
        }
        let Some(text) = read_str(search_text) else {
            return std::ptr::null_mut();
        };
        let api = unsafe { &*api };
        let near = GeoCoordinate::new(lat, lon);
        into_c_string(api.client().build_autosuggest(&text, near).url)
    }))
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn here_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

/// Free a buffer returned by `here_api_get_picture`. Safe to call with an
/// empty buffer.
#[unsafe(no_mangle)]
pub extern "C" fn here_free_bytes(bytes: FfiBytes) {
    let _ = catch_unwind(AssertUnwindSafe(|| {
        drop(unsafe { bytes.into_vec() });
    }));
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
