//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! The C side only ever sees an opaque `FfiHereApi` handle, NUL-terminated
//! strings, and `FfiBytes` for tile images. Conversion helpers live here to
//! keep `lib.rs` focused on the `extern "C"` surface.

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use hereapi_core::{HereApi, HereClient, HereConfig};

/// Opaque handle holding credentials, hosts and a connection-reusing agent.
/// C callers receive a pointer to this and pass it back into every function.
pub struct FfiHereApi {
    pub(crate) api: HereApi,
}

impl FfiHereApi {
    pub(crate) fn new(config: HereConfig) -> Self {
        Self {
            api: HereApi::new(config),
        }
    }

    pub(crate) fn client(&self) -> &HereClient {
        self.api.client()
    }
}

/// Which upstream service `here_api_set_host` should redirect.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiService {
    Geocoding = 0,
    MapTile = 1,
    Autosuggestion = 2,
}

/// An owned byte buffer. `data` is null when `len` is 0.
///
/// Release with `here_free_bytes`.
#[repr(C)]
pub struct FfiBytes {
    pub data: *mut u8,
    pub len: usize,
}

impl FfiBytes {
    pub(crate) fn empty() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
        }
    }

    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len();
        let data = Box::into_raw(boxed) as *mut u8;
        Self { data, len }
    }

    /// Reclaim the allocation made by `from_vec`.
    ///
    /// # Safety
    /// `self` must come from `from_vec` and must not have been freed.
    pub(crate) unsafe fn into_vec(self) -> Vec<u8> {
        if self.data.is_null() {
            return Vec::new();
        }
        let slice = std::ptr::slice_from_raw_parts_mut(self.data, self.len);
        unsafe { Box::from_raw(slice) }.into_vec()
    }
}

/// Borrow a C string, `None` when the pointer is null.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn read_str<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy())
}

/// Hand a Rust string to C. Interior NULs cannot occur in the strings this
/// crate produces; if one does, the caller gets an empty string.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}
