//! C-ABI wrapper around `dex-core`.
//!
//! # Overview
//! Exposes the PokeAPI client through `extern "C"` functions so a native
//! mobile host can build and parse HTTP requests/responses with its own
//! networking stack, without linking to Rust's async runtime.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiDexResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `dex_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use dex_core::http::HttpResponse;

use types::*;

/// Borrow a C string as `&str`. `None` if it is not valid UTF-8.
///
/// # Safety
/// `ptr` must be non-null and point to a NUL-terminated string that outlives
/// the returned reference.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `PokeClient` bound to `base_url`. A null `base_url` selects
/// the public PokeAPI.
///
/// Returns null if `base_url` is not valid UTF-8 or an internal panic occurs.
/// The caller must free the returned pointer with `dex_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn dex_client_new(base_url: *const c_char) -> *mut FfiPokeClient {
    catch_unwind(|| {
        let client = if base_url.is_null() {
            dex_core::PokeClient::default()
        } else {
            match unsafe { str_arg(base_url) } {
                Some(base_url) => dex_core::PokeClient::new(base_url),
                None => return std::ptr::null_mut(),
            }
        };
        Box::into_raw(Box::new(FfiPokeClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a `PokeClient` created by `dex_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dex_client_free(client: *mut FfiPokeClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for one page of the list.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `dex_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn dex_build_list_page(
    client: *const FfiPokeClient,
    offset: u32,
    limit: u32,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_page(offset, limit))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for a Pokémon by exact name or numeric id.
///
/// Returns null if `client` or `id_or_name` is null, or if `id_or_name` is
/// not valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn dex_build_get_pokemon(
    client: *const FfiPokeClient,
    id_or_name: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || id_or_name.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let Some(id_or_name) = (unsafe { str_arg(id_or_name) }) else {
            return std::ptr::null_mut();
        };
        FfiHttpRequest::from_core(client.inner.build_get_pokemon(id_or_name))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request from a list entry's detail reference (`url`).
///
/// Returns null if `client` or `reference` is null, or if `reference` is not
/// valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn dex_build_get_pokemon_by_reference(
    client: *const FfiPokeClient,
    reference: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() || reference.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let Some(reference) = (unsafe { str_arg(reference) }) else {
            return std::ptr::null_mut();
        };
        FfiHttpRequest::from_core(client.inner.build_get_pokemon_by_reference(reference))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body is
/// treated as empty; a body that is not valid UTF-8 yields `None`.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> Option<HttpResponse> {
    let body = if resp.body.is_null() {
        ""
    } else {
        unsafe { str_arg(resp.body) }?
    };
    Some(HttpResponse::new(resp.status, body))
}

/// Parse an HTTP response from a list-page request.
///
/// Returns a result with `data_tag = Page` on success, and `InvalidUtf8` if
/// the body is not valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn dex_parse_list_page(
    client: *const FfiPokeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiDexResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiDexResult::null_arg("client");
        }
        if response.is_null() {
            return FfiDexResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let Some(core_resp) = ffi_response_to_core(unsafe { &*response }) else {
            return FfiDexResult::invalid_utf8("response.body");
        };
        match client.inner.parse_list_page(core_resp) {
            Ok(page) => FfiDexResult::ok_page(page),
            Err(e) => FfiDexResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiDexResult::panic("panic in dex_parse_list_page"))
}

/// Parse an HTTP response from a detail request (by name, id or reference).
///
/// Returns a result with `data_tag = Pokemon` on success, and `InvalidUtf8`
/// if the body is not valid UTF-8.
#[unsafe(no_mangle)]
pub extern "C" fn dex_parse_pokemon_detail(
    client: *const FfiPokeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiDexResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiDexResult::null_arg("client");
        }
        if response.is_null() {
            return FfiDexResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let Some(core_resp) = ffi_response_to_core(unsafe { &*response }) else {
            return FfiDexResult::invalid_utf8("response.body");
        };
        match client.inner.parse_pokemon_detail(core_resp) {
            Ok(detail) => FfiDexResult::ok_pokemon(detail),
            Err(e) => FfiDexResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiDexResult::panic("panic in dex_parse_pokemon_detail"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Reclaim a leaked array and run `free_item` on each element.
fn free_array<T>(ptr: *mut T, len: u32, free_item: impl Fn(&T)) {
    if ptr.is_null() || len == 0 {
        return;
    }
    let items = unsafe { Vec::from_raw_parts(ptr, len as usize, len as usize) };
    for item in &items {
        free_item(item);
    }
}

/// Free an `FfiHttpRequest` returned by any `dex_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dex_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_array(req.headers, req.headers_len, |h| {
            free_c_string(h.key);
            free_c_string(h.value);
        });
    });
}

/// Free an `FfiDexResult` returned by any `dex_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn dex_free_result(result: *mut FfiDexResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::Page => {
                let page = unsafe { Box::from_raw(result.data as *mut FfiPokemonPage) };
                free_c_string(page.next);
                free_c_string(page.previous);
                free_array(page.results, page.results_len, |s| {
                    free_c_string(s.name);
                    free_c_string(s.url);
                });
            }
            FfiDataTag::Pokemon => {
                let detail = unsafe { Box::from_raw(result.data as *mut FfiPokemonDetail) };
                free_c_string(detail.name);
                free_c_string(detail.sprite_url);
                free_array(detail.types, detail.types_len, |t| free_c_string(*t));
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dex_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
