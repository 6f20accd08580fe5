//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use dex_core::error::ApiError;
use dex_core::http::HttpMethod;
use dex_core::{PokemonDetail, PokemonPage, PokemonSummary};

/// Opaque handle to a `PokeClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiPokeClient {
    pub(crate) inner: dex_core::PokeClient,
}

/// Copy a Rust string into a heap C string. Interior NULs cannot be
/// represented and yield an empty string.
pub(crate) fn c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Leak a vector as a raw pointer, null when empty. Reclaimed with
/// `Vec::from_raw_parts(ptr, len, len)`.
fn leak_vec<T>(items: Vec<T>) -> *mut T {
    if items.is_empty() {
        return std::ptr::null_mut();
    }
    let mut items = items.into_boxed_slice();
    let ptr = items.as_mut_ptr();
    std::mem::forget(items);
    ptr
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `dex_build_*` functions. The C caller executes the request
/// and passes the response back through `dex_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: dex_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = leak_vec(
            req.headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect(),
        );

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: c_string(req.path),
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `dex_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiDexResult`.
#[repr(C)]
#[derive(Debug)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Deserialization = 3,
    MalformedResponse = 4,
    Transport = 5,
    Panic = 6,
    NullArg = 7,
    InvalidUtf8 = 8,
}

/// Tag that tells `dex_free_result` what `FfiDexResult::data` points to.
#[repr(C)]
#[derive(Debug)]
pub enum FfiDataTag {
    None = 0,
    Page = 1,
    Pokemon = 2,
}

/// One list entry exposed to C.
#[repr(C)]
pub struct FfiPokemonSummary {
    pub name: *mut c_char,
    pub url: *mut c_char,
}

/// One page of the list exposed to C. `next`/`previous` are null when absent.
#[repr(C)]
pub struct FfiPokemonPage {
    pub count: u32,
    pub next: *mut c_char,
    pub previous: *mut c_char,
    pub results: *mut FfiPokemonSummary,
    pub results_len: u32,
}

/// A resolved Pokémon exposed to C. `sprite_url` is never null; it is an
/// empty string when the Pokémon has no front sprite.
#[repr(C)]
pub struct FfiPokemonDetail {
    pub id: u32,
    pub name: *mut c_char,
    pub height: u32,
    pub weight: u32,
    pub types: *mut *mut c_char,
    pub types_len: u32,
    pub sprite_url: *mut c_char,
}

impl FfiPokemonPage {
    fn from_core(page: PokemonPage) -> Self {
        let results_len = page.results.len() as u32;
        let results = leak_vec(
            page.results
                .into_iter()
                .map(|PokemonSummary { name, url }| FfiPokemonSummary {
                    name: c_string(name),
                    url: c_string(url),
                })
                .collect(),
        );
        FfiPokemonPage {
            count: page.count,
            next: page.next.map(c_string).unwrap_or(std::ptr::null_mut()),
            previous: page.previous.map(c_string).unwrap_or(std::ptr::null_mut()),
            results,
            results_len,
        }
    }
}

impl FfiPokemonDetail {
    fn from_core(detail: PokemonDetail) -> Self {
        let types_len = detail.types.len() as u32;
        let types = leak_vec(detail.types.into_iter().map(c_string).collect());
        FfiPokemonDetail {
            id: detail.id,
            name: c_string(detail.name),
            height: detail.height,
            weight: detail.weight,
            types,
            types_len,
            sprite_url: c_string(detail.sprite_url),
        }
    }
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiDexResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiDexResult {
    fn boxed(
        error_code: FfiErrorCode,
        error_message: *mut c_char,
        http_status: u16,
        data_tag: FfiDataTag,
        data: *mut std::ffi::c_void,
    ) -> *mut Self {
        Box::into_raw(Box::new(FfiDexResult {
            error_code,
            error_message,
            http_status,
            data_tag,
            data,
        }))
    }

    /// Build a success result carrying an `FfiPokemonPage`.
    pub(crate) fn ok_page(page: PokemonPage) -> *mut Self {
        let data = Box::into_raw(Box::new(FfiPokemonPage::from_core(page)));
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), 200, FfiDataTag::Page, data.cast())
    }

    /// Build a success result carrying an `FfiPokemonDetail`.
    pub(crate) fn ok_pokemon(detail: PokemonDetail) -> *mut Self {
        let data = Box::into_raw(Box::new(FfiPokemonDetail::from_core(detail)));
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), 200, FfiDataTag::Pokemon, data.cast())
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status) = match &err {
            ApiError::NotFound => (FfiErrorCode::NotFound, 404u16),
            ApiError::HttpError { status, .. } => (FfiErrorCode::Http, *status),
            ApiError::DeserializationError(_) => (FfiErrorCode::Deserialization, 0),
            ApiError::MalformedResponse { .. } => (FfiErrorCode::MalformedResponse, 0),
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0),
        };
        Self::boxed(
            error_code,
            c_string(err.to_string()),
            http_status,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::NullArg,
            c_string(format!("null argument: {name}")),
            0,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }

    /// Build an error result for a string argument that is not valid UTF-8.
    pub(crate) fn invalid_utf8(name: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::InvalidUtf8,
            c_string(format!("invalid UTF-8 argument: {name}")),
            0,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::Panic,
            c_string(msg.to_string()),
            0,
            FfiDataTag::None,
            std::ptr::null_mut(),
        )
    }
}
