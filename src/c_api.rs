// File: src/c_api.rs
// C ABI over opaque dictionary handles. Panics are caught at every entry
// point and never unwind into the caller.
use crate::core::engine;
use crate::core::trie::DictionaryIndex;
use crate::core::types::SegmentOptions;
use crate::dictionary::{DictionaryCache, DictionarySource};
use crate::error::{Result, SegmentError};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;
use std::sync::Arc;

/// Opaque handle returned by [`thai_newmm_dict_load`].
pub struct DictionaryHandle {
    index: Arc<DictionaryIndex>,
}

unsafe fn c_str_to_str<'a>(ptr: *const c_char) -> Result<&'a str> {
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| SegmentError::InvalidInput {
            reason: e.to_string(),
        })
}

fn load_dictionary(path: Option<&str>) -> Result<Arc<DictionaryIndex>> {
    let source = DictionarySource::from_custom_path(path.map(PathBuf::from).as_deref());
    DictionaryCache::global().get_or_load(&source)
}

/// Loads (or fetches from the process cache) a dictionary.
///
/// A NULL `path` selects the embedded default dictionary. Returns NULL if the
/// file is missing or invalid. Release with [`thai_newmm_dict_free`].
///
/// # Safety
/// `path` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn thai_newmm_dict_load(path: *const c_char) -> *mut DictionaryHandle {
    let result = catch_unwind(|| {
        let path = if path.is_null() {
            None
        } else {
            Some(c_str_to_str(path)?)
        };
        load_dictionary(path)
    });
    match result {
        Ok(Ok(index)) => Box::into_raw(Box::new(DictionaryHandle { index })),
        Ok(Err(e)) => {
            log::error!("failed to load dictionary: {}", e);
            ptr::null_mut()
        }
        Err(_) => {
            log::error!("panic while loading dictionary");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `dict` must be NULL or a handle from [`thai_newmm_dict_load`] that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn thai_newmm_dict_free(dict: *mut DictionaryHandle) {
    if !dict.is_null() {
        drop(Box::from_raw(dict));
    }
}

/// Segments `text` and returns the tokens as a JSON array of strings.
///
/// A NULL `text` yields `[]`. Returns NULL if `dict` is NULL or `text` is not
/// valid UTF-8. Release the result with [`thai_newmm_string_free`].
///
/// # Safety
/// `dict` must be NULL or a live handle; `text` must be NULL or a valid
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn thai_newmm_segment(
    dict: *const DictionaryHandle,
    text: *const c_char,
    keep_whitespace: bool,
) -> *mut c_char {
    thai_newmm_segment_with_options(dict, text, keep_whitespace, false)
}

/// [`thai_newmm_segment`] that can also merge runs of unknown clusters.
///
/// # Safety
/// Same contract as [`thai_newmm_segment`].
#[no_mangle]
pub unsafe extern "C" fn thai_newmm_segment_with_options(
    dict: *const DictionaryHandle,
    text: *const c_char,
    keep_whitespace: bool,
    join_unknown: bool,
) -> *mut c_char {
    if dict.is_null() {
        log::error!("thai_newmm_segment called without a dictionary");
        return ptr::null_mut();
    }
    let handle = &*dict;

    let result = catch_unwind(AssertUnwindSafe(|| -> Result<String> {
        let text = if text.is_null() { "" } else { c_str_to_str(text)? };
        let options = SegmentOptions {
            keep_whitespace,
            join_unknown,
        };
        let words: Vec<String> = engine::segment(text, &handle.index, &options)
            .into_iter()
            .map(|t| t.text)
            .collect();
        Ok(serde_json::to_string(&words).unwrap_or_else(|_| "[]".to_string()))
    }));

    let json = match result {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => {
            log::error!("segmentation rejected input: {}", e);
            return ptr::null_mut();
        }
        Err(_) => {
            log::error!("panic in thai_newmm_segment");
            return ptr::null_mut();
        }
    };
    // serde_json escapes control characters, so the JSON has no interior NUL.
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

/// # Safety
/// `s` must be NULL or a string returned by [`thai_newmm_segment`].
#[no_mangle]
pub unsafe extern "C" fn thai_newmm_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
