// C entry points. Strings in are NUL-terminated UTF-8 (invalid bytes are
// replaced); strings out are owned by the caller and must be released with
// `akshar_free_string`.
use crate::core::converter::Converter;
use crate::core::engine::Script;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use tracing::error;

/// Copies `s` into a C string. Interior NULs cannot cross the boundary, so
/// the string is cut at the first one.
fn into_c_string(s: String) -> *mut c_char {
    let bytes = match s.find('\0') {
        Some(end) => s.as_bytes()[..end].to_vec(),
        None => s.into_bytes(),
    };
    CString::new(bytes).map_or(ptr::null_mut(), CString::into_raw)
}

unsafe fn read_input(text: *const c_char) -> Option<String> {
    if text.is_null() {
        return None;
    }
    Some(CStr::from_ptr(text).to_string_lossy().into_owned())
}

fn run(text: *const c_char, op: &str, convert: fn(&Converter, &str) -> String) -> *mut c_char {
    let Some(input) = (unsafe { read_input(text) }) else {
        return ptr::null_mut();
    };
    let output = catch_unwind(AssertUnwindSafe(|| convert(Converter::global(), &input)))
        .unwrap_or_else(|_| {
            error!(op, "panic during conversion, returning input unchanged");
            input.clone()
        });
    into_c_string(output)
}

#[no_mangle]
pub extern "C" fn akshar_english_to_unicode(text: *const c_char) -> *mut c_char {
    run(text, "english_to_unicode", Converter::english_to_unicode)
}

#[no_mangle]
pub extern "C" fn akshar_unicode_to_english(text: *const c_char) -> *mut c_char {
    run(text, "unicode_to_english", Converter::unicode_to_english)
}

#[no_mangle]
pub extern "C" fn akshar_unicode_to_preeti(text: *const c_char) -> *mut c_char {
    run(text, "unicode_to_preeti", Converter::unicode_to_preeti)
}

#[no_mangle]
pub extern "C" fn akshar_preeti_to_unicode(text: *const c_char) -> *mut c_char {
    run(text, "preeti_to_unicode", Converter::preeti_to_unicode)
}

/// JSON array of the clusters `text` assembles into when read as `script`
/// ("english", "unicode" or "preeti"). Returns null for a null argument or
/// an unknown script name.
#[no_mangle]
pub extern "C" fn akshar_analyze(text: *const c_char, script: *const c_char) -> *mut c_char {
    let (Some(input), Some(script)) = (unsafe { read_input(text) }, unsafe { read_input(script) })
    else {
        return ptr::null_mut();
    };
    let script: Script = match script.parse() {
        Ok(script) => script,
        Err(e) => {
            error!(%e, "akshar_analyze");
            return ptr::null_mut();
        }
    };
    let json = catch_unwind(AssertUnwindSafe(|| {
        let clusters = Converter::global().analyze(&input, script);
        serde_json::to_string(&clusters).unwrap_or_else(|_| "[]".to_string())
    }))
    .unwrap_or_else(|_| {
        error!("panic in akshar_analyze");
        "[]".to_string()
    });
    into_c_string(json)
}

#[no_mangle]
pub extern "C" fn akshar_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(f: extern "C" fn(*const c_char) -> *mut c_char, input: &str) -> String {
        let c_input = CString::new(input).unwrap();
        let out = f(c_input.as_ptr());
        assert!(!out.is_null());
        let s = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        akshar_free_string(out);
        s
    }

    #[test]
    fn converts_across_the_boundary() {
        assert_eq!(call(akshar_english_to_unicode, "nepaal"), "नेपाल");
        assert_eq!(call(akshar_unicode_to_english, "नेपाल"), "nepaala");
        assert_eq!(call(akshar_unicode_to_preeti, "नेपाल"), "g]kfn");
        assert_eq!(call(akshar_preeti_to_unicode, "g]kfn"), "नेपाल");
    }

    #[test]
    fn null_input_returns_null() {
        assert!(akshar_english_to_unicode(ptr::null()).is_null());
        assert!(akshar_analyze(ptr::null(), ptr::null()).is_null());
        akshar_free_string(ptr::null_mut());
    }

    #[test]
    fn analyze_returns_json() {
        let text = CString::new("कि").unwrap();
        let script = CString::new("unicode").unwrap();
        let out = akshar_analyze(text.as_ptr(), script.as_ptr());
        let json = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        akshar_free_string(out);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));

        let bad = CString::new("klingon").unwrap();
        assert!(akshar_analyze(text.as_ptr(), bad.as_ptr()).is_null());
    }
}
