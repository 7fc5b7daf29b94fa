use std::ffi::c_void;
use std::fmt;
use std::mem::transmute;

use crate::api::Api;
use crate::enums::NO_ERROR;
use crate::types::GLenum;

/// Describes a single command invocation for debug callbacks.
pub struct Call<'a> {
    /// Full command name, for example `glClearColor`.
    pub name: &'static str,
    /// Address the command resolved to; null when it was not loaded.
    pub ptr: *mut c_void,
    /// Individual arguments; `args.len()` is the argument count.
    pub args: &'a [&'a dyn fmt::Debug],
}

pub type PreCallback = fn(api: &Api, call: &Call);
pub type PostCallback = fn(api: &Api, ret: Option<&dyn fmt::Debug>, call: &Call);

impl Api {
    /// Makes every command go thru the pre and post callbacks.
    ///
    /// Defaults trace-log each call and report `glGetError` failures; see
    /// [Api::set_pre_callback] and [Api::set_post_callback].
    pub fn install_debug(&mut self) {
        self.debug = true;
    }

    pub fn uninstall_debug(&mut self) {
        self.debug = false;
    }

    pub fn set_pre_callback(&mut self, pre_callback: PreCallback) {
        self.pre_callback = pre_callback;
    }

    pub fn set_post_callback(&mut self, post_callback: PostCallback) {
        self.post_callback = post_callback;
    }
}

// NOTE: default callbacks invoke glGetError thru the raw pointer, going thru
// the Api method would re-enter the hooks.
type GetErrorFn = extern "system" fn() -> GLenum;

pub(crate) fn default_pre_callback(api: &Api, call: &Call) {
    log::trace!("{}{:?}", call.name, call.args);

    if call.ptr.is_null() {
        log::error!("{} is not loaded", call.name);
        return;
    }
    if !api.GetError.is_loaded() {
        log::error!("glGetError is not loaded");
        return;
    }
    // drain the pending error so that the post callback reports errors of
    // this call only
    _ = unsafe { transmute::<_, GetErrorFn>(api.GetError.as_ptr())() };
}

pub(crate) fn default_post_callback(api: &Api, _ret: Option<&dyn fmt::Debug>, call: &Call) {
    if !api.GetError.is_loaded() {
        return;
    }
    let error = unsafe { transmute::<_, GetErrorFn>(api.GetError.as_ptr())() };
    if error != NO_ERROR {
        log::error!("gl error {error:#06x} in {}", call.name);
    }
}

#[test]
fn test_debug_callbacks() {
    use std::ffi::CStr;
    use std::ptr::{null, null_mut};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::enums::{EXTENSIONS, INVALID_OPERATION, VERSION};
    use crate::types::{GLbitfield, GLubyte};

    static SEQ: AtomicUsize = AtomicUsize::new(1);
    static PRE_AT: AtomicUsize = AtomicUsize::new(0);
    static RAW_AT: AtomicUsize = AtomicUsize::new(0);
    static POST_AT: AtomicUsize = AtomicUsize::new(0);
    static LAST_ARGC: AtomicUsize = AtomicUsize::new(usize::MAX);
    static LAST_RET_SOME: AtomicUsize = AtomicUsize::new(usize::MAX);

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"2.1".as_ptr() as *const GLubyte,
            EXTENSIONS => c"".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }
    extern "system" fn get_error() -> GLenum {
        RAW_AT.store(SEQ.fetch_add(1, Ordering::Relaxed), Ordering::Relaxed);
        INVALID_OPERATION
    }
    extern "system" fn clear(_mask: GLbitfield) {
        RAW_AT.store(SEQ.fetch_add(1, Ordering::Relaxed), Ordering::Relaxed);
    }

    fn pre(_api: &Api, call: &Call) {
        assert!(matches!(call.name, "glGetError" | "glClear"));
        assert!(!call.ptr.is_null());
        LAST_ARGC.store(call.args.len(), Ordering::Relaxed);
        PRE_AT.store(SEQ.fetch_add(1, Ordering::Relaxed), Ordering::Relaxed);
    }
    fn post(_api: &Api, ret: Option<&dyn fmt::Debug>, _call: &Call) {
        LAST_RET_SOME.store(ret.is_some() as usize, Ordering::Relaxed);
        POST_AT.store(SEQ.fetch_add(1, Ordering::Relaxed), Ordering::Relaxed);
    }

    let mut api = unsafe {
        Api::load_with(|name| {
            let name = CStr::from_ptr(name);
            match name.to_bytes() {
                b"glGetString" => get_string as *mut c_void,
                b"glGetError" => get_error as *mut c_void,
                b"glClear" => clear as *mut c_void,
                _ => null_mut(),
            }
        })
        .unwrap()
    };

    api.install_debug();
    api.set_pre_callback(pre);
    api.set_post_callback(post);

    let error = unsafe { api.GetError() };
    // the wrapped return value must come back unchanged
    assert_eq!(error, INVALID_OPERATION);
    assert_eq!(LAST_ARGC.load(Ordering::Relaxed), 0);
    assert_eq!(LAST_RET_SOME.load(Ordering::Relaxed), 1);
    let pre_at = PRE_AT.load(Ordering::Relaxed);
    let raw_at = RAW_AT.load(Ordering::Relaxed);
    let post_at = POST_AT.load(Ordering::Relaxed);
    assert!(pre_at < raw_at);
    assert!(raw_at < post_at);

    unsafe { api.Clear(0) };
    assert_eq!(LAST_ARGC.load(Ordering::Relaxed), 1);
    assert_eq!(LAST_RET_SOME.load(Ordering::Relaxed), 0);

    api.uninstall_debug();
    let pre_at = PRE_AT.load(Ordering::Relaxed);
    let error = unsafe { api.GetError() };
    assert_eq!(error, INVALID_OPERATION);
    // callbacks must not run anymore
    assert_eq!(PRE_AT.load(Ordering::Relaxed), pre_at);
}

#[test]
fn test_call_rereads_reassigned_slot() {
    use std::ffi::CStr;
    use std::ptr::{null, null_mut};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::api::FnPtr;
    use crate::enums::{EXTENSIONS, VERSION};
    use crate::types::GLubyte;

    static FIRST_CALLS: AtomicUsize = AtomicUsize::new(0);
    static SECOND_CALLS: AtomicUsize = AtomicUsize::new(0);
    static PRE_PTR: AtomicUsize = AtomicUsize::new(0);

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"2.1".as_ptr() as *const GLubyte,
            EXTENSIONS => c"".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }
    extern "system" fn first_finish() {
        FIRST_CALLS.fetch_add(1, Ordering::Relaxed);
    }
    extern "system" fn second_finish() {
        SECOND_CALLS.fetch_add(1, Ordering::Relaxed);
    }

    fn pre(_api: &Api, call: &Call) {
        PRE_PTR.store(call.ptr as usize, Ordering::Relaxed);
    }
    fn post(_api: &Api, _ret: Option<&dyn fmt::Debug>, _call: &Call) {}

    let mut api = unsafe {
        Api::load_with(|name| match CStr::from_ptr(name).to_bytes() {
            b"glGetString" => get_string as *mut c_void,
            b"glFinish" => first_finish as *mut c_void,
            _ => null_mut(),
        })
        .unwrap()
    };

    api.install_debug();
    api.set_pre_callback(pre);
    api.set_post_callback(post);

    unsafe { api.Finish() };
    assert_eq!(FIRST_CALLS.load(Ordering::Relaxed), 1);
    assert_eq!(
        PRE_PTR.load(Ordering::Relaxed),
        first_finish as *mut c_void as usize,
    );

    // the slot is read again on every call, not captured at install time
    api.Finish = FnPtr::new(second_finish as *mut c_void);
    unsafe { api.Finish() };
    assert_eq!(FIRST_CALLS.load(Ordering::Relaxed), 1);
    assert_eq!(SECOND_CALLS.load(Ordering::Relaxed), 1);
    assert_eq!(
        PRE_PTR.load(Ordering::Relaxed),
        second_finish as *mut c_void as usize,
    );
}
