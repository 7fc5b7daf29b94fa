use std::ffi::{CStr, c_char, c_void};
use std::ptr::null_mut;

use dynlib::DynLib;

use crate::LoadError;
use crate::api::Api;

#[cfg(windows)]
type GetProcAddressFn = unsafe extern "system" fn(procname: *const c_char) -> *mut c_void;
#[cfg(not(windows))]
type GetProcAddressFn = unsafe extern "C" fn(procname: *const c_char) -> *mut c_void;

pub(crate) struct LibGl {
    dynlib: DynLib,
    get_proc_address: Option<GetProcAddressFn>,
}

#[cfg(windows)]
fn load_dynlib() -> Result<DynLib, dynlib::Error> {
    DynLib::load(c"opengl32.dll")
}

#[cfg(target_vendor = "apple")]
fn load_dynlib() -> Result<DynLib, dynlib::Error> {
    DynLib::load(c"../Frameworks/OpenGL.framework/OpenGL")
        .or_else(|_| DynLib::load(c"/Library/Frameworks/OpenGL.framework/OpenGL"))
        .or_else(|_| DynLib::load(c"/System/Library/Frameworks/OpenGL.framework/OpenGL"))
        .or_else(|_| {
            DynLib::load(c"/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL")
        })
}

#[cfg(all(unix, not(target_vendor = "apple")))]
fn load_dynlib() -> Result<DynLib, dynlib::Error> {
    DynLib::load(c"libGL.so.1").or_else(|_| DynLib::load(c"libGL.so"))
}

#[cfg(windows)]
fn load_get_proc_address(dynlib: &DynLib) -> Option<GetProcAddressFn> {
    dynlib.lookup::<GetProcAddressFn>(c"wglGetProcAddress").ok()
}

// NOTE: apple's framework exports everything; there is no wgl/glX-style
// resolver to go thru.
#[cfg(target_vendor = "apple")]
fn load_get_proc_address(_dynlib: &DynLib) -> Option<GetProcAddressFn> {
    None
}

#[cfg(all(unix, not(target_vendor = "apple")))]
fn load_get_proc_address(dynlib: &DynLib) -> Option<GetProcAddressFn> {
    dynlib.lookup::<GetProcAddressFn>(c"glXGetProcAddressARB").ok()
}

impl LibGl {
    pub(crate) fn load() -> Result<Self, dynlib::Error> {
        let dynlib = load_dynlib()?;
        let get_proc_address = load_get_proc_address(&dynlib);
        Ok(Self {
            dynlib,
            get_proc_address,
        })
    }

    pub(crate) fn get_proc_address(&self, name: *const c_char) -> *mut c_void {
        get_proc_address_from(
            name,
            self.get_proc_address
                .map(|hook| move |name| unsafe { hook(name) }),
            |name| {
                self.dynlib
                    .lookup::<*mut c_void>(unsafe { CStr::from_ptr(name) })
                    .unwrap_or(null_mut())
            },
        )
    }
}

// NOTE: context-dependent commands may resolve only thru the platform
// resolver while core ones may resolve only thru the library, thus both are
// consulted.
fn get_proc_address_from<H, L>(name: *const c_char, hook: Option<H>, lookup: L) -> *mut c_void
where
    H: FnOnce(*const c_char) -> *mut c_void,
    L: FnOnce(*const c_char) -> *mut c_void,
{
    if let Some(hook) = hook {
        let addr = hook(name);
        if !addr.is_null() {
            return addr;
        }
    }
    lookup(name)
}

#[test]
fn test_get_proc_address_from() {
    let name = c"glClear".as_ptr();

    let addr = get_proc_address_from(
        name,
        None::<fn(*const c_char) -> *mut c_void>,
        |_| 0x1 as *mut c_void,
    );
    assert_eq!(addr, 0x1 as *mut c_void);

    // a resolver that reports null must fall thru to the library lookup
    let addr = get_proc_address_from(name, Some(|_| null_mut()), |_| 0x2 as *mut c_void);
    assert_eq!(addr, 0x2 as *mut c_void);

    let addr = get_proc_address_from(name, Some(|_| 0x3 as *mut c_void), |_| 0x4 as *mut c_void);
    assert_eq!(addr, 0x3 as *mut c_void);
}

impl Api {
    /// Loads the system gl library and resolves every supported command.
    ///
    /// A gl context must be current on the calling thread; the version and
    /// extension queries go thru it. The library stays loaded for as long as
    /// the returned [Api] lives.
    pub unsafe fn load() -> Result<Self, LoadError> {
        let libgl = LibGl::load().map_err(LoadError::CouldNotLoadLibGl)?;
        let mut api = unsafe { Api::load_with(|name| libgl.get_proc_address(name))? };
        api._libgl = Some(libgl);
        Ok(api)
    }
}
