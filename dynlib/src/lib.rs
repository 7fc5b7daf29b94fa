use std::ffi::{CStr, c_void};
use std::mem::transmute_copy;
use std::ptr::NonNull;
use std::{error, fmt};

#[cfg(unix)]
use libc::{dlclose, dlerror, dlopen, dlsym};
#[cfg(windows)]
use windows_sys::Win32::Foundation::{FreeLibrary, GetLastError};
#[cfg(windows)]
use windows_sys::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryA};

#[derive(Debug)]
pub enum Error {
    CouldNotOpen(String),
    CouldNotFindSymbol(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CouldNotOpen(reason) => {
                f.write_fmt(format_args!("could not open library: {reason}"))
            }
            Self::CouldNotFindSymbol(reason) => {
                f.write_fmt(format_args!("could not find symbol: {reason}"))
            }
        }
    }
}

#[test]
fn test_error_display() {
    let err = Error::CouldNotOpen("no such file".to_string());
    assert_eq!(err.to_string(), "could not open library: no such file");
}

pub struct DynLib(NonNull<c_void>);

// NOTE: dlerror returns a static buffer that must not be freed, thus the copy.
#[cfg(unix)]
fn last_dl_error() -> String {
    let err = unsafe { dlerror() };
    if err.is_null() {
        return "unknown dl error".to_string();
    }
    unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
}

#[cfg(unix)]
impl DynLib {
    pub fn load(filename: &CStr) -> Result<Self, Error> {
        let handle = unsafe { dlopen(filename.as_ptr(), libc::RTLD_LAZY) };
        match NonNull::new(handle) {
            Some(handle) => Ok(Self(handle)),
            None => Err(Error::CouldNotOpen(last_dl_error())),
        }
    }

    pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, Error> {
        unsafe {
            // NOTE: null is a valid symbol address; the error state has to be
            // cleared before and inspected after, as dlsym(3) prescribes.
            _ = dlerror();

            let addr = dlsym(self.0.as_ptr(), name.as_ptr());

            let err = dlerror();
            if !err.is_null() {
                Err(Error::CouldNotFindSymbol(
                    CStr::from_ptr(err).to_string_lossy().into_owned(),
                ))
            } else {
                Ok(transmute_copy(&addr))
            }
        }
    }
}

#[cfg(unix)]
impl Drop for DynLib {
    fn drop(&mut self) {
        unsafe {
            dlclose(self.0.as_ptr());
        }
    }
}

#[cfg(windows)]
impl DynLib {
    pub fn load(filename: &CStr) -> Result<Self, Error> {
        let handle = unsafe { LoadLibraryA(filename.as_ptr() as *const u8) };
        match NonNull::new(handle) {
            Some(handle) => Ok(Self(handle)),
            None => Err(Error::CouldNotOpen(format!("error code {:#x}", unsafe {
                GetLastError()
            }))),
        }
    }

    pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, Error> {
        let addr = unsafe { GetProcAddress(self.0.as_ptr(), name.as_ptr() as *const u8) };
        match addr {
            Some(addr) => Ok(unsafe { transmute_copy(&addr) }),
            None => Err(Error::CouldNotFindSymbol(format!(
                "error code {:#x}",
                unsafe { GetLastError() }
            ))),
        }
    }
}

#[cfg(windows)]
impl Drop for DynLib {
    fn drop(&mut self) {
        unsafe {
            FreeLibrary(self.0.as_ptr());
        }
    }
}

#[test]
fn test_load_nonexistent() {
    assert!(DynLib::load(c"libdefinitelydoesnotexist.so.0").is_err());
    // a repeated failure must not leave anything behind or crash
    assert!(DynLib::load(c"libdefinitelydoesnotexist.so.0").is_err());
}
