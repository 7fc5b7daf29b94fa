use std::ffi::{CStr, c_char};

use crate::api::Api;
use crate::enums::{EXTENSIONS, NUM_EXTENSIONS};
use crate::types::{GLint, GLuint};
use crate::{LoadError, Version};

/// Extension names the context advertises.
///
/// Contexts before 3.0 report a single space-separated string; newer ones
/// report one name per index.
#[derive(Debug)]
pub enum Extensions {
    Legacy(String),
    Indexed(Vec<String>),
}

impl Default for Extensions {
    fn default() -> Self {
        Self::Legacy(String::new())
    }
}

impl Extensions {
    pub(crate) fn query(api: &Api) -> Result<Self, LoadError> {
        if api.version() < Version(3, 0) {
            if !api.GetString.is_loaded() {
                return Err(LoadError::CouldNotQueryExtensions);
            }
            let all = unsafe { api.GetString(EXTENSIONS) };
            // some contexts report no extension string at all
            if all.is_null() {
                return Ok(Self::Legacy(String::new()));
            }
            let all = unsafe { CStr::from_ptr(all as *const c_char) }
                .to_string_lossy()
                .into_owned();
            Ok(Self::Legacy(all))
        } else {
            if !api.GetIntegerv.is_loaded() || !api.GetStringi.is_loaded() {
                return Err(LoadError::CouldNotQueryExtensions);
            }
            let mut count: GLint = 0;
            unsafe { api.GetIntegerv(NUM_EXTENSIONS, &mut count) };
            let mut list = Vec::with_capacity(count.max(0) as usize);
            for index in 0..count.max(0) as GLuint {
                let name = unsafe { api.GetStringi(EXTENSIONS, index) };
                // null entries are skipped, not treated as a failure
                if name.is_null() {
                    continue;
                }
                let name = unsafe { CStr::from_ptr(name as *const c_char) }
                    .to_string_lossy()
                    .into_owned();
                list.push(name);
            }
            Ok(Self::Indexed(list))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Legacy(all) => all.split_ascii_whitespace().any(|ext| ext == name),
            Self::Indexed(list) => list.iter().any(|ext| ext == name),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Legacy(all) => all.split_ascii_whitespace().count(),
            Self::Indexed(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[test]
fn test_extensions_contains() {
    let legacy = Extensions::Legacy("GL_ARB_debug_output GL_ARB_direct_state_access".to_string());
    assert!(legacy.contains("GL_ARB_debug_output"));
    assert!(legacy.contains("GL_ARB_direct_state_access"));
    // a name that is a prefix of an advertised one must not match
    assert!(!legacy.contains("GL_ARB_debug"));
    assert_eq!(legacy.len(), 2);
    assert!(!legacy.is_empty());

    let indexed = Extensions::Indexed(vec!["GL_KHR_debug".to_string()]);
    assert!(indexed.contains("GL_KHR_debug"));
    assert!(!indexed.contains("GL_KHR"));
    assert_eq!(indexed.len(), 1);
}

#[test]
fn test_query_legacy_extensions() {
    use std::ffi::c_void;
    use std::ptr::{null, null_mut};

    use crate::enums::VERSION;
    use crate::types::{GLenum, GLubyte};

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"2.1 Mesa 23.1".as_ptr() as *const GLubyte,
            EXTENSIONS => {
                c"GL_ARB_vertex_buffer_object GL_ARB_shader_objects".as_ptr() as *const GLubyte
            }
            _ => null(),
        }
    }

    let api = unsafe {
        Api::load_with(|name| {
            let name = CStr::from_ptr(name);
            match name.to_bytes() {
                b"glGetString" => get_string as *mut c_void,
                _ => null_mut(),
            }
        })
        .unwrap()
    };

    assert!(matches!(api.extensions(), Extensions::Legacy(_)));
    assert_eq!(api.extensions().len(), 2);
    assert!(api.has_extension("GL_ARB_vertex_buffer_object"));
    assert!(api.has_extension("GL_ARB_shader_objects"));
    assert!(!api.has_extension("GL_ARB_vertex"));
}

#[test]
fn test_query_legacy_null_extensions() {
    use std::ffi::c_void;
    use std::ptr::{null, null_mut};

    use crate::enums::VERSION;
    use crate::types::{GLenum, GLubyte};

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"1.4".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }

    let api = unsafe {
        Api::load_with(|name| {
            let name = CStr::from_ptr(name);
            match name.to_bytes() {
                b"glGetString" => get_string as *mut c_void,
                _ => null_mut(),
            }
        })
        .unwrap()
    };

    assert!(api.extensions().is_empty());
    assert!(!api.has_extension("GL_ARB_anything"));
}

#[test]
fn test_query_indexed_extensions() {
    use std::ffi::c_void;
    use std::ptr::{null, null_mut};

    use crate::enums::VERSION;
    use crate::types::{GLenum, GLubyte};

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"3.2".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }
    extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
        if pname == NUM_EXTENSIONS {
            unsafe { *data = 3 };
        }
    }
    extern "system" fn get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
        if name != EXTENSIONS {
            return null();
        }
        match index {
            0 => c"GL_ARB_direct_state_access".as_ptr() as *const GLubyte,
            // index 1 reports null on purpose
            2 => c"GL_KHR_debug".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }

    let api = unsafe {
        Api::load_with(|name| {
            let name = CStr::from_ptr(name);
            match name.to_bytes() {
                b"glGetString" => get_string as *mut c_void,
                b"glGetIntegerv" => get_integerv as *mut c_void,
                b"glGetStringi" => get_stringi as *mut c_void,
                _ => null_mut(),
            }
        })
        .unwrap()
    };

    assert!(matches!(api.extensions(), Extensions::Indexed(_)));
    assert_eq!(api.extensions().len(), 2);
    assert!(api.has_extension("GL_ARB_direct_state_access"));
    assert!(api.has_extension("GL_KHR_debug"));
    assert!(!api.has_extension("GL_EXT_absent"));
}

#[test]
fn test_query_indexed_missing_commands() {
    use std::ffi::c_void;
    use std::ptr::{null, null_mut};

    use crate::enums::VERSION;
    use crate::types::{GLenum, GLubyte};

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"3.0".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }

    let result = unsafe {
        Api::load_with(|name| {
            let name = CStr::from_ptr(name);
            match name.to_bytes() {
                b"glGetString" => get_string as *mut c_void,
                _ => null_mut(),
            }
        })
    };
    assert!(matches!(result, Err(LoadError::CouldNotQueryExtensions)));
}
