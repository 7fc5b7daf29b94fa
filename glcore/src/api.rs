use std::ffi::{CStr, c_char, c_void};
use std::fmt;
use std::mem::transmute;
use std::ptr::null_mut;

use crate::debug::{self, Call, PostCallback, PreCallback};
use crate::enums::VERSION;
use crate::extensions::Extensions;
use crate::libgl::LibGl;
use crate::types::*;
use crate::{LoadError, Version};

#[cold]
#[inline(never)]
fn null_fn_ptr_panic() -> ! {
    panic!("function was not loaded")
}

/// Address a single command resolved to.
#[derive(Clone, Copy)]
pub struct FnPtr {
    ptr: *mut c_void,
}

impl FnPtr {
    const NULL: Self = Self { ptr: null_mut() };

    pub fn new(ptr: *mut c_void) -> Self {
        Self { ptr }
    }

    pub fn as_ptr(&self) -> *mut c_void {
        self.ptr
    }

    pub fn is_loaded(&self) -> bool {
        !self.ptr.is_null()
    }
}

macro_rules! gl_api {
    (@ret_ref $ret:ident) => {
        None
    };
    (@ret_ref $ret:ident $ret_ty:ty) => {
        Some(&$ret as &dyn fmt::Debug)
    };
    ($([$major:literal, $minor:literal] {
        $(fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?) $(-> $ret_ty:ty)?;)*
    })*) => {
        /// Core-profile command table, loaded against the current context.
        ///
        /// Commands above the version the context reports are left unloaded;
        /// calling one panics. Probe with [FnPtr::is_loaded] first when a
        /// command may be out of reach.
        pub struct Api {
            $($(pub $name: FnPtr,)*)*
            version: Version,
            extensions: Extensions,
            pub(crate) debug: bool,
            pub(crate) pre_callback: PreCallback,
            pub(crate) post_callback: PostCallback,
            pub(crate) _libgl: Option<LibGl>,
        }

        impl Api {
            /// Resolves every supported command thru `get_proc_address`.
            ///
            /// The resolver comes from whatever owns the current context, for
            /// example `SDL_GL_GetProcAddress` or `eglGetProcAddress`.
            pub unsafe fn load_with<F>(mut get_proc_address: F) -> Result<Self, LoadError>
            where
                F: FnMut(*const c_char) -> *mut c_void,
            {
                let get_string = get_proc_address(c"glGetString".as_ptr());
                if get_string.is_null() {
                    return Err(LoadError::MissingGetString);
                }
                type GetStringFn = extern "system" fn(name: GLenum) -> *const GLubyte;
                let version_ptr = unsafe { transmute::<_, GetStringFn>(get_string)(VERSION) };
                if version_ptr.is_null() {
                    return Err(LoadError::CouldNotQueryVersion);
                }
                let version_str =
                    unsafe { CStr::from_ptr(version_ptr as *const c_char) }.to_string_lossy();
                let version = Version::parse(&version_str)?;

                let mut api = Self {
                    $($($name: if version >= Version($major, $minor) {
                        FnPtr::new(get_proc_address(
                            concat!("gl", stringify!($name), "\0").as_ptr() as *const c_char,
                        ))
                    } else {
                        FnPtr::NULL
                    },)*)*
                    version,
                    extensions: Extensions::default(),
                    debug: false,
                    pre_callback: debug::default_pre_callback,
                    post_callback: debug::default_post_callback,
                    _libgl: None,
                };
                api.extensions = Extensions::query(&api)?;
                Ok(api)
            }

            $($(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $arg_ty),*) $(-> $ret_ty)? {
                    type Dst = extern "system" fn($($arg_ty),*) $(-> $ret_ty)?;
                    if self.debug {
                        let call = Call {
                            name: concat!("gl", stringify!($name)),
                            ptr: self.$name.as_ptr(),
                            args: &[$(&$arg as &dyn fmt::Debug),*],
                        };
                        (self.pre_callback)(self, &call);
                        if !self.$name.is_loaded() {
                            null_fn_ptr_panic();
                        }
                        let ret = unsafe { transmute::<_, Dst>(self.$name.ptr)($($arg),*) };
                        (self.post_callback)(self, gl_api!(@ret_ref ret $($ret_ty)?), &call);
                        ret
                    } else {
                        if !self.$name.is_loaded() {
                            null_fn_ptr_panic();
                        }
                        unsafe { transmute::<_, Dst>(self.$name.ptr)($($arg),*) }
                    }
                }
            )*)*
        }
    };
}

gl_api! {
    [1, 0] {
        fn CullFace(mode: GLenum);
        fn FrontFace(mode: GLenum);
        fn Hint(target: GLenum, mode: GLenum);
        fn LineWidth(width: GLfloat);
        fn PointSize(size: GLfloat);
        fn PolygonMode(face: GLenum, mode: GLenum);
        fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
        fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
        fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
        fn TexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn DrawBuffer(buf: GLenum);
        fn Clear(mask: GLbitfield);
        fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn ClearStencil(s: GLint);
        fn ClearDepth(depth: GLdouble);
        fn StencilMask(mask: GLuint);
        fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
        fn DepthMask(flag: GLboolean);
        fn Disable(cap: GLenum);
        fn Enable(cap: GLenum);
        fn Finish();
        fn Flush();
        fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
        fn LogicOp(opcode: GLenum);
        fn StencilFunc(func: GLenum, ref_: GLint, mask: GLuint);
        fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
        fn DepthFunc(func: GLenum);
        fn PixelStoref(pname: GLenum, param: GLfloat);
        fn PixelStorei(pname: GLenum, param: GLint);
        fn ReadBuffer(src: GLenum);
        fn ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
        fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
        fn GetDoublev(pname: GLenum, data: *mut GLdouble);
        fn GetError() -> GLenum;
        fn GetFloatv(pname: GLenum, data: *mut GLfloat);
        fn GetIntegerv(pname: GLenum, data: *mut GLint);
        fn GetString(name: GLenum) -> *const GLubyte;
        fn GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
        fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
        fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
        fn GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
        fn IsEnabled(cap: GLenum) -> GLboolean;
        fn DepthRange(n: GLdouble, f: GLdouble);
        fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
    [1, 1] {
        fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
        fn DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
        fn GetPointerv(pname: GLenum, params: *mut *mut c_void);
        fn PolygonOffset(factor: GLfloat, units: GLfloat);
        fn CopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
        fn CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
        fn CopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        fn CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn TexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn BindTexture(target: GLenum, texture: GLuint);
        fn DeleteTextures(n: GLsizei, textures: *const GLuint);
        fn GenTextures(n: GLsizei, textures: *mut GLuint);
        fn IsTexture(texture: GLuint) -> GLboolean;
    }
    [1, 2] {
        fn DrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void);
        fn TexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn CopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
    [1, 3] {
        fn ActiveTexture(texture: GLenum);
        fn SampleCoverage(value: GLfloat, invert: GLboolean);
        fn CompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void);
        fn CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void);
        fn CompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void);
        fn CompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
        fn CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
        fn CompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
        fn GetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void);
    }
    [1, 4] {
        fn BlendFuncSeparate(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum, dfactorAlpha: GLenum);
        fn MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei);
        fn MultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei);
        fn PointParameterf(pname: GLenum, param: GLfloat);
        fn PointParameterfv(pname: GLenum, params: *const GLfloat);
        fn PointParameteri(pname: GLenum, param: GLint);
        fn PointParameteriv(pname: GLenum, params: *const GLint);
        fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn BlendEquation(mode: GLenum);
    }
    [1, 5] {
        fn GenQueries(n: GLsizei, ids: *mut GLuint);
        fn DeleteQueries(n: GLsizei, ids: *const GLuint);
        fn IsQuery(id: GLuint) -> GLboolean;
        fn BeginQuery(target: GLenum, id: GLuint);
        fn EndQuery(target: GLenum);
        fn GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint);
        fn GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
        fn BindBuffer(target: GLenum, buffer: GLuint);
        fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
        fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
        fn IsBuffer(buffer: GLuint) -> GLboolean;
        fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
        fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
        fn GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
        fn MapBuffer(target: GLenum, access: GLenum) -> *mut c_void;
        fn UnmapBuffer(target: GLenum) -> GLboolean;
        fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void);
    }
    [2, 0] {
        fn BlendEquationSeparate(modeRGB: GLenum, modeAlpha: GLenum);
        fn DrawBuffers(n: GLsizei, bufs: *const GLenum);
        fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
        fn StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
        fn StencilMaskSeparate(face: GLenum, mask: GLuint);
        fn AttachShader(program: GLuint, shader: GLuint);
        fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
        fn CompileShader(shader: GLuint);
        fn CreateProgram() -> GLuint;
        fn CreateShader(type_: GLenum) -> GLuint;
        fn DeleteProgram(program: GLuint);
        fn DeleteShader(shader: GLuint);
        fn DetachShader(program: GLuint, shader: GLuint);
        fn DisableVertexAttribArray(index: GLuint);
        fn EnableVertexAttribArray(index: GLuint);
        fn GetActiveAttrib(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
        fn GetActiveUniform(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar);
        fn GetAttachedShaders(program: GLuint, maxCount: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
        fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
        fn GetProgramInfoLog(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
        fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
        fn GetShaderInfoLog(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
        fn GetShaderSource(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, source: *mut GLchar);
        fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
        fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
        fn GetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
        fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void);
        fn IsProgram(program: GLuint) -> GLboolean;
        fn IsShader(shader: GLuint) -> GLboolean;
        fn LinkProgram(program: GLuint);
        fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
        fn UseProgram(program: GLuint);
        fn Uniform1f(location: GLint, v0: GLfloat);
        fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
        fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn Uniform1i(location: GLint, v0: GLint);
        fn Uniform2i(location: GLint, v0: GLint, v1: GLint);
        fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
        fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
        fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint);
        fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint);
        fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ValidateProgram(program: GLuint);
        fn VertexAttrib1d(index: GLuint, x: GLdouble);
        fn VertexAttrib1dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib1f(index: GLuint, x: GLfloat);
        fn VertexAttrib1fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib1s(index: GLuint, x: GLshort);
        fn VertexAttrib1sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib2d(index: GLuint, x: GLdouble, y: GLdouble);
        fn VertexAttrib2dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
        fn VertexAttrib2fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib2s(index: GLuint, x: GLshort, y: GLshort);
        fn VertexAttrib2sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn VertexAttrib3dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
        fn VertexAttrib3fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib3s(index: GLuint, x: GLshort, y: GLshort, z: GLshort);
        fn VertexAttrib3sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib4Nbv(index: GLuint, v: *const GLbyte);
        fn VertexAttrib4Niv(index: GLuint, v: *const GLint);
        fn VertexAttrib4Nsv(index: GLuint, v: *const GLshort);
        fn VertexAttrib4Nub(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte);
        fn VertexAttrib4Nubv(index: GLuint, v: *const GLubyte);
        fn VertexAttrib4Nuiv(index: GLuint, v: *const GLuint);
        fn VertexAttrib4Nusv(index: GLuint, v: *const GLushort);
        fn VertexAttrib4bv(index: GLuint, v: *const GLbyte);
        fn VertexAttrib4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn VertexAttrib4dv(index: GLuint, v: *const GLdouble);
        fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        fn VertexAttrib4fv(index: GLuint, v: *const GLfloat);
        fn VertexAttrib4iv(index: GLuint, v: *const GLint);
        fn VertexAttrib4s(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort);
        fn VertexAttrib4sv(index: GLuint, v: *const GLshort);
        fn VertexAttrib4ubv(index: GLuint, v: *const GLubyte);
        fn VertexAttrib4uiv(index: GLuint, v: *const GLuint);
        fn VertexAttrib4usv(index: GLuint, v: *const GLushort);
        fn VertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
    }
    [2, 1] {
        fn UniformMatrix2x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix3x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix2x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix4x2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix3x4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn UniformMatrix4x3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    }
    [3, 0] {
        fn ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean);
        fn GetBooleani_v(target: GLenum, index: GLuint, data: *mut GLboolean);
        fn GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint);
        fn Enablei(target: GLenum, index: GLuint);
        fn Disablei(target: GLenum, index: GLuint);
        fn IsEnabledi(target: GLenum, index: GLuint) -> GLboolean;
        fn BeginTransformFeedback(primitiveMode: GLenum);
        fn EndTransformFeedback();
        fn BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
        fn TransformFeedbackVaryings(program: GLuint, count: GLsizei, varyings: *const *const GLchar, bufferMode: GLenum);
        fn GetTransformFeedbackVarying(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLsizei, type_: *mut GLenum, name: *mut GLchar);
        fn ClampColor(target: GLenum, clamp: GLenum);
        fn BeginConditionalRender(id: GLuint, mode: GLenum);
        fn EndConditionalRender();
        fn VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
        fn GetVertexAttribIiv(index: GLuint, pname: GLenum, params: *mut GLint);
        fn GetVertexAttribIuiv(index: GLuint, pname: GLenum, params: *mut GLuint);
        fn VertexAttribI1i(index: GLuint, x: GLint);
        fn VertexAttribI2i(index: GLuint, x: GLint, y: GLint);
        fn VertexAttribI3i(index: GLuint, x: GLint, y: GLint, z: GLint);
        fn VertexAttribI4i(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint);
        fn VertexAttribI1ui(index: GLuint, x: GLuint);
        fn VertexAttribI2ui(index: GLuint, x: GLuint, y: GLuint);
        fn VertexAttribI3ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint);
        fn VertexAttribI4ui(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint);
        fn VertexAttribI1iv(index: GLuint, v: *const GLint);
        fn VertexAttribI2iv(index: GLuint, v: *const GLint);
        fn VertexAttribI3iv(index: GLuint, v: *const GLint);
        fn VertexAttribI4iv(index: GLuint, v: *const GLint);
        fn VertexAttribI1uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI2uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI3uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI4uiv(index: GLuint, v: *const GLuint);
        fn VertexAttribI4bv(index: GLuint, v: *const GLbyte);
        fn VertexAttribI4sv(index: GLuint, v: *const GLshort);
        fn VertexAttribI4ubv(index: GLuint, v: *const GLubyte);
        fn VertexAttribI4usv(index: GLuint, v: *const GLushort);
        fn GetUniformuiv(program: GLuint, location: GLint, params: *mut GLuint);
        fn BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar);
        fn GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint;
        fn Uniform1ui(location: GLint, v0: GLuint);
        fn Uniform2ui(location: GLint, v0: GLuint, v1: GLuint);
        fn Uniform3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        fn Uniform4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        fn Uniform1uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform2uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform3uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn Uniform4uiv(location: GLint, count: GLsizei, value: *const GLuint);
        fn TexParameterIiv(target: GLenum, pname: GLenum, params: *const GLint);
        fn TexParameterIuiv(target: GLenum, pname: GLenum, params: *const GLuint);
        fn GetTexParameterIiv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetTexParameterIuiv(target: GLenum, pname: GLenum, params: *mut GLuint);
        fn ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        fn ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        fn ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        fn ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        fn GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
        fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
        fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
        fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
        fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
        fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
        fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn CheckFramebufferStatus(target: GLenum) -> GLenum;
        fn FramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        fn FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        fn FramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
        fn FramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
        fn GenerateMipmap(target: GLenum);
        fn BlitFramebuffer(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum);
        fn RenderbufferStorageMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn FramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        fn MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
        fn FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr);
        fn BindVertexArray(array: GLuint);
        fn DeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
        fn GenVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn IsVertexArray(array: GLuint) -> GLboolean;
    }
    [3, 1] {
        fn DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
        fn DrawElementsInstanced(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei);
        fn TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint);
        fn PrimitiveRestartIndex(index: GLuint);
        fn CopyBufferSubData(readTarget: GLenum, writeTarget: GLenum, readOffset: GLintptr, writeOffset: GLintptr, size: GLsizeiptr);
        fn GetUniformIndices(program: GLuint, uniformCount: GLsizei, uniformNames: *const *const GLchar, uniformIndices: *mut GLuint);
        fn GetActiveUniformsiv(program: GLuint, uniformCount: GLsizei, uniformIndices: *const GLuint, pname: GLenum, params: *mut GLint);
        fn GetActiveUniformName(program: GLuint, uniformIndex: GLuint, bufSize: GLsizei, length: *mut GLsizei, uniformName: *mut GLchar);
        fn GetUniformBlockIndex(program: GLuint, uniformBlockName: *const GLchar) -> GLuint;
        fn GetActiveUniformBlockiv(program: GLuint, uniformBlockIndex: GLuint, pname: GLenum, params: *mut GLint);
        fn GetActiveUniformBlockName(program: GLuint, uniformBlockIndex: GLuint, bufSize: GLsizei, length: *mut GLsizei, uniformBlockName: *mut GLchar);
        fn UniformBlockBinding(program: GLuint, uniformBlockIndex: GLuint, uniformBlockBinding: GLuint);
    }
    [3, 2] {
        fn DrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
        fn DrawRangeElementsBaseVertex(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint);
        fn DrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint);
        fn MultiDrawElementsBaseVertex(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei, basevertex: *const GLint);
        fn ProvokingVertex(mode: GLenum);
        fn FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
        fn IsSync(sync: GLsync) -> GLboolean;
        fn DeleteSync(sync: GLsync);
        fn ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum;
        fn WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
        fn GetInteger64v(pname: GLenum, data: *mut GLint64);
        fn GetSynciv(sync: GLsync, pname: GLenum, count: GLsizei, length: *mut GLsizei, values: *mut GLint);
        fn GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
        fn GetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
        fn FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint);
        fn TexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        fn TexImage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        fn GetMultisamplefv(pname: GLenum, index: GLuint, val: *mut GLfloat);
        fn SampleMaski(maskNumber: GLuint, mask: GLbitfield);
    }
    [3, 3] {
        fn BindFragDataLocationIndexed(program: GLuint, colorNumber: GLuint, index: GLuint, name: *const GLchar);
        fn GetFragDataIndex(program: GLuint, name: *const GLchar) -> GLint;
        fn GenSamplers(count: GLsizei, samplers: *mut GLuint);
        fn DeleteSamplers(count: GLsizei, samplers: *const GLuint);
        fn IsSampler(sampler: GLuint) -> GLboolean;
        fn BindSampler(unit: GLuint, sampler: GLuint);
        fn SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
        fn SamplerParameteriv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
        fn SamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);
        fn SamplerParameterIiv(sampler: GLuint, pname: GLenum, param: *const GLint);
        fn SamplerParameterIuiv(sampler: GLuint, pname: GLenum, param: *const GLuint);
        fn GetSamplerParameteriv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn GetSamplerParameterIiv(sampler: GLuint, pname: GLenum, params: *mut GLint);
        fn GetSamplerParameterfv(sampler: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetSamplerParameterIuiv(sampler: GLuint, pname: GLenum, params: *mut GLuint);
        fn QueryCounter(id: GLuint, target: GLenum);
        fn GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64);
        fn GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64);
        fn VertexAttribDivisor(index: GLuint, divisor: GLuint);
        fn VertexAttribP1ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP1uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribP2ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP2uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribP3ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP3uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
        fn VertexAttribP4ui(index: GLuint, type_: GLenum, normalized: GLboolean, value: GLuint);
        fn VertexAttribP4uiv(index: GLuint, type_: GLenum, normalized: GLboolean, value: *const GLuint);
    }
    [4, 0] {
        fn MinSampleShading(value: GLfloat);
        fn BlendEquationi(buf: GLuint, mode: GLenum);
        fn BlendEquationSeparatei(buf: GLuint, modeRGB: GLenum, modeAlpha: GLenum);
        fn BlendFunci(buf: GLuint, src: GLenum, dst: GLenum);
        fn BlendFuncSeparatei(buf: GLuint, srcRGB: GLenum, dstRGB: GLenum, srcAlpha: GLenum, dstAlpha: GLenum);
        fn DrawArraysIndirect(mode: GLenum, indirect: *const c_void);
        fn DrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void);
        fn Uniform1d(location: GLint, x: GLdouble);
        fn Uniform2d(location: GLint, x: GLdouble, y: GLdouble);
        fn Uniform3d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn Uniform4d(location: GLint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn Uniform1dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform2dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform3dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn Uniform4dv(location: GLint, count: GLsizei, value: *const GLdouble);
        fn UniformMatrix2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix2x3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix2x4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix3x2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix3x4dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix4x2dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn UniformMatrix4x3dv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn GetUniformdv(program: GLuint, location: GLint, params: *mut GLdouble);
        fn GetSubroutineUniformLocation(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLint;
        fn GetSubroutineIndex(program: GLuint, shadertype: GLenum, name: *const GLchar) -> GLuint;
        fn GetActiveSubroutineUniformiv(program: GLuint, shadertype: GLenum, index: GLuint, pname: GLenum, values: *mut GLint);
        fn GetActiveSubroutineUniformName(program: GLuint, shadertype: GLenum, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn GetActiveSubroutineName(program: GLuint, shadertype: GLenum, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn UniformSubroutinesuiv(shadertype: GLenum, count: GLsizei, indices: *const GLuint);
        fn GetUniformSubroutineuiv(shadertype: GLenum, location: GLint, params: *mut GLuint);
        fn GetProgramStageiv(program: GLuint, shadertype: GLenum, pname: GLenum, values: *mut GLint);
        fn PatchParameteri(pname: GLenum, value: GLint);
        fn PatchParameterfv(pname: GLenum, values: *const GLfloat);
        fn BindTransformFeedback(target: GLenum, id: GLuint);
        fn DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint);
        fn GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
        fn IsTransformFeedback(id: GLuint) -> GLboolean;
        fn PauseTransformFeedback();
        fn ResumeTransformFeedback();
        fn DrawTransformFeedback(mode: GLenum, id: GLuint);
        fn DrawTransformFeedbackStream(mode: GLenum, id: GLuint, stream: GLuint);
        fn BeginQueryIndexed(target: GLenum, index: GLuint, id: GLuint);
        fn EndQueryIndexed(target: GLenum, index: GLuint);
        fn GetQueryIndexediv(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLint);
    }
    [4, 1] {
        fn ReleaseShaderCompiler();
        fn ShaderBinary(count: GLsizei, shaders: *const GLuint, binaryFormat: GLenum, binary: *const c_void, length: GLsizei);
        fn GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
        fn DepthRangef(n: GLfloat, f: GLfloat);
        fn ClearDepthf(d: GLfloat);
        fn GetProgramBinary(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, binaryFormat: *mut GLenum, binary: *mut c_void);
        fn ProgramBinary(program: GLuint, binaryFormat: GLenum, binary: *const c_void, length: GLsizei);
        fn ProgramParameteri(program: GLuint, pname: GLenum, value: GLint);
        fn UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint);
        fn ActiveShaderProgram(pipeline: GLuint, program: GLuint);
        fn CreateShaderProgramv(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
        fn BindProgramPipeline(pipeline: GLuint);
        fn DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint);
        fn GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn IsProgramPipeline(pipeline: GLuint) -> GLboolean;
        fn GetProgramPipelineiv(pipeline: GLuint, pname: GLenum, params: *mut GLint);
        fn ProgramUniform1i(program: GLuint, location: GLint, v0: GLint);
        fn ProgramUniform1iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat);
        fn ProgramUniform1fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform1d(program: GLuint, location: GLint, v0: GLdouble);
        fn ProgramUniform1dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform1ui(program: GLuint, location: GLint, v0: GLuint);
        fn ProgramUniform1uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniform2i(program: GLuint, location: GLint, v0: GLint, v1: GLint);
        fn ProgramUniform2iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform2f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat);
        fn ProgramUniform2fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform2d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble);
        fn ProgramUniform2dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform2ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint);
        fn ProgramUniform2uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniform3i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint);
        fn ProgramUniform3iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform3f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
        fn ProgramUniform3fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform3d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble);
        fn ProgramUniform3dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform3ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint);
        fn ProgramUniform3uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniform4i(program: GLuint, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
        fn ProgramUniform4iv(program: GLuint, location: GLint, count: GLsizei, value: *const GLint);
        fn ProgramUniform4f(program: GLuint, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        fn ProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat);
        fn ProgramUniform4d(program: GLuint, location: GLint, v0: GLdouble, v1: GLdouble, v2: GLdouble, v3: GLdouble);
        fn ProgramUniform4dv(program: GLuint, location: GLint, count: GLsizei, value: *const GLdouble);
        fn ProgramUniform4ui(program: GLuint, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint);
        fn ProgramUniform4uiv(program: GLuint, location: GLint, count: GLsizei, value: *const GLuint);
        fn ProgramUniformMatrix2fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix3fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix2dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix3dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix4dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix2x3fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix3x2fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix2x4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix4x2fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix3x4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix4x3fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        fn ProgramUniformMatrix2x3dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix3x2dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix2x4dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix4x2dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix3x4dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ProgramUniformMatrix4x3dv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLdouble);
        fn ValidateProgramPipeline(pipeline: GLuint);
        fn GetProgramPipelineInfoLog(pipeline: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
        fn VertexAttribL1d(index: GLuint, x: GLdouble);
        fn VertexAttribL2d(index: GLuint, x: GLdouble, y: GLdouble);
        fn VertexAttribL3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble);
        fn VertexAttribL4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn VertexAttribL1dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribL2dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribL3dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribL4dv(index: GLuint, v: *const GLdouble);
        fn VertexAttribLPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
        fn GetVertexAttribLdv(index: GLuint, pname: GLenum, params: *mut GLdouble);
        fn ViewportArrayv(first: GLuint, count: GLsizei, v: *const GLfloat);
        fn ViewportIndexedf(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat);
        fn ViewportIndexedfv(index: GLuint, v: *const GLfloat);
        fn ScissorArrayv(first: GLuint, count: GLsizei, v: *const GLint);
        fn ScissorIndexed(index: GLuint, left: GLint, bottom: GLint, width: GLsizei, height: GLsizei);
        fn ScissorIndexedv(index: GLuint, v: *const GLint);
        fn DepthRangeArrayv(first: GLuint, count: GLsizei, v: *const GLdouble);
        fn DepthRangeIndexed(index: GLuint, n: GLdouble, f: GLdouble);
        fn GetFloati_v(target: GLenum, index: GLuint, data: *mut GLfloat);
        fn GetDoublei_v(target: GLenum, index: GLuint, data: *mut GLdouble);
    }
    [4, 2] {
        fn DrawArraysInstancedBaseInstance(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint);
        fn DrawElementsInstancedBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, baseinstance: GLuint);
        fn DrawElementsInstancedBaseVertexBaseInstance(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint, baseinstance: GLuint);
        fn GetInternalformativ(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint);
        fn GetActiveAtomicCounterBufferiv(program: GLuint, bufferIndex: GLuint, pname: GLenum, params: *mut GLint);
        fn BindImageTexture(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, access: GLenum, format: GLenum);
        fn MemoryBarrier(barriers: GLbitfield);
        fn TexStorage1D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei);
        fn TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn TexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn DrawTransformFeedbackInstanced(mode: GLenum, id: GLuint, instancecount: GLsizei);
        fn DrawTransformFeedbackStreamInstanced(mode: GLenum, id: GLuint, stream: GLuint, instancecount: GLsizei);
    }
    [4, 3] {
        fn ClearBufferData(target: GLenum, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearBufferSubData(target: GLenum, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void);
        fn DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
        fn DispatchComputeIndirect(indirect: GLintptr);
        fn CopyImageSubData(srcName: GLuint, srcTarget: GLenum, srcLevel: GLint, srcX: GLint, srcY: GLint, srcZ: GLint, dstName: GLuint, dstTarget: GLenum, dstLevel: GLint, dstX: GLint, dstY: GLint, dstZ: GLint, srcWidth: GLsizei, srcHeight: GLsizei, srcDepth: GLsizei);
        fn FramebufferParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn GetFramebufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn GetInternalformati64v(target: GLenum, internalformat: GLenum, pname: GLenum, count: GLsizei, params: *mut GLint64);
        fn InvalidateTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn InvalidateTexImage(texture: GLuint, level: GLint);
        fn InvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
        fn InvalidateBufferData(buffer: GLuint);
        fn InvalidateFramebuffer(target: GLenum, numAttachments: GLsizei, attachments: *const GLenum);
        fn InvalidateSubFramebuffer(target: GLenum, numAttachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn MultiDrawArraysIndirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
        fn MultiDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei);
        fn GetProgramInterfaceiv(program: GLuint, programInterface: GLenum, pname: GLenum, params: *mut GLint);
        fn GetProgramResourceIndex(program: GLuint, programInterface: GLenum, name: *const GLchar) -> GLuint;
        fn GetProgramResourceName(program: GLuint, programInterface: GLenum, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, name: *mut GLchar);
        fn GetProgramResourceiv(program: GLuint, programInterface: GLenum, index: GLuint, propCount: GLsizei, props: *const GLenum, count: GLsizei, length: *mut GLsizei, params: *mut GLint);
        fn GetProgramResourceLocation(program: GLuint, programInterface: GLenum, name: *const GLchar) -> GLint;
        fn GetProgramResourceLocationIndex(program: GLuint, programInterface: GLenum, name: *const GLchar) -> GLint;
        fn ShaderStorageBlockBinding(program: GLuint, storageBlockIndex: GLuint, storageBlockBinding: GLuint);
        fn TexBufferRange(target: GLenum, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn TexStorage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        fn TexStorage3DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        fn TextureView(texture: GLuint, target: GLenum, origtexture: GLuint, internalformat: GLenum, minlevel: GLuint, numlevels: GLuint, minlayer: GLuint, numlayers: GLuint);
        fn BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
        fn VertexAttribFormat(attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
        fn VertexAttribIFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexAttribLFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
        fn VertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
        fn DebugMessageControl(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean);
        fn DebugMessageInsert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar);
        fn DebugMessageCallback(callback: GLDEBUGPROC, userParam: *const c_void);
        fn GetDebugMessageLog(count: GLuint, bufSize: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, messageLog: *mut GLchar) -> GLuint;
        fn PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar);
        fn PopDebugGroup();
        fn ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar);
        fn GetObjectLabel(identifier: GLenum, name: GLuint, bufSize: GLsizei, length: *mut GLsizei, label: *mut GLchar);
        fn ObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar);
        fn GetObjectPtrLabel(ptr: *const c_void, bufSize: GLsizei, length: *mut GLsizei, label: *mut GLchar);
    }
    [4, 4] {
        fn BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
        fn ClearTexImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearTexSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, data: *const c_void);
        fn BindBuffersBase(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint);
        fn BindBuffersRange(target: GLenum, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, sizes: *const GLsizeiptr);
        fn BindTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn BindSamplers(first: GLuint, count: GLsizei, samplers: *const GLuint);
        fn BindImageTextures(first: GLuint, count: GLsizei, textures: *const GLuint);
        fn BindVertexBuffers(first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei);
    }
    [4, 5] {
        fn ClipControl(origin: GLenum, depth: GLenum);
        fn CreateTransformFeedbacks(n: GLsizei, ids: *mut GLuint);
        fn TransformFeedbackBufferBase(xfb: GLuint, index: GLuint, buffer: GLuint);
        fn TransformFeedbackBufferRange(xfb: GLuint, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn GetTransformFeedbackiv(xfb: GLuint, pname: GLenum, param: *mut GLint);
        fn GetTransformFeedbacki_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint);
        fn GetTransformFeedbacki64_v(xfb: GLuint, pname: GLenum, index: GLuint, param: *mut GLint64);
        fn CreateBuffers(n: GLsizei, buffers: *mut GLuint);
        fn NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
        fn NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
        fn NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
        fn CopyNamedBufferSubData(readBuffer: GLuint, writeBuffer: GLuint, readOffset: GLintptr, writeOffset: GLintptr, size: GLsizeiptr);
        fn ClearNamedBufferData(buffer: GLuint, internalformat: GLenum, format: GLenum, type_: GLenum, data: *const c_void);
        fn ClearNamedBufferSubData(buffer: GLuint, internalformat: GLenum, offset: GLintptr, size: GLsizeiptr, format: GLenum, type_: GLenum, data: *const c_void);
        fn MapNamedBuffer(buffer: GLuint, access: GLenum) -> *mut c_void;
        fn MapNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void;
        fn UnmapNamedBuffer(buffer: GLuint) -> GLboolean;
        fn FlushMappedNamedBufferRange(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);
        fn GetNamedBufferParameteriv(buffer: GLuint, pname: GLenum, params: *mut GLint);
        fn GetNamedBufferParameteri64v(buffer: GLuint, pname: GLenum, params: *mut GLint64);
        fn GetNamedBufferPointerv(buffer: GLuint, pname: GLenum, params: *mut *mut c_void);
        fn GetNamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *mut c_void);
        fn CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        fn NamedFramebufferRenderbuffer(framebuffer: GLuint, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        fn NamedFramebufferParameteri(framebuffer: GLuint, pname: GLenum, param: GLint);
        fn NamedFramebufferTexture(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint);
        fn NamedFramebufferTextureLayer(framebuffer: GLuint, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint);
        fn NamedFramebufferDrawBuffer(framebuffer: GLuint, buf: GLenum);
        fn NamedFramebufferDrawBuffers(framebuffer: GLuint, n: GLsizei, bufs: *const GLenum);
        fn NamedFramebufferReadBuffer(framebuffer: GLuint, src: GLenum);
        fn InvalidateNamedFramebufferData(framebuffer: GLuint, numAttachments: GLsizei, attachments: *const GLenum);
        fn InvalidateNamedFramebufferSubData(framebuffer: GLuint, numAttachments: GLsizei, attachments: *const GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn ClearNamedFramebufferiv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLint);
        fn ClearNamedFramebufferuiv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
        fn ClearNamedFramebufferfv(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
        fn ClearNamedFramebufferfi(framebuffer: GLuint, buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
        fn BlitNamedFramebuffer(readFramebuffer: GLuint, drawFramebuffer: GLuint, srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum);
        fn CheckNamedFramebufferStatus(framebuffer: GLuint, target: GLenum) -> GLenum;
        fn GetNamedFramebufferParameteriv(framebuffer: GLuint, pname: GLenum, param: *mut GLint);
        fn GetNamedFramebufferAttachmentParameteriv(framebuffer: GLuint, attachment: GLenum, pname: GLenum, params: *mut GLint);
        fn CreateRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        fn NamedRenderbufferStorage(renderbuffer: GLuint, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn NamedRenderbufferStorageMultisample(renderbuffer: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn GetNamedRenderbufferParameteriv(renderbuffer: GLuint, pname: GLenum, params: *mut GLint);
        fn CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint);
        fn TextureBuffer(texture: GLuint, internalformat: GLenum, buffer: GLuint);
        fn TextureBufferRange(texture: GLuint, internalformat: GLenum, buffer: GLuint, offset: GLintptr, size: GLsizeiptr);
        fn TextureStorage1D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei);
        fn TextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
        fn TextureStorage3D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei);
        fn TextureStorage2DMultisample(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
        fn TextureStorage3DMultisample(texture: GLuint, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, fixedsamplelocations: GLboolean);
        fn TextureSubImage1D(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn TextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
        fn CompressedTextureSubImage1D(texture: GLuint, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
        fn CompressedTextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
        fn CompressedTextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void);
        fn CopyTextureSubImage1D(texture: GLuint, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        fn CopyTextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn CopyTextureSubImage3D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn TextureParameterf(texture: GLuint, pname: GLenum, param: GLfloat);
        fn TextureParameterfv(texture: GLuint, pname: GLenum, param: *const GLfloat);
        fn TextureParameteri(texture: GLuint, pname: GLenum, param: GLint);
        fn TextureParameterIiv(texture: GLuint, pname: GLenum, params: *const GLint);
        fn TextureParameterIuiv(texture: GLuint, pname: GLenum, params: *const GLuint);
        fn TextureParameteriv(texture: GLuint, pname: GLenum, param: *const GLint);
        fn GenerateTextureMipmap(texture: GLuint);
        fn BindTextureUnit(unit: GLuint, texture: GLuint);
        fn GetTextureImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, bufSize: GLsizei, pixels: *mut c_void);
        fn GetCompressedTextureImage(texture: GLuint, level: GLint, bufSize: GLsizei, pixels: *mut c_void);
        fn GetTextureLevelParameterfv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLfloat);
        fn GetTextureLevelParameteriv(texture: GLuint, level: GLint, pname: GLenum, params: *mut GLint);
        fn GetTextureParameterfv(texture: GLuint, pname: GLenum, params: *mut GLfloat);
        fn GetTextureParameterIiv(texture: GLuint, pname: GLenum, params: *mut GLint);
        fn GetTextureParameterIuiv(texture: GLuint, pname: GLenum, params: *mut GLuint);
        fn GetTextureParameteriv(texture: GLuint, pname: GLenum, params: *mut GLint);
        fn CreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
        fn DisableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
        fn EnableVertexArrayAttrib(vaobj: GLuint, index: GLuint);
        fn VertexArrayElementBuffer(vaobj: GLuint, buffer: GLuint);
        fn VertexArrayVertexBuffer(vaobj: GLuint, bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
        fn VertexArrayVertexBuffers(vaobj: GLuint, first: GLuint, count: GLsizei, buffers: *const GLuint, offsets: *const GLintptr, strides: *const GLsizei);
        fn VertexArrayAttribBinding(vaobj: GLuint, attribindex: GLuint, bindingindex: GLuint);
        fn VertexArrayAttribFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
        fn VertexArrayAttribIFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexArrayAttribLFormat(vaobj: GLuint, attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
        fn VertexArrayBindingDivisor(vaobj: GLuint, bindingindex: GLuint, divisor: GLuint);
        fn GetVertexArrayiv(vaobj: GLuint, pname: GLenum, param: *mut GLint);
        fn GetVertexArrayIndexediv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint);
        fn GetVertexArrayIndexed64iv(vaobj: GLuint, index: GLuint, pname: GLenum, param: *mut GLint64);
        fn CreateSamplers(n: GLsizei, samplers: *mut GLuint);
        fn CreateProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
        fn CreateQueries(target: GLenum, n: GLsizei, ids: *mut GLuint);
        fn GetQueryBufferObjecti64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryBufferObjectiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryBufferObjectui64v(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn GetQueryBufferObjectuiv(id: GLuint, buffer: GLuint, pname: GLenum, offset: GLintptr);
        fn MemoryBarrierByRegion(barriers: GLbitfield);
        fn GetTextureSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, bufSize: GLsizei, pixels: *mut c_void);
        fn GetCompressedTextureSubImage(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, bufSize: GLsizei, pixels: *mut c_void);
        fn GetGraphicsResetStatus() -> GLenum;
        fn GetnCompressedTexImage(target: GLenum, lod: GLint, bufSize: GLsizei, pixels: *mut c_void);
        fn GetnTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, bufSize: GLsizei, pixels: *mut c_void);
        fn GetnUniformdv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLdouble);
        fn GetnUniformfv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLfloat);
        fn GetnUniformiv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLint);
        fn GetnUniformuiv(program: GLuint, location: GLint, bufSize: GLsizei, params: *mut GLuint);
        fn ReadnPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, bufSize: GLsizei, data: *mut c_void);
        fn TextureBarrier();
    }
    [4, 6] {
        fn SpecializeShader(shader: GLuint, pEntryPoint: *const GLchar, numSpecializationConstants: GLuint, pConstantIndex: *const GLuint, pConstantValue: *const GLuint);
        fn MultiDrawArraysIndirectCount(mode: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei);
        fn MultiDrawElementsIndirectCount(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLintptr, maxdrawcount: GLsizei, stride: GLsizei);
        fn PolygonOffsetClamp(factor: GLfloat, units: GLfloat, clamp: GLfloat);
    }
}

impl Api {
    /// Version the context reported at load time.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Whether the context reached `version`, for example `Version(4, 5)` to
    /// branch onto direct state access.
    pub fn supports(&self, version: Version) -> bool {
        self.version >= version
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

#[test]
fn test_load_with_gates_commands_by_version() {
    use std::collections::HashMap;
    use std::ptr::null;

    use crate::enums::NUM_EXTENSIONS;

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"3.3".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }
    extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
        if pname == NUM_EXTENSIONS {
            unsafe { *data = 0 };
        }
    }
    extern "system" fn get_stringi(_name: GLenum, _index: GLuint) -> *const GLubyte {
        null()
    }

    let mut resolved = HashMap::new();
    let api = unsafe {
        Api::load_with(|name| {
            let text = CStr::from_ptr(name).to_str().unwrap();
            let ptr = match text {
                "glGetString" => get_string as *mut c_void,
                "glGetIntegerv" => get_integerv as *mut c_void,
                "glGetStringi" => get_stringi as *mut c_void,
                // any non-null address will do, these are never invoked
                _ => name as *mut c_void,
            };
            resolved.insert(text.to_owned(), ptr as usize);
            ptr
        })
        .unwrap()
    };

    assert_eq!(api.version(), Version(3, 3));
    assert!(api.supports(Version(1, 0)));
    assert!(api.supports(Version(3, 3)));
    assert!(!api.supports(Version(4, 0)));
    assert!(api.extensions().is_empty());

    // each slot at or below 3.3 holds what the resolver returned for its name
    assert_eq!(api.Clear.as_ptr() as usize, resolved["glClear"]);
    assert_eq!(
        api.DrawElementsBaseVertex.as_ptr() as usize,
        resolved["glDrawElementsBaseVertex"],
    );
    assert_eq!(
        api.VertexAttribDivisor.as_ptr() as usize,
        resolved["glVertexAttribDivisor"],
    );

    // newer commands stay null and are never even asked for
    assert!(!resolved.contains_key("glMinSampleShading"));
    assert!(!resolved.contains_key("glDispatchCompute"));
    assert!(!resolved.contains_key("glSpecializeShader"));
    assert!(!api.MinSampleShading.is_loaded());
    assert!(!api.DispatchCompute.is_loaded());
    assert!(!api.SpecializeShader.is_loaded());
    assert!(api.SpecializeShader.as_ptr().is_null());
}

#[test]
fn test_load_with_missing_get_string() {
    let result = unsafe { Api::load_with(|_| null_mut()) };
    assert!(matches!(result, Err(LoadError::MissingGetString)));
}

#[test]
fn test_load_with_null_version() {
    use std::ptr::null;

    extern "system" fn get_string(_name: GLenum) -> *const GLubyte {
        null()
    }

    let result = unsafe {
        Api::load_with(|name| match CStr::from_ptr(name).to_bytes() {
            b"glGetString" => get_string as *mut c_void,
            _ => null_mut(),
        })
    };
    assert!(matches!(result, Err(LoadError::CouldNotQueryVersion)));
}

#[test]
fn test_load_with_unparseable_version() {
    use std::ptr::null;

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"Mesa".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }

    let result = unsafe {
        Api::load_with(|name| match CStr::from_ptr(name).to_bytes() {
            b"glGetString" => get_string as *mut c_void,
            _ => null_mut(),
        })
    };
    assert!(matches!(result, Err(LoadError::CouldNotParseVersion(_))));
}

#[test]
#[should_panic]
fn test_call_unloaded_panics() {
    use std::ptr::null;

    use crate::enums::EXTENSIONS;

    extern "system" fn get_string(name: GLenum) -> *const GLubyte {
        match name {
            VERSION => c"3.3".as_ptr() as *const GLubyte,
            EXTENSIONS => c"".as_ptr() as *const GLubyte,
            _ => null(),
        }
    }
    extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
        if pname == crate::enums::NUM_EXTENSIONS {
            unsafe { *data = 0 };
        }
    }
    extern "system" fn get_stringi(_name: GLenum, _index: GLuint) -> *const GLubyte {
        null()
    }

    let api = unsafe {
        Api::load_with(|name| match CStr::from_ptr(name).to_bytes() {
            b"glGetString" => get_string as *mut c_void,
            b"glGetIntegerv" => get_integerv as *mut c_void,
            b"glGetStringi" => get_stringi as *mut c_void,
            _ => null_mut(),
        })
        .unwrap()
    };

    assert!(!api.DispatchCompute.is_loaded());
    unsafe { api.DispatchCompute(1, 1, 1) };
}
