//! The OpenGL ES 2.0 catalogue.
//!
//! Every core 2.0 entry point followed by the vendor extensions commonly
//! exposed by ES 2.0 drivers. Core entry points may fall back to statically
//! linked implementations; extensions are only ever bound natively.

use crate::gl::types::*;
use std::os::raw::c_void;

entry_points! {
    /// Typed view of a loaded OpenGL ES 2.0 binding table.
    ///
    /// Each accessor returns `None` when the driver does not provide the
    /// entry point and no core implementation was available.
    ///
    /// ```rust,no_run
    /// # fn query(_: &str) -> *const std::os::raw::c_void { std::ptr::null() }
    /// let gl = gles2_loader::init(query).unwrap();
    /// if let Some(clear) = gl.Clear() {
    ///     unsafe { clear.get()(gles2_loader::gl::COLOR_BUFFER_BIT) };
    /// }
    /// ```
    pub struct Gles2("gl");

    // Core 2.0.
    fn ActiveTexture(texture: GLenum);
    fn AttachShader(program: GLuint, shader: GLuint);
    fn BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
    fn BindBuffer(target: GLenum, buffer: GLuint);
    fn BindFramebuffer(target: GLenum, framebuffer: GLuint);
    fn BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
    fn BindTexture(target: GLenum, texture: GLuint);
    fn BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn BlendEquation(mode: GLenum);
    fn BlendEquationSeparate(mode_rGB: GLenum, mode_alpha: GLenum);
    fn BlendFunc(sfactor: GLenum, dfactor: GLenum);
    fn BlendFuncSeparate(sfactor_rGB: GLenum, dfactor_rGB: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum);
    fn BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    fn BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    fn CheckFramebufferStatus(target: GLenum) -> GLenum;
    fn Clear(mask: GLbitfield);
    fn ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn ClearDepthf(d: GLfloat);
    fn ClearStencil(s: GLint);
    fn ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
    fn CompileShader(shader: GLuint);
    fn CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    fn CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    fn CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
    fn CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn CreateProgram() -> GLuint;
    fn CreateShader(kind: GLenum) -> GLuint;
    fn CullFace(mode: GLenum);
    fn DeleteBuffers(n: GLsizei, buffers: *const GLuint);
    fn DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
    fn DeleteProgram(program: GLuint);
    fn DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
    fn DeleteShader(shader: GLuint);
    fn DeleteTextures(n: GLsizei, textures: *const GLuint);
    fn DepthFunc(func: GLenum);
    fn DepthMask(flag: GLboolean);
    fn DepthRangef(n: GLfloat, f: GLfloat);
    fn DetachShader(program: GLuint, shader: GLuint);
    fn Disable(cap: GLenum);
    fn DisableVertexAttribArray(index: GLuint);
    fn DrawArrays(mode: GLenum, first: GLint, count: GLsizei);
    fn DrawElements(mode: GLenum, count: GLsizei, kind: GLenum, indices: *const c_void);
    fn Enable(cap: GLenum);
    fn EnableVertexAttribArray(index: GLuint);
    fn Finish();
    fn Flush();
    fn FramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
    fn FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
    fn FrontFace(mode: GLenum);
    fn GenBuffers(n: GLsizei, buffers: *mut GLuint);
    fn GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
    fn GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
    fn GenTextures(n: GLsizei, textures: *mut GLuint);
    fn GenerateMipmap(target: GLenum);
    fn GetActiveAttrib(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, kind: *mut GLenum, name: *mut GLchar);
    fn GetActiveUniform(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, kind: *mut GLenum, name: *mut GLchar);
    fn GetAttachedShaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
    fn GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint;
    fn GetBooleanv(pname: GLenum, data: *mut GLboolean);
    fn GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetError() -> GLenum;
    fn GetFloatv(pname: GLenum, data: *mut GLfloat);
    fn GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint);
    fn GetIntegerv(pname: GLenum, data: *mut GLint);
    fn GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    fn GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    fn GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
    fn GetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar);
    fn GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
    fn GetString(name: GLenum) -> *const GLubyte;
    fn GetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
    fn GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint;
    fn GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat);
    fn GetUniformiv(program: GLuint, location: GLint, params: *mut GLint);
    fn GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *const *mut c_void);
    fn GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat);
    fn GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint);
    fn Hint(target: GLenum, mode: GLenum);
    fn IsBuffer(buffer: GLuint) -> GLboolean;
    fn IsEnabled(cap: GLenum) -> GLboolean;
    fn IsFramebuffer(framebuffer: GLuint) -> GLboolean;
    fn IsProgram(program: GLuint) -> GLboolean;
    fn IsRenderbuffer(renderbuffer: GLuint) -> GLboolean;
    fn IsShader(shader: GLuint) -> GLboolean;
    fn IsTexture(texture: GLuint) -> GLboolean;
    fn LineWidth(width: GLfloat);
    fn LinkProgram(program: GLuint);
    fn PixelStorei(pname: GLenum, param: GLint);
    fn PolygonOffset(factor: GLfloat, units: GLfloat);
    fn ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, kind: GLenum, pixels: *mut c_void);
    fn ReleaseShaderCompiler();
    fn RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn SampleCoverage(value: GLfloat, invert: GLboolean);
    fn Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn ShaderBinary(count: GLsizei, shaders: *const GLuint, binaryformat: GLenum, binary: *const c_void, length: GLsizei);
    fn ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
    fn StencilFunc(func: GLenum, reference: GLint, mask: GLuint);
    fn StencilFuncSeparate(face: GLenum, func: GLenum, reference: GLint, mask: GLuint);
    fn StencilMask(mask: GLuint);
    fn StencilMaskSeparate(face: GLenum, mask: GLuint);
    fn StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum);
    fn TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, kind: GLenum, pixels: *const c_void);
    fn TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    fn TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    fn TexParameteri(target: GLenum, pname: GLenum, param: GLint);
    fn TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
    fn TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, kind: GLenum, pixels: *const c_void);
    fn Uniform1f(location: GLint, v0: GLfloat);
    fn Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform1i(location: GLint, v0: GLint);
    fn Uniform1iv(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat);
    fn Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform2i(location: GLint, v0: GLint, v1: GLint);
    fn Uniform2iv(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    fn Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint);
    fn Uniform3iv(location: GLint, count: GLsizei, value: *const GLint);
    fn Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    fn Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat);
    fn Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    fn Uniform4iv(location: GLint, count: GLsizei, value: *const GLint);
    fn UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
    fn UseProgram(program: GLuint);
    fn ValidateProgram(program: GLuint);
    fn VertexAttrib1f(index: GLuint, x: GLfloat);
    fn VertexAttrib1fv(index: GLuint, v: *const GLfloat);
    fn VertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat);
    fn VertexAttrib2fv(index: GLuint, v: *const GLfloat);
    fn VertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    fn VertexAttrib3fv(index: GLuint, v: *const GLfloat);
    fn VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn VertexAttrib4fv(index: GLuint, v: *const GLfloat);
    fn VertexAttribPointer(index: GLuint, size: GLint, kind: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void);
    fn Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);

    // Extensions.
    fn BeginPerfMonitorAMD(monitor: GLuint);
    fn BindVertexArrayOES(array: GLuint);
    fn BlitFramebufferANGLE(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum);
    fn CompressedTexImage3DOES(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void);
    fn CompressedTexSubImage3DOES(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void);
    fn CopyTexSubImage3DOES(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn CoverageMaskNV(mask: GLboolean);
    fn CoverageOperationNV(operation: GLenum);
    fn DeleteFencesNV(n: GLsizei, fences: *const GLuint);
    fn DeletePerfMonitorsAMD(n: GLsizei, monitors: *mut GLuint);
    fn DeleteVertexArraysOES(n: GLsizei, arrays: *const GLuint);
    fn DisableDriverControlQCOM(driver_control: GLuint);
    fn DiscardFramebufferEXT(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
    fn EGLImageTargetRenderbufferStorageOES(target: GLenum, image: GLeglImageOES);
    fn EGLImageTargetTexture2DOES(target: GLenum, image: GLeglImageOES);
    fn EnableDriverControlQCOM(driver_control: GLuint);
    fn EndPerfMonitorAMD(monitor: GLuint);
    fn EndTilingQCOM(preserve_mask: GLbitfield);
    fn ExtGetBufferPointervQCOM(target: GLenum, params: *mut *mut c_void);
    fn ExtGetBuffersQCOM(buffers: *mut GLuint, max_buffers: GLint, num_buffers: *mut GLint);
    fn ExtGetFramebuffersQCOM(framebuffers: *mut GLuint, max_framebuffers: GLint, num_framebuffers: *mut GLint);
    fn ExtGetProgramBinarySourceQCOM(program: GLuint, shadertype: GLenum, source: *mut GLchar, length: *mut GLint);
    fn ExtGetProgramsQCOM(programs: *mut GLuint, max_programs: GLint, num_programs: *mut GLint);
    fn ExtGetRenderbuffersQCOM(renderbuffers: *mut GLuint, max_renderbuffers: GLint, num_renderbuffers: *mut GLint);
    fn ExtGetShadersQCOM(shaders: *mut GLuint, max_shaders: GLint, num_shaders: *mut GLint);
    fn ExtGetTexLevelParameterivQCOM(texture: GLuint, face: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    fn ExtGetTexSubImageQCOM(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, kind: GLenum, texels: *mut c_void);
    fn ExtGetTexturesQCOM(textures: *mut GLuint, max_textures: GLint, num_textures: *mut GLint);
    fn ExtIsProgramBinaryQCOM(program: GLuint) -> GLboolean;
    fn ExtTexObjectStateOverrideiQCOM(target: GLenum, pname: GLenum, param: GLint);
    fn FinishFenceNV(fence: GLuint);
    fn FramebufferTexture2DMultisampleIMG(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, samples: GLsizei);
    fn FramebufferTexture3DOES(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint);
    fn GenFencesNV(n: GLsizei, fences: *mut GLuint);
    fn GenPerfMonitorsAMD(n: GLsizei, monitors: *mut GLuint);
    fn GenVertexArraysOES(n: GLsizei, arrays: *mut GLuint);
    fn GetBufferPointervOES(target: GLenum, pname: GLenum, params: *mut *mut c_void);
    fn GetDriverControlsQCOM(num: *mut GLint, size: GLsizei, driver_controls: *mut GLuint);
    fn GetDriverControlStringQCOM(driver_control: GLuint, buf_size: GLsizei, length: *mut GLsizei, driver_control_string: *mut GLchar);
    fn GetFenceivNV(fence: GLuint, pname: GLenum, params: *mut GLint);
    fn GetPerfMonitorCounterDataAMD(monitor: GLuint, pname: GLenum, data_size: GLsizei, data: *mut GLuint, bytes_written: *mut GLint);
    fn GetPerfMonitorCounterInfoAMD(group: GLuint, counter: GLuint, pname: GLenum, data: *mut c_void);
    fn GetPerfMonitorCountersAMD(group: GLuint, num_counters: *mut GLint, max_active_counters: *mut GLint, counter_size: GLsizei, counters: *mut GLuint);
    fn GetPerfMonitorCounterStringAMD(group: GLuint, counter: GLuint, buf_size: GLsizei, length: *mut GLsizei, counter_string: *mut GLchar);
    fn GetPerfMonitorGroupsAMD(num_groups: *mut GLint, groups_size: GLsizei, groups: *mut GLuint);
    fn GetPerfMonitorGroupStringAMD(group: GLuint, buf_size: GLsizei, length: *mut GLsizei, group_string: *mut GLchar);
    fn GetProgramBinaryOES(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, binary_format: *mut GLenum, binary: *mut c_void);
    fn IsFenceNV(fence: GLuint) -> GLboolean;
    fn IsVertexArrayOES(array: GLuint) -> GLboolean;
    fn MapBufferOES(target: GLenum, access: GLenum) -> *mut c_void;
    fn MultiDrawArraysEXT(mode: GLenum, first: *const GLint, count: *const GLsizei, primcount: GLsizei);
    fn MultiDrawElementsEXT(mode: GLenum, count: *const GLsizei, kind: GLenum, indices: *const *const c_void, primcount: GLsizei);
    fn ProgramBinaryOES(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLint);
    fn RenderbufferStorageMultisampleANGLE(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn RenderbufferStorageMultisampleAPPLE(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn RenderbufferStorageMultisampleIMG(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    fn ResolveMultisampleFramebufferAPPLE();
    fn SelectPerfMonitorCountersAMD(monitor: GLuint, enable: GLboolean, group: GLuint, num_counters: GLint, counter_list: *mut GLuint);
    fn SetFenceNV(fence: GLuint, condition: GLenum);
    fn StartTilingQCOM(x: GLuint, y: GLuint, width: GLuint, height: GLuint, preserve_mask: GLbitfield);
    fn TestFenceNV(fence: GLuint) -> GLboolean;
    fn TexImage3DOES(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, kind: GLenum, pixels: *const c_void);
    fn TexSubImage3DOES(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, kind: GLenum, pixels: *const c_void);
    fn UnmapBufferOES(target: GLenum) -> GLboolean;
}

/// Number of core 2.0 entry points at the head of `DESCRIPTORS`.
pub const CORE_LEN: usize = 142;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::BindingTable;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn catalogue_has_every_entry_point_once() {
        assert_eq!(DESCRIPTORS.len(), 206);
        assert_eq!(Symbol::ALL.len(), DESCRIPTORS.len());
        let names: HashSet<_> = DESCRIPTORS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DESCRIPTORS.len());
        assert!(BindingTable::with_catalogue(DESCRIPTORS).is_ok());
    }

    #[test]
    fn names_carry_the_gl_prefix() {
        for descriptor in DESCRIPTORS {
            assert!(descriptor.name.starts_with("gl"), "{}", descriptor.name);
        }
        assert_eq!(Symbol::BindTexture.descriptor().name, "glBindTexture");
        assert_eq!(Symbol::ExtGetTexturesQCOM.descriptor().name, "glExtGetTexturesQCOM");
    }

    #[test]
    fn core_entry_points_come_first() {
        assert_eq!(DESCRIPTORS[0].name, "glActiveTexture");
        assert_eq!(DESCRIPTORS[CORE_LEN - 1].name, "glViewport");
        assert_eq!(DESCRIPTORS[CORE_LEN].name, "glBeginPerfMonitorAMD");
    }

    #[test]
    fn descriptors_record_signatures() {
        let descriptor = Symbol::DrawArrays.descriptor();
        assert_eq!(descriptor.params, &["GLenum", "GLint", "GLsizei"]);
        assert_eq!(descriptor.ret, "()");
        assert_eq!(Symbol::GetError.descriptor().ret, "GLenum");
        assert!(descriptor.accepts::<pfn::DrawArrays>());
        assert!(!descriptor.accepts::<pfn::BindTexture>());
    }

    #[test]
    fn facade_rejects_a_foreign_table() {
        let table = Arc::new(BindingTable::with_catalogue(&DESCRIPTORS[..CORE_LEN]).unwrap());
        assert!(Gles2::from_table(table).is_err());

        let table = Arc::new(BindingTable::with_catalogue(DESCRIPTORS).unwrap());
        let gl = Gles2::from_table(table).unwrap();
        assert!(gl.BindTexture().is_none());
        assert_eq!(gl.table().len(), 206);
    }
}
