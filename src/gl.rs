//! Generated OpenGL ES 2.0 bindings.
//!
//! Types and enums come from the Khronos registry. With the `static-core`
//! feature the core functions are linked from `libGLESv2` and serve as the
//! fallback for entry points the platform resolver does not provide.

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl.rs"));

#[cfg(feature = "static-core")]
#[link(name = "GLESv2")]
extern "system" {}

#[cfg(feature = "static-core")]
macro_rules! core_table {
    ($($name:ident,)*) => {
        /// Core implementations of every ES 2.0 entry point, linked from
        /// `libGLESv2` and registered under their unprefixed names.
        pub fn static_core() -> crate::fallback::CoreTable {
            let mut table = crate::fallback::CoreTable::new();
            $( table.insert(stringify!($name), $name as crate::gles2::pfn::$name); )*
            table
        }
    };
}

#[cfg(feature = "static-core")]
core_table! {
    ActiveTexture, AttachShader, BindAttribLocation, BindBuffer,
    BindFramebuffer, BindRenderbuffer, BindTexture, BlendColor,
    BlendEquation, BlendEquationSeparate, BlendFunc, BlendFuncSeparate,
    BufferData, BufferSubData, CheckFramebufferStatus, Clear,
    ClearColor, ClearDepthf, ClearStencil, ColorMask, CompileShader,
    CompressedTexImage2D, CompressedTexSubImage2D, CopyTexImage2D,
    CopyTexSubImage2D, CreateProgram, CreateShader, CullFace,
    DeleteBuffers, DeleteFramebuffers, DeleteProgram, DeleteRenderbuffers,
    DeleteShader, DeleteTextures, DepthFunc, DepthMask, DepthRangef,
    DetachShader, Disable, DisableVertexAttribArray, DrawArrays,
    DrawElements, Enable, EnableVertexAttribArray, Finish, Flush,
    FramebufferRenderbuffer, FramebufferTexture2D, FrontFace,
    GenBuffers, GenFramebuffers, GenRenderbuffers, GenTextures,
    GenerateMipmap, GetActiveAttrib, GetActiveUniform, GetAttachedShaders,
    GetAttribLocation, GetBooleanv, GetBufferParameteriv, GetError,
    GetFloatv, GetFramebufferAttachmentParameteriv, GetIntegerv,
    GetProgramInfoLog, GetProgramiv, GetRenderbufferParameteriv,
    GetShaderInfoLog, GetShaderPrecisionFormat, GetShaderSource, GetShaderiv,
    GetString, GetTexParameterfv, GetTexParameteriv, GetUniformLocation,
    GetUniformfv, GetUniformiv, GetVertexAttribPointerv, GetVertexAttribfv,
    GetVertexAttribiv, Hint, IsBuffer, IsEnabled, IsFramebuffer, IsProgram,
    IsRenderbuffer, IsShader, IsTexture, LineWidth, LinkProgram, PixelStorei,
    PolygonOffset, ReadPixels, ReleaseShaderCompiler, RenderbufferStorage,
    SampleCoverage, Scissor, ShaderBinary, ShaderSource, StencilFunc,
    StencilFuncSeparate, StencilMask, StencilMaskSeparate, StencilOp,
    StencilOpSeparate, TexImage2D, TexParameterf, TexParameterfv,
    TexParameteri, TexParameteriv, TexSubImage2D, Uniform1f, Uniform1fv,
    Uniform1i, Uniform1iv, Uniform2f, Uniform2fv, Uniform2i, Uniform2iv,
    Uniform3f, Uniform3fv, Uniform3i, Uniform3iv, Uniform4f, Uniform4fv,
    Uniform4i, Uniform4iv, UniformMatrix2fv, UniformMatrix3fv,
    UniformMatrix4fv, UseProgram, ValidateProgram, VertexAttrib1f,
    VertexAttrib1fv, VertexAttrib2f, VertexAttrib2fv, VertexAttrib3f,
    VertexAttrib3fv, VertexAttrib4f, VertexAttrib4fv, VertexAttribPointer,
    Viewport,
}

#[cfg(all(test, feature = "static-core"))]
mod tests {
    use crate::gles2::{Symbol, CORE_LEN, DESCRIPTORS};

    #[test]
    fn static_core_covers_every_core_entry_point() {
        let core = super::static_core();
        assert_eq!(core.len(), CORE_LEN);
        for descriptor in &DESCRIPTORS[..CORE_LEN] {
            let name = &descriptor.name[2..];
            let found = crate::fallback::CoreLookup::find_core_implementation(&core, name);
            assert!(found.map_or(false, |f| f.matches(descriptor)), "{}", name);
        }
        let qcom = Symbol::ExtGetTexturesQCOM.descriptor();
        assert!(crate::fallback::CoreLookup::find_core_implementation(&core, &qcom.name[2..]).is_none());
    }
}
