//! OpenGL ES / WebGL2 side of the benchmark.
//!
//! This module is only available when the `render` feature is enabled.
//! It compiles the generated programs, uploads the quad and textures, and
//! runs the timed sweep against a host-provided `glow::Context`.
//!
//! # Module overview
//!
//! - [`shader`] -- Shader compilation, linking, and error formatting.
//! - [`texture`] -- Texture configuration and the two benchmark textures.
//! - [`vertex`] -- Vertex array and buffers for the quad.
//! - [`bench`] -- The timed draw loop, uniforms, and host collaborators.
//! - [`runner`] -- Sweep driver over a live context.
//! - [`context`] -- GPU context wrapper and GL error polling.

pub mod bench;
pub mod context;
pub mod runner;
pub mod shader;
pub mod texture;
pub mod vertex;

#[cfg(all(test, target_os = "linux"))]
mod headless;

pub use bench::{
    apply_uniforms, run_batch, FillTarget, GlFillTarget, Present, ReportSink, StdoutSink,
};
pub use context::{check_gl_error, drain_gl_errors, GpuContext};
pub use runner::{report_build_failure, run_and_exit, FillBench, PROGRAM_ERROR_LINE};
pub use shader::{build_program, compile_shader, format_shader_error, link_program, ShaderError};
pub use texture::{create_texture, TextureConfig, Textures};
pub use vertex::QuadVertices;
