#![deny(unsafe_code)]
//! Core of the fill-rate benchmark.
//!
//! Provides the shader configuration model, the fragment shader generator,
//! the quad and texture content, batch timing and throughput arithmetic,
//! and the sweep order. The GPU side lives in [`render`] behind the
//! `render` feature; PNG export of the texture patterns is behind `png`.

pub mod config;
pub mod error;
pub mod pattern;
pub mod quad;
pub mod shadergen;
pub mod sweep;
pub mod timing;
pub mod uniforms;

#[cfg(feature = "png")]
pub mod snapshot;

#[cfg(feature = "render")]
pub mod render;

pub use config::{BenchCase, Blend, ShaderConfig, TexturePair, TextureSlot};
pub use error::BenchError;
pub use shadergen::{generate_fragment_shader, VERTEX_SHADER};
pub use sweep::{sweep_cases, sweep_runs, SweepRun, SweepSummary};
pub use timing::{
    batch_pixels, viewport_extent, Clock, MonotonicClock, Stopwatch, Throughput,
};
