//! Drives the full sweep against a live GL context.
//!
//! [`FillBench::setup`] uploads the quad and both textures once; every case
//! then builds its own program, sets uniforms and textures, and runs one
//! batch with blending off and one with blending on.

use super::bench::{apply_uniforms, run_batch, GlFillTarget, Present, ReportSink, StdoutSink};
use super::context::{check_gl_error, drain_gl_errors};
use super::shader::{build_program, ShaderError};
use super::texture::Textures;
use super::vertex::QuadVertices;
use crate::config::{BenchCase, Blend};
use crate::error::BenchError;
use crate::shadergen::{generate_fragment_shader, VERTEX_SHADER};
use crate::sweep::{sweep_cases, SweepSummary};
use crate::timing::{viewport_extent, Clock, MonotonicClock};

/// Line reported when a case's program cannot be built.
pub const PROGRAM_ERROR_LINE: &str = "error running test";

/// Shared GPU state for a sweep: the quad and both textures.
pub struct FillBench<'gl> {
    gl: &'gl glow::Context,
    quad: QuadVertices,
    textures: Textures,
    width: u32,
    height: u32,
}

impl<'gl> FillBench<'gl> {
    /// Uploads vertex state and textures for a `width` x `height` target.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidDimensions` for a zero-sized target or
    /// one too large for a GL viewport, and `BenchError::Resource` if GL
    /// objects cannot be created.
    #[allow(unsafe_code)]
    pub fn setup(gl: &'gl glow::Context, width: u32, height: u32) -> Result<Self, BenchError> {
        use glow::HasContext;

        let (viewport_w, viewport_h) = viewport_extent(width, height)?;

        let quad = QuadVertices::upload(gl)?;
        let textures = match Textures::provision(gl) {
            Ok(t) => t,
            Err(e) => {
                quad.destroy(gl);
                return Err(e);
            }
        };

        // SAFETY: plain state setter on a current context.
        unsafe { gl.viewport(0, 0, viewport_w, viewport_h) };
        check_gl_error(gl, "setup");

        Ok(Self {
            gl,
            quad,
            textures,
            width,
            height,
        })
    }

    /// Runs both blend states of one case, reporting each to `sink`.
    ///
    /// A program that fails to build is reported through
    /// [`report_build_failure`] and counted as skipped. GL errors raised
    /// along the way go to the sink as diagnostics.
    #[allow(unsafe_code)]
    pub fn run_case(
        &self,
        case: &BenchCase,
        present: &mut dyn Present,
        clock: &dyn Clock,
        sink: &mut dyn ReportSink,
        summary: &mut SweepSummary,
    ) {
        use glow::HasContext;

        let gl = self.gl;
        let fragment = generate_fragment_shader(&case.shader);
        let program = match build_program(gl, VERTEX_SHADER, &fragment) {
            Ok(p) => p,
            Err(e) => {
                forward_gl_errors(gl, "createProgram", sink);
                report_build_failure(sink, &e);
                summary.skipped_cases += 1;
                return;
            }
        };
        forward_gl_errors(gl, "createProgram", sink);

        apply_uniforms(gl, program);
        self.textures.bind(gl, case.textures);

        // SAFETY: plain state setter on a current context.
        unsafe { gl.blend_func(glow::ONE, glow::ONE) };

        for blend in Blend::ALL {
            // SAFETY: plain state setters on a current context.
            unsafe {
                if blend.is_enabled() {
                    gl.enable(glow::BLEND);
                } else {
                    gl.disable(glow::BLEND);
                }
            }

            let label = case.label(blend);
            let mut target = GlFillTarget::new(gl);
            match run_batch(&mut target, present, clock, self.width, self.height) {
                Ok(throughput) => {
                    sink.line(&throughput.report_line(&label));
                    summary.completed += 1;
                }
                Err(e) => {
                    log::warn!("{label}: {e}");
                    summary.failed_runs += 1;
                }
            }
            forward_gl_errors(gl, "drawArrays", sink);
        }

        // SAFETY: program was created above and is no longer needed.
        unsafe {
            gl.use_program(None);
            gl.delete_program(program);
        }
    }

    /// Runs every case in sweep order.
    ///
    /// # Errors
    ///
    /// Only fails if the sweep plan itself is invalid; rendering failures
    /// are counted in the returned summary.
    pub fn run_sweep(
        &self,
        present: &mut dyn Present,
        clock: &dyn Clock,
        sink: &mut dyn ReportSink,
    ) -> Result<SweepSummary, BenchError> {
        let mut summary = SweepSummary::default();
        for case in sweep_cases()? {
            self.run_case(&case, present, clock, sink, &mut summary);
        }
        log::info!(
            "sweep finished: {} runs, {} cases skipped, {} runs failed",
            summary.completed,
            summary.skipped_cases,
            summary.failed_runs
        );
        Ok(summary)
    }

    /// Releases the quad and textures.
    pub fn teardown(self) {
        self.quad.destroy(self.gl);
        self.textures.destroy(self.gl);
    }
}

/// Reports a program that failed to build: the compile/link log as a
/// diagnostic, then [`PROGRAM_ERROR_LINE`].
pub fn report_build_failure(sink: &mut dyn ReportSink, error: &ShaderError) {
    log::error!("{error}");
    sink.diagnostic(&error.to_string());
    sink.line(PROGRAM_ERROR_LINE);
}

fn forward_gl_errors(gl: &glow::Context, op: &str, sink: &mut dyn ReportSink) {
    for line in drain_gl_errors(gl, op) {
        log::error!("{line}");
        sink.diagnostic(&line);
    }
}

/// Runs the whole sweep to standard output and exits the process with
/// status 0.
///
/// Setup failures are logged and still exit with status 0; the tool is a
/// one-shot measurement, not a service.
pub fn run_and_exit(gl: &glow::Context, width: u32, height: u32, present: &mut dyn Present) -> ! {
    let clock = MonotonicClock::new();
    match FillBench::setup(gl, width, height) {
        Ok(bench) => {
            if let Err(e) = bench.run_sweep(present, &clock, &mut StdoutSink) {
                log::error!("sweep aborted: {e}");
            }
        }
        Err(e) => log::error!("benchmark setup failed: {e}"),
    }
    std::process::exit(0)
}
