//! The timed draw loop and its collaborators.
//!
//! [`run_batch`] issues one warm-up draw and then a batch of
//! [`DRAWS_PER_BATCH`] draws, forcing completion with `finish()` before
//! the stopwatch stops. GL work goes through a [`FillTarget`],
//! presentation is delegated to the host through [`Present`], and report
//! lines go to a [`ReportSink`].

use crate::error::BenchError;
use crate::quad::QUAD_VERTEX_COUNT;
use crate::timing::{Clock, Stopwatch, Throughput, DRAWS_PER_BATCH};
use crate::uniforms::{color_uniforms, SAMPLER_UNITS};

/// Host-provided swap/flush of the rendered surface.
pub trait Present {
    fn present(&mut self);
}

impl<F: FnMut()> Present for F {
    fn present(&mut self) {
        self()
    }
}

/// Destination for benchmark report lines.
pub trait ReportSink {
    fn line(&mut self, line: &str);

    /// Compile/link logs and GL error codes. Defaults to a report line.
    fn diagnostic(&mut self, line: &str) {
        self.line(line);
    }
}

/// Prints report lines to standard output and diagnostics to standard
/// error.
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }

    fn diagnostic(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

impl ReportSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// The GL commands the draw loop issues.
pub trait FillTarget {
    /// Clears color and depth.
    fn clear(&mut self);
    /// Draws the quad once with the current program and state.
    fn draw_quad(&mut self);
    /// Blocks until every queued command has completed.
    fn finish(&mut self);
}

/// [`FillTarget`] over a live context with the quad's vertex array bound.
pub struct GlFillTarget<'gl> {
    gl: &'gl glow::Context,
}

impl<'gl> GlFillTarget<'gl> {
    pub fn new(gl: &'gl glow::Context) -> Self {
        Self { gl }
    }
}

#[allow(unsafe_code)]
impl FillTarget for GlFillTarget<'_> {
    fn clear(&mut self) {
        use glow::HasContext;

        // SAFETY: plain framebuffer clear on a current context.
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) };
    }

    fn draw_quad(&mut self) {
        use glow::HasContext;

        // SAFETY: the quad's vertex array and a program are bound by the caller.
        unsafe { self.gl.draw_arrays(glow::TRIANGLE_STRIP, 0, QUAD_VERTEX_COUNT) };
    }

    fn finish(&mut self) {
        use glow::HasContext;

        // SAFETY: glFinish has no preconditions beyond a current context.
        unsafe { self.gl.finish() };
    }
}

/// Sets every sampler and color uniform the program kept.
///
/// Uniforms the compiler removed have no location and are skipped.
#[allow(unsafe_code)]
pub fn apply_uniforms(gl: &glow::Context, program: glow::Program) {
    use glow::HasContext;

    // SAFETY: program is a linked program and is the current program, so
    // locations looked up from it are valid for uniform updates.
    unsafe {
        for (name, unit) in SAMPLER_UNITS {
            match gl.get_uniform_location(program, name) {
                Some(loc) => gl.uniform_1_i32(Some(&loc), unit),
                None => log::trace!("sampler {name} not active"),
            }
        }
        for (name, v) in color_uniforms() {
            match gl.get_uniform_location(program, name) {
                Some(loc) => gl.uniform_4_f32(Some(&loc), v.x, v.y, v.z, v.w),
                None => log::trace!("uniform {name} not active"),
            }
        }
    }
}

fn clear_and_draw(target: &mut dyn FillTarget, draws: u32) {
    target.clear();
    for _ in 0..draws {
        target.draw_quad();
    }
}

fn present_and_finish(target: &mut dyn FillTarget, present: &mut dyn Present) {
    present.present();
    target.finish();
}

/// Runs one warm-up draw and one timed batch on a `width` x `height`
/// target with the current program and render state.
///
/// # Errors
///
/// Returns `BenchError::ZeroElapsed` if `clock` reports no elapsed time
/// and `BenchError::InvalidDimensions` for a zero-sized target.
pub fn run_batch(
    target: &mut dyn FillTarget,
    present: &mut dyn Present,
    clock: &dyn Clock,
    width: u32,
    height: u32,
) -> Result<Throughput, BenchError> {
    clear_and_draw(target, 1);
    present_and_finish(target, present);

    let stopwatch = Stopwatch::start(clock);
    clear_and_draw(target, DRAWS_PER_BATCH);
    present_and_finish(target, present);
    let elapsed_ns = stopwatch.stop(clock);

    Throughput::compute(width, height, DRAWS_PER_BATCH, elapsed_ns)
}
