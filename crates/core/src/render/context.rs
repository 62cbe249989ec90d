//! GPU context wrapper with driver identification and error polling.
//!
//! `GpuContext` wraps a `glow::Context` and records the renderer and
//! version strings at initialization so benchmark output can be tied to
//! the hardware it was measured on.

/// Wraps a `glow::Context` with the driver's identification strings.
pub struct GpuContext {
    gl: glow::Context,
    renderer: String,
    version: String,
}

impl GpuContext {
    /// Wraps the given GL context and queries `GL_RENDERER` and
    /// `GL_VERSION`.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context) -> Self {
        use glow::HasContext;

        // SAFETY: querying static driver strings has no preconditions
        // beyond a current context.
        let (renderer, version) = unsafe {
            (
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VERSION),
            )
        };
        log::info!("renderer: {renderer}, version: {version}");

        Self {
            gl,
            renderer,
            version,
        }
    }

    /// Returns a reference to the underlying `glow::Context`.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// The driver's `GL_RENDERER` string.
    pub fn renderer(&self) -> &str {
        &self.renderer
    }

    /// The driver's `GL_VERSION` string.
    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Drains the GL error queue, returning one formatted line per code.
///
/// Errors are diagnostics only and never abort the run.
#[allow(unsafe_code)]
pub fn drain_gl_errors(gl: &glow::Context, op: &str) -> Vec<String> {
    use glow::HasContext;

    let mut lines = Vec::new();
    loop {
        // SAFETY: glGetError has no preconditions beyond a current context.
        let error = unsafe { gl.get_error() };
        if error == glow::NO_ERROR {
            return lines;
        }
        lines.push(format_gl_error(op, error));
    }
}

/// Drains the GL error queue, logging each code against `op`.
///
/// Returns the number of errors found.
pub fn check_gl_error(gl: &glow::Context, op: &str) -> usize {
    let lines = drain_gl_errors(gl, op);
    for line in &lines {
        log::error!("{line}");
    }
    lines.len()
}

/// Formats one polled GL error code.
pub fn format_gl_error(op: &str, code: u32) -> String {
    format!("after {op}() glError (0x{code:x})")
}
