#![deny(unsafe_code)]
#![cfg(target_arch = "wasm32")]
//! WASM host for the fill-rate benchmark.
//!
//! Takes a canvas from JavaScript, wraps its WebGL2 context in `glow`, and
//! runs the full sweep. The browser composites the canvas on its own, so
//! presenting is a no-op and `finish()` alone drains the pipeline. Report
//! lines, compile/link logs and GL error codes are returned to the caller
//! instead of printed; no logger backend is installed.

use fillbench_core::render::{FillBench, GpuContext};
use fillbench_core::Clock;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `performance.now()` as a nanosecond clock.
struct PerformanceClock {
    performance: web_sys::Performance,
}

impl Clock for PerformanceClock {
    fn now_ns(&self) -> u64 {
        (self.performance.now() * 1_000_000.0) as u64
    }
}

fn webgl2_context(canvas: &web_sys::HtmlCanvasElement) -> Result<glow::Context, JsValue> {
    let webgl2 = canvas
        .get_context("webgl2")?
        .ok_or_else(|| JsValue::from_str("WebGL2 is not available"))?
        .dyn_into::<web_sys::WebGl2RenderingContext>()?;
    Ok(glow::Context::from_webgl2_context(webgl2))
}

/// Runs every sweep case on `canvas` and returns the report, one line per run.
#[wasm_bindgen]
pub fn run_fill_sweep(canvas: web_sys::HtmlCanvasElement) -> Result<String, JsValue> {
    let performance = web_sys::window()
        .and_then(|w| w.performance())
        .ok_or_else(|| JsValue::from_str("performance timer is not available"))?;
    let clock = PerformanceClock { performance };

    let ctx = GpuContext::new(webgl2_context(&canvas)?);
    let bench = FillBench::setup(ctx.gl(), canvas.width(), canvas.height())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut lines: Vec<String> = Vec::new();
    let mut present = || {};
    let summary = bench
        .run_sweep(&mut present, &clock, &mut lines)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    bench.teardown();

    lines.push(format!(
        "{} runs on {} / {} ({} cases skipped, {} runs failed)",
        summary.completed,
        ctx.renderer(),
        ctx.version(),
        summary.skipped_cases,
        summary.failed_runs
    ));
    Ok(lines.join("\n"))
}
