#![deny(unsafe_code)]
//! CLI for inspecting the fill-rate benchmark.
//!
//! Subcommands:
//! - `shader` — print the generated fragment shader (or the vertex shader)
//! - `plan` — list every run of the sweep in order, with the pixels each
//!   timed batch shades on a `--width` x `--height` target
//! - `texture <large|small>` — write a procedural texture pattern as PNG
//!
//! Running the sweep itself needs a GL surface from the host; see
//! `fillbench_core::render::run_and_exit`.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use fillbench_core::timing::DRAWS_PER_BATCH;
use fillbench_core::{
    batch_pixels, generate_fragment_shader, sweep_runs, viewport_extent, ShaderConfig,
    TextureSlot, VERTEX_SHADER,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "fillbench", about = "Fill-rate benchmark sweep inspector")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fragment shader for a configuration.
    Shader {
        /// Take the base color from the vertex color instead of `u_color`.
        #[arg(long)]
        var_color: bool,

        /// Number of textures sampled (0-2).
        #[arg(short, long, default_value_t = 0)]
        tex_count: u8,

        /// Multiply the base color by texture 0 instead of replacing it.
        #[arg(short, long)]
        modulate: bool,

        /// Number of extra uniform multiplications (0-4).
        #[arg(short, long, default_value_t = 0)]
        extra_math: u8,

        /// Print the fixed vertex shader instead.
        #[arg(long)]
        vertex: bool,
    },
    /// List every run of the sweep in order.
    Plan {
        /// Target width in pixels.
        #[arg(short = 'W', long, default_value_t = 1280)]
        width: u32,

        /// Target height in pixels.
        #[arg(short = 'H', long, default_value_t = 720)]
        height: u32,
    },
    /// Write a procedural texture pattern as PNG.
    Texture {
        /// Texture name (large, small) or id (1, 2).
        name: String,

        /// Output file path.
        #[arg(short, long, default_value = "texture.png")]
        output: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Shader {
            var_color,
            tex_count,
            modulate,
            extra_math,
            vertex,
        } => {
            let config = ShaderConfig::new(var_color, tex_count, modulate, extra_math)
                .map_err(CliError::ShaderFlags)?;
            let source = if vertex {
                VERTEX_SHADER.to_string()
            } else {
                generate_fragment_shader(&config)
            };
            log::debug!("generated {} bytes for {config:?}", source.len());

            if cli.json {
                let info = serde_json::json!({
                    "config": config,
                    "stage": if vertex { "vertex" } else { "fragment" },
                    "source": source,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{source}");
            }
        }
        Command::Plan { width, height } => {
            let pixels = plan_pixels(width, height)?;
            let runs = sweep_runs().map_err(CliError::ShaderFlags)?;
            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "draws_per_batch": DRAWS_PER_BATCH,
                    "pixels_per_run": pixels,
                    "runs": runs,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for run in &runs {
                    let len = generate_fragment_shader(&run.case.shader).len();
                    println!("{} ({len} bytes, {pixels} px)", run.label);
                }
                eprintln!(
                    "{} runs on {width}x{height}, {pixels} px per timed batch",
                    runs.len()
                );
            }
        }
        Command::Texture { name, output } => {
            let slot = TextureSlot::from_name(&name)
                .ok_or_else(|| CliError::UnknownTexture(name.clone()))?;

            fillbench_core::snapshot::write_png(slot, &output).map_err(|source| {
                CliError::Snapshot {
                    path: output.clone(),
                    source,
                }
            })?;

            if cli.json {
                let info = serde_json::json!({
                    "texture": slot,
                    "size": slot.size(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote {name} texture ({0}x{0}) -> {1}",
                    slot.size(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

/// Pixels one timed batch shades on the planned target.
fn plan_pixels(width: u32, height: u32) -> Result<f64, CliError> {
    viewport_extent(width, height)
        .and_then(|_| batch_pixels(width, height, DRAWS_PER_BATCH))
        .map_err(|source| CliError::PlanSize {
            width,
            height,
            source,
        })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            log::error!("{e}");
        }
        process::exit(e.exit_code());
    }
}
