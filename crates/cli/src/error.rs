//! CLI failures and their exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: shader flags out of range
//! - 11: plan dimensions that cannot be rendered
//! - 12: unknown texture name
//! - 13: PNG write failed
//! - 14: JSON output failed

use fillbench_core::BenchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// `--tex-count` or `--extra-math` outside the supported range.
    #[error("invalid shader flags: {0}")]
    ShaderFlags(#[source] BenchError),
    /// `plan --width/--height` that yields no pixels or overflows the viewport.
    #[error("cannot plan a {width}x{height} target: {source}")]
    PlanSize {
        width: u32,
        height: u32,
        #[source]
        source: BenchError,
    },
    #[error("unknown texture '{0}' (expected large, small, 1 or 2)")]
    UnknownTexture(String),
    #[error("failed to write {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: BenchError,
    },
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ShaderFlags(_) => 10,
            CliError::PlanSize { .. } => 11,
            CliError::UnknownTexture(_) => 12,
            CliError::Snapshot { .. } => 13,
            CliError::Json(_) => 14,
        }
    }
}
