//! Enumeration of the benchmark sweep.
//!
//! The order is fixed: texture count outermost, extra math next, then a
//! fixed list of color / modulation / texture choices. Every case runs
//! twice, once per [`Blend`] state.

use crate::config::{
    BenchCase, Blend, ShaderConfig, TexturePair, TextureSlot, MAX_EXTRA_MATH, MAX_TEX_COUNT,
};
use crate::error::BenchError;
use serde::Serialize;

/// `(use_var_color, modulate_first_tex, texture)` choices per
/// `(tex_count, extra_math)` pair. Untextured pairs only use the first two.
const VARIANTS: [(bool, bool, TextureSlot); 8] = [
    (false, false, TextureSlot::Large),
    (true, false, TextureSlot::Large),
    (false, true, TextureSlot::Large),
    (true, true, TextureSlot::Large),
    (false, false, TextureSlot::Small),
    (true, false, TextureSlot::Small),
    (false, true, TextureSlot::Small),
    (true, true, TextureSlot::Small),
];

/// Variants used when no texture is sampled.
const UNTEXTURED_VARIANTS: usize = 2;

/// Every case in sweep order.
pub fn sweep_cases() -> Result<Vec<BenchCase>, BenchError> {
    let mut cases = Vec::new();
    for tex_count in 0..=MAX_TEX_COUNT {
        for extra_math in 0..=MAX_EXTRA_MATH {
            let variants = if tex_count == 0 {
                &VARIANTS[..UNTEXTURED_VARIANTS]
            } else {
                &VARIANTS[..]
            };
            for &(use_var_color, modulate, slot) in variants {
                cases.push(BenchCase {
                    shader: ShaderConfig::new(use_var_color, tex_count, modulate, extra_math)?,
                    textures: TexturePair::both(slot),
                });
            }
        }
    }
    Ok(cases)
}

/// One timed run: a case plus its blend state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRun {
    pub case: BenchCase,
    pub blend: Blend,
    pub label: String,
}

/// Every run in sweep order, blend off before blend on.
pub fn sweep_runs() -> Result<Vec<SweepRun>, BenchError> {
    Ok(sweep_cases()?
        .into_iter()
        .flat_map(|case| {
            Blend::ALL.into_iter().map(move |blend| SweepRun {
                label: case.label(blend),
                case,
                blend,
            })
        })
        .collect())
}

/// Counts collected while running the sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    /// Runs that produced a throughput line.
    pub completed: usize,
    /// Cases skipped because their program failed to build.
    pub skipped_cases: usize,
    /// Runs whose timing could not be turned into throughput.
    pub failed_runs: usize,
}
