//! Shader configuration and render state for a single benchmark case.
//!
//! A [`ShaderConfig`] fully determines the generated fragment shader. A
//! [`BenchCase`] pairs it with the textures bound during the run, and
//! [`Blend`] selects whether blending is on for one of the two runs each
//! case gets.

use crate::error::BenchError;
use serde::Serialize;

/// Highest supported number of sampled textures.
pub const MAX_TEX_COUNT: u8 = 2;

/// Highest supported number of extra uniform multiplications.
pub const MAX_EXTRA_MATH: u8 = 4;

/// Flags that select the fragment shader for one benchmark case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShaderConfig {
    use_var_color: bool,
    tex_count: u8,
    modulate_first_tex: bool,
    extra_math: u8,
}

impl ShaderConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidTexCount` if `tex_count > 2` and
    /// `BenchError::InvalidExtraMath` if `extra_math > 4`.
    pub fn new(
        use_var_color: bool,
        tex_count: u8,
        modulate_first_tex: bool,
        extra_math: u8,
    ) -> Result<Self, BenchError> {
        if tex_count > MAX_TEX_COUNT {
            return Err(BenchError::InvalidTexCount(tex_count));
        }
        if extra_math > MAX_EXTRA_MATH {
            return Err(BenchError::InvalidExtraMath(extra_math));
        }
        Ok(Self {
            use_var_color,
            tex_count,
            modulate_first_tex,
            extra_math,
        })
    }

    /// Whether the base color comes from the interpolated vertex color
    /// rather than the `u_color` uniform.
    pub fn use_var_color(&self) -> bool {
        self.use_var_color
    }

    /// Number of textures sampled by the shader (0..=2).
    pub fn tex_count(&self) -> u8 {
        self.tex_count
    }

    /// Whether texture 0 multiplies the base color instead of replacing it.
    pub fn modulate_first_tex(&self) -> bool {
        self.modulate_first_tex
    }

    /// Number of extra `c *= u_N` stages (0..=4).
    pub fn extra_math(&self) -> u8 {
        self.extra_math
    }
}

/// One of the two procedurally generated textures.
///
/// The numeric id is what the benchmark labels report as `texSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextureSlot {
    /// 1024x1024 gradient.
    Large,
    /// 16x16 gradient.
    Small,
}

impl TextureSlot {
    /// Both slots in provisioning order.
    pub const ALL: [TextureSlot; 2] = [TextureSlot::Large, TextureSlot::Small];

    /// Fixed identifier reported in run labels.
    pub fn id(self) -> u32 {
        match self {
            TextureSlot::Large => 1,
            TextureSlot::Small => 2,
        }
    }

    /// Edge length of the square texture in pixels.
    pub fn size(self) -> u32 {
        match self {
            TextureSlot::Large => 1024,
            TextureSlot::Small => 16,
        }
    }

    /// Parses `"large"` / `"small"` (case-insensitive) or the numeric id.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "large" | "1" => Some(TextureSlot::Large),
            "small" | "2" => Some(TextureSlot::Small),
            _ => None,
        }
    }
}

/// Textures bound to units 0 and 1 during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TexturePair {
    pub tex0: TextureSlot,
    pub tex1: TextureSlot,
}

impl TexturePair {
    /// Binds the same texture to both units.
    pub fn both(slot: TextureSlot) -> Self {
        Self {
            tex0: slot,
            tex1: slot,
        }
    }
}

/// Blending state for a run. The blend function is always `ONE, ONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Blend {
    Off,
    On,
}

impl Blend {
    /// Run order within a case: disabled first, then enabled.
    pub const ALL: [Blend; 2] = [Blend::Off, Blend::On];

    pub fn is_enabled(self) -> bool {
        matches!(self, Blend::On)
    }
}

/// A shader configuration plus the textures it runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BenchCase {
    pub shader: ShaderConfig,
    pub textures: TexturePair,
}

impl BenchCase {
    /// Human-readable label for one run of this case.
    ///
    /// Booleans print as `0`/`1` and `texSize` reports the id of the
    /// texture on unit 0.
    pub fn label(&self, blend: Blend) -> String {
        format!(
            "Test varColor={}, texCount={}, modulate={}, extraMath={}, texSize={}, blend={}",
            u8::from(self.shader.use_var_color),
            self.shader.tex_count,
            u8::from(self.shader.modulate_first_tex),
            self.shader.extra_math,
            self.textures.tex0.id(),
            u8::from(blend.is_enabled()),
        )
    }
}
