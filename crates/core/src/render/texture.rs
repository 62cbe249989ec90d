//! Texture creation for the benchmark's procedural textures.
//!
//! Provides `TextureConfig` for specifying texture parameters,
//! `create_texture` for allocating and filling a GPU texture, and
//! [`Textures`] which provisions both benchmark textures once and binds
//! them to texture units per case.

use crate::config::{TexturePair, TextureSlot};
use crate::error::BenchError;
use crate::pattern::generate_rgba;

/// Configuration for creating a GPU texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureConfig {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// GL texture filter mode (e.g. `glow::LINEAR`).
    pub filter: u32,
    /// GL wrap mode applied to both axes (e.g. `glow::REPEAT`).
    pub wrap: u32,
}

impl TextureConfig {
    /// RGBA8 texture with LINEAR filtering and REPEAT wrapping, as used by
    /// both benchmark textures.
    pub fn repeating_rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            filter: glow::LINEAR,
            wrap: glow::REPEAT,
        }
    }

    /// Config for one of the benchmark slots.
    pub fn for_slot(slot: TextureSlot) -> Self {
        Self::repeating_rgba8(slot.size(), slot.size())
    }
}

/// Creates an RGBA8 texture and uploads `pixels` into it.
///
/// `pixels` must hold `width * height * 4` bytes in row-major order.
///
/// # Errors
///
/// Returns `BenchError::Resource` if the GL context fails to create the
/// texture or `pixels` has the wrong length.
#[allow(unsafe_code)]
pub fn create_texture(
    gl: &glow::Context,
    config: &TextureConfig,
    pixels: &[u8],
) -> Result<glow::Texture, BenchError> {
    use glow::HasContext;

    let expected = config.width as usize * config.height as usize * 4;
    if pixels.len() != expected {
        return Err(BenchError::Resource(format!(
            "texture data is {} bytes, expected {expected}",
            pixels.len()
        )));
    }

    // SAFETY: glow wraps raw GL calls as unsafe. We create, configure,
    // and fill a texture using parameters derived from TextureConfig and a
    // pixel slice whose length was checked above.
    let texture = unsafe { gl.create_texture().map_err(BenchError::Resource)? };

    unsafe {
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA as i32,
            config.width as i32,
            config.height as i32,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(pixels)),
        );
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, config.filter as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, config.filter as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, config.wrap as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, config.wrap as i32);
        gl.bind_texture(glow::TEXTURE_2D, None);
    }

    Ok(texture)
}

/// Both benchmark textures, created once before the sweep.
pub struct Textures {
    large: glow::Texture,
    small: glow::Texture,
}

impl Textures {
    /// Generates and uploads the large and small patterns.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Resource` if either texture cannot be created.
    pub fn provision(gl: &glow::Context) -> Result<Self, BenchError> {
        let large = upload_slot(gl, TextureSlot::Large)?;
        let small = upload_slot(gl, TextureSlot::Small)?;
        log::debug!("provisioned benchmark textures");
        Ok(Self { large, small })
    }

    /// The GL handle for `slot`.
    pub fn get(&self, slot: TextureSlot) -> glow::Texture {
        match slot {
            TextureSlot::Large => self.large,
            TextureSlot::Small => self.small,
        }
    }

    /// Binds `pair` to texture units 0 and 1, leaving unit 0 active.
    #[allow(unsafe_code)]
    pub fn bind(&self, gl: &glow::Context, pair: TexturePair) {
        use glow::HasContext;

        // SAFETY: both handles were created in provision() and are alive.
        unsafe {
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.get(pair.tex0)));
            gl.active_texture(glow::TEXTURE1);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.get(pair.tex1)));
            gl.active_texture(glow::TEXTURE0);
        }
    }

    /// Deletes both textures.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: both handles were created in provision().
        unsafe {
            gl.delete_texture(self.large);
            gl.delete_texture(self.small);
        }
    }
}

fn upload_slot(gl: &glow::Context, slot: TextureSlot) -> Result<glow::Texture, BenchError> {
    create_texture(gl, &TextureConfig::for_slot(slot), &generate_rgba(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_rgba8_uses_linear_and_repeat() {
        let config = TextureConfig::repeating_rgba8(64, 32);
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 32);
        assert_eq!(config.filter, glow::LINEAR);
        assert_eq!(config.wrap, glow::REPEAT);
    }

    #[test]
    fn for_slot_matches_slot_size() {
        for slot in TextureSlot::ALL {
            let config = TextureConfig::for_slot(slot);
            assert_eq!(config.width, slot.size());
            assert_eq!(config.height, slot.size());
        }
    }

    #[test]
    fn slot_pixel_data_fits_config() {
        for slot in TextureSlot::ALL {
            let config = TextureConfig::for_slot(slot);
            assert_eq!(
                generate_rgba(slot).len(),
                (config.width * config.height * 4) as usize
            );
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[ignore = "requires GL context"]
    fn provision_creates_two_distinct_textures() {
        use crate::render::headless::HeadlessGl;

        let headless = HeadlessGl::new(4, 4);
        let textures = Textures::provision(&headless.gl).unwrap();
        assert_ne!(
            textures.get(TextureSlot::Large),
            textures.get(TextureSlot::Small)
        );
        textures.destroy(&headless.gl);
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[ignore = "requires GL context"]
    #[allow(unsafe_code)]
    fn bind_places_pair_on_units_and_leaves_unit_zero_active() {
        use crate::render::headless::HeadlessGl;
        use glow::HasContext;

        let headless = HeadlessGl::new(4, 4);
        let gl = &headless.gl;
        let textures = Textures::provision(gl).unwrap();
        let pair = TexturePair {
            tex0: TextureSlot::Small,
            tex1: TextureSlot::Large,
        };
        textures.bind(gl, pair);

        // SAFETY: reads context state only.
        unsafe {
            assert_eq!(
                gl.get_parameter_i32(glow::ACTIVE_TEXTURE),
                glow::TEXTURE0 as i32
            );
            assert_eq!(
                gl.get_parameter_texture(glow::TEXTURE_BINDING_2D),
                Some(textures.get(TextureSlot::Small))
            );
            gl.active_texture(glow::TEXTURE1);
            assert_eq!(
                gl.get_parameter_texture(glow::TEXTURE_BINDING_2D),
                Some(textures.get(TextureSlot::Large))
            );
            gl.active_texture(glow::TEXTURE0);
        }
        textures.destroy(gl);
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[ignore = "requires GL context"]
    fn short_pixel_buffer_is_rejected() {
        use crate::render::headless::HeadlessGl;

        let headless = HeadlessGl::new(4, 4);
        let config = TextureConfig::repeating_rgba8(16, 16);
        assert!(matches!(
            create_texture(&headless.gl, &config, &[0u8; 16]),
            Err(BenchError::Resource(_))
        ));
    }
}
