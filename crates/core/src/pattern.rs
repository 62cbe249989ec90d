//! Procedural texture content.
//!
//! Both textures are opaque red with green and blue ramps along x and y.
//! The large texture repeats its green ramp every 256 texels; the small one
//! steps 16 levels per axis.

use crate::config::TextureSlot;

/// RGBA8 texel at `(x, y)` for the given texture.
pub fn texel(slot: TextureSlot, x: u32, y: u32) -> [u8; 4] {
    match slot {
        TextureSlot::Large => [0xff, (x & 0xff) as u8, (y & 0xff) as u8, 0xff],
        TextureSlot::Small => [0xff, ((x & 0x0f) << 4) as u8, ((y & 0x0f) << 4) as u8, 0xff],
    }
}

/// Row-major RGBA8 pixel buffer for the whole texture.
///
/// The length is `size * size * 4`.
pub fn generate_rgba(slot: TextureSlot) -> Vec<u8> {
    let size = slot.size();
    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .flat_map(|(x, y)| texel(slot, x, y))
        .collect()
}
