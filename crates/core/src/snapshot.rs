//! PNG export of the procedural texture patterns.
//!
//! Feature-gated behind `png` so the wasm host does not pull in the
//! `image` crate. The pixel generation itself lives in [`crate::pattern`].

use crate::config::TextureSlot;
use crate::error::BenchError;
use crate::pattern::generate_rgba;
use std::path::Path;

/// Writes the pattern for `slot` as a PNG image.
///
/// Returns `BenchError::Io` on write failure.
pub fn write_png(slot: TextureSlot, path: &Path) -> Result<(), BenchError> {
    let size = slot.size();
    let img = image::RgbaImage::from_raw(size, size, generate_rgba(slot))
        .ok_or_else(|| BenchError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| BenchError::Io(e.to_string()))
}
