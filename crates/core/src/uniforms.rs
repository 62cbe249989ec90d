//! Uniform values set before each benchmark case.
//!
//! Values are fixed; a uniform the compiler optimised out is simply not
//! set, so every shader variant can share this table.

use glam::Vec4;

/// Base color used when the shader does not read the vertex color.
pub const BASE_COLOR: (&str, Vec4) = ("u_color", Vec4::new(1.0, 0.4, 0.6, 0.8));

/// Extra-math constants, one per stage, in application order.
pub const EXTRA_MATH_COLORS: [(&str, Vec4); 4] = [
    ("u_0", Vec4::new(1.0, 0.4, 0.6, 0.8)),
    ("u_1", Vec4::new(0.7, 0.8, 0.6, 0.8)),
    ("u_2", Vec4::new(0.9, 0.6, 0.7, 1.0)),
    ("u_3", Vec4::new(0.88, 0.2, 0.4, 0.2)),
];

/// Sampler uniforms and the texture unit each reads from.
pub const SAMPLER_UNITS: [(&str, i32); 2] = [("u_tex0", 0), ("u_tex1", 1)];

/// Every `vec4` uniform the fragment shaders may declare.
pub fn color_uniforms() -> impl Iterator<Item = (&'static str, Vec4)> {
    std::iter::once(BASE_COLOR).chain(EXTRA_MATH_COLORS)
}
