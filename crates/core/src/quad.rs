//! The benchmark quad and its vertex attribute layout.
//!
//! One triangle strip of four vertices with a position, a color, and two
//! independent texture-coordinate sets. The quad is skewed to the left in
//! clip space rather than covering exactly [-1, 1]; throughput figures
//! assume full coverage regardless.

/// Number of vertices drawn per call (`TRIANGLE_STRIP`).
pub const QUAD_VERTEX_COUNT: i32 = 4;

/// Clip-space positions, two floats per vertex.
pub const POSITIONS: [f32; 8] = [
    -2.0, -1.0, //
    1.0, -1.0, //
    -2.0, 1.0, //
    1.0, 1.0,
];

/// RGBA vertex colors, four floats per vertex.
pub const COLORS: [f32; 16] = [
    1.0, 0.0, 1.0, 1.0, //
    0.0, 0.0, 1.0, 1.0, //
    1.0, 1.0, 0.0, 1.0, //
    1.0, 1.0, 1.0, 1.0,
];

/// First texture-coordinate set.
pub const TEX0_COORDS: [f32; 8] = [
    0.0, 0.0, //
    1.0, 0.0, //
    1.0, 1.0, //
    0.0, 1.0,
];

/// Second texture-coordinate set, rotated relative to the first.
pub const TEX1_COORDS: [f32; 8] = [
    1.0, 0.0, //
    1.0, 1.0, //
    0.0, 1.0, //
    0.0, 0.0,
];

/// A vertex attribute stream with a fixed shader location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attrib {
    Position,
    Color,
    Tex0,
    Tex1,
}

impl Attrib {
    /// All attributes in location order.
    pub const ALL: [Attrib; 4] = [Attrib::Position, Attrib::Color, Attrib::Tex0, Attrib::Tex1];

    /// Attribute location bound before linking.
    pub fn location(self) -> u32 {
        match self {
            Attrib::Position => 0,
            Attrib::Color => 1,
            Attrib::Tex0 => 2,
            Attrib::Tex1 => 3,
        }
    }

    /// Attribute name in [`crate::shadergen::VERTEX_SHADER`].
    pub fn name(self) -> &'static str {
        match self {
            Attrib::Position => "a_pos",
            Attrib::Color => "a_color",
            Attrib::Tex0 => "a_tex0",
            Attrib::Tex1 => "a_tex1",
        }
    }

    /// Floats per vertex.
    pub fn components(self) -> i32 {
        match self {
            Attrib::Color => 4,
            _ => 2,
        }
    }

    /// The attribute's vertex data.
    pub fn data(self) -> &'static [f32] {
        match self {
            Attrib::Position => &POSITIONS,
            Attrib::Color => &COLORS,
            Attrib::Tex0 => &TEX0_COORDS,
            Attrib::Tex1 => &TEX1_COORDS,
        }
    }

    /// Byte stride between consecutive vertices (tightly packed).
    pub fn stride(self) -> i32 {
        self.components() * std::mem::size_of::<f32>() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shadergen::VERTEX_SHADER;

    #[test]
    fn locations_are_zero_through_three_in_order() {
        let locations: Vec<u32> = Attrib::ALL.iter().map(|a| a.location()).collect();
        assert_eq!(locations, vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_attribute_has_four_vertices() {
        for attrib in Attrib::ALL {
            assert_eq!(
                attrib.data().len() as i32,
                attrib.components() * QUAD_VERTEX_COUNT,
                "{attrib:?} has the wrong number of floats"
            );
        }
    }

    #[test]
    fn strides_match_component_count() {
        assert_eq!(Attrib::Position.stride(), 8);
        assert_eq!(Attrib::Color.stride(), 16);
        assert_eq!(Attrib::Tex0.stride(), 8);
        assert_eq!(Attrib::Tex1.stride(), 8);
    }

    #[test]
    fn attribute_names_appear_in_vertex_shader() {
        for attrib in Attrib::ALL {
            assert!(
                VERTEX_SHADER.contains(&format!("{};", attrib.name())),
                "{} not declared in vertex shader",
                attrib.name()
            );
        }
    }

    #[test]
    fn positions_are_skewed_quad_corners() {
        let corners: Vec<(f32, f32)> = POSITIONS.chunks(2).map(|c| (c[0], c[1])).collect();
        assert_eq!(
            corners,
            vec![(-2.0, -1.0), (1.0, -1.0), (-2.0, 1.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn vertex_colors_are_opaque() {
        assert!(COLORS.chunks(4).all(|c| c[3] == 1.0));
    }
}
