//! GLSL ES 1.00 sources for the fill-rate benchmark.
//!
//! The vertex shader is fixed and forwards the four quad attributes. The
//! fragment shader is assembled from a fixed prefix, a handful of one-line
//! stages chosen by [`ShaderConfig`], and a fixed postfix.

use crate::config::ShaderConfig;

/// Vertex shader shared by every benchmark case.
///
/// Attribute names must match [`crate::quad::Attrib::name`]; their
/// locations are bound explicitly before linking.
pub const VERTEX_SHADER: &str = "attribute vec4 a_pos;
attribute vec4 a_color;
attribute vec2 a_tex0;
attribute vec2 a_tex1;
varying vec4 v_color;
varying vec2 v_tex0;
varying vec2 v_tex1;
void main() {
    v_color = a_color;
    v_tex0 = a_tex0;
    v_tex1 = a_tex1;
    gl_Position = a_pos;
}
";

/// Declarations and the opening of `main()` for every fragment shader.
pub const FRAGMENT_PREFIX: &str = "precision mediump float;
uniform vec4 u_color;
uniform vec4 u_0;
uniform vec4 u_1;
uniform vec4 u_2;
uniform vec4 u_3;
varying vec4 v_color;
varying vec2 v_tex0;
varying vec2 v_tex1;
uniform sampler2D u_tex0;
uniform sampler2D u_tex1;
void main() {
";

/// Output statement and closing brace for every fragment shader.
pub const FRAGMENT_POSTFIX: &str = "  gl_FragColor = c;
}
";

/// Names of the extra-math uniforms, applied in order.
pub const EXTRA_MATH_UNIFORMS: [&str; 4] = ["u_0", "u_1", "u_2", "u_3"];

/// Builds the fragment shader for `config`.
///
/// `c` is always initialised by exactly one base statement: the uniform or
/// vertex color, or a sample of texture 0 when texturing is on and the
/// first texture does not modulate. Every further stage multiplies into `c`.
pub fn generate_fragment_shader(config: &ShaderConfig) -> String {
    let mut src = String::with_capacity(FRAGMENT_PREFIX.len() + 256);
    src.push_str(FRAGMENT_PREFIX);

    let tex_count = config.tex_count();
    let modulate = config.modulate_first_tex();

    if modulate || tex_count == 0 {
        if config.use_var_color() {
            src.push_str("  vec4 c = v_color;\n");
        } else {
            src.push_str("  vec4 c = u_color;\n");
        }
    } else {
        src.push_str("  vec4 c = texture2D(u_tex0, v_tex0);\n");
    }

    if modulate && tex_count > 0 {
        src.push_str("  c *= texture2D(u_tex0, v_tex0);\n");
    }
    if tex_count > 1 {
        src.push_str("  c *= texture2D(u_tex1, v_tex1);\n");
    }

    for name in EXTRA_MATH_UNIFORMS
        .iter()
        .take(usize::from(config.extra_math()))
    {
        src.push_str(&format!("  c *= {name};\n"));
    }

    src.push_str(FRAGMENT_POSTFIX);
    src
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_EXTRA_MATH, MAX_TEX_COUNT};

    fn all_configs() -> Vec<ShaderConfig> {
        let mut out = Vec::new();
        for var in [false, true] {
            for tex in 0..=MAX_TEX_COUNT {
                for modulate in [false, true] {
                    for math in 0..=MAX_EXTRA_MATH {
                        out.push(ShaderConfig::new(var, tex, modulate, math).unwrap());
                    }
                }
            }
        }
        out
    }

    fn body(src: &str) -> &str {
        src.strip_prefix(FRAGMENT_PREFIX)
            .expect("shader should start with the fixed prefix")
    }

    #[test]
    fn every_config_has_single_base_assignment() {
        for cfg in all_configs() {
            let src = generate_fragment_shader(&cfg);
            assert_eq!(
                body(&src).matches("vec4 c =").count(),
                1,
                "expected one base assignment for {cfg:?}:\n{src}"
            );
        }
    }

    #[test]
    fn every_config_samples_tex_count_textures() {
        for cfg in all_configs() {
            let src = generate_fragment_shader(&cfg);
            assert_eq!(
                body(&src).matches("texture2D(").count(),
                usize::from(cfg.tex_count()),
                "wrong sample count for {cfg:?}:\n{src}"
            );
        }
    }

    #[test]
    fn every_config_has_extra_math_uniform_multiplies() {
        for cfg in all_configs() {
            let src = generate_fragment_shader(&cfg);
            let uniform_mults = body(&src)
                .lines()
                .filter(|l| l.trim_start().starts_with("c *= u_"))
                .count();
            assert_eq!(
                uniform_mults,
                usize::from(cfg.extra_math()),
                "wrong uniform multiply count for {cfg:?}:\n{src}"
            );
        }
    }

    #[test]
    fn every_config_ends_with_output_assignment() {
        for cfg in all_configs() {
            let src = generate_fragment_shader(&cfg);
            assert!(
                src.ends_with(FRAGMENT_POSTFIX),
                "missing postfix for {cfg:?}:\n{src}"
            );
        }
    }

    #[test]
    fn base_assignment_precedes_every_multiply() {
        for cfg in all_configs() {
            let src = generate_fragment_shader(&cfg);
            let base = src.find("vec4 c =").unwrap();
            if let Some(first_mult) = src.find("c *=") {
                assert!(base < first_mult, "c used before init for {cfg:?}");
            }
        }
    }

    #[test]
    fn generation_is_idempotent() {
        for cfg in all_configs() {
            assert_eq!(
                generate_fragment_shader(&cfg),
                generate_fragment_shader(&cfg)
            );
        }
    }

    #[test]
    fn shaders_stay_well_below_sixteen_kib() {
        let longest = all_configs()
            .iter()
            .map(|cfg| generate_fragment_shader(cfg).len())
            .max()
            .unwrap();
        assert!(longest < 16 * 1024 / 8, "longest shader is {longest} bytes");
    }

    #[test]
    fn untextured_uniform_color_uses_only_u_color() {
        let cfg = ShaderConfig::new(false, 0, false, 0).unwrap();
        let src = generate_fragment_shader(&cfg);
        let body = body(&src);
        assert!(body.contains("vec4 c = u_color;"), "got:\n{src}");
        assert!(!body.contains("texture2D"), "got:\n{src}");
        assert!(!body.contains("c *="), "got:\n{src}");
        assert!(!body.contains("v_color"), "got:\n{src}");
    }

    #[test]
    fn fully_loaded_config_has_six_multiplies() {
        let cfg = ShaderConfig::new(true, 2, true, 4).unwrap();
        let src = generate_fragment_shader(&cfg);
        let body = body(&src);
        assert!(body.contains("vec4 c = v_color;"));
        assert_eq!(body.matches("c *=").count(), 6, "got:\n{src}");
        assert_eq!(body.matches("c *= texture2D").count(), 2);
        for name in EXTRA_MATH_UNIFORMS {
            assert!(body.contains(&format!("c *= {name};")), "missing {name}");
        }
    }

    #[test]
    fn unmodulated_texture_replaces_base_color() {
        let cfg = ShaderConfig::new(true, 1, false, 0).unwrap();
        let src = generate_fragment_shader(&cfg);
        assert!(src.contains("  vec4 c = texture2D(u_tex0, v_tex0);\n"));
        assert!(!body(&src).contains("v_color;"));
    }

    #[test]
    fn extra_math_uniforms_apply_in_order() {
        let cfg = ShaderConfig::new(false, 0, false, 4).unwrap();
        let src = generate_fragment_shader(&cfg);
        let positions: Vec<usize> = EXTRA_MATH_UNIFORMS
            .iter()
            .map(|n| src.find(&format!("c *= {n};")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn vertex_shader_declares_all_quad_attributes() {
        for name in ["a_pos", "a_color", "a_tex0", "a_tex1"] {
            assert!(
                VERTEX_SHADER.contains(name),
                "missing {name} in:\n{VERTEX_SHADER}"
            );
        }
        assert!(VERTEX_SHADER.contains("gl_Position = a_pos;"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn statement_count_matches_flags(
                var: bool,
                modulate: bool,
                tex in 0..=MAX_TEX_COUNT,
                math in 0..=MAX_EXTRA_MATH,
            ) {
                let cfg = ShaderConfig::new(var, tex, modulate, math).unwrap();
                let src = generate_fragment_shader(&cfg);
                let body = body(&src);
                let samples_multiplied = if modulate { tex } else { tex.saturating_sub(1) };
                prop_assert_eq!(
                    body.matches("c *=").count(),
                    usize::from(samples_multiplied + math)
                );
                prop_assert_eq!(body.matches("gl_FragColor = c;").count(), 1);
            }
        }
    }
}
