//! Fullscreen backdrop shaders.
//!
//! The vertex shader emits a single oversized triangle from `gl_VertexID`
//! (no vertex buffer). The fragment shader samples a background texture on
//! unit 0 and multiplies its alpha by the mask's red channel on unit 1.

/// GLSL ES 3.0 vertex shader for a fullscreen triangle.
///
/// Draw with `draw_arrays(TRIANGLES, 0, 3)` and an empty VAO bound.
pub const FULLSCREEN_VERTEX_SHADER: &str = r#"#version 300 es
out vec2 v_uv;
void main() {
    v_uv = vec2((gl_VertexID << 1) & 2, gl_VertexID & 2);
    gl_Position = vec4(v_uv * 2.0 - 1.0, 0.0, 1.0);
}
"#;

/// GLSL ES 3.0 fragment shader compositing the background through the mask.
pub const BACKDROP_FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
in vec2 v_uv;
uniform sampler2D u_background;
uniform sampler2D u_mask;
out vec4 out_color;
void main() {
    vec4 color = texture(u_background, v_uv);
    float mask = texture(u_mask, v_uv).r;
    out_color = vec4(color.rgb, color.a * mask);
}
"#;

/// Sampler uniform bound to the background texture unit.
pub const BACKGROUND_UNIFORM: &str = "u_background";
/// Sampler uniform bound to the mask texture unit.
pub const MASK_UNIFORM: &str = "u_mask";

/// Texture unit holding the background image.
pub const BACKGROUND_UNIT: u32 = 0;
/// Texture unit holding the mask.
pub const MASK_UNIT: u32 = 1;
