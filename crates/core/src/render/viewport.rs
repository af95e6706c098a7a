//! Applies a computed [`CanvasLayout`] to the GL viewport.

use crate::layout::CanvasLayout;

/// Sets the GL viewport to the layout's backing-store rectangle.
#[allow(unsafe_code)]
pub fn apply_viewport(gl: &glow::Context, layout: &CanvasLayout) {
    use glow::HasContext;

    let vp = layout.viewport;
    // SAFETY: viewport takes plain integers; negative sizes are impossible
    // because CanvasLayout clamps them at zero.
    unsafe { gl.viewport(vp.x, vp.y, vp.width, vp.height) };
    tracing::trace!(width = vp.width, height = vp.height, "viewport updated");
}
