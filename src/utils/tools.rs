use crate::glm;

/// Copies a fixed array of glm vectors into one flat float array, component by component.
pub fn flatten<const D: usize, const N: usize>(vectors: &[glm::TVec<f32, D>; N]) -> Vec<f32> {
    vectors.iter().flat_map(|v| v.iter().copied()).collect()
}

/// Orthographic projection for pixel coordinates with the origin in the top left corner and y pointing down.
pub fn screen_projection(width: f32, height: f32) -> glm::Mat4 {
    glm::ortho(0.0, width, height, 0.0, -1.0, 1.0)
}
