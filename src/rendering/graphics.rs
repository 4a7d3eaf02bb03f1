use crate::rendering::data::{Texture2D, VertexBuffer};

/// primitive topology of a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// slot based binding and draw interface of a graphics backend
///
/// Implementations are expected to have a shader program bound by the caller before anything is drawn.
pub trait GraphicsContext {
    /// binds the vertex buffer to the given slot
    fn set_vertex_buffer(&mut self, slot: usize, buffer: &VertexBuffer);

    /// binds the texture to the given texture unit
    fn set_texture(&mut self, slot: usize, texture: &Texture2D);

    /// draws ``count`` vertices of the bound buffer starting at ``start``
    fn draw_arrays(&mut self, mode: DrawMode, start: usize, count: usize);
}
