use crate::error::SpriteError;
use crate::rendering::data::{Texture2D, VertexBuffer};
use crate::rendering::graphics::{DrawMode, GraphicsContext};
use gl::types::*;
use std::ptr;

/// OpenGL backend for the graphics context
///
/// Requires loaded gl function pointers and a current GL context for its whole lifetime.
pub struct GlContext {
    vao: GLuint,
    ibo: GLuint,
    stream_buffers: Vec<GLuint>,
    index_count: usize,
}

impl GlContext {
    /// creates the vertex array and index buffer used for all draws
    pub fn new() -> Self {
        let mut vao = 0;
        let mut ibo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut ibo);
        }
        log::debug!("new gl context created");

        Self {
            vao,
            ibo,
            stream_buffers: Vec::new(),
            index_count: 0,
        }
    }

    /// Creates a texture from raw RGBA8 pixel data.
    pub fn upload_texture(
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<Texture2D, SpriteError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SpriteError::PixelDataMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        let mut tex_id = 0;
        unsafe {
            gl::GenTextures(1, &mut tex_id);
            gl::BindTexture(gl::TEXTURE_2D, tex_id);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                rgba.as_ptr() as *const GLvoid,
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }
        log::debug!("uploaded texture {tex_id} ({width}x{height})");

        Ok(Texture2D::owned(tex_id, width, height))
    }

    /// makes sure there is one gl buffer per attribute stream
    fn reserve_stream_buffers(&mut self, count: usize) {
        while self.stream_buffers.len() < count {
            let mut vbo = 0;
            unsafe { gl::GenBuffers(1, &mut vbo) };
            self.stream_buffers.push(vbo);
        }
    }
}

impl Default for GlContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext for GlContext {
    fn set_vertex_buffer(&mut self, slot: usize, buffer: &VertexBuffer) {
        if slot != 0 {
            log::warn!("vertex buffer slot {slot} is not supported, only slot 0 is");
            return;
        }
        self.reserve_stream_buffers(buffer.formats().len());
        unsafe {
            gl::BindVertexArray(self.vao);
            for (location, ((format, data), vbo)) in buffer
                .formats()
                .iter()
                .zip(buffer.streams())
                .zip(&self.stream_buffers)
                .enumerate()
            {
                gl::BindBuffer(gl::ARRAY_BUFFER, *vbo);
                gl::BufferData(
                    gl::ARRAY_BUFFER,
                    size_of_val(data.as_slice()) as GLsizeiptr,
                    data.as_ptr() as *const GLvoid,
                    gl::DYNAMIC_DRAW,
                );
                gl::EnableVertexAttribArray(location as GLuint);
                gl::VertexAttribPointer(
                    location as GLuint,
                    format.components() as GLint,
                    gl::FLOAT,
                    gl::FALSE,
                    0,
                    ptr::null(),
                );
            }
            // the element buffer binding is stored in the vertex array
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.ibo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                size_of_val(buffer.indices()) as GLsizeiptr,
                buffer.indices().as_ptr() as *const GLvoid,
                gl::DYNAMIC_DRAW,
            );
            gl::BindVertexArray(0);
        }
        self.index_count = buffer.index_count();
    }

    fn set_texture(&mut self, slot: usize, texture: &Texture2D) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + slot as GLenum);
            gl::BindTexture(gl::TEXTURE_2D, texture.name());
        }
    }

    fn draw_arrays(&mut self, mode: DrawMode, start: usize, count: usize) {
        unsafe {
            gl::BindVertexArray(self.vao);
            if self.index_count > 0 {
                // draw through the index list like the bound buffer describes it
                gl::DrawElements(
                    gl_draw_mode(mode),
                    count as GLsizei,
                    gl::UNSIGNED_SHORT,
                    (start * size_of::<u16>()) as *const GLvoid,
                );
            } else {
                gl::DrawArrays(gl_draw_mode(mode), start as GLint, count as GLsizei);
            }
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        log::debug!("dropped gl context");
        unsafe {
            gl::DeleteBuffers(self.stream_buffers.len() as GLsizei, self.stream_buffers.as_ptr());
            gl::DeleteBuffers(1, &self.ibo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

/// maps the draw mode to the gl primitive enum
fn gl_draw_mode(mode: DrawMode) -> GLenum {
    match mode {
        DrawMode::Points => gl::POINTS,
        DrawMode::Lines => gl::LINES,
        DrawMode::LineStrip => gl::LINE_STRIP,
        DrawMode::Triangles => gl::TRIANGLES,
        DrawMode::TriangleStrip => gl::TRIANGLE_STRIP,
        DrawMode::TriangleFan => gl::TRIANGLE_FAN,
    }
}
