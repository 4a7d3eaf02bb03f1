use crate::error::SpriteError;
use gl::types::*;

/// a 2D texture with fixed pixel dimensions
#[derive(Debug, PartialEq, Eq)]
pub struct Texture2D {
    name: GLuint,
    width: u32,
    height: u32,
    owned: bool,
}

impl Texture2D {
    /// wraps an existing texture name, the texture is not deleted when this is dropped
    pub fn new(name: GLuint, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
            owned: false,
        }
    }

    /// takes ownership of a texture name created by this crate
    pub(crate) fn owned(name: GLuint, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
            owned: true,
        }
    }

    /// the backend texture name
    pub fn name(&self) -> GLuint {
        self.name
    }

    /// width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        if self.owned {
            log::debug!("deleted texture {}", self.name);
            unsafe { gl::DeleteTextures(1, &self.name) };
        }
    }
}

/// float layout of one vertex attribute stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    Float,
    Float2,
    Float3,
    Float4,
}

impl VertexFormat {
    /// number of floats per vertex
    pub const fn components(self) -> usize {
        match self {
            VertexFormat::Float => 1,
            VertexFormat::Float2 => 2,
            VertexFormat::Float3 => 3,
            VertexFormat::Float4 => 4,
        }
    }
}

/// CPU side vertex data split into one float stream per attribute plus an index list
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    vertex_count: usize,
    index_count: usize,
    formats: Vec<VertexFormat>,
    streams: Vec<Vec<f32>>,
    indices: Vec<u16>,
}

impl VertexBuffer {
    /// creates a zeroed buffer with one stream per format
    pub fn new(vertex_count: usize, index_count: usize, formats: &[VertexFormat]) -> Self {
        let streams = formats
            .iter()
            .map(|format| vec![0.0; vertex_count * format.components()])
            .collect();
        log::debug!(
            "new vertex buffer created: {vertex_count} vertices, {index_count} indices, formats {formats:?}"
        );

        Self {
            vertex_count,
            index_count,
            formats: formats.to_vec(),
            streams,
            indices: vec![0; index_count],
        }
    }

    /// replaces the data of one attribute stream
    pub fn set_vertices(&mut self, stream: usize, vertices: &[f32]) -> Result<(), SpriteError> {
        let format = self
            .formats
            .get(stream)
            .ok_or(SpriteError::StreamOutOfRange {
                stream,
                streams: self.formats.len(),
            })?;
        let expected = self.vertex_count * format.components();
        if vertices.len() != expected {
            return Err(SpriteError::VertexCountMismatch {
                stream,
                expected,
                actual: vertices.len(),
            });
        }
        self.streams[stream].copy_from_slice(vertices);
        Ok(())
    }

    /// replaces the index list
    pub fn set_indices(&mut self, indices: &[u16]) -> Result<(), SpriteError> {
        if indices.len() != self.index_count {
            return Err(SpriteError::IndexCountMismatch {
                expected: self.index_count,
                actual: indices.len(),
            });
        }
        self.indices.copy_from_slice(indices);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn formats(&self) -> &[VertexFormat] {
        &self.formats
    }

    /// the float data of one stream if it exists
    pub fn stream(&self, stream: usize) -> Option<&[f32]> {
        self.streams.get(stream).map(Vec::as_slice)
    }

    pub fn streams(&self) -> &[Vec<f32>] {
        &self.streams
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }
}
