use thiserror::Error;

/// errors produced while building sprites and talking to the graphics backend
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpriteError {
    /// the sprite was constructed without a texture
    #[error("invalid argument: sprite texture is absent")]
    MissingTexture,

    #[error("vertex stream {stream} is out of range, the buffer has {streams} streams")]
    StreamOutOfRange { stream: usize, streams: usize },

    #[error("vertex stream {stream} expects {expected} floats, got {actual}")]
    VertexCountMismatch {
        stream: usize,
        expected: usize,
        actual: usize,
    },

    #[error("index buffer expects {expected} indices, got {actual}")]
    IndexCountMismatch { expected: usize, actual: usize },

    /// raw pixel data does not cover the requested texture size
    #[error("a {width}x{height} RGBA texture needs {expected} bytes, got {actual}")]
    PixelDataMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("shader program linking failed: {0}")]
    ShaderLink(String),
}
