pub mod data;
pub mod gl_context;
pub mod graphics;
pub mod shader;
pub mod sprite;
