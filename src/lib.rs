pub mod error;
pub mod rendering;
pub mod utils;

pub use env_logger;
pub use log;
pub use nalgebra_glm as glm;

/// All features that are very common to use.
pub mod prelude {
    pub use crate::error::SpriteError;
    pub use crate::glm;
    pub use crate::glm::vec2;
    pub use crate::glm::vec3;
    pub use crate::glm::vec4;
    pub use crate::glm::Vec2;
    pub use crate::glm::Vec3;
    pub use crate::glm::Vec4;
    pub use crate::log;
    pub use crate::rendering::data::{Texture2D, VertexBuffer, VertexFormat};
    pub use crate::rendering::gl_context::GlContext;
    pub use crate::rendering::graphics::{DrawMode, GraphicsContext};
    pub use crate::rendering::shader::SpriteShader;
    pub use crate::rendering::sprite::Sprite;
    pub use crate::utils::color::Color32;
    pub use crate::utils::constants::*;
    pub use crate::utils::tools::screen_projection;
    pub use gl::types::*;
}
