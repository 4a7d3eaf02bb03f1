use crate::glm;
use crate::rendering::data::VertexFormat;

/// a sprite is always a single quad
pub const SPRITE_VERTEX_COUNT: usize = 4;
pub const SPRITE_INDEX_COUNT: usize = 4;

/// strip order: left-top, left-bottom, right-top, right-bottom
pub const SPRITE_INDICES: [u16; SPRITE_INDEX_COUNT] = [0, 1, 2, 3];

/// attribute layout of the sprite vertex buffer (position, texcoord, color)
pub const SPRITE_VERTEX_FORMATS: [VertexFormat; 3] = [
    VertexFormat::Float3,
    VertexFormat::Float2,
    VertexFormat::Float4,
];

pub(crate) const POSITION_STREAM: usize = 0;
pub(crate) const TEX_COORD_STREAM: usize = 1;
pub(crate) const COLOR_STREAM: usize = 2;

/// texture coordinates covering the whole texture in strip order
pub const FULL_TEXTURE_COORDS: [glm::Vec2; SPRITE_VERTEX_COUNT] = [
    glm::Vec2::new(0.0, 0.0),
    glm::Vec2::new(0.0, 1.0),
    glm::Vec2::new(1.0, 0.0),
    glm::Vec2::new(1.0, 1.0),
];

/// opaque white, the default vertex tint
pub const DEFAULT_SPRITE_COLOR: glm::Vec4 = glm::Vec4::new(1.0, 1.0, 1.0, 1.0);

pub const ORIGIN: glm::Vec3 = glm::Vec3::new(0.0, 0.0, 0.0);
