use crate::error::SpriteError;
use crate::glm;
use crate::rendering::data::{Texture2D, VertexBuffer};
use crate::rendering::graphics::{DrawMode, GraphicsContext};
use crate::utils::color::Color32;
use crate::utils::constants::*;
use crate::utils::tools::flatten;
use std::rc::Rc;

/// A single textured quad drawn as a four vertex triangle strip.
///
/// The sprite owns its vertex buffer and shares the texture with the caller. Width and height are
/// taken from the texture once on construction. Vertices are kept in strip order: left-top,
/// left-bottom, right-top, right-bottom.
#[derive(Debug)]
pub struct Sprite {
    /// display position of the anchor point
    pub position: glm::Vec3,
    /// anchor point as a fraction of the sprite size, ``(0.5, 0.5)`` is the middle
    pub center: glm::Vec2,
    width: f32,
    height: f32,
    vertices: [glm::Vec3; SPRITE_VERTEX_COUNT],
    tex_coords: [glm::Vec2; SPRITE_VERTEX_COUNT],
    colors: [glm::Vec4; SPRITE_VERTEX_COUNT],
    vertex_buffer: VertexBuffer,
    texture: Rc<Texture2D>,
}

impl Sprite {
    /// creates a new sprite, fails if no texture is given
    pub fn new(texture: Option<Rc<Texture2D>>) -> Result<Self, SpriteError> {
        let texture = texture.ok_or(SpriteError::MissingTexture)?;
        Ok(Self::from_texture(texture))
    }

    /// creates a new sprite for a texture that is known to be present
    pub fn from_texture(texture: Rc<Texture2D>) -> Self {
        let mut vertex_buffer = VertexBuffer::new(
            SPRITE_VERTEX_COUNT,
            SPRITE_INDEX_COUNT,
            &SPRITE_VERTEX_FORMATS,
        );
        let res = vertex_buffer.set_indices(&SPRITE_INDICES);
        debug_assert!(res.is_ok());
        log::debug!(
            "new sprite created for texture {} ({}x{})",
            texture.name(),
            texture.width(),
            texture.height()
        );

        Self {
            position: ORIGIN,
            center: glm::vec2(0.0, 0.0),
            width: texture.width() as f32,
            height: texture.height() as f32,
            vertices: [ORIGIN; SPRITE_VERTEX_COUNT],
            tex_coords: FULL_TEXTURE_COORDS,
            colors: [DEFAULT_SPRITE_COLOR; SPRITE_VERTEX_COUNT],
            vertex_buffer,
            texture,
        }
    }

    /// changes the display position
    pub fn with_position(mut self, position: glm::Vec3) -> Self {
        self.position = position;
        self
    }

    /// changes the anchor point (should be in [0, 1] on both axes)
    pub fn with_center(mut self, center: glm::Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn texture(&self) -> &Rc<Texture2D> {
        &self.texture
    }

    /// corner positions written by the last render
    pub fn vertices(&self) -> &[glm::Vec3; SPRITE_VERTEX_COUNT] {
        &self.vertices
    }

    pub fn texture_coords(&self) -> &[glm::Vec2; SPRITE_VERTEX_COUNT] {
        &self.tex_coords
    }

    pub fn colors(&self) -> &[glm::Vec4; SPRITE_VERTEX_COUNT] {
        &self.colors
    }

    pub fn vertex_buffer(&self) -> &VertexBuffer {
        &self.vertex_buffer
    }

    /// sets the same rgba color on all four vertices
    pub fn set_color(&mut self, color: glm::Vec4) {
        self.colors = [color; SPRITE_VERTEX_COUNT];
    }

    /// sets the vertex color from an 8bit color
    pub fn set_color32(&mut self, color: Color32) {
        self.set_color(color.to_vec4());
    }

    /// Sets the texture sub-rectangle in pixels. Values outside the texture are not clamped.
    pub fn set_texture_coord(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let (u0, v0) = (x0 / self.width, y0 / self.height);
        let (u1, v1) = (x1 / self.width, y1 / self.height);
        self.tex_coords = [
            glm::vec2(u0, v0),
            glm::vec2(u0, v1),
            glm::vec2(u1, v0),
            glm::vec2(u1, v1),
        ];
    }

    /// Sets the texture sub-rectangle in pixels from its top left and bottom right corners.
    pub fn set_texture_coord_rect(&mut self, top_left: glm::Vec2, bottom_right: glm::Vec2) {
        self.set_texture_coord(top_left.x, top_left.y, bottom_right.x, bottom_right.y);
    }

    /// computes the four corner positions from position, center and size
    pub fn corners(&self) -> [glm::Vec3; SPRITE_VERTEX_COUNT] {
        let left = self.position.x - self.width * self.center.x;
        let right = self.position.x + self.width * (1.0 - self.center.x);
        let top = self.position.y - self.height * self.center.y;
        let bottom = self.position.y + self.height * (1.0 - self.center.y);
        let z = self.position.z;

        [
            glm::vec3(left, top, z),
            glm::vec3(left, bottom, z),
            glm::vec3(right, top, z),
            glm::vec3(right, bottom, z),
        ]
    }

    /// Draws the sprite.
    ///
    /// A shader program matching the sprite layout (position, texcoord, color) has to be bound
    /// before this is called. Slot 0 of the vertex buffer and texture bindings is overwritten.
    pub fn render<G: GraphicsContext + ?Sized>(&mut self, graphics: &mut G) {
        self.vertices = self.corners();
        if let Err(err) = self.upload() {
            log::error!("sprite vertex upload failed: {err}");
            return;
        }
        graphics.set_vertex_buffer(0, &self.vertex_buffer);
        graphics.set_texture(0, &self.texture);
        graphics.draw_arrays(DrawMode::TriangleStrip, 0, SPRITE_INDEX_COUNT);
    }

    /// copies all vertex streams and the index list into the vertex buffer
    fn upload(&mut self) -> Result<(), SpriteError> {
        self.vertex_buffer
            .set_vertices(POSITION_STREAM, &flatten(&self.vertices))?;
        self.vertex_buffer
            .set_vertices(TEX_COORD_STREAM, &flatten(&self.tex_coords))?;
        self.vertex_buffer
            .set_vertices(COLOR_STREAM, &flatten(&self.colors))?;
        self.vertex_buffer.set_indices(&SPRITE_INDICES)
    }
}

impl Drop for Sprite {
    fn drop(&mut self) {
        log::debug!("dropped sprite for texture {}", self.texture.name());
    }
}
