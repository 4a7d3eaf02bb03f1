use simple_sprite::prelude::*;
use std::rc::Rc;

/// a single call made against the graphics context
#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetVertexBuffer {
        slot: usize,
        positions: Vec<f32>,
        tex_coords: Vec<f32>,
        colors: Vec<f32>,
        indices: Vec<u16>,
    },
    SetTexture {
        slot: usize,
        name: GLuint,
    },
    DrawArrays {
        mode: DrawMode,
        start: usize,
        count: usize,
    },
}

/// graphics context that records everything it is asked to do
#[derive(Default)]
struct RecordingContext {
    calls: Vec<Call>,
}

impl GraphicsContext for RecordingContext {
    fn set_vertex_buffer(&mut self, slot: usize, buffer: &VertexBuffer) {
        let stream = |i: usize| buffer.stream(i).unwrap_or_default().to_vec();
        self.calls.push(Call::SetVertexBuffer {
            slot,
            positions: stream(0),
            tex_coords: stream(1),
            colors: stream(2),
            indices: buffer.indices().to_vec(),
        });
    }

    fn set_texture(&mut self, slot: usize, texture: &Texture2D) {
        self.calls.push(Call::SetTexture {
            slot,
            name: texture.name(),
        });
    }

    fn draw_arrays(&mut self, mode: DrawMode, start: usize, count: usize) {
        self.calls.push(Call::DrawArrays { mode, start, count });
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sprite(width: u32, height: u32) -> Sprite {
    Sprite::new(Some(Rc::new(Texture2D::new(9, width, height)))).unwrap()
}

fn xy(corners: &[Vec3; 4]) -> Vec<(f32, f32)> {
    corners.iter().map(|c| (c.x, c.y)).collect()
}

#[test]
fn missing_texture() {
    init_logger();
    let err = Sprite::new(None).unwrap_err();
    assert_eq!(err, SpriteError::MissingTexture);
    assert!(err.to_string().contains("texture is absent"));
}

#[test]
fn size_comes_from_texture() {
    let sprite = sprite(64, 32);
    assert_eq!(sprite.width(), 64.0);
    assert_eq!(sprite.height(), 32.0);
}

#[test]
fn top_left_anchor_corners() {
    init_logger();
    let mut sprite = sprite(64, 32);
    let mut ctx = RecordingContext::default();
    sprite.render(&mut ctx);
    assert_eq!(
        xy(sprite.vertices()),
        vec![(0.0, 0.0), (0.0, 32.0), (64.0, 0.0), (64.0, 32.0)]
    );
}

#[test]
fn centered_anchor_corners() {
    let mut sprite = sprite(64, 32)
        .with_position(vec3(100.0, 50.0, 0.5))
        .with_center(vec2(0.5, 0.5));
    let mut ctx = RecordingContext::default();
    sprite.render(&mut ctx);
    assert_eq!(
        xy(sprite.vertices()),
        vec![(68.0, 34.0), (68.0, 66.0), (132.0, 34.0), (132.0, 66.0)]
    );
    assert!(sprite.vertices().iter().all(|v| v.z == 0.5));
    let sum = sprite.vertices().iter().fold(Vec3::zeros(), |acc, v| acc + v);
    assert_eq!(sum / 4.0, sprite.position);
}

#[test]
fn position_field_writes_apply_on_render() {
    let mut sprite = sprite(10, 10);
    let mut ctx = RecordingContext::default();
    sprite.position.x = 5.0;
    sprite.center.y = 1.0;
    sprite.render(&mut ctx);
    assert_eq!(
        xy(sprite.vertices()),
        vec![(5.0, -10.0), (5.0, 0.0), (15.0, -10.0), (15.0, 0.0)]
    );
}

#[test]
fn texture_coord_full_rect_is_default() {
    let mut sprite = sprite(64, 32);
    sprite.set_texture_coord(16.0, 8.0, 32.0, 16.0);
    sprite.set_texture_coord(0.0, 0.0, 64.0, 32.0);
    assert_eq!(sprite.texture_coords(), &FULL_TEXTURE_COORDS);
}

#[test]
fn texture_coord_sub_rect() {
    let mut sprite = sprite(64, 32);
    sprite.set_texture_coord(16.0, 8.0, 48.0, 24.0);
    assert_eq!(
        sprite.texture_coords(),
        &[
            vec2(0.25, 0.25),
            vec2(0.25, 0.75),
            vec2(0.75, 0.25),
            vec2(0.75, 0.75),
        ]
    );

    let mut other = self::sprite(64, 32);
    other.set_texture_coord_rect(vec2(16.0, 8.0), vec2(48.0, 24.0));
    assert_eq!(other.texture_coords(), sprite.texture_coords());
}

#[test]
fn texture_coord_out_of_range_passes_through() {
    let mut sprite = sprite(16, 16);
    sprite.set_texture_coord(-8.0, 0.0, 32.0, 16.0);
    assert_eq!(sprite.texture_coords()[0], vec2(-0.5, 0.0));
    assert_eq!(sprite.texture_coords()[3], vec2(2.0, 1.0));
}

#[test]
fn color_is_uploaded() {
    let mut sprite = sprite(8, 8);
    let mut ctx = RecordingContext::default();
    sprite.set_color(vec4(0.25, 0.5, 0.75, 1.0));
    sprite.render(&mut ctx);

    let expected: Vec<f32> = [0.25, 0.5, 0.75, 1.0].repeat(4);
    match &ctx.calls[0] {
        Call::SetVertexBuffer { colors, .. } => assert_eq!(colors, &expected),
        other => panic!("unexpected first call: {other:?}"),
    }
    assert_eq!(sprite.vertex_buffer().stream(2), Some(expected.as_slice()));
}

#[test]
fn render_call_sequence() {
    init_logger();
    let mut sprite = sprite(2, 4);
    let mut ctx = RecordingContext::default();
    sprite.render(&mut ctx);

    assert_eq!(
        ctx.calls,
        vec![
            Call::SetVertexBuffer {
                slot: 0,
                positions: vec![0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 2.0, 0.0, 0.0, 2.0, 4.0, 0.0],
                tex_coords: vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0],
                colors: vec![1.0; 16],
                indices: vec![0, 1, 2, 3],
            },
            Call::SetTexture { slot: 0, name: 9 },
            Call::DrawArrays {
                mode: DrawMode::TriangleStrip,
                start: 0,
                count: 4,
            },
        ]
    );
}

#[test]
fn render_is_idempotent() {
    let mut sprite = sprite(32, 32).with_center(vec2(0.5, 0.5));
    sprite.set_texture_coord(0.0, 0.0, 16.0, 16.0);
    let mut ctx = RecordingContext::default();
    sprite.render(&mut ctx);
    sprite.render(&mut ctx);
    assert_eq!(ctx.calls.len(), 6);
    assert_eq!(ctx.calls[..3], ctx.calls[3..]);
}

#[test]
fn render_through_trait_object() {
    let mut sprite = sprite(4, 4);
    let mut ctx = RecordingContext::default();
    let dyn_ctx: &mut dyn GraphicsContext = &mut ctx;
    sprite.render(dyn_ctx);
    assert_eq!(ctx.calls.len(), 3);
}

#[test]
fn size_is_constant() {
    let mut sprite = sprite(48, 24);
    let mut ctx = RecordingContext::default();
    for i in 0..5 {
        sprite.set_texture_coord(i as f32, 0.0, 8.0, 8.0);
        sprite.set_color32(Color32::RED);
        sprite.render(&mut ctx);
        assert_eq!((sprite.width(), sprite.height()), (48.0, 24.0));
    }
    assert_eq!(sprite.vertex_buffer().vertex_count(), 4);
    assert_eq!(sprite.vertex_buffer().index_count(), 4);
}
