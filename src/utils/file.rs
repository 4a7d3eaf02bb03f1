// directory paths
macro_rules! sprite_shader_path {
    ($file:literal) => {
        concat!(
            concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shaders/sprite/"),
            $file
        )
    };
}

// shader files
pub(crate) const SPRITE_VERT: &str = include_str!(sprite_shader_path!("sprite.vert"));
pub(crate) const SPRITE_FRAG: &str = include_str!(sprite_shader_path!("sprite.frag"));
