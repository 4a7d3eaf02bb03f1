use crate::error::SpriteError;
use crate::glm;
use crate::utils::file::{SPRITE_FRAG, SPRITE_VERT};
use gl::types::*;
use std::ffi::{CStr, CString};
use std::ptr;

/// shader program matching the sprite vertex layout (0: position, 1: texcoord, 2: color)
pub struct SpriteShader {
    pub id: GLuint,
    projection_location: GLint,
}

impl SpriteShader {
    /// compiles and links the built-in sprite shader
    pub fn new() -> Result<Self, SpriteError> {
        let vs = compile_shader(SPRITE_VERT, gl::VERTEX_SHADER)?;
        let fs = match compile_shader(SPRITE_FRAG, gl::FRAGMENT_SHADER) {
            Ok(fs) => fs,
            Err(err) => {
                unsafe { gl::DeleteShader(vs) };
                return Err(err);
            }
        };
        let id = link_program(vs, fs)?;

        let projection_location = unif_location(id, c"projection");
        let sampler_location = unif_location(id, c"sprite_texture");
        unsafe {
            gl::UseProgram(id);
            // sprites always sample from texture unit 0
            gl::Uniform1i(sampler_location, 0);
            gl::UseProgram(0);
        }
        log::debug!("sprite shader program {id} linked");

        Ok(Self {
            id,
            projection_location,
        })
    }

    /// makes this program current
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    /// uploads the projection matrix, the program has to be bound
    pub fn set_projection(&self, projection: &glm::Mat4) {
        unsafe {
            gl::UniformMatrix4fv(
                self.projection_location,
                1,
                gl::FALSE,
                projection.as_ptr(),
            );
        }
    }
}

impl Drop for SpriteShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// gets an uniform location
fn unif_location(program: GLuint, name: &CStr) -> GLint {
    unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
}

/// compiles a gl shader
fn compile_shader(src: &str, ty: GLenum) -> Result<GLuint, SpriteError> {
    let c_str = CString::new(src.as_bytes())
        .map_err(|_| SpriteError::ShaderCompile("shader source contains a nul byte".into()))?;
    unsafe {
        let shader = gl::CreateShader(ty);
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        // Get the compile status
        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            gl::GetShaderInfoLog(
                shader,
                len,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
            gl::DeleteShader(shader);
            let info = info_log_to_string(&buf);
            log::error!("shader compilation failed: {info}");
            return Err(SpriteError::ShaderCompile(info));
        }
        Ok(shader)
    }
}

/// links a gl shader program
fn link_program(vs: GLuint, fs: GLuint) -> Result<GLuint, SpriteError> {
    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        gl::DetachShader(program, fs);
        gl::DetachShader(program, vs);
        gl::DeleteShader(fs);
        gl::DeleteShader(vs);

        // Get the link status
        let mut status = gl::FALSE as GLint;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        if status != (gl::TRUE as GLint) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            gl::GetProgramInfoLog(
                program,
                len,
                ptr::null_mut(),
                buf.as_mut_ptr() as *mut GLchar,
            );
            gl::DeleteProgram(program);
            let info = info_log_to_string(&buf);
            log::error!("shader program linking failed: {info}");
            return Err(SpriteError::ShaderLink(info));
        }
        Ok(program)
    }
}

/// strips the trailing null characters of a gl info log
fn info_log_to_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches('\0')
        .trim_end()
        .to_string()
}
