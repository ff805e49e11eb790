use crate::gl33::state::GLState;
use crate::gl33::GL33;
use gl::types::*;
use std::{
  cell::RefCell,
  ffi::CString,
  ptr::{null, null_mut},
  rc::Rc,
};
use trigon::{
  backend::shader::Shader,
  shader::{ProgramError, StageError, StageType},
};

/// OpenGL shader stage.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
}

/// OpenGL shader program.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
  state: Rc<RefCell<GLState>>,
}

impl Program {
  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        let mut log_len: GLint = 0;
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
        gl::GetProgramInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

        Err(ProgramError::link_failed(info_log_to_string(log)))
      }
    }
  }
}

unsafe impl Shader for GL33 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let c_src = CString::new(src.as_bytes())
      .map_err(|_| StageError::compilation_failed(ty, "source contains a nul byte"))?;

    let handle = gl::CreateShader(opengl_shader_type(ty));

    if handle == 0 {
      return Err(StageError::CreationFailed(ty));
    }

    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled: GLint = gl::FALSE.into();
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == gl::TRUE.into() {
      Ok(Stage { handle })
    } else {
      let mut log_len: GLint = 0;
      gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

      let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
      gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

      gl::DeleteShader(handle);

      Err(StageError::compilation_failed(ty, info_log_to_string(log)))
    }
  }

  unsafe fn destroy_stage(stage: &mut Self::StageRepr) {
    gl::DeleteShader(stage.handle);
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = gl::CreateProgram();

    if handle == 0 {
      return Err(ProgramError::link_failed("unable to create shader program"));
    }

    gl::AttachShader(handle, vertex.handle);
    gl::AttachShader(handle, fragment.handle);

    let program = Program {
      handle,
      state: self.state.clone(),
    };

    let linked = program.link();

    // stages are reference-counted by the program; detaching lets them go as soon as they are
    // deleted
    gl::DetachShader(handle, vertex.handle);
    gl::DetachShader(handle, fragment.handle);

    match linked {
      Ok(()) => Ok(program),
      Err(e) => {
        gl::DeleteProgram(handle);
        Err(e)
      }
    }
  }

  unsafe fn program_handle(program: &Self::ProgramRepr) -> u32 {
    program.handle
  }

  unsafe fn use_program(&mut self, program: &Self::ProgramRepr) {
    self.state.borrow_mut().use_program(program.handle);
  }

  unsafe fn destroy_program(program: &mut Self::ProgramRepr) {
    program.state.borrow_mut().unuse_program(program.handle);
    gl::DeleteProgram(program.handle);
  }
}

fn opengl_shader_type(t: StageType) -> GLenum {
  match t {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

// info logs are nul-terminated and may contain driver-specific garbage
fn info_log_to_string(mut log: Vec<u8>) -> String {
  if let Some(nul) = log.iter().position(|&b| b == 0) {
    log.truncate(nul);
  }

  String::from_utf8_lossy(&log).trim_end().to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shader_types() {
    assert_eq!(
      opengl_shader_type(StageType::VertexShader),
      gl::VERTEX_SHADER
    );
    assert_eq!(
      opengl_shader_type(StageType::FragmentShader),
      gl::FRAGMENT_SHADER
    );
  }

  #[test]
  fn info_log_stops_at_nul() {
    let log = b"0:2(1): error: syntax error\n\0\0garbage".to_vec();
    assert_eq!(info_log_to_string(log), "0:2(1): error: syntax error");
  }

  #[test]
  fn empty_info_log() {
    assert_eq!(info_log_to_string(Vec::new()), "");
  }
}
