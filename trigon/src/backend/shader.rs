//! Shader backend.

use crate::shader::{ProgramError, StageError, StageType};

/// Shader stages and programs.
///
/// # Safety
///
/// Stage and program representations must only be used with the backend that created them.
pub unsafe trait Shader {
  /// Backend representation of a compiled shader stage.
  type StageRepr;

  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Create and compile a new shader stage from its source.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Release a shader stage.
  unsafe fn destroy_stage(stage: &mut Self::StageRepr);

  /// Create a program and link a vertex stage and a fragment stage into it.
  ///
  /// The stages can be destroyed as soon as this function returns.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Device identifier of a program; never zero.
  unsafe fn program_handle(program: &Self::ProgramRepr) -> u32;

  /// Make a program the current one for subsequent draw calls.
  unsafe fn use_program(&mut self, program: &Self::ProgramRepr);

  /// Release a program.
  unsafe fn destroy_program(program: &mut Self::ProgramRepr);
}
