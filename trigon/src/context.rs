//! Graphics context.
//!
//! A graphics context is an object that abstracts all the low-level operations that happen on a
//! graphics device (it can be a GPU or a software implementation, for instance).
//!
//! This crate doesn’t provide you with creating such contexts. Instead, you must do it yourself
//! or rely on crates doing it for you, such as `trigon-glfw`.
//!
//! # On context and threads
//!
//!   - An object which type implements `GraphicsContext` must be `!Send` and `!Sync`. This enforces
//!     that it cannot be moved nor shared between threads.
//!   - You can only create a single context per thread.

use crate::backend::pipeline::Pipeline as PipelineBackend;
use crate::backend::shader::Shader;
use crate::backend::tess::Tess as TessBackend;
use crate::pipeline::PipelineGate;
use crate::shader::ProgramBuilder;
use crate::tess::TessBuilder;

/// Class of graphics context.
///
/// Such a context must not be Send nor Sync, which means that you cannot share it between
/// threads in any way (move / borrow).
///
/// # Safety
///
/// Implementors must ensure that the backend they return is bound to a graphics context that is
/// current on the calling thread.
pub unsafe trait GraphicsContext: Sized {
  /// Backend type implementing the actual operations.
  type Backend;

  /// Access the underlying backend.
  fn backend(&mut self) -> &mut Self::Backend;

  /// Create a new shader program builder.
  fn new_shader_program(&mut self) -> ProgramBuilder<'_, Self>
  where
    Self::Backend: Shader,
  {
    ProgramBuilder::new(self)
  }

  /// Create a new tessellation builder.
  fn new_tess(&mut self) -> TessBuilder<'_, Self>
  where
    Self::Backend: TessBackend,
  {
    TessBuilder::new(self)
  }

  /// Create a new pipeline gate.
  fn pipeline_gate(&mut self) -> PipelineGate<'_, Self>
  where
    Self::Backend: PipelineBackend,
  {
    PipelineGate::new(self)
  }
}
