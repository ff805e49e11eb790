//! Shader sources, stages and programs.
//!
//! A shader program is made of two stages: a vertex stage, run once per vertex, and a fragment
//! stage, run once per rasterized fragment. Each stage is compiled on its own from a source
//! ([`ShaderSource`]) and both are then linked together into a [`Program`], which is the object you
//! activate before drawing.
//!
//! Programs are built with a [`ProgramBuilder`], which you get from
//! [`GraphicsContext::new_shader_program`]. The builder accepts literal strings, [`ShaderSource`]
//! values or paths to source files:
//!
//! ```ignore
//! let program = ctx
//!   .new_shader_program()
//!   .from_files("shaders/triangle.vert", "shaders/triangle.frag")?;
//!
//! program.activate(&mut ctx);
//! // draw things
//! program.delete();
//! ```
//!
//! The intermediate stages are released as soon as the program is linked, whether linking
//! succeeded or not. The program itself is released when deleted or dropped.
//!
//! [`GraphicsContext::new_shader_program`]: crate::context::GraphicsContext::new_shader_program

use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::shader::Shader;
use crate::context::GraphicsContext;

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that can occur while getting a shader source from a file.
#[non_exhaustive]
#[derive(Debug)]
pub enum SourceError {
  /// The file doesn’t exist.
  NotFound(PathBuf),
  /// The file exists but cannot be read.
  Unreadable(PathBuf, io::Error),
  /// The file content is not valid UTF-8.
  NotUtf8(PathBuf),
}

impl SourceError {
  /// Path of the file that caused the error.
  pub fn path(&self) -> &Path {
    match *self {
      SourceError::NotFound(ref path)
      | SourceError::Unreadable(ref path, _)
      | SourceError::NotUtf8(ref path) => path,
    }
  }
}

impl fmt::Display for SourceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      SourceError::NotFound(ref path) => write!(f, "shader source not found: {}", path.display()),

      SourceError::Unreadable(ref path, ref e) => {
        write!(f, "cannot read shader source {}: {}", path.display(), e)
      }

      SourceError::NotUtf8(ref path) => {
        write!(f, "shader source {} is not valid UTF-8", path.display())
      }
    }
  }
}

impl error::Error for SourceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      SourceError::Unreadable(_, e) => Some(e),
      _ => None,
    }
  }
}

/// Errors that shader stages can emit.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// The backend couldn’t allocate the stage.
  CreationFailed(StageType),
  /// Occurs when a shader fails to compile. The `String` holds the compilation log.
  CompilationFailed(StageType, String),
  /// The source is empty (or only made of whitespace).
  EmptySource(StageType),
}

impl StageError {
  /// Create a compilation error.
  pub fn compilation_failed(ty: StageType, reason: impl Into<String>) -> Self {
    StageError::CompilationFailed(ty, reason.into())
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CreationFailed(ty) => write!(f, "cannot create {}", ty),

      StageError::CompilationFailed(ty, ref r) => write!(f, "{} compilation error: {}", ty, r),

      StageError::EmptySource(ty) => write!(f, "empty {} source", ty),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[non_exhaustive]
#[derive(Debug)]
pub enum ProgramError {
  /// A shader source couldn’t be obtained.
  Source(SourceError),
  /// A shader stage failed to compile.
  StageError(StageError),
  /// A stage was given in a slot meant for another stage type.
  StageMismatch {
    /// Stage type the slot expects.
    expected: StageType,
    /// Stage type that was given.
    found: StageType,
  },
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
}

impl ProgramError {
  /// Create a link error.
  pub fn link_failed(reason: impl Into<String>) -> Self {
    ProgramError::LinkFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::Source(ref e) => write!(f, "shader program source error: {}", e),

      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),

      ProgramError::StageMismatch { expected, found } => {
        write!(f, "shader program expected a {}, found a {}", expected, found)
      }

      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::Source(e) => Some(e),
      ProgramError::StageError(e) => Some(e),
      _ => None,
    }
  }
}

impl From<SourceError> for ProgramError {
  fn from(e: SourceError) -> Self {
    ProgramError::Source(e)
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

/// Source code of a single shader stage.
///
/// Immutable once obtained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShaderSource {
  ty: StageType,
  path: Option<PathBuf>,
  code: String,
}

impl ShaderSource {
  /// Wrap a literal source.
  pub fn new(ty: StageType, code: impl Into<String>) -> Self {
    ShaderSource {
      ty,
      path: None,
      code: code.into(),
    }
  }

  /// Read a source from a file.
  ///
  /// The whole file is read as raw bytes, which must then be valid UTF-8.
  pub fn from_file(ty: StageType, path: impl AsRef<Path>) -> Result<Self, SourceError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| match e.kind() {
      io::ErrorKind::NotFound => SourceError::NotFound(path.to_owned()),
      _ => SourceError::Unreadable(path.to_owned(), e),
    })?;
    let code = String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8(path.to_owned()))?;

    log::debug!(
      "loaded {} source from {} ({} bytes)",
      ty,
      path.display(),
      code.len()
    );

    Ok(ShaderSource {
      ty,
      path: Some(path.to_owned()),
      code,
    })
  }

  /// Stage this source is written for.
  pub fn stage_type(&self) -> StageType {
    self.ty
  }

  /// File the source was read from, if any.
  pub fn path(&self) -> Option<&Path> {
    self.path.as_deref()
  }

  /// Source code.
  pub fn code(&self) -> &str {
    &self.code
  }
}

/// A compiled shader stage.
///
/// Stages only exist to be linked into programs; they are released when dropped.
pub struct Stage<S>
where
  S: Shader,
{
  repr: S::StageRepr,
  ty: StageType,
}

impl<S> Stage<S>
where
  S: Shader,
{
  /// Compile a new stage.
  pub fn new<C, R>(ctx: &mut C, ty: StageType, src: R) -> Result<Self, StageError>
  where
    C: GraphicsContext<Backend = S>,
    R: AsRef<str>,
  {
    let src = src.as_ref();

    if src.trim().is_empty() {
      return Err(StageError::EmptySource(ty));
    }

    let repr = unsafe { ctx.backend().new_stage(ty, src)? };
    log::debug!("compiled {}", ty);

    Ok(Stage { repr, ty })
  }

  /// Type of this stage.
  pub fn stage_type(&self) -> StageType {
    self.ty
  }
}

impl<S> Drop for Stage<S>
where
  S: Shader,
{
  fn drop(&mut self) {
    unsafe { S::destroy_stage(&mut self.repr) }
  }
}

/// A linked shader program.
///
/// A program is valid from the moment it’s built until it’s deleted (or dropped). Deleting
/// consumes the program, so it cannot be used afterwards.
pub struct Program<S>
where
  S: Shader,
{
  repr: S::ProgramRepr,
}

impl<S> Program<S>
where
  S: Shader,
{
  /// Opaque device identifier of the program.
  ///
  /// Two programs alive at the same time never share a handle.
  pub fn handle(&self) -> u32 {
    unsafe { S::program_handle(&self.repr) }
  }

  /// Make this program the current one for the next draw calls.
  pub fn activate<C>(&self, ctx: &mut C)
  where
    C: GraphicsContext<Backend = S>,
  {
    unsafe { ctx.backend().use_program(&self.repr) }
  }

  /// Release the program.
  pub fn delete(self) {
    log::debug!("deleting shader program {}", self.handle());
  }

  pub(crate) fn repr(&self) -> &S::ProgramRepr {
    &self.repr
  }
}

impl<S> Drop for Program<S>
where
  S: Shader,
{
  fn drop(&mut self) {
    unsafe { S::destroy_program(&mut self.repr) }
  }
}

/// Shader program builder.
///
/// Compiles a vertex and a fragment stage and links them into a [`Program`].
pub struct ProgramBuilder<'a, C>
where
  C: GraphicsContext,
  C::Backend: Shader,
{
  ctx: &'a mut C,
}

impl<'a, C> ProgramBuilder<'a, C>
where
  C: GraphicsContext,
  C::Backend: Shader,
{
  /// Create a new builder.
  pub fn new(ctx: &'a mut C) -> Self {
    ProgramBuilder { ctx }
  }

  /// Link two already compiled stages.
  ///
  /// The stages are left untouched and can be reused.
  pub fn from_stages(
    &mut self,
    vertex: &Stage<C::Backend>,
    fragment: &Stage<C::Backend>,
  ) -> Result<Program<C::Backend>, ProgramError> {
    check_stage_type(StageType::VertexShader, vertex.ty)?;
    check_stage_type(StageType::FragmentShader, fragment.ty)?;

    let repr = unsafe {
      self
        .ctx
        .backend()
        .new_program(&vertex.repr, &fragment.repr)?
    };
    let program = Program { repr };
    log::debug!("linked shader program {}", program.handle());

    Ok(program)
  }

  /// Compile and link a program from literal sources.
  pub fn from_strings(
    &mut self,
    vertex: &str,
    fragment: &str,
  ) -> Result<Program<C::Backend>, ProgramError> {
    let vertex = Stage::new(&mut *self.ctx, StageType::VertexShader, vertex)?;
    let fragment = Stage::new(&mut *self.ctx, StageType::FragmentShader, fragment)?;

    self.from_stages(&vertex, &fragment)
  }

  /// Compile and link a program from [`ShaderSource`]s.
  pub fn from_sources(
    &mut self,
    vertex: &ShaderSource,
    fragment: &ShaderSource,
  ) -> Result<Program<C::Backend>, ProgramError> {
    check_stage_type(StageType::VertexShader, vertex.ty)?;
    check_stage_type(StageType::FragmentShader, fragment.ty)?;

    self.from_strings(vertex.code(), fragment.code())
  }

  /// Read two source files, then compile and link a program from them.
  pub fn from_files<P, Q>(
    &mut self,
    vertex_path: P,
    fragment_path: Q,
  ) -> Result<Program<C::Backend>, ProgramError>
  where
    P: AsRef<Path>,
    Q: AsRef<Path>,
  {
    let vertex = ShaderSource::from_file(StageType::VertexShader, vertex_path)?;
    let fragment = ShaderSource::from_file(StageType::FragmentShader, fragment_path)?;

    self.from_sources(&vertex, &fragment)
  }
}

fn check_stage_type(expected: StageType, found: StageType) -> Result<(), ProgramError> {
  if expected == found {
    Ok(())
  } else {
    Err(ProgramError::StageMismatch { expected, found })
  }
}
