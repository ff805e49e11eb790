//! Tessellations.
//!
//! A tessellation is a set of vertex positions, optionally indexed, uploaded to the device once
//! and drawn as many times as needed. Tessellations are built with a [`TessBuilder`], which you get
//! from [`GraphicsContext::new_tess`].
//!
//! [`GraphicsContext::new_tess`]: crate::context::GraphicsContext::new_tess

use std::error;
use std::fmt;

use crate::backend::tess::Tess as TessBackend;
use crate::context::GraphicsContext;

/// A vertex position, in normalized device coordinates.
pub type Position = [f32; 3];

/// Primitive mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
  /// A single point.
  Point,
  /// A line, defined by two points.
  Line,
  /// A triangle, defined by three points.
  Triangle,
}

/// Possible errors that might occur when building a tessellation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TessError {
  /// No vertex was given.
  NoData,
  /// An index points past the last vertex.
  IndexOutOfBounds {
    /// The faulty index.
    index: u32,
    /// Number of vertices available.
    vert_nb: usize,
  },
  /// More vertices are asked to be rendered than available. The first field is what’s available,
  /// the second one what’s requested.
  Overflow(usize, usize),
  /// The backend couldn’t allocate the tessellation.
  CannotCreate(String),
}

impl fmt::Display for TessError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      TessError::NoData => f.write_str("no data provided and empty tessellation"),

      TessError::IndexOutOfBounds { index, vert_nb } => write!(
        f,
        "index {} out of bounds ({} vertices available)",
        index, vert_nb
      ),

      TessError::Overflow(sup, render_nb) => write!(
        f,
        "trying to render {} vertices while {} are available",
        render_nb, sup
      ),

      TessError::CannotCreate(ref e) => write!(f, "cannot create tessellation: {}", e),
    }
  }
}

impl error::Error for TessError {}

/// Tessellation builder.
pub struct TessBuilder<'a, C>
where
  C: GraphicsContext,
  C::Backend: TessBackend,
{
  ctx: &'a mut C,
  vertices: Vec<Position>,
  indices: Option<Vec<u32>>,
  mode: Mode,
  render_vert_nb: Option<usize>,
}

impl<'a, C> TessBuilder<'a, C>
where
  C: GraphicsContext,
  C::Backend: TessBackend,
{
  /// Create a new builder, defaulting to [`Mode::Triangle`].
  pub fn new(ctx: &'a mut C) -> Self {
    TessBuilder {
      ctx,
      vertices: Vec::new(),
      indices: None,
      mode: Mode::Triangle,
      render_vert_nb: None,
    }
  }

  /// Set the vertex positions.
  pub fn set_vertices(mut self, vertices: impl Into<Vec<Position>>) -> Self {
    self.vertices = vertices.into();
    self
  }

  /// Set the indices; switches to indexed rendering.
  pub fn set_indices(mut self, indices: impl Into<Vec<u32>>) -> Self {
    self.indices = Some(indices.into());
    self
  }

  /// Set the primitive mode.
  pub fn set_mode(mut self, mode: Mode) -> Self {
    self.mode = mode;
    self
  }

  /// Render fewer vertices (or indices) than available.
  pub fn set_render_vertex_nb(mut self, vert_nb: usize) -> Self {
    self.render_vert_nb = Some(vert_nb);
    self
  }

  /// Validate the data and upload it.
  pub fn build(self) -> Result<Tess<C::Backend>, TessError> {
    let vert_nb = self.guess_vert_nb_or_fail()?;
    let indices = self.indices.as_deref();

    let repr = unsafe {
      self
        .ctx
        .backend()
        .build(&self.vertices, indices, self.mode, vert_nb)?
    };

    Ok(Tess {
      repr,
      mode: self.mode,
      vert_nb,
      indexed: indices.is_some(),
    })
  }

  fn guess_vert_nb_or_fail(&self) -> Result<usize, TessError> {
    if self.vertices.is_empty() {
      return Err(TessError::NoData);
    }

    let available = match self.indices {
      Some(ref indices) => {
        let vert_nb = self.vertices.len();

        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vert_nb) {
          return Err(TessError::IndexOutOfBounds { index, vert_nb });
        }

        indices.len()
      }

      None => self.vertices.len(),
    };

    match self.render_vert_nb {
      Some(render_nb) if render_nb > available => Err(TessError::Overflow(available, render_nb)),
      Some(render_nb) => Ok(render_nb),
      None => Ok(available),
    }
  }
}

/// A tessellation living on the device.
pub struct Tess<B>
where
  B: TessBackend,
{
  repr: B::TessRepr,
  mode: Mode,
  vert_nb: usize,
  indexed: bool,
}

impl<B> Tess<B>
where
  B: TessBackend,
{
  /// Number of vertices (or indices, if indexed) drawn on each render.
  pub fn vert_nb(&self) -> usize {
    self.vert_nb
  }

  /// Whether rendering goes through an index buffer.
  pub fn is_indexed(&self) -> bool {
    self.indexed
  }

  /// Primitive mode.
  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub(crate) fn repr(&self) -> &B::TessRepr {
    &self.repr
  }
}

impl<B> Drop for Tess<B>
where
  B: TessBackend,
{
  fn drop(&mut self) {
    unsafe { B::destroy_tess(&mut self.repr) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::MockContext;

  const VERTICES: [Position; 3] = [[-0.5, -0.5, 0.], [0.5, -0.5, 0.], [0., 0.5, 0.]];

  #[test]
  fn indexed_render_count_defaults_to_indices() {
    let mut ctx = MockContext::new();
    let tess = ctx
      .new_tess()
      .set_vertices(VERTICES)
      .set_indices([0u32, 1, 2, 2, 1, 0])
      .build()
      .unwrap();

    assert_eq!(tess.vert_nb(), 6);
    assert!(tess.is_indexed());
    assert_eq!(tess.mode(), Mode::Triangle);
    assert_eq!(ctx.state().uploaded_indices, vec![0, 1, 2, 2, 1, 0]);
  }

  #[test]
  fn non_indexed_render_count_defaults_to_vertices() {
    let mut ctx = MockContext::new();
    let tess = ctx
      .new_tess()
      .set_vertices(VERTICES)
      .set_mode(Mode::Line)
      .build()
      .unwrap();

    assert_eq!(tess.vert_nb(), 3);
    assert!(!tess.is_indexed());
    assert_eq!(tess.mode(), Mode::Line);
  }

  #[test]
  fn no_vertices() {
    let mut ctx = MockContext::new();
    let result = ctx.new_tess().set_indices([0u32, 1, 2]).build();

    assert_eq!(result.err(), Some(TessError::NoData));
    assert_eq!(ctx.state().live_tess, 0);
  }

  #[test]
  fn index_out_of_bounds() {
    let mut ctx = MockContext::new();
    let result = ctx
      .new_tess()
      .set_vertices(VERTICES)
      .set_indices([0u32, 1, 3])
      .build();

    assert_eq!(
      result.err(),
      Some(TessError::IndexOutOfBounds {
        index: 3,
        vert_nb: 3
      })
    );
  }

  #[test]
  fn render_count_overflow() {
    let mut ctx = MockContext::new();
    let result = ctx
      .new_tess()
      .set_vertices(VERTICES)
      .set_indices([0u32, 1, 2])
      .set_render_vertex_nb(6)
      .build();

    assert_eq!(result.err(), Some(TessError::Overflow(3, 6)));
  }

  #[test]
  fn partial_render_count() {
    let mut ctx = MockContext::new();
    let tess = ctx
      .new_tess()
      .set_vertices(VERTICES)
      .set_render_vertex_nb(2)
      .build()
      .unwrap();

    assert_eq!(tess.vert_nb(), 2);
  }

  #[test]
  fn dropping_releases_device_memory() {
    let mut ctx = MockContext::new();
    let tess = ctx.new_tess().set_vertices(VERTICES).build().unwrap();
    assert_eq!(ctx.state().live_tess, 1);

    drop(tess);
    assert_eq!(ctx.state().live_tess, 0);
  }
}
