//! Tessellation backend.

use crate::tess::{Mode, Position, TessError};

/// Tessellations: vertex positions, optional indices, primitive mode.
///
/// # Safety
///
/// Tessellation representations must only be used with the backend that created them.
pub unsafe trait Tess {
  /// Backend representation of a tessellation.
  type TessRepr;

  /// Upload vertices and indices to the device.
  ///
  /// `vert_nb` has already been validated against the vertices and indices and is the number of
  /// vertices (or indices, if any) to render by default.
  unsafe fn build(
    &mut self,
    vertices: &[Position],
    indices: Option<&[u32]>,
    mode: Mode,
    vert_nb: usize,
  ) -> Result<Self::TessRepr, TessError>;

  /// Draw a tessellation with the currently used program.
  unsafe fn render(&mut self, tess: &Self::TessRepr);

  /// Release a tessellation and its buffers.
  unsafe fn destroy_tess(tess: &mut Self::TessRepr);
}
