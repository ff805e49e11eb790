//! Pipeline backend.

use crate::pipeline::PipelineState;

/// Rendering pipelines.
///
/// # Safety
///
/// The backend must only touch the default framebuffer it was created for.
pub unsafe trait Pipeline {
  /// Start a new pipeline on a framebuffer of the given size: set the viewport and clear the
  /// color buffer if asked to.
  unsafe fn start_pipeline(&mut self, size: [u32; 2], state: &PipelineState);
}
