use gl::types::*;

use crate::gl33::GL33;
use trigon::backend::pipeline::Pipeline as PipelineBackend;
use trigon::pipeline::PipelineState;

unsafe impl PipelineBackend for GL33 {
  unsafe fn start_pipeline(&mut self, size: [u32; 2], pipeline_state: &PipelineState) {
    let mut state = self.state.borrow_mut();

    let [x, y, w, h] = pipeline_state.viewport().rect(size);
    state.set_viewport([x as GLint, y as GLint, w as GLint, h as GLint]);

    if let Some(clear_color) = pipeline_state.clear_color() {
      state.set_clear_color(*clear_color);
      gl::Clear(gl::COLOR_BUFFER_BIT);
    }
  }
}
