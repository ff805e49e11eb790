//! Graphics pipelines.
//!
//! Rendering happens through _gates_: a [`PipelineGate`] starts a pipeline on the back buffer
//! (viewport and clearing), and hands out a [`ShadingGate`] which activates programs and draws
//! tessellations with them.
//!
//! ```ignore
//! ctx.pipeline_gate().pipeline(size, &PipelineState::default(), |mut shd_gate| {
//!   shd_gate.shade(&program, &tess);
//! });
//! ```

use crate::backend::pipeline::Pipeline as PipelineBackend;
use crate::backend::shader::Shader;
use crate::backend::tess::Tess as TessBackend;
use crate::context::GraphicsContext;
use crate::shader::Program;
use crate::tess::Tess;

/// Area of the framebuffer to render into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Viewport {
  /// The whole framebuffer.
  Whole,
  /// A specific rectangle, origin at the lower-left corner.
  Specific {
    /// Lower-left x.
    x: u32,
    /// Lower-left y.
    y: u32,
    /// Width.
    width: u32,
    /// Height.
    height: u32,
  },
}

impl Viewport {
  /// Viewport rectangle as `[x, y, width, height]` for a framebuffer of the given size.
  pub fn rect(&self, size: [u32; 2]) -> [u32; 4] {
    match *self {
      Viewport::Whole => [0, 0, size[0], size[1]],
      Viewport::Specific {
        x,
        y,
        width,
        height,
      } => [x, y, width, height],
    }
  }
}

/// Settings applied when a pipeline starts.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineState {
  clear_color: Option<[f32; 4]>,
  viewport: Viewport,
}

impl Default for PipelineState {
  /// Defaults:
  ///
  /// - clear color set to `[0., 0., 0., 1.]`.
  /// - viewport set to [`Viewport::Whole`].
  fn default() -> Self {
    PipelineState {
      clear_color: Some([0., 0., 0., 1.]),
      viewport: Viewport::Whole,
    }
  }
}

impl PipelineState {
  /// Create a default [`PipelineState`].
  pub fn new() -> Self {
    Self::default()
  }

  /// Color used to clear the framebuffer; `None` keeps its content.
  pub fn clear_color(&self) -> Option<&[f32; 4]> {
    self.clear_color.as_ref()
  }

  /// Set the clear color.
  pub fn set_clear_color(self, clear_color: impl Into<Option<[f32; 4]>>) -> Self {
    PipelineState {
      clear_color: clear_color.into(),
      ..self
    }
  }

  /// Viewport to render into.
  pub fn viewport(&self) -> Viewport {
    self.viewport
  }

  /// Set the viewport.
  pub fn set_viewport(self, viewport: Viewport) -> Self {
    PipelineState { viewport, ..self }
  }
}

/// Gate to start pipelines.
pub struct PipelineGate<'a, C>
where
  C: GraphicsContext,
{
  ctx: &'a mut C,
}

impl<'a, C> PipelineGate<'a, C>
where
  C: GraphicsContext,
  C::Backend: PipelineBackend,
{
  /// Create a new gate.
  pub fn new(ctx: &'a mut C) -> Self {
    PipelineGate { ctx }
  }

  /// Start a pipeline on a framebuffer of the given size and run `f` with a [`ShadingGate`].
  pub fn pipeline<F, R>(&mut self, size: [u32; 2], state: &PipelineState, f: F) -> R
  where
    F: FnOnce(ShadingGate<'_, C::Backend>) -> R,
  {
    let backend = self.ctx.backend();
    unsafe { backend.start_pipeline(size, state) };

    f(ShadingGate { backend })
  }
}

/// Gate to draw with shader programs.
pub struct ShadingGate<'a, B> {
  backend: &'a mut B,
}

impl<'a, B> ShadingGate<'a, B>
where
  B: Shader + TessBackend,
{
  /// Activate a program and draw a tessellation with it.
  pub fn shade(&mut self, program: &Program<B>, tess: &Tess<B>) {
    unsafe {
      self.backend.use_program(program.repr());
      self.backend.render(tess.repr());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::MockContext;

  const VS: &str = "void main() {}";
  const FS: &str = "void main() {}";

  #[test]
  fn viewport_rect() {
    assert_eq!(Viewport::Whole.rect([800, 600]), [0, 0, 800, 600]);

    let specific = Viewport::Specific {
      x: 10,
      y: 20,
      width: 30,
      height: 40,
    };
    assert_eq!(specific.rect([800, 600]), [10, 20, 30, 40]);
  }

  #[test]
  fn pipeline_clears_then_draws() {
    let mut ctx = MockContext::new();
    let program = ctx.new_shader_program().from_strings(VS, FS).unwrap();
    let tess = ctx
      .new_tess()
      .set_vertices([[0., 0., 0.], [1., 0., 0.], [0., 1., 0.]])
      .build()
      .unwrap();
    let state = PipelineState::new().set_clear_color([0.07, 0.13, 0.17, 1.]);

    ctx
      .pipeline_gate()
      .pipeline([800, 800], &state, |mut shd_gate| {
        shd_gate.shade(&program, &tess)
      });

    let mock = ctx.state();
    assert_eq!(mock.clear_color, Some([0.07, 0.13, 0.17, 1.]));
    assert_eq!(mock.viewport, [0, 0, 800, 800]);
    assert_eq!(mock.current_program, program.handle());
    assert_eq!(mock.draws, vec![(program.handle(), 3)]);
  }

  #[test]
  fn no_clear_color_keeps_framebuffer() {
    let mut ctx = MockContext::new();
    let state = PipelineState::new().set_clear_color(None);

    ctx.pipeline_gate().pipeline([1, 1], &state, |_| ());

    assert_eq!(ctx.state().clear_color, None);
    assert_eq!(ctx.state().pipelines, 1);
  }
}
