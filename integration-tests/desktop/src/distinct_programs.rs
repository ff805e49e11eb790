use trigon::context::GraphicsContext as _;
use trigon_glfw::GlfwSurface;
use trigon_triangle::{FS, VS};
use trigon_windowing::WindowOpt;

pub fn fixture() {
  let mut surface = GlfwSurface::new_gl33("Distinct programs", WindowOpt::default()).unwrap();
  let a = surface
    .context
    .new_shader_program()
    .from_strings(VS, FS)
    .unwrap();
  let b = surface
    .context
    .new_shader_program()
    .from_strings(VS, FS)
    .unwrap();

  assert_ne!(a.handle(), b.handle());
}
