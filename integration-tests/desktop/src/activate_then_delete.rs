use gl::types::GLint;
use trigon::context::GraphicsContext as _;
use trigon_glfw::GlfwSurface;
use trigon_triangle::{FS, VS};
use trigon_windowing::WindowOpt;

fn current_program() -> GLint {
  let mut program = 0;
  unsafe { gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut program) };
  program
}

pub fn fixture() {
  let mut surface = GlfwSurface::new_gl33("Activate then delete", WindowOpt::default()).unwrap();
  let program = surface
    .context
    .new_shader_program()
    .from_strings(VS, FS)
    .unwrap();
  let handle = program.handle();

  program.activate(&mut surface.context);
  assert_eq!(current_program(), handle as GLint);

  program.delete();
  assert_eq!(current_program(), 0);
  assert_eq!(unsafe { gl::IsProgram(handle) }, gl::FALSE);
}
