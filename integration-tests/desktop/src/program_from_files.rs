use std::fs;
use trigon::context::GraphicsContext as _;
use trigon_glfw::GlfwSurface;
use trigon_triangle::{FS, VS};
use trigon_windowing::WindowOpt;

pub fn fixture() {
  let mut surface = GlfwSurface::new_gl33("Program from files", WindowOpt::default()).unwrap();
  let dir = tempfile::tempdir().unwrap();
  let vs_path = dir.path().join("default.vert");
  let fs_path = dir.path().join("default.frag");
  fs::write(&vs_path, VS).unwrap();
  fs::write(&fs_path, FS).unwrap();

  let program = surface
    .context
    .new_shader_program()
    .from_files(&vs_path, &fs_path)
    .unwrap();

  assert_ne!(program.handle(), 0);
  program.delete();
}
