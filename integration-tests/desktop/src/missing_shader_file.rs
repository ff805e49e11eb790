use trigon::context::GraphicsContext as _;
use trigon::shader::{ProgramError, SourceError};
use trigon_glfw::GlfwSurface;
use trigon_windowing::WindowOpt;

pub fn fixture() {
  let mut surface = GlfwSurface::new_gl33("Missing shader file", WindowOpt::default()).unwrap();
  let dir = tempfile::tempdir().unwrap();
  let missing = dir.path().join("nope.vert");

  let program = surface
    .context
    .new_shader_program()
    .from_files(&missing, dir.path().join("nope.frag"));

  match program {
    Err(ProgramError::Source(SourceError::NotFound(path))) => assert_eq!(path, missing),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("a program was built from missing files"),
  }
}
