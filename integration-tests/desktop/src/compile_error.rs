use trigon::context::GraphicsContext as _;
use trigon::shader::{ProgramError, StageError, StageType};
use trigon_glfw::GlfwSurface;
use trigon_triangle::VS;
use trigon_windowing::WindowOpt;

const BROKEN_FS: &str = "#version 330 core
out vec4 FragColor;

void main() {
  FragColor = vec4(0.8f, 0.3f, 0.02f, 1.0f)
}";

pub fn fixture() {
  let mut surface = GlfwSurface::new_gl33("Compile error", WindowOpt::default()).unwrap();
  let program = surface
    .context
    .new_shader_program()
    .from_strings(VS, BROKEN_FS);

  match program {
    Err(ProgramError::StageError(StageError::CompilationFailed(StageType::FragmentShader, log))) => {
      assert!(!log.is_empty());
    }
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("a broken fragment shader compiled"),
  }
}
