//! The triangle scene.
//!
//! A single orange triangle, subdivided into three sub-triangles (the middle one is left empty),
//! over a dark blue background. The scene is platform-agnostic: it only needs a
//! [`GraphicsContext`] whose backend knows how to compile shaders, upload tessellations and run
//! pipelines. The desktop binary provides one through GLFW.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use trigon::backend::pipeline::Pipeline as PipelineBackend;
use trigon::backend::shader::Shader;
use trigon::backend::tess::Tess as TessBackend;
use trigon::context::GraphicsContext;
use trigon::pipeline::PipelineState;
use trigon::shader::{Program, ProgramError};
use trigon::tess::{Mode, Position, Tess, TessError};

/// Title of the window.
pub const TITLE: &str = "YoutubeOpenGL";

/// Width and height of the window.
pub const WINDOW_SIZE: u32 = 800;

/// Background color.
pub const CLEAR_COLOR: [f32; 4] = [0.07, 0.13, 0.17, 1.];

/// Color of the triangle, as written in the fragment shader.
pub const TRIANGLE_COLOR: [f32; 4] = [0.8, 0.3, 0.02, 1.];

/// Vertex shader source.
pub const VS: &str = include_str!("../shaders/triangle.vert");

/// Fragment shader source.
pub const FS: &str = include_str!("../shaders/triangle.frag");

const SQRT_3: f32 = 1.732_050_8;

/// Corners of the outer triangle (0, 1, 2), then midpoints of its left, right and bottom edges
/// (3, 4, 5). The outer triangle is equilateral with a side of 1, centered on the origin.
#[rustfmt::skip]
pub const VERTICES: [Position; 6] = [
  [-0.5,       -0.5 * SQRT_3 / 3.,      0.],
  [ 0.5,       -0.5 * SQRT_3 / 3.,      0.],
  [ 0.,         0.5 * SQRT_3 * 2. / 3., 0.],
  [-0.5 / 2.,   0.5 * SQRT_3 / 6.,      0.],
  [ 0.5 / 2.,   0.5 * SQRT_3 / 6.,      0.],
  [ 0.,        -0.5 * SQRT_3 / 3.,      0.],
];

/// Lower left, upper and lower right sub-triangles.
#[rustfmt::skip]
pub const INDICES: [u32; 9] = [
  0, 3, 5,
  3, 2, 4,
  5, 4, 1,
];

/// Where the shader sources come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Shaders {
  /// Sources compiled into the binary.
  Embedded,
  /// Sources read from files when the scene bootstraps.
  Files {
    /// Vertex shader path.
    vertex: PathBuf,
    /// Fragment shader path.
    fragment: PathBuf,
  },
}

/// Errors preventing the scene from bootstrapping.
#[derive(Debug)]
pub enum SceneError {
  /// The shader program couldn’t be built.
  Program(ProgramError),
  /// The geometry couldn’t be uploaded.
  Tess(TessError),
}

impl fmt::Display for SceneError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      SceneError::Program(ref e) => write!(f, "cannot build the triangle program: {}", e),
      SceneError::Tess(ref e) => write!(f, "cannot upload the triangle: {}", e),
    }
  }
}

impl Error for SceneError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      SceneError::Program(e) => Some(e),
      SceneError::Tess(e) => Some(e),
    }
  }
}

impl From<ProgramError> for SceneError {
  fn from(e: ProgramError) -> Self {
    SceneError::Program(e)
  }
}

impl From<TessError> for SceneError {
  fn from(e: TessError) -> Self {
    SceneError::Tess(e)
  }
}

/// Device resources of the scene.
pub struct Triangle<B>
where
  B: Shader + TessBackend,
{
  program: Program<B>,
  tess: Tess<B>,
  pipeline_state: PipelineState,
}

impl<B> Triangle<B>
where
  B: Shader + TessBackend + PipelineBackend,
{
  /// Build the program and upload the geometry.
  pub fn bootstrap<C>(ctx: &mut C, shaders: &Shaders) -> Result<Self, SceneError>
  where
    C: GraphicsContext<Backend = B>,
  {
    let program = match shaders {
      Shaders::Embedded => ctx.new_shader_program().from_strings(VS, FS)?,
      Shaders::Files { vertex, fragment } => {
        log::info!(
          "loading shaders from {} and {}",
          vertex.display(),
          fragment.display()
        );
        ctx.new_shader_program().from_files(vertex, fragment)?
      }
    };

    let tess = ctx
      .new_tess()
      .set_vertices(&VERTICES[..])
      .set_indices(&INDICES[..])
      .set_mode(Mode::Triangle)
      .build()?;

    let pipeline_state = PipelineState::new().set_clear_color(CLEAR_COLOR);

    Ok(Triangle {
      program,
      tess,
      pipeline_state,
    })
  }

  /// Clear the back buffer and draw the triangle.
  pub fn render_frame<C>(&self, ctx: &mut C, size: [u32; 2])
  where
    C: GraphicsContext<Backend = B>,
  {
    let program = &self.program;
    let tess = &self.tess;

    ctx
      .pipeline_gate()
      .pipeline(size, &self.pipeline_state, |mut shd_gate| {
        shd_gate.shade(program, tess)
      });
  }

  /// Release the device resources.
  pub fn delete(self) {
    let Triangle { program, tess, .. } = self;
    program.delete();
    drop(tess);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn vertex(i: u32) -> [f32; 2] {
    let [x, y, _] = VERTICES[i as usize];
    [x, y]
  }

  fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])) * 0.5
  }

  fn covers(tri: &[u32], p: [f32; 2]) -> bool {
    let (a, b, c) = (vertex(tri[0]), vertex(tri[1]), vertex(tri[2]));
    let d = [
      signed_area(p, a, b),
      signed_area(p, b, c),
      signed_area(p, c, a),
    ];
    d.iter().all(|&x| x >= 0.) || d.iter().all(|&x| x <= 0.)
  }

  #[test]
  fn indices_reference_existing_vertices() {
    assert!(INDICES.iter().all(|&i| (i as usize) < VERTICES.len()));
  }

  #[test]
  fn three_non_degenerate_sub_triangles() {
    assert_eq!(INDICES.len(), 9);

    for tri in INDICES.chunks(3) {
      let area = signed_area(vertex(tri[0]), vertex(tri[1]), vertex(tri[2])).abs();
      // a quarter of the outer triangle, whose side is 1
      assert!((area - SQRT_3 / 16.).abs() < 1e-5, "area = {}", area);
    }
  }

  #[test]
  fn middle_is_left_empty() {
    let center = [0., (VERTICES[3][1] + VERTICES[5][1]) * 0.5];
    assert!(INDICES.chunks(3).all(|tri| !covers(tri, center)));

    let top = [0., 0.3];
    assert!(INDICES.chunks(3).any(|tri| covers(tri, top)));
  }

  #[test]
  fn embedded_sources_match_shipped_files() {
    let dir = env!("CARGO_MANIFEST_DIR");
    let vert = fs::read_to_string(format!("{}/shaders/triangle.vert", dir)).unwrap();
    let frag = fs::read_to_string(format!("{}/shaders/triangle.frag", dir)).unwrap();

    assert_eq!(vert, VS);
    assert_eq!(frag, FS);
    assert!(VS.starts_with("#version 330 core"));
    assert!(FS.contains("FragColor = vec4(0.8f, 0.3f, 0.02f, 1.0f)"));
  }

  #[test]
  fn scene_error_messages() {
    let err = SceneError::from(TessError::NoData);
    assert_eq!(
      err.to_string(),
      "cannot upload the triangle: no data provided and empty tessellation"
    );
    assert!(err.source().is_some());
  }
}
