use gl::types::*;
use trigon_glfw::GlfwSurface;
use trigon_triangle::{Shaders, Triangle, CLEAR_COLOR, TRIANGLE_COLOR};
use trigon_windowing::WindowOpt;

// reads a single pixel of the back buffer, NDC coordinates
fn read_pixel(size: [u32; 2], ndc: [f32; 2]) -> [u8; 4] {
  let x = ((ndc[0] + 1.) * 0.5 * size[0] as f32) as GLint;
  let y = ((ndc[1] + 1.) * 0.5 * size[1] as f32) as GLint;
  let mut pixel = [0u8; 4];

  unsafe {
    gl::ReadPixels(
      x,
      y,
      1,
      1,
      gl::RGBA,
      gl::UNSIGNED_BYTE,
      pixel.as_mut_ptr() as *mut GLvoid,
    );
  }

  pixel
}

fn assert_color(pixel: [u8; 4], expected: [f32; 4]) {
  for (p, e) in pixel.iter().zip(&expected).take(3) {
    let e = (e * 255.).round() as i32;
    assert!(
      (*p as i32 - e).abs() <= 2,
      "pixel {:?} doesn’t match {:?}",
      pixel,
      expected
    );
  }
}

pub fn fixture() {
  let surface = GlfwSurface::new_gl33("Render triangle", WindowOpt::default()).unwrap();
  let mut context = surface.context;

  let triangle = Triangle::bootstrap(&mut context, &Shaders::Embedded).unwrap();
  let size = context.size();
  triangle.render_frame(&mut context, size);

  // middle sub-triangle is left empty
  assert_color(read_pixel(size, [0., -0.07]), CLEAR_COLOR);
  // upper sub-triangle
  assert_color(read_pixel(size, [0., 0.3]), TRIANGLE_COLOR);
  // outside of the outer triangle
  assert_color(read_pixel(size, [0.9, 0.9]), CLEAR_COLOR);

  context.swap_buffers();
  triangle.delete();
}
