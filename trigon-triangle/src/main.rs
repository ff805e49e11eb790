use glfw::{Action, Key, WindowEvent};
use std::{path::PathBuf, process};
use structopt::StructOpt;
use trigon_glfw::GlfwSurface;
use trigon_triangle::{Shaders, Triangle, TITLE, WINDOW_SIZE};
use trigon_windowing::{WindowDim, WindowOpt};

// exit codes
const EXIT_SURFACE: i32 = -1;
const EXIT_SCENE: i32 = 1;

#[derive(Debug, StructOpt)]
#[structopt(about = "Render a colored, subdivided triangle.")]
pub struct CLIOpts {
  #[structopt(long, requires = "fragment")]
  /// Vertex shader source file, instead of the embedded one.
  vertex: Option<PathBuf>,

  #[structopt(long, requires = "vertex")]
  /// Fragment shader source file, instead of the embedded one.
  fragment: Option<PathBuf>,

  #[structopt(long)]
  /// Exit after rendering that many frames; 0 exits before the first one.
  frames: Option<u64>,

  #[structopt(long)]
  /// Don’t synchronize buffer swaps with the display.
  no_vsync: bool,
}

impl CLIOpts {
  fn shaders(&self) -> Shaders {
    match (&self.vertex, &self.fragment) {
      (Some(vertex), Some(fragment)) => Shaders::Files {
        vertex: vertex.clone(),
        fragment: fragment.clone(),
      },
      _ => Shaders::Embedded,
    }
  }
}

fn frame_limit_reached(frames: Option<u64>, frame_nb: u64) -> bool {
  frames.map_or(false, |max| frame_nb >= max)
}

fn run(cli_opts: CLIOpts) -> i32 {
  let dim = WindowDim::Windowed {
    width: WINDOW_SIZE,
    height: WINDOW_SIZE,
  };
  let win_opt = WindowOpt::default()
    .set_dim(dim)
    .set_vsync(!cli_opts.no_vsync);

  let surface = match GlfwSurface::new_gl33(TITLE, win_opt) {
    Ok(surface) => surface,
    Err(e) => {
      log::error!("Failed to create GLFW window: {}", e);
      return EXIT_SURFACE;
    }
  };
  let mut context = surface.context;
  let events = surface.events_rx;

  let triangle = match Triangle::bootstrap(&mut context, &cli_opts.shaders()) {
    Ok(triangle) => triangle,
    Err(e) => {
      log::error!("{}", e);
      return EXIT_SCENE;
    }
  };

  let mut frame_nb = 0;

  'app: loop {
    if frame_limit_reached(cli_opts.frames, frame_nb) {
      log::info!("rendered {} frames, exiting", frame_nb);
      break;
    }

    // handle events
    context.poll_events();

    for (_, event) in glfw::flush_messages(&events) {
      match event {
        WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Release, _) => break 'app,
        WindowEvent::FramebufferSize(width, height) => {
          log::debug!("framebuffer resized to {}×{}", width, height)
        }
        _ => (),
      }
    }

    if context.should_close() {
      break;
    }

    let size = context.size();
    triangle.render_frame(&mut context, size);
    context.swap_buffers();

    frame_nb += 1;
  }

  // device resources must go before the window does
  triangle.delete();

  0
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  process::exit(run(cli_opts));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_arguments_use_embedded_shaders() {
    let opts = CLIOpts::from_iter(&["trigon-triangle"]);

    assert_eq!(opts.shaders(), Shaders::Embedded);
    assert_eq!(opts.frames, None);
    assert!(!opts.no_vsync);
  }

  #[test]
  fn shader_files() {
    let opts = CLIOpts::from_iter(&[
      "trigon-triangle",
      "--vertex",
      "a.vert",
      "--fragment",
      "a.frag",
      "--frames",
      "3",
    ]);

    assert_eq!(
      opts.shaders(),
      Shaders::Files {
        vertex: PathBuf::from("a.vert"),
        fragment: PathBuf::from("a.frag"),
      }
    );
    assert_eq!(opts.frames, Some(3));
  }

  #[test]
  fn frame_limit() {
    assert!(frame_limit_reached(Some(0), 0));
    assert!(!frame_limit_reached(Some(3), 2));
    assert!(frame_limit_reached(Some(3), 3));
    assert!(!frame_limit_reached(None, u64::MAX));
  }

  #[test]
  fn vertex_requires_fragment() {
    let result = CLIOpts::from_iter_safe(&["trigon-triangle", "--vertex", "a.vert"]);
    assert!(result.is_err());
  }
}
