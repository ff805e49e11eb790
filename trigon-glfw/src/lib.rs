//! [GLFW](https://crates.io/crates/glfw) backend for trigon.
//!
//! [`GlfwSurface::new_gl33`] initializes GLFW, asks for an OpenGL 3.3 core profile context, opens
//! the window and loads the OpenGL symbols. GLFW errors are reported through the `log` crate.

#![deny(missing_docs)]

use glfw::{self, Context as _, Glfw, InitError, Window, WindowEvent, WindowMode};
use std::{error, fmt, os::raw::c_void, sync::mpsc::Receiver};
use trigon::context::GraphicsContext;
pub use trigon_gl::gl33::StateQueryError;
use trigon_gl::GL33;
use trigon_windowing::{WindowDim, WindowOpt};

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum GlfwSurfaceError {
  /// Initialization of the surface went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// GLFW couldn’t open the window or its OpenGL context.
  WindowCreationFailed,

  /// The graphics state is not available.
  ///
  /// This error is generated when the initialization code is called on a thread on which the
  /// graphics state has already been acquired.
  GraphicsStateError(StateQueryError),
}

impl fmt::Display for GlfwSurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlfwSurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      GlfwSurfaceError::WindowCreationFailed => f.write_str("failed to create GLFW window"),
      GlfwSurfaceError::GraphicsStateError(ref e) => {
        write!(f, "failed to get graphics state: {}", e)
      }
    }
  }
}

impl From<InitError> for GlfwSurfaceError {
  fn from(e: InitError) -> Self {
    GlfwSurfaceError::InitError(e)
  }
}

impl From<StateQueryError> for GlfwSurfaceError {
  fn from(e: StateQueryError) -> Self {
    GlfwSurfaceError::GraphicsStateError(e)
  }
}

impl error::Error for GlfwSurfaceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      GlfwSurfaceError::InitError(e) => Some(e),
      GlfwSurfaceError::WindowCreationFailed => None,
      GlfwSurfaceError::GraphicsStateError(e) => Some(e),
    }
  }
}

/// GLFW surface.
///
/// This type is a helper that exposes two important concepts: the GLFW event receiver that you can
/// use to poll events and the [`GL33Context`], which allows you to perform the rendering part.
#[derive(Debug)]
pub struct GlfwSurface {
  /// Wrapped GLFW events queue.
  pub events_rx: Receiver<(f64, WindowEvent)>,

  /// Wrapped trigon context.
  pub context: GL33Context,
}

impl GlfwSurface {
  /// Initialize GLFW to provide a trigon environment on an OpenGL 3.3 core profile context.
  pub fn new_gl33(title: &str, win_opt: WindowOpt) -> Result<Self, GlfwSurfaceError> {
    let mut glfw = glfw::init(glfw::LOG_ERRORS)?;

    // OpenGL hints
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
      glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
    glfw.window_hint(glfw::WindowHint::Samples(win_opt.num_samples()));

    let (mut window, events_rx) =
      create_window(&mut glfw, title, win_opt.dim()).ok_or_else(|| {
        log::error!("cannot create a {:?} window", win_opt.dim());
        GlfwSurfaceError::WindowCreationFailed
      })?;

    window.make_current();
    window.set_all_polling(true);

    let interval = if win_opt.vsync() {
      glfw::SwapInterval::Sync(1)
    } else {
      glfw::SwapInterval::None
    };
    glfw.set_swap_interval(interval);

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    let gl = GL33::new()?;
    let (fb_w, fb_h) = window.get_framebuffer_size();
    log::info!(
      "created “{}” window, framebuffer {}×{}",
      title,
      fb_w,
      fb_h
    );

    let context = GL33Context { window, gl };
    let surface = GlfwSurface { events_rx, context };

    Ok(surface)
  }
}

fn create_window(
  glfw: &mut Glfw,
  title: &str,
  dim: &WindowDim,
) -> Option<(Window, Receiver<(f64, WindowEvent)>)> {
  match *dim {
    WindowDim::Windowed { width, height } => {
      glfw.create_window(width, height, title, WindowMode::Windowed)
    }

    WindowDim::Fullscreen => glfw.with_primary_monitor(|glfw, monitor| {
      let monitor = monitor?;
      let mode = monitor.get_video_mode()?;
      glfw.create_window(mode.width, mode.height, title, WindowMode::FullScreen(monitor))
    }),
  }
}

/// Trigon OpenGL 3.3 context.
///
/// This type also re-exports the GLFW window, if you need access to it.
#[derive(Debug)]
pub struct GL33Context {
  /// Wrapped GLFW window.
  pub window: Window,

  /// OpenGL 3.3 state.
  gl: GL33,
}

impl GL33Context {
  /// Size of the back buffer, in pixels.
  ///
  /// It can differ from the window size on high-density displays.
  pub fn size(&self) -> [u32; 2] {
    let (w, h) = self.window.get_framebuffer_size();
    [w.max(0) as u32, h.max(0) as u32]
  }

  /// Whether the user asked to close the window.
  pub fn should_close(&self) -> bool {
    self.window.should_close()
  }

  /// Swap the back and front buffers.
  pub fn swap_buffers(&mut self) {
    self.window.swap_buffers();
  }

  /// Process pending window events; they end up in [`GlfwSurface::events_rx`].
  pub fn poll_events(&mut self) {
    self.window.glfw.poll_events();
  }
}

unsafe impl GraphicsContext for GL33Context {
  type Backend = GL33;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.gl
  }
}
