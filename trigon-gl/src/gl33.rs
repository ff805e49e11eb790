//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for trigon. The backend type is [`GL33`].

mod buffer;
mod pipeline;
mod shader;
mod state;
mod tess;

pub use self::shader::{Program, Stage};
pub use self::state::{GLState, StateQueryError};
pub use self::tess::Tess;
use std::cell::RefCell;
use std::rc::Rc;

/// An OpenGL 3.3 backend.
///
/// This type is to be used as a trigon backend type. It implements the whole backend API.
#[derive(Debug)]
pub struct GL33 {
  pub(crate) state: Rc<RefCell<GLState>>,
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// The OpenGL symbols must be loaded and a context current on this thread. Only one backend can
  /// be created per thread.
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL33 {
      state: Rc::new(RefCell::new(state)),
    })
  }
}
