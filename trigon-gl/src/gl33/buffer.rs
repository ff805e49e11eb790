//! OpenGL buffer implementation.

use crate::gl33::{
  state::{Bind, GLState},
  GL33,
};
use gl::types::*;
use std::{cell::RefCell, mem, os::raw::c_void, rc::Rc};

/// Binding target a buffer is uploaded through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Target {
  /// Vertex attributes.
  Array,
  /// Indices; binds to the current vertex array.
  ElementArray,
}

/// OpenGL buffer, uploaded once and never mapped.
///
/// Deleted when dropped.
#[derive(Debug)]
pub(crate) struct Buffer {
  handle: GLuint,
  len: usize,
  state: Rc<RefCell<GLState>>,
}

impl Buffer {
  pub(crate) unsafe fn from_slice<T>(gl33: &GL33, target: Target, data: &[T]) -> Self {
    let mut handle: GLuint = 0;
    gl::GenBuffers(1, &mut handle);

    let gl_target = {
      let mut st = gl33.state.borrow_mut();

      match target {
        Target::Array => {
          st.bind_array_buffer(handle, Bind::Forced);
          gl::ARRAY_BUFFER
        }

        Target::ElementArray => {
          st.bind_element_array_buffer(handle, Bind::Forced);
          gl::ELEMENT_ARRAY_BUFFER
        }
      }
    };

    let bytes = mem::size_of_val(data);
    gl::BufferData(
      gl_target,
      bytes as GLsizeiptr,
      data.as_ptr() as *const c_void,
      gl::STATIC_DRAW,
    );

    Buffer {
      handle,
      len: data.len(),
      state: gl33.state.clone(),
    }
  }

  pub(crate) fn handle(&self) -> GLuint {
    self.handle
  }

  /// Length of the buffer (number of elements).
  pub(crate) fn len(&self) -> usize {
    self.len
  }
}

impl Drop for Buffer {
  fn drop(&mut self) {
    unsafe {
      self.state.borrow_mut().unbind_buffer(self.handle);
      gl::DeleteBuffers(1, &self.handle);
    }
  }
}
