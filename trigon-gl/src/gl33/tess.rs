use gl::types::*;
use std::cell::RefCell;
use std::mem;
use std::ptr;
use std::rc::Rc;

use crate::gl33::buffer::{Buffer, Target};
use crate::gl33::state::{Bind, GLState};
use crate::gl33::GL33;
use trigon::backend::tess::Tess as TessBackend;
use trigon::tess::{Mode, Position, TessError};

// positions are bound to this attribute location
const POSITION_ATTRIB: GLuint = 0;

/// OpenGL tessellation: a vertex array object and the buffers it references.
///
/// The vertex array is deleted through the backend; the buffers are deleted when dropped.
#[derive(Debug)]
pub struct Tess {
  mode: GLenum,
  vert_nb: usize,
  vao: GLuint,
  // kept alive as long as the vertex array references them
  _vertex_buffer: Buffer,
  index_buffer: Option<Buffer>,
  state: Rc<RefCell<GLState>>,
}

unsafe impl TessBackend for GL33 {
  type TessRepr = Tess;

  unsafe fn build(
    &mut self,
    vertices: &[Position],
    indices: Option<&[u32]>,
    mode: Mode,
    vert_nb: usize,
  ) -> Result<Self::TessRepr, TessError> {
    let mut vao: GLuint = 0;
    gl::GenVertexArrays(1, &mut vao);

    if vao == 0 {
      return Err(TessError::CannotCreate(
        "unable to generate a vertex array".to_owned(),
      ));
    }

    // force binding the vertex array so that previously bound vertex arrays (possibly the same
    // handle) don’t prevent us from binding here
    self
      .state
      .borrow_mut()
      .bind_vertex_array(vao, Bind::Forced);

    let vertex_buffer = Buffer::from_slice(self, Target::Array, vertices);
    set_position_pointer();

    // the element buffer must be bound while the vertex array is, so that it gets recorded in it
    let index_buffer = match indices {
      Some(indices) => Some(Buffer::from_slice(self, Target::ElementArray, indices)),
      None => None,
    };

    {
      let mut st = self.state.borrow_mut();
      st.bind_vertex_array(0, Bind::Forced);
      st.bind_array_buffer(0, Bind::Forced);
    }

    log::debug!(
      "uploaded tessellation (vao {}, vbo {}, {} vertices, {} indices)",
      vao,
      vertex_buffer.handle(),
      vertex_buffer.len(),
      index_buffer.as_ref().map_or(0, Buffer::len)
    );

    Ok(Tess {
      mode: opengl_mode(mode),
      vert_nb,
      vao,
      _vertex_buffer: vertex_buffer,
      index_buffer,
      state: self.state.clone(),
    })
  }

  unsafe fn render(&mut self, tess: &Self::TessRepr) {
    self
      .state
      .borrow_mut()
      .bind_vertex_array(tess.vao, Bind::Cached);

    if tess.index_buffer.is_some() {
      gl::DrawElements(
        tess.mode,
        tess.vert_nb as GLsizei,
        gl::UNSIGNED_INT,
        ptr::null(),
      );
    } else {
      gl::DrawArrays(tess.mode, 0, tess.vert_nb as GLsizei);
    }
  }

  unsafe fn destroy_tess(tess: &mut Self::TessRepr) {
    // buffers go away right after, when the representation drops
    tess.state.borrow_mut().unbind_vertex_array(tess.vao);
    gl::DeleteVertexArrays(1, &tess.vao);
  }
}

unsafe fn set_position_pointer() {
  gl::VertexAttribPointer(
    POSITION_ATTRIB,
    3,
    gl::FLOAT,
    gl::FALSE,
    mem::size_of::<Position>() as GLsizei,
    ptr::null(),
  );
  gl::EnableVertexAttribArray(POSITION_ATTRIB);
}

fn opengl_mode(mode: Mode) -> GLenum {
  match mode {
    Mode::Point => gl::POINTS,
    Mode::Line => gl::LINES,
    Mode::Triangle => gl::TRIANGLES,
  }
}
