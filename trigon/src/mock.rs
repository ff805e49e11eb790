//! In-memory backend recording device objects, for tests.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::backend::pipeline::Pipeline;
use crate::backend::shader::Shader;
use crate::backend::tess::Tess;
use crate::context::GraphicsContext;
use crate::pipeline::PipelineState;
use crate::shader::{ProgramError, StageError, StageType};
use crate::tess::{Mode, Position, TessError};

#[derive(Debug, Default)]
pub struct MockState {
  next_handle: u32,
  pub compiled_stages: usize,
  pub live_stages: Vec<u32>,
  pub live_programs: Vec<u32>,
  pub current_program: u32,
  pub live_tess: usize,
  pub uploaded_indices: Vec<u32>,
  pub pipelines: usize,
  pub clear_color: Option<[f32; 4]>,
  pub viewport: [u32; 4],
  pub draws: Vec<(u32, usize)>,
}

impl MockState {
  fn gen_handle(&mut self) -> u32 {
    self.next_handle += 1;
    self.next_handle
  }
}

#[derive(Debug)]
pub struct MockBackend {
  state: Rc<RefCell<MockState>>,
}

pub struct MockStage {
  handle: u32,
  src: String,
  state: Rc<RefCell<MockState>>,
}

pub struct MockProgram {
  handle: u32,
  state: Rc<RefCell<MockState>>,
}

pub struct MockTess {
  vert_nb: usize,
  state: Rc<RefCell<MockState>>,
}

unsafe impl Shader for MockBackend {
  type StageRepr = MockStage;

  type ProgramRepr = MockProgram;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    if let Some(line) = src.lines().find(|line| line.starts_with("#error")) {
      return Err(StageError::compilation_failed(ty, line));
    }

    let mut st = self.state.borrow_mut();
    let handle = st.gen_handle();
    st.compiled_stages += 1;
    st.live_stages.push(handle);

    Ok(MockStage {
      handle,
      src: src.to_owned(),
      state: self.state.clone(),
    })
  }

  unsafe fn destroy_stage(stage: &mut Self::StageRepr) {
    let handle = stage.handle;
    stage.state.borrow_mut().live_stages.retain(|&h| h != handle);
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    if !vertex.src.contains("main") || !fragment.src.contains("main") {
      return Err(ProgramError::link_failed("missing main function"));
    }

    let mut st = self.state.borrow_mut();
    let handle = st.gen_handle();
    st.live_programs.push(handle);

    Ok(MockProgram {
      handle,
      state: self.state.clone(),
    })
  }

  unsafe fn program_handle(program: &Self::ProgramRepr) -> u32 {
    program.handle
  }

  unsafe fn use_program(&mut self, program: &Self::ProgramRepr) {
    self.state.borrow_mut().current_program = program.handle;
  }

  unsafe fn destroy_program(program: &mut Self::ProgramRepr) {
    let handle = program.handle;
    let mut st = program.state.borrow_mut();

    st.live_programs.retain(|&h| h != handle);

    if st.current_program == handle {
      st.current_program = 0;
    }
  }
}

unsafe impl Tess for MockBackend {
  type TessRepr = MockTess;

  unsafe fn build(
    &mut self,
    _: &[Position],
    indices: Option<&[u32]>,
    _: Mode,
    vert_nb: usize,
  ) -> Result<Self::TessRepr, TessError> {
    let mut st = self.state.borrow_mut();
    st.live_tess += 1;
    st.uploaded_indices = indices.map(<[u32]>::to_vec).unwrap_or_default();

    Ok(MockTess {
      vert_nb,
      state: self.state.clone(),
    })
  }

  unsafe fn render(&mut self, tess: &Self::TessRepr) {
    let mut st = self.state.borrow_mut();
    let program = st.current_program;
    st.draws.push((program, tess.vert_nb));
  }

  unsafe fn destroy_tess(tess: &mut Self::TessRepr) {
    tess.state.borrow_mut().live_tess -= 1;
  }
}

unsafe impl Pipeline for MockBackend {
  unsafe fn start_pipeline(&mut self, size: [u32; 2], state: &PipelineState) {
    let mut st = self.state.borrow_mut();
    st.pipelines += 1;
    st.viewport = state.viewport().rect(size);
    st.clear_color = state.clear_color().copied();
  }
}

#[derive(Debug)]
pub struct MockContext {
  backend: MockBackend,
}

impl MockContext {
  pub fn new() -> Self {
    MockContext {
      backend: MockBackend {
        state: Rc::new(RefCell::new(MockState::default())),
      },
    }
  }

  pub fn state(&self) -> Ref<'_, MockState> {
    self.backend.state.borrow()
  }
}

unsafe impl GraphicsContext for MockContext {
  type Backend = MockBackend;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.backend
  }
}
