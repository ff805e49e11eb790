//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for `trigon`. The only
//! backend so far is [`GL33`], targeting OpenGL 3.3 core profile contexts.
//!
//! Backends don’t create contexts: the OpenGL symbols must be loaded (with [`gl::load_with`])
//! and a context made current on the calling thread before a backend is created. Crates such as
//! `trigon-glfw` do that for you.

#[cfg(feature = "gl33")]
pub mod gl33;

#[cfg(feature = "gl33")]
pub use gl33::GL33;
