//! # trigon
//!
//! A small, type-safe layer over a graphics API, sized for drawing a handful of triangles.
//!
//! The crate doesn’t talk to any graphics API by itself. Instead, it defines the shape of the
//! operations (compiling shader stages, linking programs, uploading geometry, running a pipeline)
//! and lets a _backend_ crate implement them. `trigon-gl` provides an OpenGL 3.3 backend and
//! `trigon-glfw` a way to get a window and a context to render into.
//!
//! # What’s included
//!
//! - [`shader`]: shader sources (literal or loaded from files), shader stages and the program
//!   builder, which compiles a vertex and a fragment stage and links them into a [`Program`].
//! - [`tess`]: tessellations, i.e. vertex positions and indices uploaded to the device and ready
//!   to be drawn.
//! - [`pipeline`]: the gates giving scoped access to a rendering pass.
//! - [`context`]: the [`GraphicsContext`] trait, the entry point of everything above.
//!
//! # On errors
//!
//! Nothing in this crate aborts the process: every operation that can fail (reading a shader file,
//! compiling a stage, linking a program, building a tessellation) returns a [`Result`] with a
//! dedicated error type.
//!
//! [`Program`]: crate::shader::Program
//! [`GraphicsContext`]: crate::context::GraphicsContext

#![deny(missing_docs)]

pub mod backend;
pub mod context;
pub mod pipeline;
pub mod shader;
pub mod tess;

#[cfg(test)]
mod mock;
