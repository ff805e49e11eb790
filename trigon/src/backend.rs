//! Backend interfaces.
//!
//! This module defines the traits a backend must implement to be driven by the public API. They
//! are all `unsafe` to implement and to call: the public API is responsible for upholding the
//! ordering rules of the underlying graphics API (stages are alive while linking, a program is
//! never used after being destroyed, etc.).

pub mod pipeline;
pub mod shader;
pub mod tess;
