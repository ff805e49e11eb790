//! # trigon windowing
//!
//! This is the base, abstract crate for windowing common types in trigon. The `trigon` crate
//! abstracts over a graphics API but doesn’t give you a way to create a context, since creating and
//! managing contexts is tightly related to the type of application you target. Crates such as
//! `trigon-glfw` solve that problem, and they all take their settings from the types defined here:
//!
//! - [`WindowDim`]: abstraction over the dimension of a window and its mode (windowed, fullscreen).
//! - [`WindowOpt`]: hints customizing the window integration, such as multisampling or the swap
//!   interval.

#![deny(missing_docs)]

/// Dimension metrics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowDim {
  /// Windowed mode.
  Windowed {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
  /// Fullscreen mode, using the primary monitor resolution.
  Fullscreen,
}

/// Different window options.
///
/// Feel free to look at the different methods available to tweak the options. You may want to start
/// with `default()` though.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowOpt {
  dim: WindowDim,
  num_samples: Option<u32>,
  vsync: bool,
}

impl Default for WindowOpt {
  /// Defaults:
  ///
  /// - `dim` set to `WindowDim::Windowed { width: 800, height: 800 }`.
  /// - `num_samples` set to `None`.
  /// - `vsync` set to `true`.
  fn default() -> Self {
    WindowOpt {
      dim: WindowDim::Windowed {
        width: 800,
        height: 800,
      },
      num_samples: None,
      vsync: true,
    }
  }
}

impl WindowOpt {
  /// Set the dimension of the window.
  #[inline]
  pub fn set_dim(self, dim: WindowDim) -> Self {
    WindowOpt { dim, ..self }
  }

  /// Get the dimension of the window.
  #[inline]
  pub fn dim(&self) -> &WindowDim {
    &self.dim
  }

  /// Set the number of samples to use for multisampling.
  ///
  /// Pass `None` to disable multisampling.
  #[inline]
  pub fn set_num_samples<S>(self, samples: S) -> Self
  where
    S: Into<Option<u32>>,
  {
    WindowOpt {
      num_samples: samples.into(),
      ..self
    }
  }

  /// Get the number of samples to use in multisampling, if any.
  #[inline]
  pub fn num_samples(&self) -> Option<u32> {
    self.num_samples
  }

  /// Synchronize buffer swaps with the display refresh.
  #[inline]
  pub fn set_vsync(self, vsync: bool) -> Self {
    WindowOpt { vsync, ..self }
  }

  /// Whether buffer swaps are synchronized with the display refresh.
  #[inline]
  pub fn vsync(&self) -> bool {
    self.vsync
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let opt = WindowOpt::default();

    assert_eq!(
      *opt.dim(),
      WindowDim::Windowed {
        width: 800,
        height: 800
      }
    );
    assert_eq!(opt.num_samples(), None);
    assert!(opt.vsync());
  }

  #[test]
  fn setters_keep_other_fields() {
    let opt = WindowOpt::default()
      .set_num_samples(4)
      .set_dim(WindowDim::Fullscreen)
      .set_vsync(false);

    assert_eq!(*opt.dim(), WindowDim::Fullscreen);
    assert_eq!(opt.num_samples(), Some(4));
    assert!(!opt.vsync());

    let opt = opt.set_num_samples(None);
    assert_eq!(opt.num_samples(), None);
    assert_eq!(*opt.dim(), WindowDim::Fullscreen);
  }
}
