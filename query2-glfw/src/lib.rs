//! [GLFW](https://crates.io/crates/glfw) context creation for `query2`.
//!
//! Internal format queries don’t render anything, but they still need a current OpenGL context.
//! [`GlfwSurface`] opens a (hidden, by default) window, binds its context to the current thread,
//! loads the OpenGL entry points and acquires a [`GL43`] backend out of it.

#![deny(missing_docs)]

use glfw::{Context as _, Glfw, InitError, Window, WindowMode};
pub use query2_gl::gl43::StateQueryError;
use query2_gl::GL43;
use std::{error, fmt, os::raw::c_void};

/// Surface options.
///
/// The defaults are enough to query a desktop driver; use the `set_*` methods to tweak them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SurfaceOpt {
  gl_version: (u32, u32),
  size: (u32, u32),
  visible: bool,
}

impl Default for SurfaceOpt {
  /// Defaults:
  ///
  /// - `gl_version` set to `(3, 3)`.
  /// - `size` set to `(64, 64)`.
  /// - `visible` set to `false`.
  fn default() -> Self {
    SurfaceOpt {
      gl_version: (3, 3),
      size: (64, 64),
      visible: false,
    }
  }
}

impl SurfaceOpt {
  /// Minimum OpenGL version to ask for, as `(major, minor)`.
  ///
  /// A core, forward-compatible profile is always requested.
  #[inline]
  pub fn set_gl_version(self, major: u32, minor: u32) -> Self {
    SurfaceOpt {
      gl_version: (major, minor),
      ..self
    }
  }

  /// Get the requested OpenGL version.
  #[inline]
  pub fn gl_version(&self) -> (u32, u32) {
    self.gl_version
  }

  /// Size of the window, in screen coordinates.
  #[inline]
  pub fn set_size(self, width: u32, height: u32) -> Self {
    SurfaceOpt {
      size: (width.max(1), height.max(1)),
      ..self
    }
  }

  /// Get the window size.
  #[inline]
  pub fn size(&self) -> (u32, u32) {
    self.size
  }

  /// Whether the window should be shown.
  #[inline]
  pub fn set_visible(self, visible: bool) -> Self {
    SurfaceOpt { visible, ..self }
  }

  /// Get the window visibility.
  #[inline]
  pub fn visible(&self) -> bool {
    self.visible
  }
}

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum GlfwSurfaceError {
  /// Initialization of the surface went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// The window (and its OpenGL context) couldn’t be created.
  ///
  /// Most of the time, the driver doesn’t support the requested OpenGL version.
  WindowCreationError,

  /// The graphics state is not available.
  ///
  /// This error is generated when the initialization code is called on a thread on which the
  /// graphics state has already been acquired, or when the query entry points are missing.
  GraphicsStateError(StateQueryError),
}

impl fmt::Display for GlfwSurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlfwSurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      GlfwSurfaceError::WindowCreationError => f.write_str("failed to create window"),
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
      GlfwSurfaceError::WindowCreationError => None,
      GlfwSurfaceError::GraphicsStateError(e) => Some(e),
    }
  }
}

/// GLFW surface.
///
/// Holds the window whose context is current on the calling thread, and the backend answering
/// queries through that context. Dropping the surface destroys the context.
#[derive(Debug)]
pub struct GlfwSurface {
  /// Wrapped GLFW window.
  pub window: Window,

  /// OpenGL backend.
  backend: GL43,
}

impl GlfwSurface {
  /// Initialize GLFW and bind a fresh OpenGL context to the current thread.
  pub fn new(title: &str, opt: SurfaceOpt) -> Result<Self, GlfwSurfaceError> {
    // the callback only logs; failures come back as `Err`
    let mut glfw = glfw::init(glfw::LOG_ERRORS)?;
    let (major, minor) = opt.gl_version();

    // OpenGL hints
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
      glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(major));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(minor));
    glfw.window_hint(glfw::WindowHint::Visible(opt.visible()));

    let mut window = create_window(&mut glfw, title, opt)?;
    window.make_current();

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    let backend = GL43::new()?;
    log::debug!("OpenGL {}.{} context acquired", major, minor);

    Ok(GlfwSurface { window, backend })
  }

  /// Access the backend.
  pub fn backend(&mut self) -> &mut GL43 {
    &mut self.backend
  }
}

fn create_window(glfw: &mut Glfw, title: &str, opt: SurfaceOpt) -> Result<Window, GlfwSurfaceError> {
  let (width, height) = opt.size();

  // events are never polled; the receiver is dropped right away
  glfw
    .create_window(width, height, title, WindowMode::Windowed)
    .map(|(window, _events_rx)| window)
    .ok_or(GlfwSurfaceError::WindowCreationError)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_surface_is_hidden_core_3_3() {
    let opt = SurfaceOpt::default();

    assert_eq!(opt.gl_version(), (3, 3));
    assert!(!opt.visible());
  }

  #[test]
  fn surface_opt_builder() {
    let opt = SurfaceOpt::default()
      .set_gl_version(4, 6)
      .set_size(0, 16)
      .set_visible(true);

    assert_eq!(opt.gl_version(), (4, 6));
    assert_eq!(opt.size(), (1, 16));
    assert!(opt.visible());
  }

  #[test]
  fn surface_error_source() {
    use std::error::Error as _;

    let err = GlfwSurfaceError::from(StateQueryError::UnavailableGLState);
    assert!(err.source().is_some());
    assert_eq!(
      err.to_string(),
      "failed to get graphics state: unavailable graphics state"
    );
    assert!(GlfwSurfaceError::WindowCreationError.source().is_none());
  }
}
