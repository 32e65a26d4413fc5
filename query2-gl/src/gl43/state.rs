//! Graphics state.

use gl::types::*;
use std::cell::RefCell;
use std::error;
use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_char;

// TLS synchronization barrier for `GLState`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

/// The graphics state.
///
/// This type represents the current state of a given graphics context. Driver strings are read
/// lazily and cached, as they never change for the lifetime of a context.
#[derive(Debug)]
pub struct GLState {
  _a: PhantomData<*const ()>, // !Send and !Sync

  // driver information
  vendor_name: Option<String>,
  renderer_name: Option<String>,
  gl_version: Option<String>,
  glsl_version: Option<String>,
  extensions: Option<Vec<String>>,
}

impl GLState {
  /// Create a new `GLState`.
  ///
  /// > Note: keep in mind you can create only one per thread.
  pub(crate) fn new() -> Result<Self, StateQueryError> {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      let mut inner = rc.borrow_mut();

      match *inner {
        Some(_) => {
          inner.take();
          Self::get_from_context()
        }

        None => Err(StateQueryError::UnavailableGLState),
      }
    })
  }

  /// Get a `GLState` from the current OpenGL context.
  fn get_from_context() -> Result<Self, StateQueryError> {
    if !gl::GetInternalformativ::is_loaded() {
      return Err(StateQueryError::MissingEntryPoint("glGetInternalformativ"));
    }

    if !gl::GetInternalformati64v::is_loaded() {
      return Err(StateQueryError::MissingEntryPoint("glGetInternalformati64v"));
    }

    Ok(GLState {
      _a: PhantomData,
      vendor_name: None,
      renderer_name: None,
      gl_version: None,
      glsl_version: None,
      extensions: None,
    })
  }

  pub(crate) fn get_vendor_name(&mut self) -> Option<String> {
    self.vendor_name.as_ref().cloned().or_else(|| {
      let name = unsafe { get_string(gl::VENDOR)? };
      self.vendor_name = Some(name);
      self.vendor_name.clone()
    })
  }

  pub(crate) fn get_renderer_name(&mut self) -> Option<String> {
    self.renderer_name.as_ref().cloned().or_else(|| {
      let name = unsafe { get_string(gl::RENDERER)? };
      self.renderer_name = Some(name);
      self.renderer_name.clone()
    })
  }

  pub(crate) fn get_gl_version(&mut self) -> Option<String> {
    self.gl_version.as_ref().cloned().or_else(|| {
      let version = unsafe { get_string(gl::VERSION)? };
      self.gl_version = Some(version);
      self.gl_version.clone()
    })
  }

  pub(crate) fn get_glsl_version(&mut self) -> Option<String> {
    self.glsl_version.as_ref().cloned().or_else(|| {
      let version = unsafe { get_string(gl::SHADING_LANGUAGE_VERSION)? };
      self.glsl_version = Some(version);
      self.glsl_version.clone()
    })
  }

  /// Get the extensions advertised by the context.
  ///
  /// Cache the list on the first call and then re-use it for later calls.
  pub(crate) fn get_extensions(&mut self) -> &[String] {
    self.extensions.get_or_insert_with(|| {
      let extensions = unsafe { get_ctx_extensions() };
      log::debug!("{} extensions advertised", extensions.len());
      extensions
    })
  }
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// The [`GLState`] object is unavailable.
  ///
  /// That might occur if the current thread doesn’t support allocating a new graphics state. It
  /// might happen if you try to have more than one state on the same thread, for instance.
  UnavailableGLState,
  /// An entry point the backend needs wasn’t loaded.
  MissingEntryPoint(&'static str),
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
      StateQueryError::MissingEntryPoint(ref name) => {
        write!(f, "missing OpenGL entry point: {}", name)
      }
    }
  }
}

impl error::Error for StateQueryError {}

unsafe fn get_string(name: GLenum) -> Option<String> {
  let ptr = gl::GetString(name);

  if ptr.is_null() {
    None
  } else {
    let s = CStr::from_ptr(ptr as *const c_char);
    Some(s.to_string_lossy().into_owned())
  }
}

unsafe fn get_ctx_extensions() -> Vec<String> {
  let mut count: GLint = 0;
  gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut count);

  (0..count.max(0) as GLuint)
    .filter_map(|i| {
      let ptr = gl::GetStringi(gl::EXTENSIONS, i);

      if ptr.is_null() {
        None
      } else {
        let s = CStr::from_ptr(ptr as *const c_char);
        Some(s.to_string_lossy().into_owned())
      }
    })
    .collect()
}
