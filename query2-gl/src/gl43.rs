//! OpenGL 4.3 backend.
//!
//! `glGetInternalformativ` and `glGetInternalformati64v` are core since OpenGL 4.3; older contexts
//! may still expose them through `GL_ARB_internalformat_query2`. The backend type is [`GL43`].

mod query;
mod state;

pub use self::state::GLState;
pub use self::state::StateQueryError;

/// Name of the extension the backend relies on.
pub const INTERNALFORMAT_QUERY2: &str = "GL_ARB_internalformat_query2";

/// An OpenGL 4.3 backend.
///
/// Only one backend can live on a given thread, and it must stay on the thread it was created on.
#[derive(Debug)]
pub struct GL43 {
  state: GLState,
}

impl GL43 {
  /// Create a new OpenGL 4.3 backend out of the current context.
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL43 { state })
  }

  /// The implementation author, most of the time referred to as “vendor” or “company” responsible
  /// for the driver.
  pub fn vendor_name(&mut self) -> Option<String> {
    self.state.get_vendor_name()
  }

  /// The renderer name.
  pub fn renderer_name(&mut self) -> Option<String> {
    self.state.get_renderer_name()
  }

  /// The OpenGL version string.
  pub fn gl_version(&mut self) -> Option<String> {
    self.state.get_gl_version()
  }

  /// The shading language version string.
  pub fn glsl_version(&mut self) -> Option<String> {
    self.state.get_glsl_version()
  }

  /// Whether the context advertises the `name` extension.
  pub fn has_extension(&mut self, name: &str) -> bool {
    self.state.get_extensions().iter().any(|ext| ext == name)
  }

  /// Whether internal format queries are available.
  ///
  /// The extension is listed by every driver implementing it, including the OpenGL 4.3+ ones.
  pub fn supports_internalformat_query2(&mut self) -> bool {
    self.has_extension(INTERNALFORMAT_QUERY2)
  }
}
