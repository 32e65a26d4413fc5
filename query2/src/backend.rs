//! Backend interface.
//!
//! A backend is whatever answers `glGetInternalformat*v` calls: a real driver, through the
//! `query2-gl` crate, or a fake one in tests. Backends are not required to be cheap to call, but
//! they must be synchronous: once a method returns, the buffer holds the answer.

use std::error;
use std::fmt;

use crate::glenum::{GLenum, GLint, GLint64};

/// Error reported by `glGetError`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GlError {
  /// `GL_INVALID_ENUM`.
  InvalidEnum,
  /// `GL_INVALID_VALUE`.
  InvalidValue,
  /// `GL_INVALID_OPERATION`.
  InvalidOperation,
  /// `GL_STACK_OVERFLOW`.
  StackOverflow,
  /// `GL_STACK_UNDERFLOW`.
  StackUnderflow,
  /// `GL_OUT_OF_MEMORY`.
  OutOfMemory,
  /// `GL_INVALID_FRAMEBUFFER_OPERATION`.
  InvalidFramebufferOperation,
  /// Any other non-zero error code.
  Unknown(GLenum),
}

impl GlError {
  /// Map a `glGetError` code to an error.
  ///
  /// `GL_NO_ERROR` maps to `None`.
  pub fn from_glenum(code: GLenum) -> Option<Self> {
    match code {
      0 => None,
      0x0500 => Some(GlError::InvalidEnum),
      0x0501 => Some(GlError::InvalidValue),
      0x0502 => Some(GlError::InvalidOperation),
      0x0503 => Some(GlError::StackOverflow),
      0x0504 => Some(GlError::StackUnderflow),
      0x0505 => Some(GlError::OutOfMemory),
      0x0506 => Some(GlError::InvalidFramebufferOperation),
      _ => Some(GlError::Unknown(code)),
    }
  }
}

impl fmt::Display for GlError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      GlError::InvalidEnum => f.write_str("invalid enumerant"),
      GlError::InvalidValue => f.write_str("invalid value"),
      GlError::InvalidOperation => f.write_str("invalid operation"),
      GlError::StackOverflow => f.write_str("stack overflow"),
      GlError::StackUnderflow => f.write_str("stack underflow"),
      GlError::OutOfMemory => f.write_str("out of memory"),
      GlError::InvalidFramebufferOperation => f.write_str("invalid framebuffer operation"),
      GlError::Unknown(code) => write!(f, "unknown error {:#06x}", code),
    }
  }
}

impl error::Error for GlError {}

/// Backends able to answer internal format queries.
///
/// # Unsafety
///
/// Implementors must never write past the end of the `params` slices: the slice length is the
/// `bufSize` argument of the underlying call.
pub unsafe trait InternalformatQuery {
  /// `glGetInternalformativ`.
  fn internalformat_iv(
    &mut self,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [GLint],
  );

  /// `glGetInternalformati64v`.
  fn internalformat_i64v(
    &mut self,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [GLint64],
  );

  /// Pop the oldest pending error, if any.
  fn pop_error(&mut self) -> Option<GlError>;
}

/// Drain the pending errors of a backend, logging each of them.
///
/// `context` describes what was being done when the errors were raised. Returns `true` if at least
/// one error was pending.
pub fn check_errors<B>(backend: &mut B, context: fmt::Arguments) -> bool
where
  B: ?Sized + InternalformatQuery,
{
  let mut found = false;

  while let Some(err) = backend.pop_error() {
    log::warn!("GL error ({}): {}", context, err);
    found = true;
  }

  found
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fake::FakeDriver;

  #[test]
  fn error_codes() {
    assert_eq!(GlError::from_glenum(0), None);
    assert_eq!(GlError::from_glenum(0x0500), Some(GlError::InvalidEnum));
    assert_eq!(GlError::from_glenum(0x0506), Some(GlError::InvalidFramebufferOperation));
    assert_eq!(GlError::from_glenum(0x9999), Some(GlError::Unknown(0x9999)));
  }

  #[test]
  fn check_errors_drains_everything() {
    let mut driver = FakeDriver::new();
    driver.push_error(GlError::InvalidEnum);
    driver.push_error(GlError::InvalidOperation);

    assert!(check_errors(&mut driver, format_args!("test")));
    assert!(!check_errors(&mut driver, format_args!("test")));
  }
}
