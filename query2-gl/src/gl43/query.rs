//! Internal format query implementation for OpenGL 4.3.

use gl::types::*;
use query2::backend::{GlError, InternalformatQuery};

use crate::GL43;

// bufSize is a GLsizei; larger buffers are simply not advertised in full
fn buf_size<T>(params: &[T]) -> GLsizei {
  params.len().min(GLsizei::MAX as usize) as GLsizei
}

unsafe impl InternalformatQuery for GL43 {
  fn internalformat_iv(
    &mut self,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [GLint],
  ) {
    unsafe {
      gl::GetInternalformativ(
        target,
        internalformat,
        pname,
        buf_size(params),
        params.as_mut_ptr(),
      );
    }
  }

  fn internalformat_i64v(
    &mut self,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [GLint64],
  ) {
    unsafe {
      gl::GetInternalformati64v(
        target,
        internalformat,
        pname,
        buf_size(params),
        params.as_mut_ptr(),
      );
    }
  }

  fn pop_error(&mut self) -> Option<GlError> {
    GlError::from_glenum(unsafe { gl::GetError() })
  }
}
