//! In-memory driver used by the unit tests.

use std::collections::{HashMap, VecDeque};

use crate::backend::{GlError, InternalformatQuery};
use crate::config::QueryWidth;
use crate::format::InternalFormat;
use crate::glenum::{GLenum, GLint, GLint64};
use crate::pname::Pname;
use crate::target::Target;

type Key = (Target, InternalFormat, Pname);

/// Driver answering from a table.
///
/// Combinations without an answer leave the buffer untouched, as real drivers do for some
/// unsupported combinations.
#[derive(Debug, Default)]
pub(crate) struct FakeDriver {
  answers: HashMap<Key, Vec<GLint64>>,
  failures: HashMap<Key, GlError>,
  errors: VecDeque<GlError>,
  calls: Vec<(QueryWidth, Pname, usize)>,
}

impl FakeDriver {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn answer(
    &mut self,
    target: Target,
    format: InternalFormat,
    pname: Pname,
    values: &[GLint64],
  ) {
    self.answers.insert((target, format, pname), values.to_vec());
  }

  /// Make a combination raise `err` instead of answering.
  pub(crate) fn fail(&mut self, target: Target, format: InternalFormat, pname: Pname, err: GlError) {
    self.failures.insert((target, format, pname), err);
  }

  pub(crate) fn push_error(&mut self, err: GlError) {
    self.errors.push_back(err);
  }

  /// Every query run so far: width, pname and buffer size.
  pub(crate) fn calls(&self) -> &[(QueryWidth, Pname, usize)] {
    &self.calls
  }

  fn query<T>(
    &mut self,
    width: QueryWidth,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [T],
    narrow: impl Fn(GLint64) -> T,
  ) {
    let key = match (
      Target::from_glenum(target),
      InternalFormat::from_glenum(internalformat),
      Pname::from_glenum(pname),
    ) {
      (Some(t), Some(f), Some(p)) => (t, f, p),
      _ => {
        self.errors.push_back(GlError::InvalidEnum);
        return;
      }
    };

    self.calls.push((width, key.2, params.len()));

    if let Some(err) = self.failures.get(&key) {
      self.errors.push_back(*err);
      return;
    }

    if let Some(values) = self.answers.get(&key) {
      for (slot, value) in params.iter_mut().zip(values) {
        *slot = narrow(*value);
      }
    }
  }
}

unsafe impl InternalformatQuery for FakeDriver {
  fn internalformat_iv(
    &mut self,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [GLint],
  ) {
    self.query(
      QueryWidth::Bits32,
      target,
      internalformat,
      pname,
      params,
      |v| v as GLint,
    );
  }

  fn internalformat_i64v(
    &mut self,
    target: GLenum,
    internalformat: GLenum,
    pname: GLenum,
    params: &mut [GLint64],
  ) {
    self.query(QueryWidth::Bits64, target, internalformat, pname, params, |v| v);
  }

  fn pop_error(&mut self) -> Option<GlError> {
    self.errors.pop_front()
  }
}
