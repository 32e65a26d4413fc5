//! The query descriptor.
//!
//! [`QueryData`] hides the fact there are two nearly identical entry points whose only difference
//! is the width of the integers they write. The entry point to use is picked by the element type
//! of the result buffer; see [`ResultElem`].

use std::mem;

use crate::backend::{check_errors, InternalformatQuery};
use crate::config::QueryWidth;
use crate::format::InternalFormat;
use crate::glenum::{GLint, GLint64, GL_TRUE};
use crate::pname::Pname;
use crate::target::Target;

/// Number of slots of the result buffer used by the enumeration.
///
/// `GL_SAMPLES` is the only pname writing more than one value; no driver reports that many
/// sample counts.
pub const PARAMS_SIZE: usize = 64;

/// Element of a result buffer.
///
/// Each implementor knows which entry point fills a buffer of its type.
pub trait ResultElem: Copy + Default {
  /// Width of the entry point this element selects.
  const WIDTH: QueryWidth;

  /// Run the query, filling `params`.
  fn fetch<B>(
    backend: &mut B,
    target: Target,
    format: InternalFormat,
    pname: Pname,
    params: &mut [Self],
  )
  where
    B: ?Sized + InternalformatQuery;

  /// Widen to the common 64-bit representation.
  fn widen(self) -> GLint64;

  /// Narrow from the common 64-bit representation, truncating if needed.
  fn narrow(value: GLint64) -> Self;
}

impl ResultElem for GLint {
  const WIDTH: QueryWidth = QueryWidth::Bits32;

  fn fetch<B>(
    backend: &mut B,
    target: Target,
    format: InternalFormat,
    pname: Pname,
    params: &mut [Self],
  )
  where
    B: ?Sized + InternalformatQuery,
  {
    backend.internalformat_iv(
      target.to_glenum(),
      format.to_glenum(),
      pname.to_glenum(),
      params,
    );
  }

  fn widen(self) -> GLint64 {
    self.into()
  }

  fn narrow(value: GLint64) -> Self {
    value as GLint
  }
}

impl ResultElem for GLint64 {
  const WIDTH: QueryWidth = QueryWidth::Bits64;

  fn fetch<B>(
    backend: &mut B,
    target: Target,
    format: InternalFormat,
    pname: Pname,
    params: &mut [Self],
  )
  where
    B: ?Sized + InternalformatQuery,
  {
    backend.internalformat_i64v(
      target.to_glenum(),
      format.to_glenum(),
      pname.to_glenum(),
      params,
    );
  }

  fn widen(self) -> GLint64 {
    self
  }

  fn narrow(value: GLint64) -> Self {
    value
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Params {
  Bits32(Vec<GLint>),
  Bits64(Vec<GLint64>),
}

impl Params {
  fn new(width: QueryWidth, size: usize) -> Self {
    match width {
      QueryWidth::Bits32 => Params::Bits32(vec![0; size]),
      QueryWidth::Bits64 => Params::Bits64(vec![0; size]),
    }
  }

  fn width(&self) -> QueryWidth {
    match self {
      Params::Bits32(_) => GLint::WIDTH,
      Params::Bits64(_) => GLint64::WIDTH,
    }
  }

  fn len(&self) -> usize {
    match self {
      Params::Bits32(p) => p.len(),
      Params::Bits64(p) => p.len(),
    }
  }
}

/// Query descriptor.
///
/// Owns the result buffer of a single target / internal format / pname combination and knows
/// which entry point fills it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryData {
  params: Params,
}

impl QueryData {
  /// Create a descriptor using `width` queries, with `size` zeroed slots.
  pub fn new(width: QueryWidth, size: usize) -> Self {
    QueryData {
      params: Params::new(width, size),
    }
  }

  /// Width of the active entry point.
  pub fn width(&self) -> QueryWidth {
    self.params.width()
  }

  /// Number of slots.
  pub fn len(&self) -> usize {
    self.params.len()
  }

  /// Whether the buffer has no slot at all.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Size in bytes of a single slot.
  pub fn elem_size(&self) -> usize {
    match self.params {
      Params::Bits32(_) => mem::size_of::<GLint>(),
      Params::Bits64(_) => mem::size_of::<GLint64>(),
    }
  }

  /// Switch to the other entry point.
  ///
  /// The buffer is reallocated (and zeroed) with the same number of slots. Nothing happens if
  /// `width` is already the active one.
  pub fn set_width(&mut self, width: QueryWidth) {
    if self.width() != width {
      self.params = Params::new(width, self.len());
    }
  }

  /// Run the query for a given combination, overwriting the buffer.
  ///
  /// The whole buffer is handed to the driver; how many slots it writes depends on the pname.
  pub fn execute<B>(
    &mut self,
    backend: &mut B,
    target: Target,
    format: InternalFormat,
    pname: Pname,
  )
  where
    B: ?Sized + InternalformatQuery,
  {
    match self.params {
      Params::Bits32(ref mut p) => GLint::fetch(backend, target, format, pname, p),
      Params::Bits64(ref mut p) => GLint64::fetch(backend, target, format, pname, p),
    }
  }

  /// Value of a slot, widened to 64 bits.
  ///
  /// An out-of-range index is logged and yields `-1`.
  pub fn value_at(&self, index: usize) -> GLint64 {
    let value = match self.params {
      Params::Bits32(ref p) => p.get(index).map(|v| v.widen()),
      Params::Bits64(ref p) => p.get(index).copied(),
    };

    value.unwrap_or_else(|| {
      log::error!(
        "invalid index {} while reading a {}-slot result buffer",
        index,
        self.len()
      );
      -1
    })
  }

  /// Overwrite a slot. 32-bit buffers keep the low 32 bits of `value`.
  ///
  /// An out-of-range index is logged and leaves the buffer untouched.
  pub fn set_value_at(&mut self, index: usize, value: GLint64) {
    let len = self.len();
    let written = match self.params {
      Params::Bits32(ref mut p) => write_slot(p, index, value),
      Params::Bits64(ref mut p) => write_slot(p, index, value),
    };

    if !written {
      log::error!(
        "invalid index {} while writing a {}-slot result buffer",
        index,
        len
      );
    }
  }

  /// Whether `format` is supported for `target`, according to `GL_INTERNALFORMAT_SUPPORTED`.
  ///
  /// The query goes through a one-slot buffer of the same width; `self` is left untouched.
  pub fn is_supported<B>(&self, backend: &mut B, target: Target, format: InternalFormat) -> bool
  where
    B: ?Sized + InternalformatQuery,
  {
    let mut local = QueryData::new(self.width(), 1);
    local.execute(backend, target, format, Pname::InternalformatSupported);

    check_errors(
      backend,
      format_args!(
        "{}, {}, {}",
        Pname::InternalformatSupported,
        target,
        format
      ),
    );

    local.value_at(0) == GL_TRUE
  }

  /// Number of sample counts `GL_SAMPLES` reports for `target` and `format`.
  ///
  /// `None` if the `GL_NUM_SAMPLE_COUNTS` query raised an error. `self` is left untouched.
  pub fn num_sample_counts<B>(
    &self,
    backend: &mut B,
    target: Target,
    format: InternalFormat,
  ) -> Option<GLint64>
  where
    B: ?Sized + InternalformatQuery,
  {
    let mut local = QueryData::new(self.width(), 1);
    local.execute(backend, target, format, Pname::NumSampleCounts);

    let failed = check_errors(
      backend,
      format_args!("{}, {}, {}", Pname::NumSampleCounts, target, format),
    );

    if failed {
      None
    } else {
      Some(local.value_at(0))
    }
  }
}

fn write_slot<T>(params: &mut [T], index: usize, value: GLint64) -> bool
where
  T: ResultElem,
{
  match params.get_mut(index) {
    Some(slot) => {
      *slot = T::narrow(value);
      true
    }
    None => false,
  }
}
