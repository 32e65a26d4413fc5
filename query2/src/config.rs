//! Enumeration configuration.

use std::fmt;

use crate::pname::Pname;

/// Width of the integers a query writes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QueryWidth {
  /// `glGetInternalformativ`, 32-bit results.
  Bits32,
  /// `glGetInternalformati64v`, 64-bit results.
  Bits64,
}

impl fmt::Display for QueryWidth {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      QueryWidth::Bits32 => f.write_str("32 bit"),
      QueryWidth::Bits64 => f.write_str("64 bit"),
    }
  }
}

/// What to enumerate.
///
/// You may want to start with `default()` and tweak it with the setters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
  pname: Option<Pname>,
  both_widths: bool,
  filter_supported: bool,
}

impl Default for Config {
  /// Defaults:
  ///
  /// - every pname;
  /// - 64-bit queries only;
  /// - no filtering.
  fn default() -> Self {
    Config {
      pname: None,
      both_widths: false,
      filter_supported: false,
    }
  }
}

impl Config {
  /// Restrict the enumeration to a single pname. Pass `None` to enumerate all of them.
  #[inline]
  pub fn set_pname<P>(self, pname: P) -> Self
  where
    P: Into<Option<Pname>>,
  {
    Config {
      pname: pname.into(),
      ..self
    }
  }

  /// The single pname to enumerate, if any.
  #[inline]
  pub fn pname(&self) -> Option<Pname> {
    self.pname
  }

  /// Query with both the 32-bit and the 64-bit entry points instead of the 64-bit one only.
  #[inline]
  pub fn set_both_widths(self, both_widths: bool) -> Self {
    Config {
      both_widths,
      ..self
    }
  }

  /// Whether both entry points are used.
  #[inline]
  pub fn both_widths(&self) -> bool {
    self.both_widths
  }

  /// Skip the internal formats `GL_INTERNALFORMAT_SUPPORTED` reports as unsupported.
  ///
  /// The filter applies to target / internal format pairs, whatever the pname.
  #[inline]
  pub fn set_filter_supported(self, filter_supported: bool) -> Self {
    Config {
      filter_supported,
      ..self
    }
  }

  /// Whether unsupported internal formats are skipped.
  #[inline]
  pub fn filter_supported(&self) -> bool {
    self.filter_supported
  }

  /// Pnames to visit, in table order.
  pub fn pnames(&self) -> impl Iterator<Item = Pname> + '_ {
    Pname::ALL
      .iter()
      .copied()
      .filter(move |&p| self.pname.map_or(true, |only| only == p))
  }

  /// Widths to visit for each pname, in order.
  pub fn widths(&self) -> &'static [QueryWidth] {
    if self.both_widths {
      &[QueryWidth::Bits32, QueryWidth::Bits64]
    } else {
      &[QueryWidth::Bits64]
    }
  }
}
