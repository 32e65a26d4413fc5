//! GL scalar types and token tables.
//!
//! Every table in this crate (pnames, targets, internal formats and returned tokens) is declared
//! with the same macro, so that each entry carries both its numeric value and its canonical `GL_*`
//! name. [`enum_name`] is the reverse lookup used when printing enum-valued answers.

use std::borrow::Cow;

use crate::format::InternalFormat;
use crate::pname::Pname;
use crate::target::Target;
use crate::token::Token;

/// OpenGL enumeration value.
pub type GLenum = u32;

/// 32-bit OpenGL integer, as filled by `glGetInternalformativ`.
pub type GLint = i32;

/// 64-bit OpenGL integer, as filled by `glGetInternalformati64v`.
pub type GLint64 = i64;

/// `GL_TRUE`.
pub const GL_TRUE: GLint64 = 1;

/// Declare a table of GL tokens.
///
/// Each entry reads `Variant = value => "GL_NAME"`. The generated type gets the `ALL` table (in
/// declaration order), conversions from and to [`GLenum`] and its GL name.
macro_rules! gl_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $($variant:ident = $value:literal => $gl_name:literal),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum $name {
      $(
        #[doc = $gl_name]
        $variant,
      )*
    }

    impl $name {
      /// Every entry of the table, in declaration order.
      pub const ALL: &'static [$name] = &[$($name::$variant),*];

      /// Numeric GL value.
      pub fn to_glenum(self) -> $crate::glenum::GLenum {
        match self {
          $($name::$variant => $value),*
        }
      }

      /// Look an entry up by its numeric GL value.
      pub fn from_glenum(value: $crate::glenum::GLenum) -> Option<Self> {
        match value {
          $($value => Some($name::$variant),)*
          _ => None,
        }
      }

      /// Canonical `GL_*` name.
      pub fn name(self) -> &'static str {
        match self {
          $($name::$variant => $gl_name),*
        }
      }
    }

    impl ::std::fmt::Display for $name {
      fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        f.write_str(self.name())
      }
    }
  };
}

/// Name of a GL value returned by a query.
///
/// Internal formats are looked up first (`GL_INTERNALFORMAT_PREFERRED` answers with one, and the
/// pixel formats `GL_RED`, `GL_RGBA`, etc. live there too), then the other returned tokens, then
/// targets and pnames. Values no table knows are printed in hexadecimal, or in decimal when they
/// don’t fit a [`GLenum`] (the `-1` reference value of untouched buffers, for instance).
pub fn enum_name(value: GLint64) -> Cow<'static, str> {
  let name = GLenum::try_from(value).ok().and_then(|e| {
    InternalFormat::from_glenum(e)
      .map(InternalFormat::name)
      .or_else(|| Token::from_glenum(e).map(Token::name))
      .or_else(|| Target::from_glenum(e).map(Target::name))
      .or_else(|| Pname::from_glenum(e).map(Pname::name))
  });

  match name {
    Some(name) => Cow::Borrowed(name),
    None if (0..=GLenum::MAX as GLint64).contains(&value) => Cow::Owned(format!("{:#06x}", value)),
    None => Cow::Owned(value.to_string()),
  }
}
