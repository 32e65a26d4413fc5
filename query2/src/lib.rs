//! # Internal format capability dumps
//!
//! This crate drives the `GL_ARB_internalformat_query2` entry points over every combination of
//! _pname_, _target_ and _internal format_ it knows about and turns each answer into a single line
//! of comma-separated text. It is a conformance and debugging aid: diffing two dumps of two drivers
//! (or of the 32-bit and 64-bit entry points of the same driver) is the intended use.
//!
//! The crate doesn’t talk to OpenGL itself. Instead, it expects a _backend_ implementing
//! [`backend::InternalformatQuery`]. The `query2-gl` crate provides one for real drivers; tests use
//! an in-memory fake.
//!
//! # What’s included?
//!
//! - **Static tables**: [`Pname`], [`Target`] and [`InternalFormat`] list every identifier the
//!   enumeration visits, along with their GL names. [`Token`] names the other values a query can
//!   return (component types, image classes, view classes, etc.).
//! - **The query descriptor**: [`QueryData`] owns the result buffer and selects the 32-bit or the
//!   64-bit entry point.
//! - **Result interpretation**: each pname has a static [`ValueShape`] deciding whether its answer
//!   is an integer, a boolean, a GL enum or a list of sample counts.
//! - **The enumeration loop**: [`report::run`] walks the tables according to a [`Config`] and writes
//!   one [`Record`] per combination.

#![deny(missing_docs)]

#[macro_use]
pub mod glenum;

pub mod backend;
pub mod config;
pub mod format;
pub mod pname;
pub mod query;
pub mod report;
pub mod target;
pub mod token;

pub use crate::backend::{GlError, InternalformatQuery};
pub use crate::config::{Config, QueryWidth};
pub use crate::format::InternalFormat;
pub use crate::glenum::{enum_name, GLenum, GLint, GLint64};
pub use crate::pname::{Pname, PnameParseError, ValueShape};
pub use crate::query::{QueryData, ResultElem, PARAMS_SIZE};
pub use crate::report::{Record, Summary, Value};
pub use crate::target::Target;
pub use crate::token::Token;

#[cfg(test)]
pub(crate) mod fake;
