//! Result interpretation and the enumeration loop.
//!
//! Every combination yields one [`Record`], printed as a line of comma-separated text:
//!
//! ```text
//! 64 bit, GL_SAMPLES, GL_TEXTURE_2D_MULTISAMPLE, GL_RGBA8, "8,4,2,1"
//! ```
//!
//! The value is always quoted, as some pnames answer with several integers.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use crate::backend::{check_errors, InternalformatQuery};
use crate::config::{Config, QueryWidth};
use crate::format::InternalFormat;
use crate::glenum::{enum_name, GLint64};
use crate::pname::{Pname, ValueShape};
use crate::query::{QueryData, PARAMS_SIZE};
use crate::target::Target;

/// Interpreted answer of a query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
  /// Plain integers.
  Integers(Vec<GLint64>),
  /// GL token name.
  Name(Cow<'static, str>),
}

impl Value {
  /// Read the answer held by `data` according to the shape of `pname`.
  ///
  /// `data` must hold the result of the `target` / `format` / `pname` query. `GL_SAMPLES` needs
  /// a second query to know how many slots are meaningful; it goes through its own buffer.
  pub fn interpret<B>(
    backend: &mut B,
    data: &QueryData,
    target: Target,
    format: InternalFormat,
    pname: Pname,
  ) -> Self
  where
    B: ?Sized + InternalformatQuery,
  {
    let first = data.value_at(0);

    match pname.shape() {
      ValueShape::Integer => Value::Integers(vec![first]),

      ValueShape::SampleCounts => {
        let max = data.len().max(1) as GLint64;
        let count = data
          .num_sample_counts(backend, target, format)
          .unwrap_or(1)
          .clamp(1, max) as usize;

        Value::Integers((0..count).map(|i| data.value_at(i)).collect())
      }

      ValueShape::Boolean if first != 0 => Value::Name(Cow::Borrowed("GL_TRUE")),
      ValueShape::Boolean => Value::Name(Cow::Borrowed("GL_FALSE")),

      ValueShape::Enum if first == 0 => Value::Name(Cow::Borrowed("GL_NONE")),
      ValueShape::Enum => Value::Name(enum_name(first)),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("\"")?;

    match *self {
      Value::Integers(ref values) => {
        for (i, v) in values.iter().enumerate() {
          if i > 0 {
            f.write_str(",")?;
          }

          write!(f, "{}", v)?;
        }
      }

      Value::Name(ref name) => f.write_str(name)?,
    }

    f.write_str("\"")
  }
}

/// A printed combination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
  /// Entry point used.
  pub width: QueryWidth,
  /// Queried attribute.
  pub pname: Pname,
  /// Queried target.
  pub target: Target,
  /// Queried internal format.
  pub format: InternalFormat,
  /// Interpreted answer.
  pub value: Value,
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{}, {}, {}, {}, {}",
      self.width, self.pname, self.target, self.format, self.value
    )
  }
}

/// Counters of an enumeration run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
  /// Lines written.
  pub printed: usize,
  /// Combinations skipped because the internal format is not supported for the target.
  pub filtered: usize,
  /// Printed combinations whose query raised a GL error.
  pub failed: usize,
}

/// Enumerate every combination selected by `config`, writing one line per combination to `out`.
///
/// The walk goes pname by pname, then width, target and internal format. GL errors are logged and
/// counted but never stop the enumeration; only write errors do.
pub fn run<B, W>(backend: &mut B, config: &Config, out: &mut W) -> io::Result<Summary>
where
  B: ?Sized + InternalformatQuery,
  W: ?Sized + Write,
{
  let mut summary = Summary::default();
  let mut data = QueryData::new(QueryWidth::Bits64, PARAMS_SIZE);

  for pname in config.pnames() {
    for &width in config.widths() {
      data.set_width(width);

      for &target in Target::ALL {
        for &format in InternalFormat::ALL {
          if config.filter_supported() && !data.is_supported(backend, target, format) {
            log::debug!("skipping unsupported {} for {}", format, target);
            summary.filtered += 1;
            continue;
          }

          // some drivers leave params untouched for unsupported combinations
          data.set_value_at(0, -1);
          data.execute(backend, target, format, pname);

          let failed = check_errors(
            backend,
            format_args!("{}, {}, {}, {}", width, pname, target, format),
          );

          if failed {
            summary.failed += 1;
          }

          let value = Value::interpret(backend, &data, target, format, pname);
          let record = Record {
            width,
            pname,
            target,
            format,
            value,
          };

          writeln!(out, "{}", record)?;
          summary.printed += 1;
        }
      }
    }
  }

  Ok(summary)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::backend::GlError;
  use crate::fake::FakeDriver;

  fn run_to_string(driver: &mut FakeDriver, config: &Config) -> (Vec<String>, Summary) {
    let mut out = Vec::new();
    let summary = run(driver, config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    (text.lines().map(str::to_owned).collect(), summary)
  }

  fn interpret(driver: &mut FakeDriver, width: QueryWidth, pname: Pname) -> Value {
    let mut data = QueryData::new(width, PARAMS_SIZE);
    data.set_value_at(0, -1);
    data.execute(
      driver,
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      pname,
    );

    Value::interpret(
      driver,
      &data,
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      pname,
    )
  }

  #[test]
  fn integers() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::MaxWidth,
      &[16384],
    );

    let value = interpret(&mut driver, QueryWidth::Bits64, Pname::MaxWidth);
    assert_eq!(value, Value::Integers(vec![16384]));
    assert_eq!(value.to_string(), "\"16384\"");
  }

  #[test]
  fn untouched_integers_print_the_reference_value() {
    let mut driver = FakeDriver::new();
    let value = interpret(&mut driver, QueryWidth::Bits32, Pname::MaxHeight);

    assert_eq!(value.to_string(), "\"-1\"");
  }

  #[test]
  fn sample_counts() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::NumSampleCounts,
      &[4],
    );
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::Samples,
      &[8, 4, 2, 1, 99],
    );

    let value = interpret(&mut driver, QueryWidth::Bits32, Pname::Samples);
    assert_eq!(value, Value::Integers(vec![8, 4, 2, 1]));
    assert_eq!(value.to_string(), "\"8,4,2,1\"");
  }

  #[test]
  fn sample_counts_without_count() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::Samples,
      &[8, 4],
    );
    driver.fail(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::NumSampleCounts,
      GlError::InvalidOperation,
    );

    let value = interpret(&mut driver, QueryWidth::Bits64, Pname::Samples);
    assert_eq!(value, Value::Integers(vec![8]));
  }

  #[test]
  fn sample_counts_are_clamped_to_the_buffer() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::NumSampleCounts,
      &[1000],
    );

    match interpret(&mut driver, QueryWidth::Bits64, Pname::Samples) {
      Value::Integers(values) => assert_eq!(values.len(), PARAMS_SIZE),
      v => panic!("unexpected value {:?}", v),
    }
  }

  #[test]
  fn booleans() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::ColorRenderable,
      &[1],
    );
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::Mipmap,
      &[0],
    );

    let renderable = interpret(&mut driver, QueryWidth::Bits64, Pname::ColorRenderable);
    let mipmap = interpret(&mut driver, QueryWidth::Bits64, Pname::Mipmap);

    assert_eq!(renderable.to_string(), "\"GL_TRUE\"");
    assert_eq!(mipmap.to_string(), "\"GL_FALSE\"");
  }

  #[test]
  fn enums() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::FramebufferRenderable,
      &[0x82b7],
    );
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::InternalformatPreferred,
      &[0x8058],
    );
    driver.answer(
      Target::Texture2DMultisample,
      InternalFormat::Rgba8,
      Pname::TextureView,
      &[0],
    );

    let renderable = interpret(&mut driver, QueryWidth::Bits32, Pname::FramebufferRenderable);
    let preferred = interpret(&mut driver, QueryWidth::Bits32, Pname::InternalformatPreferred);
    let view = interpret(&mut driver, QueryWidth::Bits32, Pname::TextureView);

    assert_eq!(renderable.to_string(), "\"GL_FULL_SUPPORT\"");
    assert_eq!(preferred.to_string(), "\"GL_RGBA8\"");
    assert_eq!(view.to_string(), "\"GL_NONE\"");
  }

  #[test]
  fn record_line() {
    let record = Record {
      width: QueryWidth::Bits64,
      pname: Pname::Samples,
      target: Target::Renderbuffer,
      format: InternalFormat::Depth24Stencil8,
      value: Value::Integers(vec![4, 2]),
    };

    assert_eq!(
      record.to_string(),
      "64 bit, GL_SAMPLES, GL_RENDERBUFFER, GL_DEPTH24_STENCIL8, \"4,2\""
    );
  }

  #[test]
  fn full_enumeration_of_one_pname() {
    let mut driver = FakeDriver::new();
    let config = Config::default().set_pname(Pname::MaxWidth);
    let (lines, summary) = run_to_string(&mut driver, &config);

    let combinations = Target::ALL.len() * InternalFormat::ALL.len();
    assert_eq!(lines.len(), combinations);
    assert_eq!(summary.printed, combinations);
    assert_eq!(summary.filtered, 0);
    assert_eq!(
      lines[0],
      "64 bit, GL_MAX_WIDTH, GL_TEXTURE_1D, GL_DEPTH_COMPONENT, \"-1\""
    );
  }

  #[test]
  fn both_widths_run_32_bit_first() {
    let mut driver = FakeDriver::new();
    let config = Config::default()
      .set_pname(Pname::MaxLayers)
      .set_both_widths(true);
    let (lines, _) = run_to_string(&mut driver, &config);

    let combinations = Target::ALL.len() * InternalFormat::ALL.len();
    assert_eq!(lines.len(), 2 * combinations);
    assert!(lines[..combinations].iter().all(|l| l.starts_with("32 bit, ")));
    assert!(lines[combinations..].iter().all(|l| l.starts_with("64 bit, ")));
  }

  #[test]
  fn filter_supported_skips_unsupported_formats() {
    let mut driver = FakeDriver::new();
    driver.answer(
      Target::Texture2D,
      InternalFormat::Rgba8,
      Pname::InternalformatSupported,
      &[1],
    );
    driver.answer(
      Target::Renderbuffer,
      InternalFormat::Depth24Stencil8,
      Pname::InternalformatSupported,
      &[1],
    );
    driver.answer(
      Target::Texture2D,
      InternalFormat::Rgba8,
      Pname::TextureCompressed,
      &[0],
    );
    driver.answer(
      Target::Renderbuffer,
      InternalFormat::Depth24Stencil8,
      Pname::TextureCompressed,
      &[1],
    );

    let config = Config::default()
      .set_pname(Pname::TextureCompressed)
      .set_filter_supported(true);
    let (lines, summary) = run_to_string(&mut driver, &config);

    assert_eq!(
      lines,
      vec![
        "64 bit, GL_TEXTURE_COMPRESSED, GL_TEXTURE_2D, GL_RGBA8, \"GL_FALSE\"".to_owned(),
        "64 bit, GL_TEXTURE_COMPRESSED, GL_RENDERBUFFER, GL_DEPTH24_STENCIL8, \"GL_TRUE\""
          .to_owned(),
      ]
    );
    assert_eq!(summary.printed, 2);
    assert_eq!(
      summary.filtered,
      Target::ALL.len() * InternalFormat::ALL.len() - 2
    );
  }

  #[test]
  fn errors_do_not_stop_the_enumeration() {
    let mut driver = FakeDriver::new();
    driver.fail(
      Target::TextureBuffer,
      InternalFormat::Rgb9E5,
      Pname::ImageTexelSize,
      GlError::InvalidOperation,
    );
    driver.fail(
      Target::Texture3D,
      InternalFormat::R8,
      Pname::ImageTexelSize,
      GlError::InvalidEnum,
    );

    let config = Config::default().set_pname(Pname::ImageTexelSize);
    let (lines, summary) = run_to_string(&mut driver, &config);

    assert_eq!(lines.len(), Target::ALL.len() * InternalFormat::ALL.len());
    assert_eq!(summary.failed, 2);
  }
}
