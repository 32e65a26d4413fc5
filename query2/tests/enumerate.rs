use query2::backend::{GlError, InternalformatQuery};
use query2::report;
use query2::{Config, GLenum, GLint, GLint64, InternalFormat, Pname, Target};

// A driver supporting GL_RGBA8 on GL_TEXTURE_2D only, and rejecting GL_TEXTURE_BUFFER queries.
#[derive(Default)]
struct TinyDriver {
  errors: Vec<GlError>,
}

impl TinyDriver {
  fn answer(&mut self, target: GLenum, internalformat: GLenum, pname: GLenum) -> Option<GLint64> {
    if target == Target::TextureBuffer.to_glenum() {
      self.errors.push(GlError::InvalidOperation);
      return None;
    }

    let supported =
      target == Target::Texture2D.to_glenum() && internalformat == InternalFormat::Rgba8.to_glenum();

    match Pname::from_glenum(pname)? {
      Pname::InternalformatSupported => Some(supported as GLint64),
      Pname::InternalformatPreferred if supported => Some(internalformat.into()),
      Pname::InternalformatRedSize if supported => Some(8),
      _ => Some(0),
    }
  }
}

unsafe impl InternalformatQuery for TinyDriver {
  fn internalformat_iv(&mut self, target: GLenum, fmt: GLenum, pname: GLenum, p: &mut [GLint]) {
    if let (Some(v), Some(slot)) = (self.answer(target, fmt, pname), p.first_mut()) {
      *slot = v as GLint;
    }
  }

  fn internalformat_i64v(&mut self, target: GLenum, fmt: GLenum, pname: GLenum, p: &mut [GLint64]) {
    if let (Some(v), Some(slot)) = (self.answer(target, fmt, pname), p.first_mut()) {
      *slot = v;
    }
  }

  fn pop_error(&mut self) -> Option<GlError> {
    self.errors.pop()
  }
}

fn run(config: Config) -> (String, report::Summary) {
  let mut driver = TinyDriver::default();
  let mut out = Vec::new();
  let summary = report::run(&mut driver, &config, &mut out).expect("write to memory");

  (String::from_utf8(out).expect("utf-8 output"), summary)
}

#[test]
fn every_line_has_five_fields() {
  let (text, summary) = run(Config::default().set_pname(Pname::InternalformatPreferred));

  assert_eq!(summary.printed, text.lines().count());

  for line in text.lines() {
    let fields: Vec<_> = line.splitn(5, ", ").collect();
    assert_eq!(fields.len(), 5, "{}", line);
    assert_eq!(fields[0], "64 bit");
    assert_eq!(fields[1], "GL_INTERNALFORMAT_PREFERRED");
    assert!(fields[4].starts_with('"') && fields[4].ends_with('"'), "{}", line);
  }

  assert!(text.contains("64 bit, GL_INTERNALFORMAT_PREFERRED, GL_TEXTURE_2D, GL_RGBA8, \"GL_RGBA8\"\n"));
  assert!(text.contains("64 bit, GL_INTERNALFORMAT_PREFERRED, GL_TEXTURE_3D, GL_RGBA8, \"GL_NONE\"\n"));
}

#[test]
fn errors_are_counted_per_combination() {
  let (_, summary) = run(Config::default().set_pname(Pname::InternalformatRedSize));

  assert_eq!(summary.failed, InternalFormat::ALL.len());
  assert_eq!(summary.printed, Target::ALL.len() * InternalFormat::ALL.len());
}

#[test]
fn filtering_keeps_supported_pairs_only() {
  let config = Config::default()
    .set_pname(Pname::InternalformatRedSize)
    .set_both_widths(true)
    .set_filter_supported(true);
  let (text, summary) = run(config);

  assert_eq!(
    text,
    "32 bit, GL_INTERNALFORMAT_RED_SIZE, GL_TEXTURE_2D, GL_RGBA8, \"8\"\n\
     64 bit, GL_INTERNALFORMAT_RED_SIZE, GL_TEXTURE_2D, GL_RGBA8, \"8\"\n"
  );
  assert_eq!(summary.printed, 2);
  assert_eq!(summary.failed, 0);
}
