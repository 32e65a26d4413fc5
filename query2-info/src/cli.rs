//! Command line options.

use query2::{Config, Pname};
use std::ffi::OsString;
use std::io::{self, Write};
use structopt::{clap, StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(
  name = "query2-info",
  about = "Print the GL_ARB_internalformat_query2 answers of the driver, one line per query.",
  after_help = "The single-dash `-pname <pname>` spelling is accepted as `--pname <pname>`."
)]
pub struct CliOpts {
  #[structopt(short, long)]
  /// Only query this pname (numeric value, 0x-prefixed hex value or name, e.g. GL_SAMPLES).
  pname: Option<Pname>,

  #[structopt(short, long = "both")]
  /// Query with both the 32-bit and the 64-bit entry points (64-bit only otherwise).
  both: bool,

  #[structopt(short, long)]
  /// Skip internal formats that are not supported for the target.
  filter_supported: bool,

  #[structopt(short, long)]
  /// List the pnames that can be passed to --pname.
  list_pnames: bool,
}

impl CliOpts {
  /// Parse the command line.
  ///
  /// `-pname` is read as `--pname`; clap would otherwise split it into `-p name`.
  pub fn parse<I, T>(args: I) -> Result<Self, clap::Error>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
  {
    Self::from_iter_safe(args.into_iter().map(|arg| {
      let arg = arg.into();

      if arg.to_str() == Some("-pname") {
        OsString::from("--pname")
      } else {
        arg
      }
    }))
  }

  /// Whether only the pname listing was asked for.
  pub fn list_pnames(&self) -> bool {
    self.list_pnames
  }

  /// Enumeration configuration selected by the flags.
  pub fn config(&self) -> Config {
    Config::default()
      .set_pname(self.pname)
      .set_both_widths(self.both)
      .set_filter_supported(self.filter_supported)
  }
}

pub fn show_pnames<W>(out: &mut W) -> io::Result<()>
where
  W: ?Sized + Write,
{
  writeln!(out, "available pnames:")?;

  for pname in Pname::ALL {
    writeln!(out, "  - {} ({:#06x})", pname, pname.to_glenum())?;
  }

  out.flush()
}
