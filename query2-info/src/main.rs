//! Dump the `GL_ARB_internalformat_query2` answers of the driver.
//!
//! Every (pname, target, internal format) combination is queried and printed as one line:
//!
//! ```text
//! 64 bit, GL_INTERNALFORMAT_PREFERRED, GL_TEXTURE_2D, GL_RGBA8, "GL_RGBA8"
//! ```
//!
//! Set `RUST_LOG=info` to see driver information and a summary on stderr.

mod cli;

use cli::CliOpts;
use query2::{report, Config};
use query2_gl::gl43::INTERNALFORMAT_QUERY2;
use query2_glfw::{GlfwSurface, GlfwSurfaceError, SurfaceOpt};
use std::{
  env,
  io::{self, BufWriter, Write as _},
  process,
};

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let cli_opts = match CliOpts::parse(env::args_os()) {
    Ok(opts) => opts,
    Err(e) => {
      // help, version and invalid input all end here
      println!("{}", e.message);
      return;
    }
  };

  if cli_opts.list_pnames() {
    let stdout = io::stdout();
    let code = exit_code(cli::show_pnames(&mut stdout.lock()));
    process::exit(code);
  }

  process::exit(run(cli_opts.config()));
}

fn run(config: Config) -> i32 {
  let mut surface = match open_surface(GlfwSurface::new("query2-info", SurfaceOpt::default())) {
    Ok(surface) => surface,
    Err(code) => return code,
  };

  let backend = surface.backend();

  log::info!("vendor: {}", backend.vendor_name().unwrap_or_default());
  log::info!("renderer: {}", backend.renderer_name().unwrap_or_default());
  log::info!("OpenGL version: {}", backend.gl_version().unwrap_or_default());
  log::info!("GLSL version: {}", backend.glsl_version().unwrap_or_default());

  if !backend.supports_internalformat_query2() {
    println!("{} extension not found", INTERNALFORMAT_QUERY2);
    return 1;
  }

  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  let result = report::run(backend, &config, &mut out).and_then(|summary| {
    out.flush()?;
    Ok(summary)
  });

  match result {
    Ok(summary) => {
      log::info!(
        "{} lines printed, {} combinations filtered out, {} queries raised GL errors",
        summary.printed,
        summary.filtered,
        summary.failed
      );
      0
    }

    Err(e) => exit_code(Err(e)),
  }
}

/// Map a failed context creation to the process exit code.
fn open_surface(result: Result<GlfwSurface, GlfwSurfaceError>) -> Result<GlfwSurface, i32> {
  result.map_err(|e| {
    log::error!("cannot create an OpenGL context: {}", e);
    1
  })
}

fn exit_code(result: io::Result<()>) -> i32 {
  match result {
    Ok(()) => 0,

    // the reader went away (e.g. `| head`)
    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => 0,

    Err(e) => {
      log::error!("cannot write to stdout: {}", e);
      1
    }
  }
}
