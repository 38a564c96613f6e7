//! cappa - render a JSON node tree to HTML

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cappa::model::Renderable;
use cappa::{json, render_with_diagnostics, Diagnostic, Rendered};

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

#[derive(Parser)]
#[command(name = "cappa")]
#[command(version, about = "Render a JSON node tree to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    cappa page.json              Render to stdout
    cappa page.json -o page.html Render to a file
    cat page.json | cappa        Read the tree from stdin")]
struct Cli {
  /// JSON tree to render; stdin when absent or `-`
  #[arg(value_name = "INPUT")]
  input: Option<PathBuf>,

  /// Write HTML here instead of stdout
  #[arg(short, long, value_name = "OUTPUT")]
  output: Option<PathBuf>,

  /// Fail when any part of the tree had to be dropped
  #[arg(long)]
  strict: bool,

  /// Print dropped subtrees as JSON lines on stderr
  #[arg(long)]
  report: bool,

  /// Log at debug level regardless of RUST_LOG
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  // --verbose forces debug, otherwise RUST_LOG or warn
  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();

  let status = execute(&cli, io::stdin().lock(), &mut io::stdout(), &mut io::stderr());
  ExitCode::from(status)
}

/// Runs the command and turns its outcome into an exit status. The HTML is
/// written before `--strict` decides the status.
fn execute(cli: &Cli, stdin: impl Read, stdout: &mut impl Write, stderr: &mut impl Write) -> u8 {
  match run(cli, stdin, stdout, stderr) {
    Ok(rendered) if cli.strict && !rendered.is_clean() => {
      let count = rendered.diagnostics.len();
      report_error(stderr, format!("{} part(s) of the tree could not be rendered", count));
      FAILURE
    }
    Ok(_) => SUCCESS,
    Err(e) => {
      report_error(stderr, e);
      FAILURE
    }
  }
}

fn report_error(stderr: &mut impl Write, message: impl Display) {
  // stderr is the last channel left, a failure here has nowhere to go
  let _ = writeln!(stderr, "error: {message}");
}

fn run(
  cli: &Cli,
  stdin: impl Read,
  stdout: &mut impl Write,
  stderr: &mut impl Write,
) -> cappa::Result<Rendered> {
  let tree = read_tree(cli.input.as_deref(), stdin)?;

  tracing::debug!(input = ?cli.input, "rendering tree");
  let rendered = render_with_diagnostics(tree);

  match &cli.output {
    Some(path) => std::fs::write(path, &rendered.html)?,
    None => {
      stdout.write_all(rendered.html.as_bytes())?;
      stdout.flush()?;
    }
  }

  if cli.report {
    write_report(&rendered.diagnostics, stderr)?;
  }

  Ok(rendered)
}

/// Reads from `input`, or from `stdin` when there is no path or it is `-`.
fn read_tree(input: Option<&Path>, stdin: impl Read) -> cappa::Result<Renderable<'static>> {
  match input {
    Some(path) if path.as_os_str() != "-" => json::from_reader(BufReader::new(File::open(path)?)),
    _ => json::from_reader(stdin),
  }
}

/// One JSON object per line.
fn write_report(diagnostics: &[Diagnostic], out: &mut impl Write) -> io::Result<()> {
  for diagnostic in diagnostics {
    serde_json::to_writer(&mut *out, diagnostic)?;
    writeln!(out)?;
  }

  Ok(())
}
