extern crate ansi_term;
use ansi_term::Style;
use bf::error;
use bf::lang::Error;
use bf::mach::{Event, Program, Runtime};
use clap::Parser;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Fetches per call to `Runtime::execute`.
const CYCLES: usize = 100_000;

#[derive(Parser, Debug)]
#[command(name = "bf", version, about = "Brainfuck Interpreter")]
struct Cli {
    /// Path to the program to run
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);
    if let Err(error) = main_loop(&cli.file) {
        eprintln!("{}", error_line(&error, io::stderr().is_terminal()));
        std::process::exit(1);
    }
}

/// Bold only when a terminal will render it.
fn error_line(error: &Error, styled: bool) -> String {
    let line = format!("?{}", error);
    if styled {
        Style::new().bold().paint(line).to_string()
    } else {
        line
    }
}

/// Logs go to stderr so they never mix with program output.
/// `RUST_LOG` overrides the default filter.
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug { "bf=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn main_loop(path: &Path) -> Result<(), Error> {
    let mut runtime = Runtime::new(Program::open(path)?)?;
    info!("running {}", path.display());
    let stdin = io::stdin();
    let mut input = stdin.lock().bytes();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let result = loop {
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(byte) => {
                if let Err(e) = output.write_all(&[byte]) {
                    break Err(io_error(e));
                }
            }
            Event::Input => {
                if let Err(e) = output.flush() {
                    break Err(io_error(e));
                }
                match input.next() {
                    Some(Ok(byte)) => runtime.enter(Some(byte)),
                    Some(Err(e)) => break Err(io_error(e)),
                    None => runtime.enter(None),
                }
            }
            Event::Error(error) => break Err(error),
            Event::Stopped => break Ok(()),
        }
    };
    debug!("stopped at {}", runtime.pc());
    let flushed = output.flush().map_err(io_error);
    result.and(flushed)
}

fn io_error(e: io::Error) -> Error {
    error!(DiskIoError; e.to_string())
}
