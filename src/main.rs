use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use dotdash::io_utils::{dotdash_cli_error, init_logging, io_cli_error, simple_cli_error};
use dotdash::session::HELP;
use dotdash::{Command, Config, Direction, SeparatorMode, Session};

/// Convert each line read from stdin between text and Morse code.
///
/// Lines starting with ':' switch modes (see `:help`) and print the last
/// line again under the new settings; every other line is converted with the
/// current settings and printed.
#[derive(Parser)]
#[command(name = "dotdash", version)]
struct Args {
    /// JSON configuration file with `separator` and `direction`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Word separator: `slash` or `seven-space`
    #[arg(long)]
    separator: Option<SeparatorMode>,
    /// Starting direction: `text-to-morse` or `morse-to-text`
    #[arg(long)]
    direction: Option<Direction>,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => {
            Config::load(path).map_err(|e| dotdash_cli_error("loading configuration", e))?
        }
        None => Config::default(),
    };
    if let Some(separator) = args.separator {
        config.separator = separator;
    }
    if let Some(direction) = args.direction {
        config.direction = direction;
    }
    tracing::debug!(separator = %config.separator, direction = %config.direction, "starting session");

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| io_cli_error("reading", Path::new("<stdin>"), e))?;
        // Mode switches re-render the current buffer, as the form does when a
        // checkbox is clicked.
        let show = match Command::parse(&line) {
            Command::Input(text) => {
                session.update(&text);
                true
            }
            Command::SetMode(mode) => {
                session.set_separator_mode(mode);
                !session.buffer().is_empty()
            }
            Command::SetDirection(direction) => {
                session.set_direction(direction);
                !session.buffer().is_empty()
            }
            Command::ToggleMode => {
                session.toggle_separator_mode();
                !session.buffer().is_empty()
            }
            Command::ToggleDirection => {
                session.toggle_direction();
                !session.buffer().is_empty()
            }
            Command::Help => {
                eprintln!("{HELP}");
                false
            }
            Command::Quit => break,
        };
        if show {
            writeln!(out, "{}", session.output())
                .map_err(|e| simple_cli_error(&format!("writing output failed: {e}")))?;
        }
    }
    out.flush()?;
    Ok(())
}
