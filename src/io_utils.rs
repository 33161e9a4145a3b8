use std::fmt;
use std::io;
use std::path::Path;

use crate::error::DotdashError;

/// Error shown to the user by a binary: one line of text, plus the error it
/// came from for `RUST_LOG=debug` runs.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    fn with_source<E>(msg: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        tracing::debug!(error = ?source, "{msg}");
        Self {
            msg,
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Describe a failed file operation and what to try next.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    let hint = match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check the file permissions.",
        io::ErrorKind::InvalidData => {
            "Text and Morse files must be UTF-8; re-save the file as UTF-8."
        }
        _ => "Check the path and available disk space.",
    };
    format!("Error {} '{}': {}. {}", operation, path.display(), err, hint)
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError::with_source(format_io_error(operation, path, &err), err)
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn dotdash_cli_error(context: &str, err: DotdashError) -> CliError {
    CliError::with_source(format!("{}: {}", context, cli_hint(&err)), err)
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &DotdashError) -> String {
    use DotdashError::*;
    match err {
        Config(msg) => format!("{msg}. Fix or remove the configuration file."),
        InvalidMode(m) => format!("unknown separator mode '{m}'. Use 'slash' or 'seven-space'."),
        InvalidDirection(d) => {
            format!("unknown direction '{d}'. Use 'text-to-morse' or 'morse-to-text'.")
        }
        Json(e) => format!("{e}. Check the configuration file syntax."),
        Io(io) => format!("{io}"),
    }
}

/// Install the stderr log subscriber used by every binary.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so stdout only
/// ever carries converted output.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
