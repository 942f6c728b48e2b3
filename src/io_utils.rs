use std::fmt;
use std::io;
use std::path::Path;

use crate::BingoError;

/// Error reported by the `bingo` binary: a user facing message plus the
/// underlying cause.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file must be UTF-8 encoded text.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn bingo_cli_error(context: &str, err: BingoError) -> CliError {
    match err {
        BingoError::WordFile { path, source } => io_cli_error("reading words file", &path, source),
        err => CliError {
            msg: format!("{}: {}", context, cli_hint(&err)),
            source: Some(Box::new(err)),
        },
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &BingoError) -> String {
    use crate::BingoError::*;
    match err {
        WordFile { path, source } => format_io_error("reading words file", path, source),
        Config(msg) => format!("{msg}. Adjust --card-size or --num-cards."),
        Render(msg) => format!("{msg}. This is a bug."),
        Io(io) => format!("{io}"),
    }
}
