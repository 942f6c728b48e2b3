use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    /// The word list could not be opened, read or decoded as UTF-8.
    #[error("cannot read words file '{}': {source}", path.display())]
    WordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Card size or card count outside the accepted range.
    #[error("config error: {0}")]
    Config(String),

    /// Formatting the output document failed.
    #[error("render error: {0}")]
    Render(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for BingoError {
    fn from(err: std::fmt::Error) -> Self {
        BingoError::Render(err.to_string())
    }
}

impl From<serde_json::Error> for BingoError {
    fn from(err: serde_json::Error) -> Self {
        BingoError::Render(err.to_string())
    }
}
