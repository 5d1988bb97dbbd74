use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Anything reaching `main` ends the process with exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
