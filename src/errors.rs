use crate::frontend::FrontendError;
use crate::interpreter::RuntimeError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IoError: cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io { .. } => 66,
            Error::Frontend(_) => 65,
            Error::Runtime(_) => 70,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
