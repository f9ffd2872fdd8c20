//! Error types for case construction.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Case directory already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error(
        "Optional parameters [{}] were given but the reference directory has no .mesa template files",
        .names.join(", ")
    )]
    UnmatchedParameters { names: Vec<String> },

    #[error(
        "Optional parameters [{}] were not found in any .mesa template file",
        .names.join(", ")
    )]
    UnusedParameters { names: Vec<String> },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type CaseResult<T> = Result<T, CaseError>;

pub(crate) trait IoContext<T> {
    fn at(self, path: &std::path::Path) -> CaseResult<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: &std::path::Path) -> CaseResult<T> {
        self.map_err(|source| CaseError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
