use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("failed to open input file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("header '{column}' not found in input file '{}'", .path.display())]
    HeaderNotFound { column: String, path: PathBuf },

    #[error("file '{}' has multiple columns with header '{column}'", .path.display())]
    AmbiguousHeader { path: PathBuf, column: String },
}
