use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DtsfixError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source and destination are the same file: {path}")]
    SamePathTransform { path: PathBuf },
}
