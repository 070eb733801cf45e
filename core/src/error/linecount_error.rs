// core/src/error/linecount_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineCountError {
    #[error("ERROR: Could not open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error after {bytes_read} bytes")]
    Read {
        bytes_read: u64,
        #[source]
        source: std::io::Error,
    },
}
