//! Newline counting over byte streams.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use crate::error::LineCountError;

const NEWLINE: u8 = b'\n';

/// Counts `0x0A` bytes in `reader` until end of stream.
///
/// Each iteration attempts a one-byte read and only then checks whether the
/// stream is exhausted, so the final count reflects bytes actually present.
pub fn count_newlines<R: Read>(reader: R) -> Result<u64, LineCountError> {
    let mut reader = BufReader::new(reader);
    let mut byte = [0u8; 1];
    let mut count: u64 = 0;
    let mut bytes_read: u64 = 0;

    loop {
        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                bytes_read += 1;
                if byte[0] == NEWLINE {
                    count += 1;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(LineCountError::Read { bytes_read, source }),
        }
    }

    tracing::debug!(target: "archtools.linecount", bytes_read, count, "stream exhausted");
    Ok(count)
}

/// Opens `path` read-only and counts its newlines. The handle is dropped on
/// every return path.
pub fn count_file(path: &Path) -> Result<u64, LineCountError> {
    let file = File::open(path).map_err(|source| LineCountError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(target: "archtools.linecount", path = %path.display(), "opened file");
    count_newlines(file)
}
