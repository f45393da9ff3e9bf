use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{Result, SendError};

/// Reads exactly `expected` bytes from the start of `path`.
///
/// The returned buffer always holds `expected` bytes; a file with fewer
/// bytes available is a fatal [`SendError::ShortRead`] carrying the count
/// actually read, so nothing downstream ever sees a partially filled buffer.
/// The file handle is released on every return path.
pub fn load(path: impl AsRef<Path>, expected: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let open_failure = |source| SendError::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(open_failure)?;

    let mut buffer = vec![0u8; expected];
    let mut filled = 0;

    while filled < expected {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(open_failure(err)),
        }
    }

    if filled != expected {
        return Err(SendError::ShortRead {
            expected,
            actual: filled,
        });
    }

    Ok(buffer)
}
