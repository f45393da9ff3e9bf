use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status when the payload file cannot be opened or read.
pub const OPEN_FAILURE_STATUS: i32 = 201;

/// Exit status when the payload file holds fewer bytes than requested.
pub const SHORT_READ_STATUS: i32 = 202;

/// Exit status when a transport error carries no OS errno.
pub const TRANSPORT_FALLBACK_STATUS: i32 = 203;

#[derive(Error, Debug)]
pub enum SendError {
    /// The payload file is missing or unreadable.
    #[error("failed to read payload file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The payload file ran out before the requested length was reached.
    #[error("short read: {actual} bytes available, {expected} requested")]
    ShortRead { expected: usize, actual: usize },

    /// The journal endpoint rejected or could not accept the write.
    #[error("journal transport error: {0}")]
    Transport(#[from] io::Error),
}

impl SendError {
    /// Process exit status for this error.
    ///
    /// Load failures map to the reserved statuses 201/202, above the Linux
    /// errno range. Transport failures surface the raw errno reported by the
    /// socket layer, unmodified.
    pub fn exit_status(&self) -> i32 {
        match self {
            SendError::Open { .. } => OPEN_FAILURE_STATUS,
            SendError::ShortRead { .. } => SHORT_READ_STATUS,
            SendError::Transport(err) => err
                .raw_os_error()
                .filter(|&code| code != 0)
                .unwrap_or(TRANSPORT_FALLBACK_STATUS),
        }
    }
}

/// Create a specialized Result type for the harness
pub type Result<T> = std::result::Result<T, SendError>;
