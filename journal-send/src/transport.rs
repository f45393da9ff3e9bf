use std::io::{self, IoSlice};
use std::os::fd::AsRawFd;
use std::os::unix::net::UnixDatagram;
use std::path::Path;

use nix::sys::socket::{MsgFlags, UnixAddr, sendmsg};
use tracing::debug;

use crate::entry::Entry;
use crate::error::{Result, SendError};

/// journald's native protocol endpoint.
pub const SYSTEM_SOCKET: &str = "/run/systemd/journal/socket";

const RECORD_SEPARATOR: &[u8] = b"\n";

/// A connected datagram socket to a journal endpoint.
///
/// One submission is one datagram: the kernel either accepts the whole field
/// vector or reports an error, so there is no partial-write state to track
/// and nothing is ever retried.
#[derive(Debug)]
pub struct JournalSocket {
    socket: UnixDatagram,
}

impl JournalSocket {
    /// Connects to the host journal at [`SYSTEM_SOCKET`].
    pub fn system() -> Result<Self> {
        Self::connect(SYSTEM_SOCKET)
    }

    /// Connects to an arbitrary journal endpoint.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let socket = UnixDatagram::unbound().map_err(SendError::Transport)?;
        socket
            .connect(path.as_ref())
            .map_err(SendError::Transport)?;
        Ok(Self { socket })
    }

    /// Submits every field of `entry` as one vectorized write.
    ///
    /// Each field occupies its own iovec, followed by a one-byte record
    /// separator; field contents go out verbatim, with no re-encoding. The
    /// entry must carry at least one field.
    pub fn submit(&self, entry: &Entry) -> Result<()> {
        debug_assert!(!entry.is_empty());

        let mut iov = Vec::with_capacity(entry.len() * 2);
        for field in entry.fields() {
            iov.push(IoSlice::new(field.as_bytes()));
            iov.push(IoSlice::new(RECORD_SEPARATOR));
        }

        let sent = sendmsg::<UnixAddr>(
            self.socket.as_raw_fd(),
            &iov,
            &[],
            MsgFlags::empty(),
            None,
        )
        .map_err(|errno| SendError::Transport(io::Error::from(errno)))?;

        if sent != entry.wire_len() {
            return Err(SendError::Transport(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("transport accepted {sent} of {} bytes", entry.wire_len()),
            )));
        }

        debug!(fields = entry.len(), bytes = sent, "entry submitted");

        Ok(())
    }
}
