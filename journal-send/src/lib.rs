//! Core of a repro harness for a journald vectorized-write boundary defect.
//!
//! systemd-journald accepts multi-field records through a single vectorized
//! write on its native protocol socket. Records that pair an opaque binary
//! payload field with a `MESSAGE=` text field are mishandled by the journal's
//! reader tooling at a particular payload size (observed failing at 512
//! bytes and passing at 511, root cause unconfirmed). This crate isolates
//! the submission path so that boundary can be probed deterministically:
//! load exactly N payload bytes, assemble the two-field record, submit it as
//! one datagram, and surface the transport's verdict unchanged.
//!
//! The crate deliberately does not parse or write journal files, and it does
//! not retry anything: masking a failure would defeat the point of the
//! harness.

pub mod entry;
pub mod error;
pub mod payload;
pub mod transport;

pub use entry::{DEFAULT_ANNOTATION, Entry, Field, assemble};
pub use error::{
    OPEN_FAILURE_STATUS, Result, SHORT_READ_STATUS, SendError, TRANSPORT_FALLBACK_STATUS,
};
pub use payload::load;
pub use transport::{JournalSocket, SYSTEM_SOCKET};
