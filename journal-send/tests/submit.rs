//! Scenario tests for the load → assemble → submit sequence.
//!
//! Tests cover:
//! - Exact-length and short-read payload loading
//! - Wire layout of the two-field record
//! - Transport status propagation when the endpoint is absent

use std::io::ErrorKind;
use std::os::unix::net::UnixDatagram;
use std::path::PathBuf;

use journal_send::{
    DEFAULT_ANNOTATION, JournalSocket, OPEN_FAILURE_STATUS, SHORT_READ_STATUS, SendError,
    assemble, load,
};
use rand::Rng;
use tempfile::TempDir;

/// A bound datagram socket standing in for the journal endpoint.
struct Endpoint {
    dir: TempDir,
    socket: UnixDatagram,
}

impl Endpoint {
    fn bind() -> Self {
        let dir = TempDir::new().unwrap();
        let socket = UnixDatagram::bind(dir.path().join("journal.socket")).unwrap();
        socket.set_nonblocking(true).unwrap();
        Self { dir, socket }
    }

    fn path(&self) -> PathBuf {
        self.dir.path().join("journal.socket")
    }

    /// Drains every datagram the endpoint has received so far.
    fn datagrams(&self) -> Vec<Vec<u8>> {
        let mut received = Vec::new();
        let mut buf = vec![0u8; 64 * 1024];
        loop {
            match self.socket.recv(&mut buf) {
                Ok(n) => received.push(buf[..n].to_vec()),
                Err(err) if err.kind() == ErrorKind::WouldBlock => break,
                Err(err) => panic!("recv failed: {err}"),
            }
        }
        received
    }
}

fn payload_file(dir: &TempDir, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join("graph.bytes");
    std::fs::write(&path, bytes).unwrap();
    path
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random()).collect()
}

#[test]
fn accepted_at_511_with_the_expected_wire_layout() {
    let dir = TempDir::new().unwrap();
    let bytes = random_bytes(511);
    let path = payload_file(&dir, &bytes);
    let endpoint = Endpoint::bind();

    let payload = load(&path, 511).unwrap();
    let entry = assemble(payload, DEFAULT_ANNOTATION);
    let socket = JournalSocket::connect(endpoint.path()).unwrap();
    socket.submit(&entry).unwrap();

    let datagrams = endpoint.datagrams();
    assert_eq!(datagrams.len(), 1);

    // 511 payload bytes + '\n' + 21 annotation bytes + '\n', fields in order.
    let datagram = &datagrams[0];
    assert_eq!(datagram.len(), entry.wire_len());
    assert_eq!(datagram.len(), 511 + 1 + 21 + 1);
    assert_eq!(&datagram[..511], &bytes[..]);
    assert_eq!(datagram[511], b'\n');
    assert_eq!(&datagram[512..533], DEFAULT_ANNOTATION.as_bytes());
    assert_eq!(datagram[533], b'\n');
}

#[test]
fn short_read_at_512_submits_nothing() {
    let dir = TempDir::new().unwrap();
    let path = payload_file(&dir, &random_bytes(511));
    let endpoint = Endpoint::bind();

    let err = load(&path, 512).unwrap_err();

    match &err {
        SendError::ShortRead { expected, actual } => {
            assert_eq!(*expected, 512);
            assert_eq!(*actual, 511);
        }
        other => panic!("expected ShortRead, got {other:?}"),
    }
    assert_eq!(err.exit_status(), SHORT_READ_STATUS);
    assert_eq!(endpoint.datagrams().len(), 0);
}

#[test]
fn transport_accepts_both_sides_of_the_boundary() {
    // The defect boundary is unverified, so nothing in the harness may
    // hard-assume 511 or 512; the transport has to take either.
    let endpoint = Endpoint::bind();
    let socket = JournalSocket::connect(endpoint.path()).unwrap();

    for len in [510usize, 511, 512, 513] {
        let dir = TempDir::new().unwrap();
        let path = payload_file(&dir, &random_bytes(len));

        let payload = load(&path, len).unwrap();
        let entry = assemble(payload, DEFAULT_ANNOTATION);
        socket.submit(&entry).unwrap();

        let datagrams = endpoint.datagrams();
        assert_eq!(datagrams.len(), 1);
        assert_eq!(datagrams[0].len(), len + 1 + DEFAULT_ANNOTATION.len() + 1);
    }
}

#[test]
fn resubmitting_an_identical_entry_is_accepted_again() {
    let endpoint = Endpoint::bind();
    let socket = JournalSocket::connect(endpoint.path()).unwrap();
    let entry = assemble(random_bytes(511), DEFAULT_ANNOTATION);

    socket.submit(&entry).unwrap();
    socket.submit(&entry).unwrap();

    let datagrams = endpoint.datagrams();
    assert_eq!(datagrams.len(), 2);
    assert_eq!(datagrams[0], datagrams[1]);
}

#[test]
fn unreachable_endpoint_surfaces_the_transport_errno() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("no-such.socket");

    let err = JournalSocket::connect(&absent).unwrap_err();

    let status = err.exit_status();
    assert_eq!(status, nix::errno::Errno::ENOENT as i32);
    assert_ne!(status, OPEN_FAILURE_STATUS);
    assert_ne!(status, SHORT_READ_STATUS);
}

#[test]
fn missing_payload_file_uses_the_reserved_open_status() {
    let dir = TempDir::new().unwrap();

    let err = load(dir.path().join("absent.bytes"), 511).unwrap_err();

    assert_eq!(err.exit_status(), OPEN_FAILURE_STATUS);
    assert_ne!(err.exit_status(), SHORT_READ_STATUS);
}
