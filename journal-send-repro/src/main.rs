//! Submits one two-field record (opaque binary payload + `MESSAGE=` text
//! annotation) to the journal as a single vectorized write and exits with
//! the transport's status.
//!
//! Run with `--length 512` to cross the historically failing payload size,
//! then inspect the record with `journalctl --reverse --output=verbose`.

use std::path::PathBuf;

use clap::Parser;
use journal_send::{DEFAULT_ANNOTATION, JournalSocket, SYSTEM_SOCKET, assemble, load};
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "journal-send-repro")]
#[command(about = "Submit a binary payload and a MESSAGE field to the journal as one record")]
struct Args {
    /// Payload file; only the first LENGTH bytes are used
    #[arg(long, default_value = "graph.bytes")]
    payload: PathBuf,

    /// Exact number of payload bytes to read and submit
    #[arg(short = 'n', long, default_value_t = 511, value_parser = clap::value_parser!(u64).range(1..))]
    length: u64,

    /// KEY=VALUE text field submitted after the payload
    #[arg(long, default_value = DEFAULT_ANNOTATION, value_parser = parse_annotation)]
    annotation: String,

    /// Journal endpoint to submit to
    #[arg(long, default_value = SYSTEM_SOCKET)]
    socket: PathBuf,
}

fn parse_annotation(raw: &str) -> Result<String, String> {
    if !raw.is_ascii() {
        return Err(String::from("annotation must be ASCII"));
    }
    match raw.find('=') {
        Some(idx) if idx > 0 => Ok(raw.to_string()),
        _ => Err(String::from("annotation must have the form KEY=VALUE")),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();
}

fn run(args: &Args) -> i32 {
    let payload = match load(&args.payload, args.length as usize) {
        Ok(payload) => payload,
        Err(err) => {
            error!("{}", err);
            return err.exit_status();
        }
    };

    let entry = assemble(payload, &args.annotation);
    info!(
        fields = entry.len(),
        wire_bytes = entry.wire_len(),
        "assembled entry"
    );

    let submission = JournalSocket::connect(&args.socket).and_then(|socket| socket.submit(&entry));

    match submission {
        Ok(()) => {
            info!(socket = %args.socket.display(), "entry accepted by transport");
            0
        }
        Err(err) => {
            error!("{}", err);
            err.exit_status()
        }
    }
}

fn main() {
    init_logging();
    let args = Args::parse();
    std::process::exit(run(&args));
}
