use std::fmt;

/// Default text annotation submitted alongside the binary payload.
pub const DEFAULT_ANNOTATION: &str = "MESSAGE=TESTING BYTES";

/// One element of the submission vector.
///
/// The journal consumes fields positionally, so a field is nothing more than
/// an owned byte buffer whose length travels with it.
pub enum Field {
    /// Opaque payload bytes, submitted without a textual key.
    Binary(Vec<u8>),
    /// A short ASCII `KEY=VALUE` annotation.
    Text(String),
}

impl Field {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Field::Binary(bytes) => bytes,
            Field::Text(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Binary(bytes) => write!(f, "Binary({} bytes)", bytes.len()),
            Field::Text(text) => write!(f, "Text({text:?})"),
        }
    }
}

/// An ordered list of fields, written to the journal as one record.
#[derive(Debug, Default)]
pub struct Entry {
    fields: Vec<Field>,
}

impl Entry {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of bytes one submission of this entry puts on the wire: every
    /// field followed by a one-byte record separator.
    pub fn wire_len(&self) -> usize {
        self.fields.iter().map(|field| field.len() + 1).sum()
    }
}

/// Builds the two-field record under study: the opaque binary payload first,
/// the text annotation second.
///
/// The caller must hand in a successfully loaded payload and a non-empty
/// ASCII annotation of the form `KEY=VALUE`; violating either is a
/// programmer error, not a runtime failure.
pub fn assemble(payload: Vec<u8>, annotation: &str) -> Entry {
    debug_assert!(!payload.is_empty());
    debug_assert!(annotation.is_ascii());
    debug_assert!(annotation.find('=').is_some_and(|idx| idx > 0));

    let mut entry = Entry::new();
    entry.push(Field::Binary(payload));
    entry.push(Field::Text(annotation.to_string()));
    entry
}
