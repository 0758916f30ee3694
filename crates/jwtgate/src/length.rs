//! Length declarations for caller-supplied byte fields
//!
//! Callers describe every byte field with the data plus a declared length.
//! Declaring zero asks for the length to be taken from the data itself. Rust
//! slices already carry their length, so inference uses the slice end and
//! never scans for a terminator: embedded zero bytes in binary key material
//! are kept as data.

/// Declared length of a byte field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Length {
    /// Take the length from the data
    #[default]
    Infer,
    /// Use exactly this many bytes, even when zero
    Exact(usize),
}

impl Length {
    /// Resolve the declaration against the bytes it describes
    ///
    /// An `Exact` length is returned verbatim, including when it exceeds
    /// `bytes.len()`; see [`Length::fits`].
    pub const fn resolve(&self, bytes: &[u8]) -> usize {
        match self {
            Length::Infer => bytes.len(),
            Length::Exact(length) => *length,
        }
    }

    /// Whether the resolved length stays within `bytes`
    pub const fn fits(&self, bytes: &[u8]) -> bool {
        self.resolve(bytes) <= bytes.len()
    }

    /// The bytes covered by this declaration, or `None` when it overruns them
    pub fn slice<'a>(&self, bytes: &'a [u8]) -> Option<&'a [u8]> {
        bytes.get(..self.resolve(bytes))
    }
}

impl From<usize> for Length {
    /// `0` means inference, matching the caller convention for textual data.
    fn from(length: usize) -> Self {
        match length {
            0 => Length::Infer,
            length => Length::Exact(length),
        }
    }
}
