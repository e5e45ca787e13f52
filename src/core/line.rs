//! Reusable line buffer.
//!
//! A [`Line`] holds the bytes of the current input line, including its
//! trailing newline when one was read. The same buffer is refilled on every
//! read so a run allocates only as much as its longest line needs.

/// Line delimiter.
pub const NEWLINE: u8 = b'\n';

/// One line of input, reused across reads.
///
/// The valid length is the length of the underlying `Vec`; its capacity may
/// be larger after a long line has been read and is never scanned.
///
/// # Examples
///
/// ```
/// use revline::core::Line;
///
/// let mut line = Line::from_bytes(b"hello\n");
/// line.reverse();
/// assert_eq!(line.as_bytes(), b"olleh\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Creates an empty line buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates an empty line buffer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a line holding a copy of `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Returns the valid bytes of the line.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of valid bytes, newline included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the allocated capacity of the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Returns true if the line ends with a newline.
    #[must_use]
    pub fn has_newline(&self) -> bool {
        self.bytes.last() == Some(&NEWLINE)
    }

    /// Number of bytes before the trailing newline.
    #[must_use]
    pub fn content_len(&self) -> usize {
        if self.has_newline() {
            self.len() - 1
        } else {
            self.len()
        }
    }

    /// Reverses the line's content in place, leaving a trailing newline last.
    ///
    /// Swaps bytes pairwise from both ends toward the middle, stopping
    /// before the newline. Only the valid length is touched, never the
    /// spare capacity. A line with no content bytes is left untouched.
    pub fn reverse(&mut self) {
        let end = self.content_len();
        self.bytes[..end].reverse();
    }

    /// Drops the current contents while keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Gives the reader access to the raw buffer for refilling.
    pub(crate) fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }
}
