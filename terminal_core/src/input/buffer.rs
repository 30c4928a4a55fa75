use heapless::Vec;

/// Outcome of [`LineBuffer::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppendResult {
    /// The byte was stored.
    Accepted,
    /// The buffer was full; the byte was discarded.
    Dropped,
}

/// A fixed-size, heapless byte buffer accumulating one line of input.
///
/// `LineBuffer` never grows: once `RX` bytes are stored, further bytes are dropped
/// until the buffer is reset. Truncation is the overflow policy, not an error.
///
/// # Type Parameters
/// - `RX`: The maximum line length (buffer size).
pub struct LineBuffer<const RX: usize> {
    bytes: Vec<u8, RX>,
}

impl<const RX: usize> LineBuffer<RX> {
    /// Creates a new, empty `LineBuffer`.
    ///
    /// # Example
    /// ```
    /// let buf: LineBuffer<8> = LineBuffer::new();
    /// assert!(buf.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Appends a byte at the end of the line.
    ///
    /// Returns [`AppendResult::Dropped`] without touching the contents when the
    /// buffer is already full.
    ///
    /// # Example
    /// ```
    /// let mut buf: LineBuffer<1> = LineBuffer::new();
    /// assert_eq!(buf.append(b'a'), AppendResult::Accepted);
    /// assert_eq!(buf.append(b'b'), AppendResult::Dropped);
    /// ```
    pub fn append(&mut self, byte: u8) -> AppendResult {
        match self.bytes.push(byte) {
            Ok(()) => AppendResult::Accepted,
            Err(_) => AppendResult::Dropped,
        }
    }

    /// Clears the buffer. Always succeeds.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Returns the accumulated bytes.
    pub fn contents(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the accumulated bytes as a string slice.
    ///
    /// The dispatcher only stores printable ASCII, so this is normally the whole
    /// line. Should anything else have been appended, the longest valid UTF-8 prefix
    /// is returned.
    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.bytes) {
            Ok(line) => line,
            Err(e) => core::str::from_utf8(&self.bytes[..e.valid_up_to()]).unwrap_or(""),
        }
    }

    /// Returns the current length of the line.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no byte is stored.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` once `RX` bytes are stored.
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    /// Returns the buffer capacity, `RX`.
    pub const fn capacity(&self) -> usize {
        RX
    }
}

impl<const RX: usize> Default for LineBuffer<RX> {
    /// Returns a new, empty `LineBuffer`.
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS =======================
