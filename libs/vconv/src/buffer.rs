use std::fmt;

/// Capacity of the inline buffer used by default-constructed text converters.
///
/// Holds any integer in any radix, `i128::MIN` in base 2 included. Longer
/// float output is truncated.
pub const DEFAULT_CAPACITY: usize = crate::text::radix_capacity(2);

/// Ownership mode of a [`ConversionBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMode {
    /// Inline storage reused by every call on the converter. No heap.
    SharedDefault,
    /// Heap storage allocated once at construction, freed on drop.
    Owned,
    /// Caller-provided region. Never freed by the converter.
    Borrowed,
}

/// Backing storage of a text converter.
///
/// Capacity counts the NUL terminator, so a buffer of `n` bytes holds at
/// most `n - 1` characters of text.
pub enum ConversionBuffer<'b> {
    SharedDefault([u8; DEFAULT_CAPACITY]),
    Owned(Box<[u8]>),
    Borrowed(&'b mut [u8]),
}

impl Default for ConversionBuffer<'_> {
    fn default() -> Self {
        Self::SharedDefault([0; DEFAULT_CAPACITY])
    }
}

impl<'b> ConversionBuffer<'b> {
    pub fn owned(capacity: usize) -> Self {
        Self::Owned(vec![0; capacity].into_boxed_slice())
    }

    pub fn borrowed(region: &'b mut [u8]) -> Self {
        Self::Borrowed(region)
    }

    pub fn mode(&self) -> BufferMode {
        match self {
            Self::SharedDefault(_) => BufferMode::SharedDefault,
            Self::Owned(_) => BufferMode::Owned,
            Self::Borrowed(_) => BufferMode::Borrowed,
        }
    }

    pub fn capacity(&self) -> usize {
        self.as_slice().len()
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::SharedDefault(buf) => &buf[..],
            Self::Owned(buf) => &buf[..],
            Self::Borrowed(buf) => &buf[..],
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::SharedDefault(buf) => &mut buf[..],
            Self::Owned(buf) => &mut buf[..],
            Self::Borrowed(buf) => &mut buf[..],
        }
    }

    /// Grow an owned buffer to at least `capacity` bytes, keeping its
    /// contents. The inline and borrowed modes never change size.
    pub(crate) fn reserve(&mut self, capacity: usize) {
        let Self::Owned(buf) = self else {
            return;
        };
        if buf.len() >= capacity {
            return;
        }
        tracing::debug!(from = buf.len(), to = capacity, "owned text buffer grown");
        let mut grown = vec![0; capacity];
        grown[..buf.len()].copy_from_slice(buf);
        *buf = grown.into_boxed_slice();
    }
}

impl fmt::Debug for ConversionBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionBuffer")
            .field("mode", &self.mode())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Bounded forward writer over a buffer.
///
/// Writes past the last text slot are dropped, never an error, so
/// `core::fmt` keeps going and the output is a clean prefix.
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            truncated: false,
        }
    }

    /// Text slots, one byte is kept for the terminator.
    #[inline]
    fn limit(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len >= self.limit()
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        if self.is_full() {
            self.truncated = true;
            return;
        }
        self.buf[self.len] = byte;
        self.len += 1;
    }

    pub(crate) fn push_slice(&mut self, bytes: &[u8]) {
        let room = self.limit() - self.len.min(self.limit());
        let n = bytes.len().min(room);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        if n < bytes.len() {
            self.truncated = true;
        }
    }

    /// Terminate the text and return its length.
    pub(crate) fn finish(self) -> usize {
        if self.truncated {
            tracing::trace!(
                capacity = self.buf.len(),
                written = self.len,
                "text output truncated"
            );
        }
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = 0;
        }
        self.len
    }
}

impl fmt::Write for Cursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_slice(s.as_bytes());
        Ok(())
    }
}
