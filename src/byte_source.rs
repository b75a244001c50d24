use crate::InputSource;

/// A source of `u8` tokens over a byte slice.
#[derive(Debug, Clone)]
pub struct ByteSource<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> ByteSource<'a> {
    /// Create a new source that starts at the beginning of the input.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Retrieve the offset of the next unread byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the unread part of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }

    /// Runs a scanning step and returns the consumed bytes together with its result.
    pub fn lexeme<R>(&mut self, scan: impl FnOnce(&mut Self) -> R) -> (&'a [u8], R) {
        let start = self.offset;
        let result = scan(self);
        (&self.input[start..self.offset], result)
    }
}

impl<'a> From<&'a [u8]> for ByteSource<'a> {
    fn from(input: &'a [u8]) -> Self {
        Self::new(input)
    }
}

impl InputSource for ByteSource<'_> {
    type Token = u8;

    #[inline]
    fn peek(&mut self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    #[inline]
    fn consume(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.offset += 1;
        Some(b)
    }
}
