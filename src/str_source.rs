use crate::{InputSource, Span};

/// A source of `char` tokens over a string slice.
///
/// The source keeps the byte offset of the next unread `char`, so consumed input can be sliced
/// out without copying:
///
/// ```rust
/// use peekscan::{sets, Scan, StrSource};
///
/// let mut source = StrSource::new("123abc");
/// let (number, count) = source.lexeme(|s| s.ignore_while(sets::digit()));
/// assert_eq!((number, count), ("123", 3));
/// assert_eq!(source.rest(), "abc");
/// ```
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> StrSource<'a> {
    /// Create a new source that starts at the beginning of the input.
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Retrieve the byte offset of the next unread `char` from the start of the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the unread part of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Get the part of the input the span covers.
    /// Returns `None` if the span is out of bounds or splits a `char`.
    #[inline]
    pub fn slice(&self, span: Span) -> Option<&'a str> {
        self.input.get(span.range())
    }

    /// Runs a scanning step and returns the span it consumed together with its result.
    pub fn recognize<R>(&mut self, scan: impl FnOnce(&mut Self) -> R) -> (Span, R) {
        let start = self.offset;
        let result = scan(self);
        (Span::new(start, self.offset), result)
    }

    /// Runs a scanning step and returns the consumed text together with its result.
    pub fn lexeme<R>(&mut self, scan: impl FnOnce(&mut Self) -> R) -> (&'a str, R) {
        let (span, result) = self.recognize(scan);
        (&self.input[span.range()], result)
    }
}

impl InputSource for StrSource<'_> {
    type Token = char;

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    #[inline]
    fn is_end(&mut self) -> bool {
        self.offset >= self.input.len()
    }
}
