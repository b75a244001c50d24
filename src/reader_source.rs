use std::io::{self, BufRead};

use log::{debug, trace};

use crate::InputSource;

/// A source of `u8` tokens streamed from a buffered reader, e.g. a file or a socket wrapped in
/// a `BufReader`.
///
/// The source only ever looks at the first byte of the reader's buffer, so the lookahead stays
/// at one unit. An I/O error ends the source. The error is latched and can be retrieved with
/// [`ReaderSource::take_error`] or [`ReaderSource::into_inner`], which lets a caller tell an
/// unexpected end of input apart from a failing reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    consumed: usize,
    exhausted: bool,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Create a new source over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
            exhausted: false,
            error: None,
        }
    }

    /// Get the number of bytes consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Takes the I/O error that ended the source, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Returns the reader, or the I/O error that ended the source.
    pub fn into_inner(self) -> io::Result<R> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.reader),
        }
    }

    fn lookahead(&mut self) -> Option<u8> {
        if self.exhausted {
            return None;
        }
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    if let Some(b) = buf.first() {
                        return Some(*b);
                    }
                    trace!("Reader exhausted after {} bytes", self.consumed);
                    self.exhausted = true;
                    return None;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    debug!("Reader failed after {} bytes: {}", self.consumed, err);
                    self.exhausted = true;
                    self.error = Some(err);
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> InputSource for ReaderSource<R> {
    type Token = u8;

    #[inline]
    fn peek(&mut self) -> Option<u8> {
        self.lookahead()
    }

    fn consume(&mut self) -> Option<u8> {
        let b = self.lookahead()?;
        BufRead::consume(&mut self.reader, 1);
        self.consumed += 1;
        Some(b)
    }
}
