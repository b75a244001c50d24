//! Module with the input source contract.
//! This is the only assumption the scanning operations make about the storage, buffering or
//! encoding of the input.

use std::iter::Peekable;

use crate::Token;

/// A source of tokens with one unit of lookahead.
///
/// Implementations must keep [`InputSource::peek`] idempotent: repeated peeks without an
/// intervening [`InputSource::consume`] return the same unit.
pub trait InputSource {
    /// The type of the units the source yields.
    type Token: Token;

    /// Returns the next unit without consuming it, or `None` if the source is exhausted.
    fn peek(&mut self) -> Option<Self::Token>;

    /// Removes and returns the next unit, or `None` if the source is exhausted.
    fn consume(&mut self) -> Option<Self::Token>;

    /// Returns true if no further units are available.
    #[inline]
    fn is_end(&mut self) -> bool {
        self.peek().is_none()
    }
}

impl<S> InputSource for &mut S
where
    S: InputSource + ?Sized,
{
    type Token = S::Token;

    #[inline]
    fn peek(&mut self) -> Option<Self::Token> {
        (**self).peek()
    }

    #[inline]
    fn consume(&mut self) -> Option<Self::Token> {
        (**self).consume()
    }

    #[inline]
    fn is_end(&mut self) -> bool {
        (**self).is_end()
    }
}

// Any peekable iterator over tokens is a source, e.g. `"abc".chars().peekable()` or a vector of
// UTF-16 code units.
impl<I> InputSource for Peekable<I>
where
    I: Iterator,
    I::Item: Token,
{
    type Token = I::Item;

    #[inline]
    fn peek(&mut self) -> Option<Self::Token> {
        Peekable::peek(self).copied()
    }

    #[inline]
    fn consume(&mut self) -> Option<Self::Token> {
        self.next()
    }
}
