//! Module with the stream cursor operations.
//!
//! The operations are provided by the [`Scan`] extension trait, which is implemented for every
//! [`InputSource`]. Each decision is based on the single unit of lookahead the source exposes.

use crate::{InputSource, Predicate, Result, Tracker, UnexpectedInput, WithPosition};

/// The stream cursor operations.
///
/// Position tracking is opt-in per call: [`Scan::with_position`] wraps the source in an adapter
/// that advances a [`crate::Position`] (or any other [`Tracker`]) over each consumed unit, and
/// all operations are available on that adapter as well.
///
/// The conditional operations (`*_if`, `*_while`) consume only an available unit. They never
/// fail, even for a predicate like [`crate::Not`] that matches the exhausted state.
pub trait Scan: InputSource {
    /// Classifies the next unit without consuming it.
    #[inline]
    fn is<P>(&mut self, target: P) -> bool
    where
        P: Predicate<Self::Token>,
    {
        target.matches(self.peek())
    }

    /// Consumes and returns the next unit.
    ///
    /// Fails with [`UnexpectedInput`] if the source is exhausted.
    #[inline]
    fn read(&mut self) -> Result<Self::Token> {
        self.consume().ok_or(UnexpectedInput)
    }

    /// Consumes and returns the next unit if it matches the target.
    #[inline]
    fn read_if<P>(&mut self, target: P) -> Option<Self::Token>
    where
        P: Predicate<Self::Token>,
    {
        consume_if(self, &target)
    }

    /// Consumes units as long as they match the target and returns them in input order.
    fn read_while<P>(&mut self, target: P) -> Vec<Self::Token>
    where
        P: Predicate<Self::Token>,
    {
        let mut tokens = Vec::new();
        self.read_while_into(target, &mut tokens);
        tokens
    }

    /// Consumes units as long as they match the target and appends them to the buffer.
    /// Returns the number of consumed units.
    ///
    /// ```rust
    /// use peekscan::{not, Scan, StrSource};
    ///
    /// let mut source = StrSource::new("key=value");
    /// let mut key = String::new();
    /// assert_eq!(source.read_while_into(not('='), &mut key), 3);
    /// assert_eq!(key, "key");
    /// ```
    fn read_while_into<P, E>(&mut self, target: P, buffer: &mut E) -> usize
    where
        P: Predicate<Self::Token>,
        E: Extend<Self::Token>,
    {
        let mut count = 0;
        while let Some(token) = consume_if(self, &target) {
            buffer.extend(Some(token));
            count += 1;
        }
        count
    }

    /// Consumes and discards the next unit.
    ///
    /// Fails with [`UnexpectedInput`] if the source is exhausted.
    #[inline]
    fn ignore(&mut self) -> Result<()> {
        self.read().map(|_| ())
    }

    /// Discards the next unit if it matches the target.
    /// Returns true if a unit was discarded.
    #[inline]
    fn ignore_if<P>(&mut self, target: P) -> bool
    where
        P: Predicate<Self::Token>,
    {
        self.read_if(target).is_some()
    }

    /// Discards units as long as they match the target.
    /// Returns the number of discarded units.
    fn ignore_while<P>(&mut self, target: P) -> usize
    where
        P: Predicate<Self::Token>,
    {
        let mut count = 0;
        while consume_if(self, &target).is_some() {
            count += 1;
        }
        count
    }

    /// Requires the next unit to match the target.
    ///
    /// Fails with [`UnexpectedInput`] and consumes nothing if the negated target matches the
    /// lookahead. Otherwise the expectation is satisfied and the target takes its output from
    /// the source: a matching unit is consumed and returned, while [`crate::End`] consumes
    /// nothing and yields `()`.
    ///
    /// ```rust
    /// use peekscan::{Scan, StrSource, END};
    ///
    /// let mut source = StrSource::new("(");
    /// assert_eq!(source.expect('('), Ok('('));
    /// assert_eq!(source.expect(END), Ok(()));
    /// assert!(source.expect(')').is_err());
    /// ```
    fn expect<P>(&mut self, target: P) -> Result<P::Output>
    where
        P: Predicate<Self::Token>,
    {
        if target.rejects(self.peek()) {
            return Err(UnexpectedInput);
        }
        target.take(self)
    }

    /// Returns an adapter that advances the tracker over every unit consumed through it.
    #[inline]
    fn with_position<'a, K>(&'a mut self, tracker: &'a mut K) -> WithPosition<'a, Self, K>
    where
        K: Tracker<Self::Token> + ?Sized,
    {
        WithPosition::new(self, tracker)
    }
}

// Only an available unit is consumed, the exhausted state is never "taken".
#[inline]
fn consume_if<S, P>(source: &mut S, target: &P) -> Option<S::Token>
where
    S: InputSource + ?Sized,
    P: Predicate<S::Token>,
{
    match source.peek() {
        Some(token) if target.matches(Some(token)) => source.consume(),
        _ => None,
    }
}

// Implement the trait for all types that implement the source contract.
impl<S: InputSource + ?Sized> Scan for S {}
