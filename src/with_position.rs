use crate::{InputSource, Tracker};

/// A source adapter that advances a tracker over every consumed unit.
///
/// All [`crate::Scan`] operations are available on it, so each operation has a
/// position-tracked form:
///
/// ```rust
/// use peekscan::{Position, Scan, StrSource};
///
/// let mut source = StrSource::new("a\nb");
/// let mut pos = Position::start();
/// source.with_position(&mut pos).read_while(peekscan::ANY);
/// assert_eq!(pos, Position::new(2, 2));
/// ```
///
/// This adapter can be created with the [`crate::Scan::with_position`] method.
#[derive(Debug)]
pub struct WithPosition<'a, S: ?Sized, K: ?Sized> {
    source: &'a mut S,
    tracker: &'a mut K,
}

impl<'a, S, K> WithPosition<'a, S, K>
where
    S: InputSource + ?Sized,
    K: Tracker<S::Token> + ?Sized,
{
    /// Create a new `WithPosition` adapter.
    pub(crate) fn new(source: &'a mut S, tracker: &'a mut K) -> Self {
        Self { source, tracker }
    }

    /// Get the tracker.
    #[inline]
    pub fn tracker(&self) -> &K {
        self.tracker
    }
}

impl<S, K> InputSource for WithPosition<'_, S, K>
where
    S: InputSource + ?Sized,
    K: Tracker<S::Token> + ?Sized,
{
    type Token = S::Token;

    #[inline]
    fn peek(&mut self) -> Option<Self::Token> {
        self.source.peek()
    }

    #[inline]
    fn consume(&mut self) -> Option<Self::Token> {
        let token = self.source.consume()?;
        self.tracker.advance(token);
        Some(token)
    }

    #[inline]
    fn is_end(&mut self) -> bool {
        self.source.is_end()
    }
}
