use crate::{none_of, NoneOf, Token};

/// An ordered, fixed collection of tokens.
///
/// Duplicates are permitted and the order is irrelevant for membership. A set is never mutated
/// after construction, which makes it suitable for static predicate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSet<T, const N: usize> {
    tokens: [T; N],
}

impl<T: Token, const N: usize> TokenSet<T, N> {
    /// Create a new token set.
    #[inline]
    pub const fn new(tokens: [T; N]) -> Self {
        Self { tokens }
    }

    /// Returns true if the token equals any element of the set.
    #[inline]
    pub fn contains(&self, token: T) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }

    /// Get the number of elements, duplicates included.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the set has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get the elements in construction order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.tokens
    }

    /// Returns the complement of the set as a predicate. It matches every unit equal to none
    /// of the elements, and the exhausted state.
    #[inline]
    pub fn negate(self) -> NoneOf<T, N> {
        none_of(self.tokens)
    }
}

impl<T: Token, const N: usize> From<[T; N]> for TokenSet<T, N> {
    fn from(tokens: [T; N]) -> Self {
        Self::new(tokens)
    }
}
