//! Module with the token predicate algebra.
//!
//! A predicate classifies the lookahead of a source. The lookahead is either the next unit
//! (`Some(token)`) or the exhausted state (`None`). Every predicate can be negated, and the
//! negation is a complement over both states:
//!
//! `p.negate().matches(s) == !p.matches(s)` for every lookahead `s`.
//!
//! Negating twice yields a predicate with the original type, so the involution holds on the
//! type level as well:
//!
//! | Predicate        | Negation          |
//! |------------------|-------------------|
//! | token `T`        | [`Not<T>`]        |
//! | [`OneOf<T, N>`]  | [`NoneOf<T, N>`]  |
//! | [`End`]          | [`Any`]           |
//! | [`Target<T>`]    | [`Target<T>`]     |

use crate::{InputSource, Result, Token, TokenSet, UnexpectedInput};

/// A comparison target a source's lookahead can be tested against.
///
/// The token type is a type parameter of the trait, so a predicate for `char` tokens can not be
/// used with a source of bytes, and a byte can not be compared with a source of `char`s:
///
/// ```compile_fail
/// use peekscan::{Scan, StrSource};
///
/// let mut source = StrSource::new("a");
/// source.is(b'a');
/// ```
///
/// ```compile_fail
/// use peekscan::{sets, ByteSource, Scan};
///
/// let mut source = ByteSource::new(b"a");
/// let _ = source.expect(sets::digit::<char>());
/// ```
///
/// With matching token types both compile:
///
/// ```
/// use peekscan::{sets, ByteSource, Scan, StrSource};
///
/// assert!(StrSource::new("a").is('a'));
/// assert_eq!(ByteSource::new(b"1").expect(sets::digit::<u8>()), Ok(b'1'));
/// ```
pub trait Predicate<T: Token> {
    /// The type of the negated predicate.
    type Negated: Predicate<T>;

    /// The value a satisfied [`crate::Scan::expect`] yields.
    type Output;

    /// Returns true if the lookahead satisfies the predicate.
    /// `None` stands for an exhausted source.
    fn matches(&self, lookahead: Option<T>) -> bool;

    /// Returns the complement of the predicate.
    fn negate(&self) -> Self::Negated;

    /// Returns true if the negated predicate matches the lookahead.
    ///
    /// Equivalent to `self.negate().matches(lookahead)`. Predicates whose negation allocates
    /// override it.
    #[inline]
    fn rejects(&self, lookahead: Option<T>) -> bool {
        self.negate().matches(lookahead)
    }

    /// Takes the value of a satisfied expectation from the source.
    ///
    /// The caller has already checked that the lookahead matches. Predicates that match a
    /// unit consume it. [`End`] consumes nothing.
    fn take<S>(&self, source: &mut S) -> Result<Self::Output>
    where
        S: InputSource<Token = T> + ?Sized;
}

#[inline]
fn take_token<S>(source: &mut S) -> Result<S::Token>
where
    S: InputSource + ?Sized,
{
    source.consume().ok_or(UnexpectedInput)
}

impl<T: Token> Predicate<T> for T {
    type Negated = Not<T>;
    type Output = T;

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        lookahead == Some(*self)
    }

    #[inline]
    fn negate(&self) -> Not<T> {
        Not(*self)
    }

    #[inline]
    fn take<S>(&self, source: &mut S) -> Result<T>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        take_token(source)
    }
}

/// A negated token. Matches every lookahead that is not the wrapped token, including the
/// exhausted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Not<T>(T);

impl<T: Token> Not<T> {
    /// Create a new negated token.
    #[inline]
    pub const fn new(token: T) -> Self {
        Not(token)
    }

    /// Get the wrapped token.
    #[inline]
    pub fn token(&self) -> T {
        self.0
    }
}

/// Negates a single token.
#[inline]
pub const fn not<T: Token>(token: T) -> Not<T> {
    Not::new(token)
}

impl<T: Token> Predicate<T> for Not<T> {
    type Negated = T;
    type Output = T;

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        lookahead != Some(self.0)
    }

    #[inline]
    fn negate(&self) -> T {
        self.0
    }

    #[inline]
    fn take<S>(&self, source: &mut S) -> Result<T>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        take_token(source)
    }
}

impl<T: Token> std::ops::Not for Not<T> {
    type Output = T;

    #[inline]
    fn not(self) -> T {
        self.0
    }
}

/// Matches only the exhausted state of a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct End;

/// Matches any available unit, i.e. every state except the exhausted one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Any;

/// The end sentinel.
pub const END: End = End;

/// The any sentinel.
pub const ANY: Any = Any;

impl<T: Token> Predicate<T> for End {
    type Negated = Any;
    type Output = ();

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        lookahead.is_none()
    }

    #[inline]
    fn negate(&self) -> Any {
        Any
    }

    // The end of the input is a terminal condition, there is nothing to consume.
    #[inline]
    fn take<S>(&self, _source: &mut S) -> Result<()>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        Ok(())
    }
}

impl<T: Token> Predicate<T> for Any {
    type Negated = End;
    type Output = T;

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        lookahead.is_some()
    }

    #[inline]
    fn negate(&self) -> End {
        End
    }

    #[inline]
    fn take<S>(&self, source: &mut S) -> Result<T>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        take_token(source)
    }
}

impl std::ops::Not for End {
    type Output = Any;

    #[inline]
    fn not(self) -> Any {
        Any
    }
}

impl std::ops::Not for Any {
    type Output = End;

    #[inline]
    fn not(self) -> End {
        End
    }
}

/// A fixed token set. Matches a unit equal to any of its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneOf<T, const N: usize>(TokenSet<T, N>);

/// A negated token set. Matches every lookahead equal to none of its elements, including the
/// exhausted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoneOf<T, const N: usize>(TokenSet<T, N>);

/// Creates a token set from the given tokens.
#[inline]
pub const fn one_of<T: Token, const N: usize>(tokens: [T; N]) -> OneOf<T, N> {
    OneOf(TokenSet::new(tokens))
}

/// Creates a negated token set from the given tokens.
#[inline]
pub const fn none_of<T: Token, const N: usize>(tokens: [T; N]) -> NoneOf<T, N> {
    NoneOf(TokenSet::new(tokens))
}

impl<T: Token, const N: usize> OneOf<T, N> {
    /// Returns true if the token equals any element of the set.
    #[inline]
    pub fn contains(&self, token: T) -> bool {
        self.0.contains(token)
    }

    /// Get the underlying token set.
    #[inline]
    pub fn tokens(&self) -> &TokenSet<T, N> {
        &self.0
    }
}

impl<T: Token, const N: usize> NoneOf<T, N> {
    /// Returns true if the token equals no element of the set.
    #[inline]
    pub fn contains(&self, token: T) -> bool {
        !self.0.contains(token)
    }

    /// Get the underlying token set.
    #[inline]
    pub fn tokens(&self) -> &TokenSet<T, N> {
        &self.0
    }
}

impl<T: Token, const N: usize> Predicate<T> for OneOf<T, N> {
    type Negated = NoneOf<T, N>;
    type Output = T;

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        lookahead.is_some_and(|token| self.contains(token))
    }

    #[inline]
    fn negate(&self) -> NoneOf<T, N> {
        NoneOf(self.0)
    }

    #[inline]
    fn take<S>(&self, source: &mut S) -> Result<T>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        take_token(source)
    }
}

impl<T: Token, const N: usize> Predicate<T> for NoneOf<T, N> {
    type Negated = OneOf<T, N>;
    type Output = T;

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        lookahead.is_none_or(|token| self.contains(token))
    }

    #[inline]
    fn negate(&self) -> OneOf<T, N> {
        OneOf(self.0)
    }

    #[inline]
    fn take<S>(&self, source: &mut S) -> Result<T>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        take_token(source)
    }
}

impl<T: Token, const N: usize> std::ops::Not for OneOf<T, N> {
    type Output = NoneOf<T, N>;

    #[inline]
    fn not(self) -> NoneOf<T, N> {
        NoneOf(self.0)
    }
}

impl<T: Token, const N: usize> std::ops::Not for NoneOf<T, N> {
    type Output = OneOf<T, N>;

    #[inline]
    fn not(self) -> OneOf<T, N> {
        OneOf(self.0)
    }
}

/// A comparison target chosen at run time.
///
/// This is the closed sum of all predicate shapes. Use it for predicate tables that are built
/// dynamically. The static predicate types are preferable when the shape is known at compile
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target<T> {
    /// A single token.
    Token(T),
    /// Any unit except the token.
    NotToken(T),
    /// Any of the tokens.
    OneOf(Box<[T]>),
    /// None of the tokens.
    NoneOf(Box<[T]>),
    /// The exhausted state.
    End,
    /// Any available unit.
    Any,
}

impl<T: Token> Target<T> {
    /// Returns the negated target.
    pub fn into_negated(self) -> Self {
        match self {
            Target::Token(t) => Target::NotToken(t),
            Target::NotToken(t) => Target::Token(t),
            Target::OneOf(set) => Target::NoneOf(set),
            Target::NoneOf(set) => Target::OneOf(set),
            Target::End => Target::Any,
            Target::Any => Target::End,
        }
    }
}

impl<T: Token> Predicate<T> for Target<T> {
    type Negated = Target<T>;
    /// `None` if the target is [`Target::End`], the consumed unit otherwise.
    type Output = Option<T>;

    fn matches(&self, lookahead: Option<T>) -> bool {
        match self {
            Target::Token(t) => lookahead == Some(*t),
            Target::NotToken(t) => lookahead != Some(*t),
            Target::OneOf(set) => lookahead.is_some_and(|token| set.contains(&token)),
            Target::NoneOf(set) => lookahead.is_none_or(|token| !set.contains(&token)),
            Target::End => lookahead.is_none(),
            Target::Any => lookahead.is_some(),
        }
    }

    /// Clones the token set of [`Target::OneOf`] and [`Target::NoneOf`].
    fn negate(&self) -> Self {
        self.clone().into_negated()
    }

    // The complement of a target is the inverted match, no negated target is built.
    #[inline]
    fn rejects(&self, lookahead: Option<T>) -> bool {
        !self.matches(lookahead)
    }

    fn take<S>(&self, source: &mut S) -> Result<Option<T>>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        match self {
            Target::End => Ok(None),
            _ => take_token(source).map(Some),
        }
    }
}

impl<T: Token> Predicate<T> for &Target<T> {
    type Negated = Target<T>;
    type Output = Option<T>;

    #[inline]
    fn matches(&self, lookahead: Option<T>) -> bool {
        (**self).matches(lookahead)
    }

    #[inline]
    fn negate(&self) -> Target<T> {
        (**self).negate()
    }

    #[inline]
    fn rejects(&self, lookahead: Option<T>) -> bool {
        (**self).rejects(lookahead)
    }

    #[inline]
    fn take<S>(&self, source: &mut S) -> Result<Option<T>>
    where
        S: InputSource<Token = T> + ?Sized,
    {
        (**self).take(source)
    }
}

impl<T: Token> std::ops::Not for Target<T> {
    type Output = Target<T>;

    #[inline]
    fn not(self) -> Target<T> {
        self.into_negated()
    }
}

impl<T: Token> From<T> for Target<T> {
    fn from(token: T) -> Self {
        Target::Token(token)
    }
}

impl<T: Token> From<Not<T>> for Target<T> {
    fn from(not: Not<T>) -> Self {
        Target::NotToken(not.0)
    }
}

impl<T: Token, const N: usize> From<OneOf<T, N>> for Target<T> {
    fn from(set: OneOf<T, N>) -> Self {
        Target::OneOf(set.0.as_slice().into())
    }
}

impl<T: Token, const N: usize> From<NoneOf<T, N>> for Target<T> {
    fn from(set: NoneOf<T, N>) -> Self {
        Target::NoneOf(set.0.as_slice().into())
    }
}

impl<T: Token> From<End> for Target<T> {
    fn from(_: End) -> Self {
        Target::End
    }
}

impl<T: Token> From<Any> for Target<T> {
    fn from(_: Any) -> Self {
        Target::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKAHEADS: [Option<char>; 4] = [Some('a'), Some('x'), Some('\n'), None];

    fn assert_complement<P: Predicate<char>>(p: &P) {
        let n = p.negate();
        for s in LOOKAHEADS {
            assert_eq!(n.matches(s), !p.matches(s), "lookahead {s:?}");
        }
    }

    fn assert_involution<P: Predicate<char>>(p: &P) {
        let nn = p.negate().negate();
        for s in LOOKAHEADS {
            assert_eq!(nn.matches(s), p.matches(s), "lookahead {s:?}");
        }
    }

    #[test]
    fn test_token_and_negated_token() {
        assert!('x'.matches(Some('x')));
        assert!(!'x'.matches(Some('a')));
        assert!(!'x'.matches(None));
        assert!(not('x').matches(Some('a')));
        assert!(!not('x').matches(Some('x')));
        assert!(not('x').matches(None));
        assert_eq!(not('x').negate(), 'x');
        assert_eq!(!not('x'), 'x');
        assert_eq!(not('x').token(), 'x');
        assert_complement(&'x');
        assert_complement(&not('x'));
        assert_involution(&not('x'));
    }

    #[test]
    fn test_sentinels() {
        assert!(<End as Predicate<char>>::matches(&END, None));
        assert!(!<End as Predicate<char>>::matches(&END, Some('a')));
        assert!(<Any as Predicate<char>>::matches(&ANY, Some('a')));
        assert!(!<Any as Predicate<char>>::matches(&ANY, None));
        assert_eq!(!END, ANY);
        assert_eq!(!ANY, END);
        assert_complement(&END);
        assert_complement(&ANY);
        assert_involution(&END);
    }

    #[test]
    fn test_sets() {
        let set = one_of(['a', 'b', 'a']);
        assert!(set.contains('a'));
        assert!(!set.contains('x'));
        assert!(!set.matches(None));
        let negated = !set;
        assert!(negated.contains('x'));
        assert!(!negated.contains('b'));
        assert!(negated.matches(None));
        assert_eq!(negated.negate(), set);
        assert_eq!(none_of(['a', 'b', 'a']), negated);
        assert_complement(&set);
        assert_complement(&negated);
        assert_involution(&negated);
    }

    #[test]
    fn test_empty_sets() {
        let empty = one_of::<char, 0>([]);
        assert!(!empty.matches(Some('a')));
        assert!(empty.negate().matches(Some('a')));
        assert!(empty.negate().matches(None));
    }

    #[test]
    fn test_dynamic_target() {
        let targets: Vec<Target<char>> = vec![
            'x'.into(),
            not('x').into(),
            one_of(['a', 'b']).into(),
            none_of(['a', 'b']).into(),
            END.into(),
            ANY.into(),
        ];
        for target in &targets {
            assert_complement(target);
            assert_involution(target);
            assert_eq!(target.negate().negate(), *target);
        }
        assert!(Target::from(one_of(['a', 'b'])).matches(Some('b')));
        assert_eq!(!Target::<char>::End, Target::Any);
    }

    #[test]
    fn test_rejects() {
        let targets: Vec<Target<char>> = vec![
            'x'.into(),
            not('x').into(),
            one_of(['a', 'b']).into(),
            none_of(['a', 'b']).into(),
            Target::OneOf(Box::default()),
            END.into(),
            ANY.into(),
        ];
        for target in &targets {
            for s in LOOKAHEADS {
                assert_eq!(target.rejects(s), target.negate().matches(s), "lookahead {s:?}");
                assert_eq!((&target).rejects(s), !target.matches(s), "lookahead {s:?}");
            }
        }
        for s in LOOKAHEADS {
            assert_eq!('x'.rejects(s), !'x'.matches(s));
            assert_eq!(none_of(['a']).rejects(s), one_of(['a']).matches(s));
            assert_eq!(Predicate::<char>::rejects(&END, s), s.is_some());
        }
    }

    #[test]
    fn test_take() {
        let mut source = "ab".chars().peekable();
        assert_eq!(Predicate::<char>::take(&END, &mut source), Ok(()));
        assert_eq!('a'.take(&mut source), Ok('a'));
        assert_eq!(Target::End.take(&mut source), Ok(None));
        assert_eq!(Target::Any.take(&mut source), Ok(Some('b')));
        assert_eq!(Predicate::<char>::take(&ANY, &mut source), Err(UnexpectedInput));
    }
}
