//! Predefined token sets, generic over the token type.
//!
//! ```rust
//! use peekscan::{sets, Scan, StrSource};
//!
//! let mut source = StrSource::new("42 apples");
//! let digits: String = source.read_while(sets::digit()).into_iter().collect();
//! assert_eq!(digits, "42");
//! assert!(source.ignore_if(sets::blank()));
//! ```

use crate::{one_of, OneOf, Token};

/// Space, tabulator and line feed.
#[inline]
pub fn space<T: Token>() -> OneOf<T, 3> {
    one_of([T::SPACE, T::TAB, T::LINE_FEED])
}

/// Space and tabulator.
#[inline]
pub fn blank<T: Token>() -> OneOf<T, 2> {
    one_of([T::SPACE, T::TAB])
}

/// The decimal digits `0` to `9`.
#[inline]
pub fn digit<T: Token>() -> OneOf<T, 10> {
    one_of(std::array::from_fn(|i| T::from_ascii(b'0' + i as u8)))
}
