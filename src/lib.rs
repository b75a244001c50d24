#![forbid(missing_docs)]
//! # `peekscan`
//! The `peekscan` crate provides the building blocks of hand-written scanners and
//! recursive-descent parsers that decide on a single unit of lookahead (LL(1)).
//! It is not a scanner generator. Instead it offers a small vocabulary of token predicates and
//! cursor operations that work uniformly over any input source:
//!
//! - predicates: a single token, a negated token ([`not`]), token sets ([`one_of`], [`none_of`]),
//!   and the sentinels [`END`] and [`ANY`]. Every predicate can be negated, and negating twice
//!   yields the original predicate.
//! - operations on a source ([`Scan`]): `is`, `read`, `read_if`, `read_while`, `ignore`,
//!   `ignore_if`, `ignore_while` and `expect`.
//! - optional line and column tracking with [`Scan::with_position`].
//!
//! # Example
//! ```rust
//! use peekscan::{sets, InputSource, Position, Scan, StrSource, UnexpectedInput, END};
//!
//! fn read_numbers(source: &mut StrSource, pos: &mut Position) -> Result<Vec<u32>, UnexpectedInput> {
//!     let mut numbers = Vec::new();
//!     let mut source = source.with_position(pos);
//!     source.ignore_while(sets::space());
//!     while !source.is(END) {
//!         let mut digits = String::new();
//!         digits.push(source.expect(sets::digit())?);
//!         source.read_while_into(sets::digit(), &mut digits);
//!         numbers.push(digits.parse().map_err(|_| UnexpectedInput)?);
//!         if source.ignore_while(sets::space()) == 0 {
//!             source.expect(END)?;
//!         }
//!     }
//!     Ok(numbers)
//! }
//!
//! let mut pos = Position::start();
//! let mut source = StrSource::new("12 7\n 300\n");
//! assert_eq!(read_numbers(&mut source, &mut pos), Ok(vec![12, 7, 300]));
//!
//! let mut pos = Position::start();
//! let mut source = StrSource::new("12\n3x4");
//! assert_eq!(read_numbers(&mut source, &mut pos), Err(UnexpectedInput));
//! // The caller recovers the context from the source and the position.
//! assert_eq!(source.peek(), Some('x'));
//! assert_eq!(pos.to_string(), "line: 2, column: 2");
//! ```
//!
//! # Crate features
//! - `serde`: enabled by default. Derives `Serialize` and `Deserialize` for [`Span`].
//!   [`Position`] is an in-memory diagnostic aid and has no serialized form.

/// Module with error definitions
mod errors;
pub use errors::{Result, UnexpectedInput};

/// Module that provides the token trait
mod token;
pub use token::Token;

/// Module that provides a fixed token set
mod token_set;
pub use token_set::TokenSet;

/// Module with the predicate algebra
mod predicate;
pub use predicate::{none_of, not, one_of, Any, End, NoneOf, Not, OneOf, Predicate, Target, ANY, END};

/// Predefined token sets
pub mod sets;

/// Module that provides the input source contract
mod source;
pub use source::InputSource;

/// Module that provides a position type and the tracker trait
mod position;
pub use position::{Position, Tracker};

/// Module that provides a WithPosition type
mod with_position;
pub use with_position::WithPosition;

/// Module with the stream cursor operations
mod scan;
pub use scan::Scan;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides a source over string slices
mod str_source;
pub use str_source::StrSource;

/// Module that provides a source over byte slices
mod byte_source;
pub use byte_source::ByteSource;

/// Module that provides a source over buffered readers
mod reader_source;
pub use reader_source::ReaderSource;
