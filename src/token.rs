//! Module with the token trait.
//! A token is the atomic unit an input source yields, e.g. a `char` or an integral code unit.

use std::fmt::Debug;

/// A unit read from an input source.
///
/// Tokens are compared by raw equality only. The associated constants name the few units the
/// crate itself needs to know about, e.g. the line feed that advances a [`crate::Position`] to
/// the next line.
pub trait Token: Copy + Eq + Debug {
    /// The line feed unit (`0x0A`).
    const LINE_FEED: Self;
    /// The carriage return unit (`0x0D`). It is an ordinary unit for position tracking.
    const CARRIAGE_RETURN: Self;
    /// The space unit (`0x20`).
    const SPACE: Self;
    /// The horizontal tabulator unit (`0x09`).
    const TAB: Self;

    /// Converts an ASCII code into a token of this type.
    fn from_ascii(code: u8) -> Self;

    /// Returns true if the token terminates a line.
    #[inline]
    fn is_line_feed(self) -> bool {
        self == Self::LINE_FEED
    }
}

impl Token for char {
    const LINE_FEED: Self = '\n';
    const CARRIAGE_RETURN: Self = '\r';
    const SPACE: Self = ' ';
    const TAB: Self = '\t';

    #[inline]
    fn from_ascii(code: u8) -> Self {
        debug_assert!(code.is_ascii(), "not an ASCII code: {code:#x}");
        code as char
    }
}

macro_rules! impl_code_unit {
    ($($tp:ty),+) => {
        $(
            impl Token for $tp {
                const LINE_FEED: Self = 0x0A;
                const CARRIAGE_RETURN: Self = 0x0D;
                const SPACE: Self = 0x20;
                const TAB: Self = 0x09;

                #[inline]
                fn from_ascii(code: u8) -> Self {
                    debug_assert!(code.is_ascii(), "not an ASCII code: {code:#x}");
                    <$tp>::from(code)
                }
            }
        )+
    };
}

// Integral code units, e.g. bytes of a stream or UTF-16/UTF-32 code units.
impl_code_unit!(u8, u16, u32, i32);
