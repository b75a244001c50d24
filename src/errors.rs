use thiserror::Error;

/// The result type for the `peekscan` crate.
pub type Result<T> = std::result::Result<T, UnexpectedInput>;

/// The error raised when the next unit of the source does not satisfy an expectation, or when a
/// unit was required but the source is exhausted.
///
/// The error carries no payload. Callers recover the context by querying the source (`peek`,
/// `is_end`) and their own [`crate::Position`] after receiving it.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("unexpected input")]
pub struct UnexpectedInput;
