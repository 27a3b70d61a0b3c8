
use std::fmt::{self, Display, Formatter};

/// Thin wrapper around `usize` that represents a byte position in the
/// normalized input string. Used for error reporting and logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceOffset(pub usize);

/// A span of source offsets. Spans are half-open intervals, with
/// `start` included and `end` excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: impl Into<SourceOffset>, end: impl Into<SourceOffset>) -> Self {
    Self { start: start.into(), end: end.into() }
  }
}

impl From<usize> for SourceOffset {
  fn from(i: usize) -> Self {
    SourceOffset(i)
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
