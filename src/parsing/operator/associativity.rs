
/// The associativity of an infix operator, which decides how a chain
/// of operators with equal precedence is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
  /// `a # b # c` groups as `(a # b) # c`.
  Left,
  /// `a # b # c` groups as `a # (b # c)`.
  Right,
}

impl Associativity {
  pub const fn is_left_assoc(self) -> bool {
    matches!(self, Associativity::Left)
  }
}
