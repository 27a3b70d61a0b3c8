
//! Infix operators, together with the precedence and associativity
//! information the shunting yard algorithm needs.

mod associativity;
mod precedence;
mod table;

pub use associativity::Associativity;
pub use precedence::Precedence;
pub use table::OperatorTable;

use std::fmt::{self, Display, Formatter};

/// The arithmetic operation performed by an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
  Add,
  Subtract,
  Multiply,
  Divide,
  Power,
}

/// An infix operator has a symbol, a precedence, and an
/// associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
  symbol: char,
  op: BinaryOp,
  assoc: Associativity,
  prec: Precedence,
}

impl Operator {
  /// Constructs a new operator with the given properties.
  pub fn new(symbol: char, op: BinaryOp, assoc: Associativity, prec: Precedence) -> Self {
    Operator { symbol, op, assoc, prec }
  }

  /// The canonical (ASCII) symbol of the operator.
  pub fn symbol(&self) -> char {
    self.symbol
  }

  pub fn op(&self) -> BinaryOp {
    self.op
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_common_precedences() {
    let table = OperatorTable::common_operators();
    let prec = |c| table.get(c).unwrap().precedence();
    assert_eq!(prec('^'), Precedence::new(4));
    assert_eq!(prec('*'), Precedence::new(3));
    assert_eq!(prec('/'), Precedence::new(3));
    assert_eq!(prec('+'), Precedence::new(2));
    assert_eq!(prec('-'), Precedence::new(2));
  }

  #[test]
  fn test_common_associativities() {
    let table = OperatorTable::common_operators();
    assert_eq!(table.get('^').unwrap().associativity(), Associativity::Right);
    for symbol in ['+', '-', '*', '/'] {
      assert!(table.get(symbol).unwrap().associativity().is_left_assoc(), "{symbol} should be left associative");
    }
  }

  #[test]
  fn test_display() {
    let op = Operator::new('^', BinaryOp::Power, Associativity::Right, Precedence::new(4));
    assert_eq!(op.to_string(), "^");
  }
}
