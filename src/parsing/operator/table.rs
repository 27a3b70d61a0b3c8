
use super::{Operator, BinaryOp};
use super::precedence::Precedence;
use super::associativity::Associativity;

use std::collections::HashMap;

/// A table of infix operators, indexed by their symbol.
#[derive(Debug, Clone)]
pub struct OperatorTable {
  by_symbol: HashMap<char, Operator>,
}

impl OperatorTable {
  fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      by_symbol: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: char) -> Option<&Operator> {
    self.by_symbol.get(&symbol)
  }

  pub fn insert(&mut self, op: Operator) {
    self.by_symbol.insert(op.symbol(), op);
  }

  /// The five arithmetic operators understood by the calculator.
  pub fn common_operators() -> OperatorTable {
    vec![
      Operator::new('^', BinaryOp::Power, Associativity::Right, Precedence::new(4)),
      Operator::new('*', BinaryOp::Multiply, Associativity::Left, Precedence::new(3)),
      Operator::new('/', BinaryOp::Divide, Associativity::Left, Precedence::new(3)),
      Operator::new('+', BinaryOp::Add, Associativity::Left, Precedence::new(2)),
      Operator::new('-', BinaryOp::Subtract, Associativity::Left, Precedence::new(2)),
    ].into_iter().collect()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}
