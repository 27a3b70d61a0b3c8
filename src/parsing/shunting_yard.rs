
//! Conversion of an infix token sequence into postfix (reverse
//! Polish) order.

use super::operator::{Operator, BinaryOp, Precedence};
use super::source::SourceOffset;
use crate::expr::error::{EvalError, SyntaxIssue};
use crate::expr::function::Function;
use crate::expr::tokenizer::{Token, TokenData};

use std::fmt::{self, Display, Formatter};

/// One element of a postfix sequence. Postfix sequences never contain
/// parentheses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
  Number(f64),
  Operator(Operator),
  Function(Function),
  /// Prefix minus, negating a single operand.
  Negate,
}

#[derive(Debug, Clone, Copy)]
enum OpStackValue {
  Operator(Operator),
  Function(Function),
  Negate,
  LeftParen(SourceOffset),
}

/// Prefix minus binds tighter than multiplication but looser than
/// exponentiation, so `-2^2` is `-(2^2)`.
const NEGATE_PRECEDENCE: Precedence = Precedence::new(3);

/// Runs the shunting yard algorithm over `tokens`.
///
/// Function names are resolved as they are pushed, so an unknown name
/// fails here even if the rest of the expression is malformed.
/// Operand counts are not checked; that happens when the postfix
/// sequence is evaluated.
///
/// A `-` in operand position (at the start, after `(`, or after
/// another operator or a function name) is read as prefix negation.
/// No other operator has a prefix form.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<PostfixItem>, EvalError> {
  let mut operator_stack: Vec<OpStackValue> = Vec::new();
  let mut output: Vec<PostfixItem> = Vec::with_capacity(tokens.len());
  let mut expecting_operand = true;
  for token in tokens {
    match &token.data {
      TokenData::Number(n) => {
        output.push(PostfixItem::Number(*n));
        expecting_operand = false;
      }
      TokenData::Function(name) => {
        let function: Function = name.parse()?;
        operator_stack.push(OpStackValue::Function(function));
        expecting_operand = true;
      }
      TokenData::Operator(op) if expecting_operand && op.op() == BinaryOp::Subtract => {
        operator_stack.push(OpStackValue::Negate);
      }
      TokenData::Operator(op) => {
        // Pop operators which bind at least as tightly as this one.
        while let Some(stack_value) = operator_stack.last().copied() {
          let item = match stack_value {
            OpStackValue::Operator(stack_op) if compare_precedence(&stack_op, op) =>
              PostfixItem::Operator(stack_op),
            OpStackValue::Negate if NEGATE_PRECEDENCE >= op.precedence() =>
              PostfixItem::Negate,
            _ => break,
          };
          operator_stack.pop();
          output.push(item);
        }
        operator_stack.push(OpStackValue::Operator(*op));
        expecting_operand = true;
      }
      TokenData::LeftParen => {
        operator_stack.push(OpStackValue::LeftParen(token.span.start));
        expecting_operand = true;
      }
      TokenData::RightParen => {
        loop {
          match operator_stack.pop() {
            Some(OpStackValue::LeftParen(_)) => break,
            Some(OpStackValue::Operator(op)) => output.push(PostfixItem::Operator(op)),
            Some(OpStackValue::Function(f)) => output.push(PostfixItem::Function(f)),
            Some(OpStackValue::Negate) => output.push(PostfixItem::Negate),
            None => return Err(SyntaxIssue::UnmatchedRightParen(token.span.start).into()),
          }
        }
        expecting_operand = false;
        // A function directly before the group applies to it.
        if let Some(OpStackValue::Function(f)) = operator_stack.last() {
          output.push(PostfixItem::Function(*f));
          operator_stack.pop();
        }
      }
    }
  }

  // Pop and resolve remaining operators.
  while let Some(stack_value) = operator_stack.pop() {
    match stack_value {
      OpStackValue::Operator(op) => output.push(PostfixItem::Operator(op)),
      OpStackValue::Function(f) => output.push(PostfixItem::Function(f)),
      OpStackValue::Negate => output.push(PostfixItem::Negate),
      OpStackValue::LeftParen(pos) => return Err(SyntaxIssue::UnclosedLeftParen(pos).into()),
    }
  }

  Ok(output)
}

/// Whether `stack_op`, on top of the operator stack, must be output
/// before `current_op` is pushed.
fn compare_precedence(stack_op: &Operator, current_op: &Operator) -> bool {
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity().is_left_assoc())
}

impl Display for PostfixItem {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      PostfixItem::Number(n) => write!(f, "{n}"),
      PostfixItem::Operator(op) => write!(f, "{op}"),
      PostfixItem::Function(function) => write!(f, "{function}"),
      PostfixItem::Negate => write!(f, "neg"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::tokenizer::tokenize;

  use itertools::Itertools;

  fn postfix(input: &str) -> Result<String, EvalError> {
    let tokens = tokenize(input).expect("expected tokens");
    to_postfix(&tokens).map(|items| items.iter().join(" "))
  }

  #[test]
  fn test_single_number() {
    assert_eq!(postfix("42").unwrap(), "42");
  }

  #[test]
  fn test_left_assoc_op() {
    assert_eq!(postfix("1-2-3").unwrap(), "1 2 - 3 -");
    assert_eq!(postfix("8/4/2").unwrap(), "8 4 / 2 /");
  }

  #[test]
  fn test_right_assoc_op() {
    assert_eq!(postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
  }

  #[test]
  fn test_differing_precedence_higher_on_right() {
    assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
  }

  #[test]
  fn test_differing_precedence_higher_on_left() {
    assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
    assert_eq!(postfix("2^3*4").unwrap(), "2 3 ^ 4 *");
  }

  #[test]
  fn test_parentheses() {
    assert_eq!(postfix("(2+3)*4").unwrap(), "2 3 + 4 *");
    assert_eq!(postfix("2*(3+4)").unwrap(), "2 3 4 + *");
    assert_eq!(postfix("((1))").unwrap(), "1");
  }

  #[test]
  fn test_function_binds_to_group() {
    assert_eq!(postfix("sin(90)").unwrap(), "90 sin");
    assert_eq!(postfix("2*sin(90)+1").unwrap(), "2 90 sin * 1 +");
    assert_eq!(postfix("ln(log(100))").unwrap(), "100 log ln");
    assert_eq!(postfix("cos(60+30)").unwrap(), "60 30 + cos");
  }

  #[test]
  fn test_function_without_parens_pops_at_end() {
    assert_eq!(postfix("sin90+1").unwrap(), "90 1 + sin");
  }

  #[test]
  fn test_prefix_negation() {
    assert_eq!(postfix("-5").unwrap(), "5 neg");
    assert_eq!(postfix("log(-1)").unwrap(), "1 neg log");
    assert_eq!(postfix("2*-3").unwrap(), "2 3 neg *");
    assert_eq!(postfix("-2^2").unwrap(), "2 2 ^ neg");
    assert_eq!(postfix("-2*3").unwrap(), "2 neg 3 *");
    assert_eq!(postfix("-2+3").unwrap(), "2 neg 3 +");
    assert_eq!(postfix("2^-1").unwrap(), "2 1 neg ^");
    assert_eq!(postfix("--5").unwrap(), "5 neg neg");
  }

  #[test]
  fn test_binary_minus_after_group() {
    assert_eq!(postfix("(1)-2").unwrap(), "1 2 -");
    assert_eq!(postfix("3-2").unwrap(), "3 2 -");
  }

  #[test]
  fn test_consecutive_operators_stay_binary() {
    assert_eq!(postfix("1++2").unwrap(), "1 + 2 +");
    assert_eq!(postfix("*2").unwrap(), "2 *");
  }

  #[test]
  fn test_unknown_function() {
    assert_eq!(postfix("foo(1)"), Err(EvalError::UnknownFunction("foo".to_owned())));
    assert_eq!(postfix("Sin(1)"), Err(EvalError::UnknownFunction("Sin".to_owned())));
  }

  #[test]
  fn test_unclosed_paren() {
    assert_eq!(
      postfix("(2+3"),
      Err(EvalError::SyntaxError(SyntaxIssue::UnclosedLeftParen(SourceOffset(0)))),
    );
    assert_eq!(
      postfix("1+(2*(3"),
      Err(EvalError::SyntaxError(SyntaxIssue::UnclosedLeftParen(SourceOffset(5)))),
    );
  }

  #[test]
  fn test_unmatched_right_paren() {
    assert_eq!(
      postfix("2+3)"),
      Err(EvalError::SyntaxError(SyntaxIssue::UnmatchedRightParen(SourceOffset(3)))),
    );
  }

  #[test]
  fn test_operand_counts_not_checked() {
    assert_eq!(postfix("").unwrap(), "");
    assert_eq!(postfix("1+").unwrap(), "1 +");
    assert_eq!(postfix("()").unwrap(), "");
  }
}
