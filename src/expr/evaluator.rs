
//! Evaluation of token sequences on a numeric stack.

use super::error::EvalError;
use super::tokenizer::Token;
use crate::parsing::operator::BinaryOp;
use crate::parsing::shunting_yard::{to_postfix, PostfixItem};

use itertools::Itertools;
use log::trace;

/// Evaluates an infix token sequence by converting it to postfix
/// order and running the result.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
  let postfix = to_postfix(tokens)?;
  trace!("postfix: {}", postfix.iter().join(" "));
  evaluate_postfix(&postfix)
}

/// Runs a postfix sequence. Binary operators take the first value
/// popped as their right-hand operand. The stack must hold exactly one
/// value at the end.
pub fn evaluate_postfix(postfix: &[PostfixItem]) -> Result<f64, EvalError> {
  let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
  for item in postfix {
    match item {
      PostfixItem::Number(n) => {
        stack.push(*n);
      }
      PostfixItem::Operator(op) => {
        let right = stack.pop().ok_or(EvalError::MalformedExpression)?;
        let left = stack.pop().ok_or(EvalError::MalformedExpression)?;
        stack.push(apply_binary(op.op(), left, right)?);
      }
      PostfixItem::Function(function) => {
        let arg = stack.pop().ok_or(EvalError::MalformedExpression)?;
        stack.push(function.apply(arg)?);
      }
      PostfixItem::Negate => {
        let arg = stack.pop().ok_or(EvalError::MalformedExpression)?;
        stack.push(-arg);
      }
    }
  }
  match stack.as_slice() {
    [value] => Ok(*value),
    _ => Err(EvalError::MalformedExpression),
  }
}

fn apply_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalError> {
  match op {
    BinaryOp::Add => Ok(left + right),
    BinaryOp::Subtract => Ok(left - right),
    BinaryOp::Multiply => Ok(left * right),
    BinaryOp::Divide => {
      if right == 0.0 {
        Err(EvalError::DivisionByZero)
      } else {
        Ok(left / right)
      }
    }
    BinaryOp::Power => Ok(left.powf(right)),
  }
}
