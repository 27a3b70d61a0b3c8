
use super::function::Function;
use crate::parsing::source::SourceOffset;

use serde::Serialize;
use thiserror::Error;

/// A classified failure of a single evaluation. Every error is
/// terminal for the evaluation that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Invalid character detected")]
  InvalidCharacter {
    character: char,
    position: SourceOffset,
  },
  #[error("Syntax error: {0}")]
  SyntaxError(#[from] SyntaxIssue),
  #[error("Unknown function '{0}'")]
  UnknownFunction(String),
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Domain error: {function} is undefined for {argument}")]
  DomainError {
    function: Function,
    argument: f64,
  },
  #[error("Malformed expression")]
  MalformedExpression,
}

/// The specific reason behind an [`EvalError::SyntaxError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SyntaxIssue {
  #[error("unmatched ')' at position {0}")]
  UnmatchedRightParen(SourceOffset),
  #[error("unclosed '(' at position {0}")]
  UnclosedLeftParen(SourceOffset),
  #[error("invalid number literal '{0}'")]
  InvalidNumber(String),
}

/// Fieldless classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
  InvalidCharacter,
  SyntaxError,
  UnknownFunction,
  DivisionByZero,
  DomainError,
  MalformedExpression,
}

impl EvalError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      EvalError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
      EvalError::SyntaxError(_) => ErrorKind::SyntaxError,
      EvalError::UnknownFunction(_) => ErrorKind::UnknownFunction,
      EvalError::DivisionByZero => ErrorKind::DivisionByZero,
      EvalError::DomainError { .. } => ErrorKind::DomainError,
      EvalError::MalformedExpression => ErrorKind::MalformedExpression,
    }
  }
}
