
use super::error::{EvalError, SyntaxIssue};
use crate::parsing::operator::{Operator, OperatorTable};
use crate::parsing::source::{SourceOffset, Span};

use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};

static COMMON_OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::common_operators);

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
  Number(f64),
  Operator(Operator),
  LeftParen,
  RightParen,
  /// An alphabetic word. Whether it names a known function is decided
  /// by the parser.
  Function(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralKind {
  Numeric,
  Alphabetic,
}

/// A run of characters accumulated during the scan that has not yet
/// been turned into a token.
#[derive(Debug, Clone, Copy)]
struct PendingLiteral {
  kind: LiteralKind,
  start: usize,
  end: usize,
}

/// Splits canonical (normalized) expression text into tokens.
///
/// Scans left to right. Digits and decimal points accumulate into a
/// numeric literal and ASCII letters into a word; any other recognized
/// character ends the pending literal and becomes a token of its own.
///
/// Operator placement is not checked here. `"1++"` and `""` tokenize
/// successfully and fail later, during evaluation.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
  let mut tokens = Vec::new();
  let mut pending: Option<PendingLiteral> = None;
  for (pos, ch) in expr.char_indices() {
    if let Some(kind) = literal_kind(ch) {
      match pending {
        Some(literal) if literal.kind == kind => {
          pending = Some(PendingLiteral { end: pos + ch.len_utf8(), ..literal });
        }
        _ => {
          if let Some(literal) = pending.take() {
            tokens.push(flush(expr, literal)?);
          }
          pending = Some(PendingLiteral { kind, start: pos, end: pos + ch.len_utf8() });
        }
      }
    } else {
      if let Some(literal) = pending.take() {
        tokens.push(flush(expr, literal)?);
      }
      let data = read_char_token(ch).ok_or(EvalError::InvalidCharacter {
        character: ch,
        position: SourceOffset(pos),
      })?;
      tokens.push(Token::new(data, Span::new(pos, pos + ch.len_utf8())));
    }
  }
  if let Some(literal) = pending.take() {
    tokens.push(flush(expr, literal)?);
  }
  Ok(tokens)
}

fn read_char_token(ch: char) -> Option<TokenData> {
  match ch {
    '(' => Some(TokenData::LeftParen),
    ')' => Some(TokenData::RightParen),
    _ => COMMON_OPERATORS.get(ch).map(|op| TokenData::Operator(*op)),
  }
}

fn literal_kind(ch: char) -> Option<LiteralKind> {
  if ch.is_ascii_digit() || ch == '.' {
    Some(LiteralKind::Numeric)
  } else if ch.is_ascii_alphabetic() {
    Some(LiteralKind::Alphabetic)
  } else {
    None
  }
}

fn flush(input: &str, literal: PendingLiteral) -> Result<Token, EvalError> {
  let text = &input[literal.start..literal.end];
  let span = Span::new(literal.start, literal.end);
  let data = match literal.kind {
    LiteralKind::Numeric => {
      let value = text.parse::<f64>()
        .map_err(|_| SyntaxIssue::InvalidNumber(text.to_owned()))?;
      TokenData::Number(value)
    }
    LiteralKind::Alphabetic => {
      TokenData::Function(text.to_owned())
    }
  };
  Ok(Token::new(data, span))
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::Operator(op) => write!(f, "{op}"),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
      TokenData::Function(name) => write!(f, "{name}"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}
