
//! The expression evaluation core: normalization, tokenization, and
//! postfix evaluation of calculator input.

pub mod error;
pub mod evaluator;
pub mod format;
pub mod function;
pub mod normalizer;
pub mod tokenizer;

pub use error::{EvalError, ErrorKind, SyntaxIssue};
pub use evaluator::evaluate;
pub use format::format_number;
pub use function::Function;
pub use normalizer::normalize;
pub use tokenizer::{tokenize, Token, TokenData};

use itertools::Itertools;
use log::{debug, trace};

/// Evaluates raw display text to a number.
pub fn evaluate_str(display_text: &str) -> Result<f64, EvalError> {
  let normalized = normalize(display_text);
  debug!("normalized {display_text:?} to {normalized:?}");
  let tokens = tokenize(&normalized)?;
  trace!("tokens: {}", tokens.iter().join(" "));
  evaluate(&tokens)
}

/// Evaluates raw display text and renders the outcome for the
/// display: the formatted number on success, or the error message.
pub fn evaluate_expression(display_text: &str) -> Result<String, String> {
  match evaluate_str(display_text) {
    Ok(value) => {
      debug!("{display_text:?} evaluated to {value}");
      Ok(format_number(value))
    }
    Err(err) => {
      debug!("{display_text:?} failed to evaluate: {err:?}");
      Err(err.to_string())
    }
  }
}
