
//! Rewrites calculator display text into the canonical ASCII alphabet
//! understood by the tokenizer.

use regex::Regex;
use once_cell::sync::Lazy;

/// The decimal literal substituted for `π`.
pub const PI_LITERAL: &str = "3.141592653589793";

/// Display symbols and their canonical operator replacements.
const SYMBOL_REPLACEMENTS: [(char, char); 3] = [
  ('÷', '/'),
  ('×', '*'),
  ('\u{2212}', '-'),
];

static DIGIT_THEN_LETTER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"([0-9])([a-zA-Z])").unwrap());

static PAREN_THEN_OPERAND: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\)([0-9a-zA-Z])").unwrap());

/// Normalizes raw display text. This function never fails; characters
/// it does not recognize are passed through for the tokenizer to
/// reject.
///
/// The steps run in a fixed order: symbol substitution, then `π`
/// expansion, then implicit multiplication.
pub fn normalize(raw: &str) -> String {
  let text = replace_symbols(raw);
  let text = expand_pi(&text);
  insert_implicit_multiplication(&text)
}

fn replace_symbols(raw: &str) -> String {
  raw.chars()
    .map(|ch| {
      SYMBOL_REPLACEMENTS.iter()
        .find(|(symbol, _)| *symbol == ch)
        .map_or(ch, |(_, replacement)| *replacement)
    })
    .collect()
}

/// Replaces each `π` with [`PI_LITERAL`]. A `π` touching a digit, a
/// decimal point, or another `π` gets an explicit `*` on that side,
/// since the literal would otherwise fuse into a different number.
fn expand_pi(text: &str) -> String {
  fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
  }

  let mut output = String::with_capacity(text.len());
  let mut prev: Option<char> = None;
  for ch in text.chars() {
    if ch == 'π' {
      if prev.is_some_and(|p| is_numeric(p) || p == 'π') {
        output.push('*');
      }
      output.push_str(PI_LITERAL);
    } else {
      if prev == Some('π') && is_numeric(ch) {
        output.push('*');
      }
      output.push(ch);
    }
    prev = Some(ch);
  }
  output
}

fn insert_implicit_multiplication(text: &str) -> String {
  let text = DIGIT_THEN_LETTER.replace_all(text, "$1*$2");
  PAREN_THEN_OPERAND.replace_all(&text, ")*$1").into_owned()
}
