
//! The calculator display buffer. This is the only stateful value in
//! the crate; it is owned by whatever front end drives it.

mod key;

pub use key::Key;

use crate::expr::evaluate_expression;

use log::trace;

/// The text shown on the calculator display, together with whether
/// that text is currently an error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorDisplay {
  text: String,
  showing_error: bool,
}

impl CalculatorDisplay {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn is_showing_error(&self) -> bool {
    self.showing_error
  }

  /// Applies a key press. Returns the outcome of the evaluation for
  /// [`Key::Calculate`], and `None` for every other key.
  ///
  /// While an error message is displayed, typing replaces it and
  /// backspace clears it.
  pub fn press(&mut self, key: Key) -> Option<Result<String, String>> {
    trace!("key {key:?} on display {:?}", self.text);
    match key {
      Key::Input(text) => {
        if self.showing_error {
          self.clear();
        }
        self.text.push_str(&text);
        None
      }
      Key::Clear => {
        self.clear();
        None
      }
      Key::Backspace => {
        if self.showing_error {
          self.clear();
        } else {
          self.text.pop();
        }
        None
      }
      Key::Calculate => {
        Some(self.calculate())
      }
    }
  }

  /// Evaluates the current text and replaces it with the result, or
  /// with the error message on failure. Calculating while an error is
  /// displayed reports the same error again.
  pub fn calculate(&mut self) -> Result<String, String> {
    if self.showing_error {
      return Err(self.text.clone());
    }
    let outcome = evaluate_expression(&self.text);
    match &outcome {
      Ok(result) => {
        self.text.clone_from(result);
        self.showing_error = false;
      }
      Err(message) => {
        self.text.clone_from(message);
        self.showing_error = true;
      }
    }
    outcome
  }

  pub fn clear(&mut self) {
    self.text.clear();
    self.showing_error = false;
  }
}
