
/// A key on the calculator keypad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
  /// Text to type into the display, such as `7`, `sin(` or `π`.
  Input(String),
  Clear,
  Backspace,
  Calculate,
}

impl Key {
  /// Maps a button label to the key it stands for. Labels other than
  /// the control keys are typed in verbatim.
  pub fn from_label(label: &str) -> Key {
    match label {
      "C" | "AC" => Key::Clear,
      "⌫" | "<" => Key::Backspace,
      "=" => Key::Calculate,
      _ => Key::Input(label.to_owned()),
    }
  }
}

impl From<char> for Key {
  fn from(ch: char) -> Key {
    let mut buf = [0; 4];
    Key::from_label(ch.encode_utf8(&mut buf))
  }
}
