
/// Renders an evaluation result for the calculator display.
///
/// Integral values print without a decimal point and other finite
/// values use the shortest decimal representation that reads back as
/// the same `f64`. Exponent notation is never used.
pub fn format_number(value: f64) -> String {
  if value.is_nan() {
    "NaN".to_owned()
  } else if value.is_infinite() {
    let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
    text.to_owned()
  } else if value == 0.0 {
    // Covers negative zero.
    "0".to_owned()
  } else {
    value.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_integers() {
    assert_eq!(format_number(14.0), "14");
    assert_eq!(format_number(-1.0), "-1");
    assert_eq!(format_number(512.0), "512");
    assert_eq!(format_number(1e21), "1000000000000000000000");
  }

  #[test]
  fn test_zero() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
  }

  #[test]
  fn test_fractions() {
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-2.25), "-2.25");
    assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_number(1e-7), "0.0000001");
  }

  #[test]
  fn test_non_finite() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
  }
}
