
//! The closed set of unary functions the calculator understands.

use super::error::EvalError;
use crate::util::angles::Degrees;

use phf::phf_map;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A unary function. Trigonometric functions take their argument in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
  Sin,
  Cos,
  Tan,
  /// Base-10 logarithm.
  Log,
  /// Natural logarithm.
  Ln,
}

static FUNCTIONS_BY_NAME: phf::Map<&'static str, Function> = phf_map! {
  "sin" => Function::Sin,
  "cos" => Function::Cos,
  "tan" => Function::Tan,
  "log" => Function::Log,
  "ln" => Function::Ln,
};

impl Function {
  /// Looks up a function by its (case-sensitive) name.
  pub fn from_name(name: &str) -> Option<Function> {
    FUNCTIONS_BY_NAME.get(name).copied()
  }

  pub fn name(self) -> &'static str {
    match self {
      Function::Sin => "sin",
      Function::Cos => "cos",
      Function::Tan => "tan",
      Function::Log => "log",
      Function::Ln => "ln",
    }
  }

  pub fn apply(self, arg: f64) -> Result<f64, EvalError> {
    match self {
      Function::Sin => Ok(Degrees(arg).into_radians().sin()),
      Function::Cos => Ok(Degrees(arg).into_radians().cos()),
      Function::Tan => Ok(Degrees(arg).into_radians().tan()),
      Function::Log => self.require_positive(arg).map(f64::log10),
      Function::Ln => self.require_positive(arg).map(f64::ln),
    }
  }

  fn require_positive(self, arg: f64) -> Result<f64, EvalError> {
    // NaN fails this check too.
    if arg > 0.0 {
      Ok(arg)
    } else {
      Err(EvalError::DomainError { function: self, argument: arg })
    }
  }
}

impl FromStr for Function {
  type Err = EvalError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Function::from_name(s).ok_or_else(|| EvalError::UnknownFunction(s.to_owned()))
  }
}

impl Display for Function {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_name_round_trip() {
    for function in [Function::Sin, Function::Cos, Function::Tan, Function::Log, Function::Ln] {
      assert_eq!(Function::from_name(function.name()), Some(function));
    }
  }

  #[test]
  fn test_unknown_names() {
    assert_eq!(Function::from_name("sqrt"), None);
    assert_eq!(Function::from_name("SIN"), None);
    assert_eq!(Function::from_name(""), None);
    assert_eq!("foo".parse::<Function>(), Err(EvalError::UnknownFunction("foo".to_owned())));
  }

  #[test]
  fn test_trig_uses_degrees() {
    assert_abs_diff_eq!(Function::Sin.apply(90.0).unwrap(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Function::Sin.apply(30.0).unwrap(), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(Function::Cos.apply(180.0).unwrap(), -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Function::Cos.apply(60.0).unwrap(), 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(Function::Tan.apply(45.0).unwrap(), 1.0, epsilon = 1e-9);
  }

  #[test]
  fn test_logarithms() {
    assert_abs_diff_eq!(Function::Log.apply(1000.0).unwrap(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Function::Ln.apply(std::f64::consts::E).unwrap(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Function::Log.apply(1.0).unwrap(), 0.0);
  }

  #[test]
  fn test_logarithm_domain() {
    assert_eq!(
      Function::Log.apply(-1.0),
      Err(EvalError::DomainError { function: Function::Log, argument: -1.0 }),
    );
    assert_eq!(
      Function::Ln.apply(0.0),
      Err(EvalError::DomainError { function: Function::Ln, argument: 0.0 }),
    );
    assert!(Function::Ln.apply(f64::NAN).is_err());
  }
}
