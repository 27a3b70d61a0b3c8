
//! Degree and radian newtypes, so that angle units are never mixed
//! up by accident.

use num::{Float, FromPrimitive};
use num::traits::FloatConst;

/// A number representing degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<T>(pub T);

/// A number representing radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<T>(pub T);

impl<T> Degrees<T> {
  /// Converts to radians as `deg * π / 180`.
  pub fn into_radians(self) -> Radians<T>
  where T: Float + FloatConst + FromPrimitive {
    // unwrap: 180 is representable in every float type.
    Radians(self.0 * T::PI() / T::from_i32(180).unwrap())
  }
}

impl<T: Float> Radians<T> {
  pub fn sin(self) -> T {
    self.0.sin()
  }

  pub fn cos(self) -> T {
    self.0.cos()
  }

  pub fn tan(self) -> T {
    self.0.tan()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  use std::f64::consts::PI;

  #[test]
  fn test_degrees_to_radians() {
    assert_abs_diff_eq!(Degrees(180.0).into_radians().0, PI);
    assert_abs_diff_eq!(Degrees(90.0).into_radians().0, PI / 2.0);
    assert_abs_diff_eq!(Degrees(0.0).into_radians().0, 0.0);
  }

  #[test]
  fn test_trig_in_degrees() {
    assert_abs_diff_eq!(Degrees(90.0).into_radians().sin(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Degrees(180.0).into_radians().cos(), -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(Degrees(45.0).into_radians().tan(), 1.0, epsilon = 1e-9);
  }
}
