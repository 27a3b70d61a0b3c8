
//! A keypad calculator core. Display text goes through
//! [`expr::normalize`], [`expr::tokenize`] and [`expr::evaluate`];
//! [`evaluate_expression`] runs the whole pipeline and renders the
//! outcome for display.

pub mod expr;
pub mod parsing;
pub mod state;
pub mod util;

pub use expr::{evaluate_expression, evaluate_str};
