
//! Operator metadata and the infix-to-postfix conversion.

pub mod operator;
pub mod source;
pub mod shunting_yard;
