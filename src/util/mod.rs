
//! Various utility types.

pub mod angles;
