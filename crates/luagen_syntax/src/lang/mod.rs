//! Language vocabulary: reserved words and operators.
//!
//! ## See also
//! - [`keywords`] for the reserved-word registry and identifier checks.
//! - [`operators`] for binary/unary operator spellings.

pub mod keywords;
pub mod operators;
