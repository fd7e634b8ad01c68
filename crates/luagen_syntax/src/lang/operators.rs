//! Operator vocabulary.
//!
//! Binary (infix) and unary (prefix) operators, each with one canonical spelling.
//!
//! ## Notes
//! - Lookup via [`str::parse`] is **case-sensitive**.
//! - `not`, `and` and `or` are spelled with reserved words. Binary operators are always padded with
//!   spaces; [`UnaryOperator::is_word`] tells renderers when a prefix operator needs one too.
//!
//! ## Examples
//! ```rust
//! use luagen_syntax::lang::operators::{BinaryOperator, UnaryOperator};
//!
//! assert_eq!("..".parse::<BinaryOperator>(), Ok(BinaryOperator::Concat));
//! assert_eq!(UnaryOperator::Length.as_str(), "#");
//! assert!("=>".parse::<BinaryOperator>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::keywords;

/// Returned when a token does not spell any known operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator `{0}`")]
pub struct UnknownOperator(pub String);

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Logical
    Or,
    And,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    NotEq,
    EqEq,

    // Bitwise
    BitOr,
    BitXor,
    BitAnd,
    Shl,
    Shr,

    // Arithmetic
    Concat,
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    Negate,
    Length,
    BitNot,
}

const BINARY_OPERATORS: &[(BinaryOperator, &str)] = &[
    (BinaryOperator::Or, "or"),
    (BinaryOperator::And, "and"),
    (BinaryOperator::Lt, "<"),
    (BinaryOperator::Gt, ">"),
    (BinaryOperator::LtEq, "<="),
    (BinaryOperator::GtEq, ">="),
    (BinaryOperator::NotEq, "~="),
    (BinaryOperator::EqEq, "=="),
    (BinaryOperator::BitOr, "|"),
    (BinaryOperator::BitXor, "~"),
    (BinaryOperator::BitAnd, "&"),
    (BinaryOperator::Shl, "<<"),
    (BinaryOperator::Shr, ">>"),
    (BinaryOperator::Concat, ".."),
    (BinaryOperator::Add, "+"),
    (BinaryOperator::Sub, "-"),
    (BinaryOperator::Mul, "*"),
    (BinaryOperator::Div, "/"),
    (BinaryOperator::FloorDiv, "//"),
    (BinaryOperator::Mod, "%"),
    (BinaryOperator::Pow, "^"),
];

const UNARY_OPERATORS: &[(UnaryOperator, &str)] = &[
    (UnaryOperator::Not, "not"),
    (UnaryOperator::Negate, "-"),
    (UnaryOperator::Length, "#"),
    (UnaryOperator::BitNot, "~"),
];

impl BinaryOperator {
    /// All binary operators, in table order.
    pub fn all() -> impl Iterator<Item = BinaryOperator> {
        BINARY_OPERATORS.iter().map(|(op, _)| *op)
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        BINARY_OPERATORS
            .iter()
            .find(|(op, _)| *op == self)
            .map(|(_, spelling)| *spelling)
            .unwrap_or_default()
    }
}

impl UnaryOperator {
    /// All unary operators, in table order.
    pub fn all() -> impl Iterator<Item = UnaryOperator> {
        UNARY_OPERATORS.iter().map(|(op, _)| *op)
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        UNARY_OPERATORS
            .iter()
            .find(|(op, _)| *op == self)
            .map(|(_, spelling)| *spelling)
            .unwrap_or_default()
    }

    /// Whether the operator is spelled with a reserved word.
    pub fn is_word(self) -> bool {
        keywords::is_keyword(self.as_str())
    }
}

impl FromStr for BinaryOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BINARY_OPERATORS
            .iter()
            .find(|(_, spelling)| *spelling == s)
            .map(|(op, _)| *op)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

impl FromStr for UnaryOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNARY_OPERATORS
            .iter()
            .find(|(_, spelling)| *spelling == s)
            .map(|(op, _)| *op)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
