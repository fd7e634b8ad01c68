//! Syntax tree contract for the luagen source generator: AST node types and language vocabulary.
//!
//! Trees are built by an external parser (or by hand, or by a transformation pass) and handed to the
//! generator read-only. Nothing in this crate renders or mutates a tree.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no name resolution, no evaluation, no formatting.
//! - Vocabulary identity (reserved words, operator spellings) lives in [`lang`].
//!
//! ## Examples
//! ```rust
//! use luagen_syntax::ast::{Chunk, Expression, Statement};
//!
//! let chunk = Chunk::new(vec![Statement::Return(vec![Expression::True].into())]);
//! assert_eq!(chunk.body.len(), 1);
//! ```

pub mod ast;
pub mod lang;
