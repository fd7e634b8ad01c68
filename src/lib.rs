#![forbid(unsafe_code)]
//! Source generation for Lua syntax trees.
//!
//! This crate is the "unparse" half of parse → transform → regenerate pipelines: it takes a tree
//! built against the [`luagen_syntax`] contract and writes it back out as consistently formatted,
//! re-parseable source text.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?`. A tree the generator cannot render is a
//!   [`GenerateError`], never a panic.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use luagen::ast::{Chunk, Expression, LocalStatement, Name, Statement};
//!
//! let chunk = Chunk::new(vec![Statement::Local(LocalStatement {
//!     names: vec![Name::new("a"), Name::new("b")].into(),
//!     expressions: Some(vec![Expression::True].into()),
//! })]);
//! assert_eq!(luagen::generate(&chunk).unwrap(), "\nlocal a, b = true");
//! ```

pub mod generate;

pub use luagen_syntax::ast;
pub use luagen_syntax::lang;

pub use generate::{
    Event, Fragments, GenerateConfig, GenerateError, Process, SourceGenerator, generate, generate_with_config,
};
