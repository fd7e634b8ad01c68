//! Source generation
//!
//! Turns a syntax tree back into source text:
//! - two-space indentation per nesting level (configurable)
//! - `\n` line breaks (configurable), none after the last line
//! - double-quoted strings, raw number spellings
//! - one table field per line, each with a trailing comma
//!
//! ## See also
//! - [`SourceGenerator`]: run driver with event and fragment streams
//! - `dispatch`: one rule per syntactic category

mod config;
mod dispatch;
mod engine;
mod errors;
mod writer;

pub use config::GenerateConfig;
pub use engine::{Event, Fragments, Process, SourceGenerator};
pub use errors::GenerateError;

use luagen_syntax::ast::Node;

/// Generate source text for `root` with default settings
pub fn generate<'a>(root: impl Into<Node<'a>>) -> Result<String, GenerateError> {
    generate_with_config(root, GenerateConfig::default())
}

/// Generate source text for `root` with custom configuration
pub fn generate_with_config<'a>(root: impl Into<Node<'a>>, config: GenerateConfig) -> Result<String, GenerateError> {
    SourceGenerator::with_config(root, config).generate()
}
