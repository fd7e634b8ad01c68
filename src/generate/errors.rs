//! Define the error type for source generation.
//!
//! Generation has one failure mode: a node the engine cannot render. That covers both tags with no
//! generation rule and nodes whose shape would produce text that cannot be parsed back (an empty
//! assignment target list, a name that is a reserved word, ...).
//!
//! ## Notes
//!
//! - Errors are fatal to the run. Any text produced before the error is meaningless and must be
//!   discarded.

use miette::Diagnostic;
use thiserror::Error;

/// Error during source generation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerateError {
    #[error("not implemented: {kind} ({reason})")]
    #[diagnostic(
        code(luagen::generate::unsupported_node),
        help("check how the offending node was constructed; the generator only renders trees that follow the syntax contract")
    )]
    UnsupportedNode { kind: &'static str, reason: String },
}

impl GenerateError {
    pub(crate) fn unsupported(kind: &'static str, reason: impl Into<String>) -> Self {
        GenerateError::UnsupportedNode {
            kind,
            reason: reason.into(),
        }
    }

    /// Tag of the node that aborted the run.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::UnsupportedNode { kind, .. } => kind,
        }
    }
}
