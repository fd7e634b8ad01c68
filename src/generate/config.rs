//! Generation configuration
//!
//! Fixed for the duration of a run.

/// Generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Line-break sequence written between lines
    pub new_line: String,
    /// Text written once per nesting level at the start of a line
    pub indent: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            new_line: "\n".to_string(),
            indent: "  ".to_string(),
        }
    }
}

impl GenerateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line-break sequence
    pub fn with_new_line(mut self, new_line: impl Into<String>) -> Self {
        self.new_line = new_line.into();
        self
    }

    /// Set the per-level indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Indent with `width` spaces per level
    pub fn with_indent_width(self, width: usize) -> Self {
        self.with_indent(" ".repeat(width))
    }
}
