//! Indentation tracking
//!
//! Owns the nesting depth of a run and renders the fragment that starts each new line.

use std::borrow::Cow;

use super::config::GenerateConfig;

/// Tracks indentation and produces line-break fragments
#[derive(Debug)]
pub struct IndentWriter<'c> {
    /// Configuration
    config: &'c GenerateConfig,
    /// Current indentation level
    indent_level: usize,
}

impl<'c> IndentWriter<'c> {
    /// Create a writer at indentation level zero
    pub fn new(config: &'c GenerateConfig) -> Self {
        Self {
            config,
            indent_level: 0,
        }
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Line break followed by the indentation of the current level
    pub fn line(&self) -> Cow<'c, str> {
        if self.indent_level == 0 || self.config.indent.is_empty() {
            return Cow::Borrowed(self.config.new_line.as_str());
        }
        let mut line = String::with_capacity(self.config.new_line.len() + self.config.indent.len() * self.indent_level);
        line.push_str(&self.config.new_line);
        for _ in 0..self.indent_level {
            line.push_str(&self.config.indent);
        }
        Cow::Owned(line)
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}
