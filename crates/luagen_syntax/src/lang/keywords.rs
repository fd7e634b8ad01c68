//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`])
//! plus a const table ([`KEYWORDS`]) mapping each id to its spelling.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`End` is a valid name, `end` is not).
//! - Some reserved words are also word operators (`and`, `or`, `not`). Use
//!   [`crate::lang::operators`] for their operator semantics.
//!
//! ## Examples
//! ```rust
//! use luagen_syntax::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("elseif"), Some(KeywordId::ElseIf));
//! assert_eq!(keywords::as_str(KeywordId::ElseIf), "elseif");
//! assert!(keywords::is_name("_ENV"));
//! assert!(!keywords::is_name("until"));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    Goto,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
}

/// Registry of all reserved words with their spelling.
pub const KEYWORDS: &[(KeywordId, &str)] = &[
    (KeywordId::And, "and"),
    (KeywordId::Break, "break"),
    (KeywordId::Do, "do"),
    (KeywordId::Else, "else"),
    (KeywordId::ElseIf, "elseif"),
    (KeywordId::End, "end"),
    (KeywordId::False, "false"),
    (KeywordId::For, "for"),
    (KeywordId::Function, "function"),
    (KeywordId::Goto, "goto"),
    (KeywordId::If, "if"),
    (KeywordId::In, "in"),
    (KeywordId::Local, "local"),
    (KeywordId::Nil, "nil"),
    (KeywordId::Not, "not"),
    (KeywordId::Or, "or"),
    (KeywordId::Repeat, "repeat"),
    (KeywordId::Return, "return"),
    (KeywordId::Then, "then"),
    (KeywordId::True, "true"),
    (KeywordId::Until, "until"),
    (KeywordId::While, "while"),
];

/// Return the spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == id)
        .map(|(_, spelling)| *spelling)
        .unwrap_or_default()
}

/// Look up a keyword by its exact spelling.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|(_, spelling)| *spelling == s).map(|(id, _)| *id)
}

/// Whether `s` is a reserved word.
pub fn is_keyword(s: &str) -> bool {
    from_str(s).is_some()
}

/// Whether `s` can be written as a bare name: `[A-Za-z_][A-Za-z0-9_]*` and not reserved.
pub fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_keyword(s)
}
