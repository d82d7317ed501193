//! Token model shared between the session adapter and the classifier.
//!
//! Tokens are produced per keystroke by the hosting editor's session and are
//! never persisted. The classifier only inspects token values and positions;
//! the role is the adapter's shallow classification and is kept for hosts
//! that want to filter or style candidates by it.

use std::ops::Range;

/// Shallow token classification assigned by the session adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    /// Identifier (collection name, operator name, partial word, etc.)
    Identifier,
    /// Punctuation: dots, braces, brackets, commas, colons
    Punctuation,
    /// String literal, value includes the surrounding quote characters
    StringLiteral,
    /// Number literal
    Number,
    /// Anything the lexer does not recognize
    Unknown,
}

/// A single token in a line's token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Position within the line's token sequence
    pub index: usize,
    /// Raw text of the token, exactly as it appears in the line
    pub value: String,
    /// The adapter's classification of this token
    pub role: TokenRole,
    /// Character range of the token within the line
    pub span: Range<usize>,
}

impl Token {
    /// Create a new token.
    pub fn new(index: usize, value: impl Into<String>, role: TokenRole, span: Range<usize>) -> Self {
        Self {
            index,
            value: value.into(),
            role,
            span,
        }
    }

    /// Create a synthetic empty token for a cursor position that is not
    /// covered by any real token (empty line, whitespace gap).
    ///
    /// A valid cursor position always yields *some* token, so callers never
    /// have to handle a missing one. The synthetic token's index points one
    /// past the last real token of the line.
    pub fn empty(index: usize, column: usize) -> Self {
        Self {
            index,
            value: String::new(),
            role: TokenRole::Unknown,
            span: column..column,
        }
    }

    /// Check if this token is a dot separator.
    pub fn is_dot(&self) -> bool {
        self.value == "."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new() {
        let token = Token::new(2, "users", TokenRole::Identifier, 3..8);
        assert_eq!(token.index, 2);
        assert_eq!(token.value, "users");
        assert_eq!(token.role, TokenRole::Identifier);
        assert_eq!(token.span, 3..8);
        assert!(!token.is_dot());
    }

    #[test]
    fn test_token_empty() {
        let token = Token::empty(4, 10);
        assert_eq!(token.index, 4);
        assert!(token.value.is_empty());
        assert_eq!(token.role, TokenRole::Unknown);
        assert_eq!(token.span, 10..10);
    }

    #[test]
    fn test_is_dot() {
        let dot = Token::new(1, ".", TokenRole::Punctuation, 2..3);
        assert!(dot.is_dot());
    }
}
