//! Session and buffer interfaces to the hosting editor.
//!
//! The engine never talks to an editor widget directly. It consumes two
//! narrow traits: [`EditorSession`] for reading tokens and line text, and
//! [`EditableBuffer`] for the three mutation primitives the insertion editor
//! needs. A host wraps its own widget in these traits; [`TextSession`] and
//! [`TextBuffer`] are self-contained implementations used for embedding the
//! engine without a host editor and throughout the test suite.

use super::lexer::LineLexer;
use super::token::Token;

/// Read-only view of the editor's token stream and text.
///
/// A valid cursor position always yields *some* token from [`token_at`],
/// possibly a synthetic empty one. Implementations must not fail.
///
/// [`token_at`]: EditorSession::token_at
pub trait EditorSession {
    /// Get the token at the given cursor position.
    ///
    /// The returned token is the one the cursor sits inside or immediately
    /// after, the same convention editor widgets use when the user is typing
    /// at the end of a partial word.
    fn token_at(&self, row: usize, column: usize) -> Token;

    /// Get the full ordered token sequence for a row.
    fn tokens_for_row(&self, row: usize) -> Vec<Token>;

    /// Get the text of a row.
    fn line_text(&self, row: usize) -> String;
}

/// Mutable buffer surface for applying an accepted completion.
///
/// All three primitives must be total: when an edit is inapplicable (no word
/// to the left, cursor at end of buffer) it is a no-op, never a failure.
pub trait EditableBuffer {
    /// Delete the partial word immediately left of the cursor.
    fn remove_word_left(&mut self);

    /// Delete the word fragment right of the cursor, consuming a single
    /// trailing quote if one follows it.
    fn remove_word_right(&mut self);

    /// Insert text at the cursor.
    fn insert(&mut self, text: &str);
}

/// In-memory session over plain text, lexing rows on demand.
#[derive(Debug, Clone)]
pub struct TextSession {
    lines: Vec<String>,
}

impl TextSession {
    /// Create a session from a block of text, split into rows on newlines.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl EditorSession for TextSession {
    fn token_at(&self, row: usize, column: usize) -> Token {
        let tokens = self.tokens_for_row(row);

        if column == 0 {
            return Token::empty(0, 0);
        }

        for token in &tokens {
            // The cursor sits after the character it just typed, so a cursor
            // at a token's end still belongs to that token.
            if token.span.start < column && column <= token.span.end {
                return token.clone();
            }
        }

        Token::empty(tokens.len(), column)
    }

    fn tokens_for_row(&self, row: usize) -> Vec<Token> {
        LineLexer::tokenize(self.lines.get(row).map_or("", String::as_str))
    }

    fn line_text(&self, row: usize) -> String {
        self.lines.get(row).cloned().unwrap_or_default()
    }
}

/// In-memory editable buffer with a cursor, character-indexed.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl TextBuffer {
    /// Create a buffer with the cursor at the given character position.
    ///
    /// The cursor is clamped to the text length.
    pub fn new(text: &str, cursor: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());
        Self { chars, cursor }
    }

    /// Current buffer contents.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Current cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Word characters match the lexer's identifier class.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

impl EditableBuffer for TextBuffer {
    fn remove_word_left(&mut self) {
        let end = self.cursor;
        let mut start = end;
        while start > 0 && is_word_char(self.chars[start - 1]) {
            start -= 1;
        }
        // No word to the left: no-op. An opening quote left of the word is
        // deliberately preserved; the insertion text decides whether to
        // re-open a quote based on the cursor token.
        if start < end {
            self.chars.drain(start..end);
            self.cursor = start;
        }
    }

    fn remove_word_right(&mut self) {
        let start = self.cursor;
        let mut end = start;
        while end < self.chars.len() && is_word_char(self.chars[end]) {
            end += 1;
        }
        // Consume the closing quote of an already-quoted key so the inserted
        // text does not duplicate it.
        if end < self.chars.len() && is_quote(self.chars[end]) {
            end += 1;
        }
        if start < end {
            self.chars.drain(start..end);
        }
    }

    fn insert(&mut self, text: &str) {
        for ch in text.chars() {
            self.chars.insert(self.cursor, ch);
            self.cursor += 1;
        }
    }
}
