//! Error-tolerant lexer for a single editor line.
//!
//! The lexer feeds the token stream the classifier works on. It is designed
//! for autocomplete scenarios, where the input is almost always an incomplete
//! query:
//!
//! - **Never panic** - always return a valid token stream
//! - **Never reject input** - unknown characters become `Unknown` tokens
//! - **Raw values** - token values are the exact line text, including quote
//!   characters on string literals, because the insertion editor inspects
//!   leading/trailing quotes on the cursor token
//!
//! Whitespace separates tokens and is not emitted. Spans are character
//! positions within the line, matching the column positions the hosting
//! editor reports.

use super::token::{Token, TokenRole};

/// Line lexer producing the token sequence for one editor row.
pub struct LineLexer {
    input: Vec<char>,
    pos: usize,
}

impl LineLexer {
    /// Create a new lexer from a line of text.
    pub fn new(line: &str) -> Self {
        Self {
            input: line.chars().collect(),
            pos: 0,
        }
    }

    /// Tokenize an entire line.
    ///
    /// Token indices are assigned sequentially from zero.
    pub fn tokenize(line: &str) -> Vec<Token> {
        let mut lexer = Self::new(line);
        let mut tokens = Vec::new();

        while let Some(token) = lexer.next_token(tokens.len()) {
            tokens.push(token);
        }

        tokens
    }

    /// Get the next token, or `None` at end of line.
    fn next_token(&mut self, index: usize) -> Option<Token> {
        self.skip_whitespace();

        if self.is_at_end() {
            return None;
        }

        let start = self.pos;
        let ch = self.current_char();

        let token = match ch {
            '.' | '(' | ')' | '{' | '}' | '[' | ']' | ',' | ':' | ';' => {
                self.advance();
                Token::new(index, ch.to_string(), TokenRole::Punctuation, start..self.pos)
            }
            '\'' | '"' => self.scan_string(ch, index, start),
            '0'..='9' => self.scan_number(index, start),
            'a'..='z' | 'A'..='Z' | '_' | '$' => self.scan_identifier(index, start),
            _ => {
                self.advance();
                Token::new(index, ch.to_string(), TokenRole::Unknown, start..self.pos)
            }
        };

        Some(token)
    }

    /// Scan a string literal, keeping the quote characters in the value.
    ///
    /// An unterminated string runs to the end of the line and keeps only its
    /// opening quote, which is exactly the shape the insertion editor's
    /// quoting rules key off.
    fn scan_string(&mut self, quote: char, index: usize, start: usize) -> Token {
        let mut value = String::new();
        value.push(quote);
        self.advance();

        while !self.is_at_end() && self.current_char() != quote {
            if self.current_char() == '\\' {
                value.push('\\');
                self.advance();
                if !self.is_at_end() {
                    value.push(self.current_char());
                    self.advance();
                }
            } else {
                value.push(self.current_char());
                self.advance();
            }
        }

        if !self.is_at_end() && self.current_char() == quote {
            value.push(quote);
            self.advance();
        }

        Token::new(index, value, TokenRole::StringLiteral, start..self.pos)
    }

    /// Scan a number (integer or decimal).
    fn scan_number(&mut self, index: usize, start: usize) -> Token {
        let mut value = String::new();

        while !self.is_at_end() && self.current_char().is_ascii_digit() {
            value.push(self.current_char());
            self.advance();
        }

        if self.current_char() == '.' && self.peek_char().is_ascii_digit() {
            value.push('.');
            self.advance();
            while !self.is_at_end() && self.current_char().is_ascii_digit() {
                value.push(self.current_char());
                self.advance();
            }
        }

        Token::new(index, value, TokenRole::Number, start..self.pos)
    }

    /// Scan an identifier, including `$`-prefixed operator names.
    fn scan_identifier(&mut self, index: usize, start: usize) -> Token {
        let mut value = String::new();

        while !self.is_at_end() {
            let ch = self.current_char();
            if ch.is_alphanumeric() || ch == '_' || ch == '$' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(index, value, TokenRole::Identifier, start..self.pos)
    }

    /// Skip whitespace characters.
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Get current character.
    fn current_char(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.input[self.pos]
        }
    }

    /// Peek at next character.
    fn peek_char(&self) -> char {
        if self.pos + 1 >= self.input.len() {
            '\0'
        } else {
            self.input[self.pos + 1]
        }
    }

    /// Advance position.
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_db_collection() {
        let tokens = LineLexer::tokenize("db.users");
        assert_eq!(tokens.len(), 3);

        assert_eq!(tokens[0].value, "db");
        assert_eq!(tokens[0].role, TokenRole::Identifier);
        assert_eq!(tokens[1].value, ".");
        assert_eq!(tokens[1].role, TokenRole::Punctuation);
        assert_eq!(tokens[2].value, "users");
        assert_eq!(tokens[2].span, 3..8);
    }

    #[test]
    fn test_tokenize_db_collection_method() {
        let tokens = LineLexer::tokenize("db.users.find");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3].value, ".");
        assert_eq!(tokens[4].value, "find");
    }

    #[test]
    fn test_token_indices_are_sequential() {
        let tokens = LineLexer::tokenize("db.users.find()");
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.index, i);
        }
    }

    #[test]
    fn test_tokenize_partial_input() {
        let tokens = LineLexer::tokenize("db.us");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].value, "us");
    }

    #[test]
    fn test_string_value_keeps_quotes() {
        let tokens = LineLexer::tokenize(r#"{"key": 1}"#);
        assert_eq!(tokens[1].value, "\"key\"");
        assert_eq!(tokens[1].role, TokenRole::StringLiteral);
    }

    #[test]
    fn test_unterminated_string_keeps_opening_quote() {
        let tokens = LineLexer::tokenize(r#"{"fi"#);
        assert_eq!(tokens[1].value, "\"fi");
        assert!(tokens[1].value.starts_with('"'));
        assert!(!tokens[1].value.ends_with('"'));
    }

    #[test]
    fn test_tokenize_dollar_operator() {
        let tokens = LineLexer::tokenize("$eq");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, "$eq");
        assert_eq!(tokens[0].role, TokenRole::Identifier);
    }

    #[test]
    fn test_tokenize_number() {
        let tokens = LineLexer::tokenize("{age: 25.5}");
        assert!(
            tokens
                .iter()
                .any(|t| t.value == "25.5" && t.role == TokenRole::Number)
        );
    }

    #[test]
    fn test_tokenize_empty_line() {
        let tokens = LineLexer::tokenize("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_is_not_a_token() {
        let tokens = LineLexer::tokenize("db . users");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].span, 3..4);
    }

    #[test]
    fn test_unknown_chars() {
        let tokens = LineLexer::tokenize("db@");
        assert_eq!(tokens[1].value, "@");
        assert_eq!(tokens[1].role, TokenRole::Unknown);
    }
}
