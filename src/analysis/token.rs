//! Token types for text analysis.
//!
//! A [`Token`] is the per-step record that flows through a token stream. It
//! is owned by the producer that fills it and is overwritten in place every
//! time the stream advances, so the term text lives in a reusable
//! [`CharTermBuffer`] rather than a fresh `String` per token.
//!
//! # Term buffers
//!
//! The buffer may be longer than the current term. Only `[0, len)` is valid:
//!
//! ```text
//! buffer: [ f  o  x  c  k ]     <- left over from "quick"
//! len:      3                   <- current term is "fox"
//! ```
//!
//! # Examples
//!
//! ```
//! use wordgate::analysis::token::Token;
//!
//! let mut token = Token::with_offsets("quick", 1, 4, 9);
//! token.set_term("fox");
//! assert_eq!(token.term_text(), "fox");
//! assert_eq!(token.term().len(), 3);
//! assert!(token.term_buffer().capacity() >= 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A growable character buffer holding the text of the current token.
///
/// Writes reuse the existing storage; the buffer only grows. Equality and
/// serialization only look at the valid prefix.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct CharTermBuffer {
    buffer: Vec<char>,
    len: usize,
}

impl CharTermBuffer {
    /// Create an empty term buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The valid characters of the term.
    pub fn as_slice(&self) -> &[char] {
        &self.buffer[..self.len]
    }

    /// The whole backing buffer, including stale characters past `len`.
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// Number of valid characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the term is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of characters the buffer can hold without growing.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Mark the term as empty without releasing storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Overwrite the term with `text`.
    pub fn set_str(&mut self, text: &str) {
        self.len = 0;
        for c in text.chars() {
            self.push(c);
        }
    }

    /// Overwrite the term with `chars`.
    pub fn set_chars(&mut self, chars: &[char]) {
        if self.buffer.len() < chars.len() {
            self.buffer.resize(chars.len(), '\0');
        }
        self.buffer[..chars.len()].copy_from_slice(chars);
        self.len = chars.len();
    }

    /// Append one character to the term.
    pub fn push(&mut self, c: char) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = c;
        } else {
            self.buffer.push(c);
        }
        self.len += 1;
    }

    /// Copy the term text into a new `String`.
    pub fn to_text(&self) -> String {
        self.as_slice().iter().collect()
    }
}

impl PartialEq for CharTermBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for CharTermBuffer {}

impl From<&str> for CharTermBuffer {
    fn from(text: &str) -> Self {
        let mut buffer = CharTermBuffer::new();
        buffer.set_str(text);
        buffer
    }
}

impl From<String> for CharTermBuffer {
    fn from(text: String) -> Self {
        CharTermBuffer::from(text.as_str())
    }
}

impl From<CharTermBuffer> for String {
    fn from(buffer: CharTermBuffer) -> Self {
        buffer.to_text()
    }
}

impl fmt::Display for CharTermBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.as_slice() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Token type classification assigned by producers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text (English, Latin scripts)
    Alphanum,
    /// Numeric values
    Num,
    /// CJK (Chinese, Japanese, Korean) characters
    Cjk,
    /// Other/unknown token types
    Other,
}

/// A single token in an analysis stream.
///
/// Only the term text is interpreted by filtering stages. Everything else is
/// payload that stages pass along untouched, except `position_increment`,
/// which grows by the increments of the tokens a stage removed.
///
/// # Fields
///
/// - `term` - The token's text, in a reusable buffer
/// - `position` - Position in the original token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `position_increment` - Position relative to the previous token (default: 1)
/// - `position_length` - Number of positions this token spans (default: 1)
/// - `flags` - Opaque bit flags set by producers
/// - `boost` - Scoring weight multiplier (default: 1.0)
/// - `token_type` - Optional classification
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub term: CharTermBuffer,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    pub position_length: usize,

    /// Producer-defined bit flags.
    pub flags: u32,

    /// Boost factor for this token (default: 1.0)
    pub boost: f32,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new(text: &str, position: usize) -> Self {
        Token {
            term: CharTermBuffer::from(text),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
            flags: 0,
            boost: 1.0,
            token_type: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets(
        text: &str,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// The valid characters of the term.
    pub fn term(&self) -> &[char] {
        self.term.as_slice()
    }

    /// The term buffer itself.
    pub fn term_buffer(&self) -> &CharTermBuffer {
        &self.term
    }

    /// Copy the term into a `String`.
    pub fn term_text(&self) -> String {
        self.term.to_text()
    }

    /// Overwrite the term text, reusing the buffer.
    pub fn set_term(&mut self, text: &str) {
        self.term.set_str(text);
    }

    /// Overwrite every attribute of this token with `other`'s, reusing the
    /// term buffer's storage.
    pub fn copy_from(&mut self, other: &Token) {
        self.term.set_chars(other.term());
        self.position = other.position;
        self.start_offset = other.start_offset;
        self.end_offset = other.end_offset;
        self.position_increment = other.position_increment;
        self.position_length = other.position_length;
        self.flags = other.flags;
        self.boost = other.boost;
        self.token_type = other.token_type;
    }

    /// Length of the term in characters.
    pub fn len(&self) -> usize {
        self.term.len()
    }

    /// Check if the term is empty.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Set the boost factor for this token.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Set the flags for this token.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::new("", 0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.term_text(), "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.position_increment, 1);
        assert_eq!(token.position_length, 1);
        assert_eq!(token.flags, 0);
        assert_eq!(token.boost, 1.0);
        assert!(token.token_type.is_none());
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.term_text(), "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_term_buffer_reuse() {
        let mut buffer = CharTermBuffer::from("quick");
        buffer.set_str("fox");

        assert_eq!(buffer.as_slice(), &['f', 'o', 'x']);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.buffer(), &['f', 'o', 'x', 'c', 'k']);

        buffer.set_chars(&['a', 'b', 'c', 'd', 'e', 'f']);
        assert_eq!(buffer.to_text(), "abcdef");
        assert_eq!(buffer.capacity(), 6);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 6);
    }

    #[test]
    fn test_term_buffer_equality_ignores_stale_chars() {
        let mut reused = CharTermBuffer::from("longer");
        reused.set_str("fox");
        assert_eq!(reused, CharTermBuffer::from("fox"));
    }

    #[test]
    fn test_copy_from() {
        let source = Token::with_offsets("fox", 3, 16, 19)
            .with_flags(0b101)
            .with_boost(2.0)
            .with_position_increment(2)
            .with_token_type(TokenType::Alphanum);
        let mut target = Token::new("quick", 1);
        target.copy_from(&source);

        assert_eq!(target, source);
        assert_eq!(target.term_buffer().capacity(), 5);
    }

    #[test]
    fn test_token_serialization() {
        let mut token = Token::with_offsets("brown", 2, 10, 15);
        token.set_term("ox");
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"term\":\"ox\""));

        let decoded: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }
}
