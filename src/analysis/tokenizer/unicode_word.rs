//! Unicode word token stream.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and hands out
//! the word segments one at a time. Segments without any alphanumeric
//! character (whitespace, punctuation) are skipped.
//!
//! # Examples
//!
//! ```
//! use wordgate::analysis::token_stream::TokenStream;
//! use wordgate::analysis::tokenizer::unicode_word::UnicodeWordTokenStream;
//!
//! let mut stream = UnicodeWordTokenStream::new("Hello, world! 你好");
//! let tokens = stream.collect_tokens().unwrap();
//!
//! assert_eq!(tokens[0].term_text(), "Hello");
//! assert_eq!(tokens[1].term_text(), "world");
//! assert_eq!(tokens[1].start_offset, 7);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenType};
use crate::analysis::token_stream::TokenStream;
use crate::error::Result;

/// A token stream over the Unicode words of an owned text.
///
/// Positions count emitted words from 0; offsets are byte offsets into the
/// text.
#[derive(Clone, Debug)]
pub struct UnicodeWordTokenStream {
    text: String,
    spans: Vec<(usize, usize)>,
    next: usize,
    current: Token,
}

impl UnicodeWordTokenStream {
    /// Segment `text` into words.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let spans = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .map(|(start, word)| (start, start + word.len()))
            .collect();
        UnicodeWordTokenStream {
            text,
            spans,
            next: 0,
            current: Token::default(),
        }
    }

    /// The text being tokenized.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of tokens handed out since the last reset.
    pub fn tokens_read(&self) -> usize {
        self.next
    }

    /// Classify a word by its characters.
    fn detect_token_type(word: &str) -> TokenType {
        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().any(|c| {
            matches!(c,
                '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
                '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
                '\u{3040}'..='\u{30FF}' |  // Hiragana and Katakana
                '\u{AC00}'..='\u{D7AF}'    // Hangul syllables
            )
        }) {
            return TokenType::Cjk;
        }

        if word.chars().all(|c| c.is_alphanumeric()) {
            return TokenType::Alphanum;
        }

        TokenType::Other
    }
}

impl TokenStream for UnicodeWordTokenStream {
    fn advance(&mut self) -> Result<bool> {
        let Some(&(start, end)) = self.spans.get(self.next) else {
            return Ok(false);
        };
        let word = &self.text[start..end];

        self.current.set_term(word);
        self.current.position = self.next;
        self.current.start_offset = start;
        self.current.end_offset = end;
        self.current.position_increment = 1;
        self.current.position_length = 1;
        self.current.token_type = Some(Self::detect_token_type(word));
        self.next += 1;
        Ok(true)
    }

    fn token(&self) -> &Token {
        &self.current
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.current
    }

    fn reset(&mut self) -> Result<()> {
        self.next = 0;
        Ok(())
    }
}
