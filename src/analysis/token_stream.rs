//! Pull-based token streams.
//!
//! A [`TokenStream`] hands out one token at a time. The consumer calls
//! [`TokenStream::advance`] and, when it returns `true`, reads the current
//! token through [`TokenStream::token`]. The returned reference borrows the
//! stream, so it cannot outlive the next `advance`, which is exactly when
//! the producer overwrites the token in place.
//!
//! ```
//! use wordgate::analysis::token::Token;
//! use wordgate::analysis::token_stream::{TokenStream, VecTokenStream};
//!
//! let mut stream = VecTokenStream::new(vec![Token::new("hello", 0), Token::new("world", 1)]);
//! let mut terms = Vec::new();
//! while stream.advance().unwrap() {
//!     terms.push(stream.token().term_text());
//! }
//! assert_eq!(terms, vec!["hello", "world"]);
//! ```

use crate::analysis::token::Token;
use crate::error::Result;

/// A source of tokens that can be pulled one at a time.
///
/// Filtering stages are generic over this trait and also implement it, so
/// stages chain without a common base type.
pub trait TokenStream {
    /// Move to the next token.
    ///
    /// Returns `Ok(true)` if a token is available through [`token`](Self::token),
    /// `Ok(false)` once the stream has ended.
    fn advance(&mut self) -> Result<bool>;

    /// The current token.
    ///
    /// Only meaningful after `advance` returned `Ok(true)`.
    fn token(&self) -> &Token;

    /// Mutable access to the current token, for stages that adjust it
    /// before handing it on.
    fn token_mut(&mut self) -> &mut Token;

    /// Position increment left over after the last token, such as the
    /// increments of trailing tokens a filter removed.
    ///
    /// Only meaningful once `advance` has returned `Ok(false)`.
    fn trailing_position_increment(&self) -> usize {
        0
    }

    /// Rewind the stream so it can be consumed again.
    fn reset(&mut self) -> Result<()>;

    /// Drain the stream, cloning every token it yields.
    fn collect_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while self.advance()? {
            tokens.push(self.token().clone());
        }
        Ok(tokens)
    }
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn token(&self) -> &Token {
        (**self).token()
    }

    fn token_mut(&mut self) -> &mut Token {
        (**self).token_mut()
    }

    fn trailing_position_increment(&self) -> usize {
        (**self).trailing_position_increment()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<S: TokenStream + ?Sized> TokenStream for &mut S {
    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn token(&self) -> &Token {
        (**self).token()
    }

    fn token_mut(&mut self) -> &mut Token {
        (**self).token_mut()
    }

    fn trailing_position_increment(&self) -> usize {
        (**self).trailing_position_increment()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

/// Replays a fixed list of tokens through a single reused token.
#[derive(Clone, Debug, Default)]
pub struct VecTokenStream {
    tokens: Vec<Token>,
    next: usize,
    current: Token,
}

impl VecTokenStream {
    /// Create a stream over `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenStream {
            tokens,
            next: 0,
            current: Token::default(),
        }
    }

    /// Create a stream from bare terms, numbering positions from 0.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = terms
            .into_iter()
            .enumerate()
            .map(|(position, term)| Token::new(term.as_ref(), position))
            .collect();
        Self::new(tokens)
    }

    /// Number of tokens handed out since the last reset.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl TokenStream for VecTokenStream {
    fn advance(&mut self) -> Result<bool> {
        match self.tokens.get(self.next) {
            Some(token) => {
                self.current.copy_from(token);
                self.next += 1;
                Ok(true)
            }
            None => Ok(false),
        }
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

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// The stream type produced.
    type Stream: TokenStream;

    /// Convert this type into a token stream.
    fn into_token_stream(self) -> Self::Stream;
}

impl IntoTokenStream for Vec<Token> {
    type Stream = VecTokenStream;

    fn into_token_stream(self) -> VecTokenStream {
        VecTokenStream::new(self)
    }
}
