//! Generic filtering stage.
//!
//! [`FilteringTokenFilter`] wraps an upstream [`TokenStream`] and forwards
//! only the tokens whose term a [`TokenPredicate`] accepts, in upstream
//! order. Accepted tokens keep every attribute upstream gave them except
//! `position_increment`, which absorbs the increments of the tokens skipped
//! since the previous accepted one. Summing increments downstream therefore
//! still yields the upstream positions.
//!
//! # Examples
//!
//! ```
//! use wordgate::analysis::token_filter::filtering::FilteringTokenFilter;
//! use wordgate::analysis::token_stream::{TokenStream, VecTokenStream};
//!
//! let input = VecTokenStream::from_terms(["a", "longer", "xy", "words"]);
//! let mut filter = FilteringTokenFilter::new(input, |term: &[char]| term.len() > 2);
//!
//! let terms: Vec<String> = filter
//!     .collect_tokens()
//!     .unwrap()
//!     .iter()
//!     .map(|token| token.term_text())
//!     .collect();
//! assert_eq!(terms, vec!["longer", "words"]);
//! ```

use crate::analysis::token::Token;
use crate::analysis::token_stream::TokenStream;
use crate::error::Result;

/// Decides whether a token is forwarded, based on its term text.
///
/// Predicates see the term for the duration of one call only.
pub trait TokenPredicate {
    /// Return `true` to forward the token.
    fn accept(&mut self, term: &[char]) -> bool;

    /// Get the name of this predicate (for debugging and configuration).
    fn name(&self) -> &'static str {
        "predicate"
    }
}

impl<F> TokenPredicate for F
where
    F: FnMut(&[char]) -> bool,
{
    fn accept(&mut self, term: &[char]) -> bool {
        self(term)
    }
}

/// Whether a filtering stage may still pull from upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterState {
    /// Upstream has not reported the end yet.
    Active,
    /// Upstream has ended; only `reset` leaves this state.
    Exhausted,
}

/// A token stream that skips upstream tokens rejected by a predicate.
#[derive(Clone, Debug)]
pub struct FilteringTokenFilter<S, P> {
    input: S,
    predicate: P,
    state: FilterState,
    skipped_positions: usize,
}

impl<S, P> FilteringTokenFilter<S, P>
where
    S: TokenStream,
    P: TokenPredicate,
{
    /// Wrap `input`, forwarding the tokens `predicate` accepts.
    pub fn new(input: S, predicate: P) -> Self {
        FilteringTokenFilter {
            input,
            predicate,
            state: FilterState::Active,
            skipped_positions: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// The predicate in use.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// The wrapped upstream stream.
    pub fn get_ref(&self) -> &S {
        &self.input
    }

    /// Unwrap the stage, returning the upstream stream.
    pub fn into_inner(self) -> S {
        self.input
    }
}

impl<S, P> TokenStream for FilteringTokenFilter<S, P>
where
    S: TokenStream,
    P: TokenPredicate,
{
    fn advance(&mut self) -> Result<bool> {
        if self.state == FilterState::Exhausted {
            return Ok(false);
        }

        let mut skipped = 0;
        while self.input.advance()? {
            if self.predicate.accept(self.input.token().term()) {
                if skipped > 0 {
                    self.input.token_mut().position_increment += skipped;
                }
                return Ok(true);
            }
            skipped += self.input.token().position_increment;
        }

        self.skipped_positions = skipped;
        self.state = FilterState::Exhausted;
        Ok(false)
    }

    fn token(&self) -> &Token {
        self.input.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.input.token_mut()
    }

    fn trailing_position_increment(&self) -> usize {
        self.input.trailing_position_increment() + self.skipped_positions
    }

    fn reset(&mut self) -> Result<()> {
        self.input.reset()?;
        self.state = FilterState::Active;
        self.skipped_positions = 0;
        Ok(())
    }
}
