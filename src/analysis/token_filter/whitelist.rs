//! Whitelist filter implementation.
//!
//! Keeps only the tokens whose term is in a [`CharArraySet`]. The set is
//! shared; each filter owns the scratch buffer it folds probes into.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordgate::analysis::char_array_set::CharArraySet;
//! use wordgate::analysis::token_filter::whitelist::WhitelistFilter;
//! use wordgate::analysis::token_stream::{TokenStream, VecTokenStream};
//!
//! let words = Arc::new(CharArraySet::from_words(["quick", "fox"], false));
//! let input = VecTokenStream::from_terms(["the", "quick", "brown", "fox"]);
//! let mut filter = WhitelistFilter::whitelist(input, words);
//!
//! let kept = filter.collect_tokens().unwrap();
//! assert_eq!(kept.len(), 2);
//! assert_eq!(kept[0].term_text(), "quick");
//! assert_eq!(kept[0].position, 1);
//! assert_eq!(kept[1].term_text(), "fox");
//! assert_eq!(kept[1].position, 3);
//! ```

use std::sync::Arc;

use crate::analysis::char_array_set::{CaseFoldScratch, CharArraySet};
use crate::analysis::token_filter::filtering::{FilteringTokenFilter, TokenPredicate};
use crate::analysis::token_stream::TokenStream;

/// Accepts a term if it is in the whitelist.
#[derive(Clone, Debug)]
pub struct WhitelistPredicate {
    words: Arc<CharArraySet>,
    scratch: CaseFoldScratch,
}

impl WhitelistPredicate {
    /// Create a predicate over a shared word set.
    pub fn new(words: Arc<CharArraySet>) -> Self {
        WhitelistPredicate {
            words,
            scratch: CaseFoldScratch::new(),
        }
    }

    /// The words this predicate accepts.
    pub fn words(&self) -> &Arc<CharArraySet> {
        &self.words
    }
}

impl TokenPredicate for WhitelistPredicate {
    fn accept(&mut self, term: &[char]) -> bool {
        self.words.contains_with(term, &mut self.scratch)
    }

    fn name(&self) -> &'static str {
        "white"
    }
}

/// A stage that forwards only whitelisted tokens.
pub type WhitelistFilter<S> = FilteringTokenFilter<S, WhitelistPredicate>;

impl<S: TokenStream> FilteringTokenFilter<S, WhitelistPredicate> {
    /// Wrap `input`, keeping tokens found in `words`.
    pub fn whitelist(input: S, words: Arc<CharArraySet>) -> Self {
        FilteringTokenFilter::new(input, WhitelistPredicate::new(words))
    }

    /// The words this filter keeps.
    pub fn words(&self) -> &Arc<CharArraySet> {
        self.predicate().words()
    }
}
