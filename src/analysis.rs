//! Text analysis module for Wordgate.
//!
//! Tokens are pulled through a chain of stages. A producer such as
//! [`tokenizer::UnicodeWordTokenStream`] sits at the head, and filters such
//! as [`token_filter::WhitelistFilter`] wrap it:
//!
//! ```text
//! word list → CharArraySet → WhitelistPredicate → FilteringTokenFilter → consumer
//!                                                        ↑
//!                                                 upstream TokenStream
//! ```

pub mod char_array_set;
pub mod factory;
pub mod token;
pub mod token_filter;
pub mod token_stream;
pub mod tokenizer;
pub mod word_list;

// Re-export commonly used types
pub use char_array_set::{CaseFoldScratch, CharArraySet};
pub use factory::{
    FileResourceLoader, MemoryResourceLoader, ResourceLoader, WhitelistFilterConfig,
    WhitelistFilterFactory,
};
pub use token::{CharTermBuffer, Token, TokenType};
pub use token_filter::{
    FilterState, FilteringTokenFilter, TokenPredicate, WhitelistFilter, WhitelistPredicate,
};
pub use token_stream::{IntoTokenStream, TokenStream, VecTokenStream};
pub use tokenizer::UnicodeWordTokenStream;
pub use word_list::{WordListFormat, load_words, make_word_set, parse_lines};
