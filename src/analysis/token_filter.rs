//! Token filter implementations.
//!
//! Filters are pull-based [`TokenStream`](crate::analysis::token_stream::TokenStream)
//! stages that wrap an upstream stream and decide, token by token, what to
//! forward.
//!
//! # Available Filters
//!
//! - [`filtering::FilteringTokenFilter`] - Forwards tokens a [`filtering::TokenPredicate`] accepts
//! - [`whitelist::WhitelistFilter`] - Keeps only tokens found in a word set
//!
//! # Filter Chaining
//!
//! Every filter is itself a token stream, so stages nest:
//!
//! ```text
//! Tokenizer → Whitelist → (next stage) → Index
//! ```

pub mod filtering;
pub mod whitelist;

pub use filtering::{FilterState, FilteringTokenFilter, TokenPredicate};
pub use whitelist::{WhitelistFilter, WhitelistPredicate};
