//! # Wordgate
//!
//! Whitelist token filtering for text analysis pipelines.
//!
//! ## Features
//!
//! - Pull-based token streams that reuse a single token buffer
//! - A generic filtering stage driven by any term predicate
//! - Word sets with optional case folding and allocation-free lookups
//! - Word list loading in `wordset` and `snowball` formats
//! - Factory configuration from argument maps or JSON
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use wordgate::prelude::*;
//!
//! let words = parse_lines(["quick", "fox"], WordListFormat::Wordset, false);
//! let mut filter = WhitelistFilter::whitelist(
//!     UnicodeWordTokenStream::new("the quick brown fox"),
//!     Arc::new(words),
//! );
//!
//! let kept: Vec<String> = filter
//!     .collect_tokens()
//!     .unwrap()
//!     .iter()
//!     .map(|token| token.term_text())
//!     .collect();
//! assert_eq!(kept, vec!["quick", "fox"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::error::{Result, WordgateError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
