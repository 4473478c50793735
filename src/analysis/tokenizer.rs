//! Token producers for text analysis.
//!
//! Producers sit at the head of a pipeline and implement
//! [`TokenStream`](crate::analysis::token_stream::TokenStream) directly.
//!
//! # Available Producers
//!
//! - [`unicode_word::UnicodeWordTokenStream`] - Uses Unicode word boundaries

pub mod unicode_word;

pub use unicode_word::UnicodeWordTokenStream;
