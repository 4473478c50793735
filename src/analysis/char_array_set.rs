//! Word sets that can be probed with borrowed character slices.
//!
//! [`CharArraySet`] stores words as `Box<[char]>`, so a term buffer's valid
//! slice can be looked up directly without building a `String` for every
//! token. A set created with `ignore_case` lower-cases words on insertion
//! and folds every probe the same way before comparing.
//!
//! # Examples
//!
//! ```
//! use wordgate::analysis::char_array_set::{CaseFoldScratch, CharArraySet};
//!
//! let set = CharArraySet::from_words(["Run", "walk"], true);
//! let mut scratch = CaseFoldScratch::new();
//!
//! let probe: Vec<char> = "RUN".chars().collect();
//! assert!(set.contains_with(&probe, &mut scratch));
//! assert!(set.contains_str("Walk"));
//! assert!(!set.contains_str("jump"));
//! ```

use ahash::AHashSet;

/// Lower-case `text` into `out` using the folding rule shared by insertions
/// and lookups.
fn fold_into(text: &[char], out: &mut Vec<char>) {
    for &c in text {
        out.extend(c.to_lowercase());
    }
}

/// Whether folding would change `text`.
fn needs_folding(text: &[char]) -> bool {
    text.iter().any(|&c| {
        let mut lower = c.to_lowercase();
        !(lower.next() == Some(c) && lower.next().is_none())
    })
}

/// Reusable buffer for case-insensitive lookups.
///
/// Each consumer owns its own scratch, so lookups on a shared set never
/// touch shared mutable state.
#[derive(Clone, Debug, Default)]
pub struct CaseFoldScratch {
    buffer: Vec<char>,
}

impl CaseFoldScratch {
    /// Create an empty scratch buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scratch buffer sized for terms up to `capacity` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        CaseFoldScratch {
            buffer: Vec::with_capacity(capacity),
        }
    }

    fn fold(&mut self, text: &[char]) -> &[char] {
        self.buffer.clear();
        fold_into(text, &mut self.buffer);
        &self.buffer
    }
}

/// A set of words with fixed case sensitivity.
///
/// The set is filled during pipeline setup and then only read. It is
/// `Send + Sync` and is normally shared behind an `Arc` by every filter
/// that uses it.
#[derive(Clone, Debug, Default)]
pub struct CharArraySet {
    words: AHashSet<Box<[char]>>,
    ignore_case: bool,
}

impl CharArraySet {
    /// Create an empty set.
    pub fn new(ignore_case: bool) -> Self {
        CharArraySet {
            words: AHashSet::new(),
            ignore_case,
        }
    }

    /// Create an empty set with room for `capacity` words.
    pub fn with_capacity(capacity: usize, ignore_case: bool) -> Self {
        CharArraySet {
            words: AHashSet::with_capacity(capacity),
            ignore_case,
        }
    }

    /// Build a set from in-memory words.
    pub fn from_words<I, S>(words: I, ignore_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(ignore_case);
        set.extend(words);
        set
    }

    /// Whether lookups ignore case.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Insert a word. Returns `true` if it was not already present.
    pub fn insert<S: AsRef<str>>(&mut self, word: S) -> bool {
        let chars: Vec<char> = word.as_ref().chars().collect();
        self.insert_chars(&chars)
    }

    /// Insert a word given as characters. Returns `true` if it was not
    /// already present.
    pub fn insert_chars(&mut self, word: &[char]) -> bool {
        let key: Box<[char]> = if self.ignore_case {
            let mut folded = Vec::with_capacity(word.len());
            fold_into(word, &mut folded);
            folded.into_boxed_slice()
        } else {
            word.into()
        };
        self.words.insert(key)
    }

    /// Insert every word from `words`.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word);
        }
    }

    /// Check whether `text` is in the set, folding into `scratch` when the
    /// set ignores case.
    ///
    /// This is the per-token path: once `scratch` has grown to the longest
    /// probe it does not allocate.
    pub fn contains_with(&self, text: &[char], scratch: &mut CaseFoldScratch) -> bool {
        if self.ignore_case && needs_folding(text) {
            self.words.contains(scratch.fold(text))
        } else {
            self.words.contains(text)
        }
    }

    /// Check whether `text` is in the set.
    ///
    /// Probes that need case folding allocate a temporary buffer; use
    /// [`contains_with`](Self::contains_with) on hot paths.
    pub fn contains(&self, text: &[char]) -> bool {
        if self.ignore_case && needs_folding(text) {
            let mut folded = Vec::with_capacity(text.len());
            fold_into(text, &mut folded);
            self.words.contains(folded.as_slice())
        } else {
            self.words.contains(text)
        }
    }

    /// Check whether a string is in the set.
    pub fn contains_str(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.contains(&chars)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words the set can hold without growing.
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Iterate over the stored (already folded) words.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.words.iter().map(|word| word.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let set = CharArraySet::from_words(["Run"], false);

        assert!(set.contains(&chars("Run")));
        assert!(!set.contains(&chars("run")));
        assert!(!set.contains(&chars("RUN")));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let set = CharArraySet::from_words(["Run"], true);
        let mut scratch = CaseFoldScratch::new();

        for probe in ["run", "RUN", "Run", "rUn"] {
            assert!(set.contains(&chars(probe)), "{probe}");
            assert!(set.contains_with(&chars(probe), &mut scratch), "{probe}");
        }
        assert!(!set.contains(&chars("runs")));
    }

    #[test]
    fn test_ignore_case_collapses_duplicates() {
        let set = CharArraySet::from_words(["Quick", "QUICK", "quick", "fox"], true);
        assert_eq!(set.len(), 2);

        let mut words: Vec<String> = set.iter().collect();
        words.sort();
        assert_eq!(words, vec!["fox", "quick"]);
    }

    #[test]
    fn test_case_sensitive_keeps_variants() {
        let set = CharArraySet::from_words(["Quick", "quick"], false);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_lookup_uses_valid_prefix_only() {
        let set = CharArraySet::from_words(["fox"], false);
        let buffer = chars("foxes");

        assert!(set.contains(&buffer[..3]));
        assert!(!set.contains(&buffer));
    }

    #[test]
    fn test_non_ascii_folding() {
        let set = CharArraySet::from_words(["Straße", "ÉCOLE"], true);

        assert!(!set.contains_str("strasse"));
        assert!(set.contains_str("straße"));
        assert!(set.contains_str("STRAßE"));
        assert!(set.contains_str("école"));
        assert!(set.contains_str("École"));
    }

    #[test]
    fn test_scratch_is_reused() {
        let set = CharArraySet::from_words(["alpha", "beta"], true);
        let mut scratch = CaseFoldScratch::with_capacity(16);

        assert!(set.contains_with(&chars("ALPHA"), &mut scratch));
        assert!(set.contains_with(&chars("Beta"), &mut scratch));
        assert!(!set.contains_with(&chars("GAMMA"), &mut scratch));
        assert!(scratch.buffer.capacity() >= 16);
    }

    #[test]
    fn test_insert_reports_new_words() {
        let mut set = CharArraySet::new(true);
        assert!(set.is_empty());
        assert!(set.insert("Alpha"));
        assert!(!set.insert("ALPHA"));
        assert!(set.insert_chars(&chars("beta")));
        assert_eq!(set.len(), 2);
        assert!(set.ignore_case());
    }

    #[test]
    fn test_empty_set_rejects_everything() {
        let set = CharArraySet::new(false);
        assert!(!set.contains(&chars("anything")));
        assert!(!set.contains(&[]));
    }

    #[test]
    fn test_shared_across_threads() {
        let set = std::sync::Arc::new(CharArraySet::from_words(["quick", "fox"], true));

        std::thread::scope(|scope| {
            for probe in ["QUICK", "Fox", "quick"] {
                let set = std::sync::Arc::clone(&set);
                scope.spawn(move || {
                    let mut scratch = CaseFoldScratch::new();
                    assert!(set.contains_with(&chars(probe), &mut scratch));
                });
            }
        });
    }
}
