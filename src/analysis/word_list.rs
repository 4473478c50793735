//! Word list loading.
//!
//! Word lists are plain UTF-8 text in one of two layouts:
//!
//! - [`WordListFormat::Wordset`]: one word per line. The trimmed line is the
//!   word, interior whitespace included. Lines starting with `#` are comments.
//! - [`WordListFormat::Snowball`]: any number of whitespace-separated words
//!   per line. Everything from the first `|` on a line is a comment.
//!
//! Blank lines are skipped in both layouts and neither one rejects input.
//!
//! # Examples
//!
//! ```
//! use wordgate::analysis::word_list::{parse_lines, WordListFormat};
//!
//! let set = parse_lines(
//!     ["alpha beta | a trailing comment", "| just a comment", "Gamma"],
//!     WordListFormat::Snowball,
//!     true,
//! );
//! assert_eq!(set.len(), 3);
//! assert!(set.contains_str("GAMMA"));
//! ```

use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::char_array_set::CharArraySet;
use crate::error::{Result, WordgateError};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Layout of a word list resource.
///
/// Names are matched ignoring ASCII case, both when parsed from a string and
/// when deserialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordListFormat {
    /// One word per line, `#` comments.
    #[default]
    Wordset,
    /// Several words per line, `|` comments.
    Snowball,
}

impl WordListFormat {
    /// The option value naming this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            WordListFormat::Wordset => "wordset",
            WordListFormat::Snowball => "snowball",
        }
    }

    /// Feed the words found on one line to `sink`.
    fn extract<'a>(&self, line: &'a str, mut sink: impl FnMut(&'a str)) {
        match self {
            WordListFormat::Wordset => {
                let word = line.trim();
                if !word.is_empty() && !word.starts_with('#') {
                    sink(word);
                }
            }
            WordListFormat::Snowball => {
                let content = match line.find('|') {
                    Some(comment) => &line[..comment],
                    None => line,
                };
                content.split_whitespace().for_each(sink);
            }
        }
    }
}

impl FromStr for WordListFormat {
    type Err = WordgateError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("wordset") {
            Ok(WordListFormat::Wordset)
        } else if s.eq_ignore_ascii_case("snowball") {
            Ok(WordListFormat::Snowball)
        } else {
            Err(WordgateError::config(format!(
                "Unknown word list format '{s}', expected 'wordset' or 'snowball'"
            )))
        }
    }
}

impl<'de> Deserialize<'de> for WordListFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for WordListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse in-memory lines into a new set.
pub fn parse_lines<I, S>(lines: I, format: WordListFormat, ignore_case: bool) -> CharArraySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = CharArraySet::new(ignore_case);
    parse_lines_into(lines, format, &mut set);
    set
}

/// Parse in-memory lines into an existing set, folding case the way `set`
/// does. Returns the number of words read, duplicates included.
pub fn parse_lines_into<I, S>(lines: I, format: WordListFormat, set: &mut CharArraySet) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| insert_line(index, line.as_ref(), format, set))
        .sum()
}

/// Read a word list resource into a new set.
pub fn load_words<R: BufRead>(
    reader: R,
    format: WordListFormat,
    ignore_case: bool,
) -> Result<CharArraySet> {
    let mut set = CharArraySet::new(ignore_case);
    load_words_into(reader, format, &mut set)?;
    Ok(set)
}

/// Read a word list resource into an existing set. Returns the number of
/// words read, duplicates included.
pub fn load_words_into<R: BufRead>(
    reader: R,
    format: WordListFormat,
    set: &mut CharArraySet,
) -> Result<usize> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                WordgateError::parse(format!("line {}: {e}", index + 1))
            }
            _ => WordgateError::Io(e),
        })?;
        count += insert_line(index, &line, format, set);
    }
    Ok(count)
}

fn insert_line(
    index: usize,
    line: &str,
    format: WordListFormat,
    set: &mut CharArraySet,
) -> usize {
    let line = if index == 0 {
        line.trim_start_matches(BYTE_ORDER_MARK)
    } else {
        line
    };
    let mut count = 0;
    format.extract(line, |word| {
        set.insert(word);
        count += 1;
    });
    count
}

/// Build a set from a list of words, suitable for caching when a pipeline
/// is assembled.
pub fn make_word_set<I, S>(words: I, ignore_case: bool) -> CharArraySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = words.into_iter();
    let mut set = CharArraySet::with_capacity(words.size_hint().0, ignore_case);
    set.extend(words);
    set
}
