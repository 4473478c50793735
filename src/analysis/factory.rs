//! Configuration-driven construction of whitelist filters.
//!
//! A [`WhitelistFilterFactory`] resolves three options:
//!
//! | option       | default   | meaning                                              |
//! |--------------|-----------|------------------------------------------------------|
//! | `ignoreCase` | `false`   | fold words and probes to lower case                  |
//! | `words`      | none      | comma-separated resource names to load               |
//! | `format`     | `wordset` | `wordset` or `snowball`; only valid with `words`     |
//!
//! Resources are opened through a [`ResourceLoader`]. The loaded set is
//! built once and shared by every filter the factory creates.
//!
//! Without `words` the factory falls back to the default set it was given,
//! or to an empty set, in which case every token is rejected.
//!
//! # Examples
//!
//! ```
//! use wordgate::analysis::factory::{
//!     MemoryResourceLoader, WhitelistFilterConfig, WhitelistFilterFactory,
//! };
//! use wordgate::analysis::token_stream::{TokenStream, VecTokenStream};
//!
//! let loader = MemoryResourceLoader::new().with_resource("keep.txt", "quick\nfox\n");
//! let config = WhitelistFilterConfig::new().with_words("keep.txt");
//! let factory = WhitelistFilterFactory::new(config, &loader).unwrap();
//!
//! let mut filter = factory.create(VecTokenStream::from_terms(["the", "quick", "fox"]));
//! assert_eq!(filter.collect_tokens().unwrap().len(), 2);
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::char_array_set::CharArraySet;
use crate::analysis::token_filter::whitelist::WhitelistFilter;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::word_list::{WordListFormat, load_words_into};
use crate::error::{Result, WordgateError};

/// Opens named word list resources.
pub trait ResourceLoader: Send + Sync {
    /// Open the resource called `name` for line-by-line reading.
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>>;
}

/// Loads resources from the file system.
///
/// Relative names are resolved against the base directory.
#[derive(Clone, Debug)]
pub struct FileResourceLoader {
    base_dir: PathBuf,
}

impl FileResourceLoader {
    /// Create a loader rooted at `base_dir`.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        FileResourceLoader {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory relative names are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for FileResourceLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceLoader for FileResourceLoader {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        let path = self.base_dir.join(name);
        let file = File::open(&path).map_err(|e| {
            WordgateError::config(format!(
                "Failed to open word list '{}' ({}): {}",
                name,
                path.display(),
                e
            ))
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Serves resources from memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryResourceLoader {
    resources: HashMap<String, String>,
}

impl MemoryResourceLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource.
    pub fn with_resource<N: Into<String>, C: Into<String>>(mut self, name: N, content: C) -> Self {
        self.insert(name, content);
        self
    }

    /// Add or replace a resource.
    pub fn insert<N: Into<String>, C: Into<String>>(&mut self, name: N, content: C) {
        self.resources.insert(name.into(), content.into());
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn open(&self, name: &str) -> Result<Box<dyn BufRead + '_>> {
        let content = self
            .resources
            .get(name)
            .ok_or_else(|| WordgateError::config(format!("Word list '{name}' not found")))?;
        Ok(Box::new(Cursor::new(content.as_bytes())))
    }
}

/// Options for a whitelist filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WhitelistFilterConfig {
    /// Fold words and probes to lower case.
    #[serde(default)]
    pub ignore_case: bool,

    /// Comma-separated resource names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,

    /// Layout of the resources named in `words`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<WordListFormat>,
}

impl WhitelistFilterConfig {
    /// Create a config with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resources to load.
    pub fn with_words<S: Into<String>>(mut self, words: S) -> Self {
        self.words = Some(words.into());
        self
    }

    /// Set the resource format.
    pub fn with_format(mut self, format: WordListFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set case folding.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Parse a JSON object such as
    /// `{"ignoreCase": true, "words": "keep.txt", "format": "snowball"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a config from string arguments, as found in analyzer
    /// definitions. Unknown keys and unparsable values are rejected.
    pub fn from_args(args: &HashMap<String, String>) -> Result<Self> {
        let mut config = WhitelistFilterConfig::new();
        let mut unknown = Vec::new();

        for (key, value) in args {
            match key.as_str() {
                "ignoreCase" => config.ignore_case = parse_bool(key, value)?,
                "words" => config.words = Some(value.clone()),
                "format" => config.format = Some(value.parse()?),
                _ => unknown.push(key.as_str()),
            }
        }

        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(WordgateError::config(format!(
                "Unknown parameters: {}",
                unknown.join(", ")
            )));
        }

        Ok(config)
    }

    /// Check option combinations.
    pub fn validate(&self) -> Result<()> {
        if self.words.is_none() && self.format.is_some() {
            return Err(WordgateError::config(
                "'format' can not be specified without an explicit 'words' resource",
            ));
        }
        Ok(())
    }

    /// The format resources are read with.
    pub fn effective_format(&self) -> WordListFormat {
        self.format.unwrap_or_default()
    }

    /// The individual resource names in `words`.
    ///
    /// Names are separated by commas; `\,` stands for a comma inside a name.
    pub fn resource_names(&self) -> Vec<String> {
        self.words
            .as_deref()
            .map(split_resource_names)
            .unwrap_or_default()
    }
}

fn split_resource_names(words: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = String::new();
    let mut chars = words.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                chars.next();
                current.push(',');
            }
            ',' => names.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    names.push(current);

    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(WordgateError::config(format!(
            "Parameter '{key}' must be 'true' or 'false', got '{value}'"
        )))
    }
}

/// Builds whitelist filters from configuration.
#[derive(Clone, Debug)]
pub struct WhitelistFilterFactory {
    config: WhitelistFilterConfig,
    words: Arc<CharArraySet>,
}

impl WhitelistFilterFactory {
    /// Name this filter is registered under in analyzer definitions.
    pub const NAME: &'static str = "white";

    /// Validate `config` and load its word lists.
    pub fn new(config: WhitelistFilterConfig, loader: &dyn ResourceLoader) -> Result<Self> {
        Self::with_default_words(config, loader, None)
    }

    /// Like [`new`](Self::new), using `default_words` when `config` names
    /// no resources.
    pub fn with_default_words(
        config: WhitelistFilterConfig,
        loader: &dyn ResourceLoader,
        default_words: Option<Arc<CharArraySet>>,
    ) -> Result<Self> {
        config.validate()?;

        let words = if config.words.is_some() {
            Arc::new(Self::load(&config, loader)?)
        } else {
            match default_words {
                Some(defaults) if defaults.ignore_case() == config.ignore_case => defaults,
                Some(defaults) => Arc::new(CharArraySet::from_words(
                    defaults.iter(),
                    config.ignore_case,
                )),
                None => {
                    warn!(
                        "No 'words' configured for whitelist filter, every token will be rejected"
                    );
                    Arc::new(CharArraySet::new(config.ignore_case))
                }
            }
        };

        Ok(WhitelistFilterFactory { config, words })
    }

    fn load(config: &WhitelistFilterConfig, loader: &dyn ResourceLoader) -> Result<CharArraySet> {
        let format = config.effective_format();
        let mut set = CharArraySet::new(config.ignore_case);

        for name in config.resource_names() {
            let reader = loader.open(&name)?;
            let count = load_words_into(reader, format, &mut set)?;
            debug!("Loaded {count} words from '{name}' ({format})");
        }

        debug!(
            "Whitelist holds {} words (ignore_case={})",
            set.len(),
            set.ignore_case()
        );
        Ok(set)
    }

    /// The resolved configuration.
    pub fn config(&self) -> &WhitelistFilterConfig {
        &self.config
    }

    /// The shared word set.
    pub fn words(&self) -> &Arc<CharArraySet> {
        &self.words
    }

    /// Wrap `input` in a whitelist filter over the shared set.
    pub fn create<S: TokenStream>(&self, input: S) -> WhitelistFilter<S> {
        WhitelistFilter::whitelist(input, Arc::clone(&self.words))
    }
}
