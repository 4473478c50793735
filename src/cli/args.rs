//! Command line argument parsing for Wordgate CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::factory::WhitelistFilterConfig;
use crate::analysis::word_list::WordListFormat;

/// Wordgate - keep only whitelisted words from text
#[derive(Parser, Debug, Clone)]
#[command(name = "wordgate")]
#[command(about = "Keep only whitelisted words from text, with their positions and offsets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordgateArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Comma-separated word list files; without it every token is rejected
    #[arg(short, long, value_name = "LIST", env = "WORDGATE_WORDS")]
    pub words: Option<String>,

    /// Word list format (wordset or snowball)
    #[arg(long = "word-format", value_name = "FORMAT")]
    pub word_format: Option<WordListFormat>,

    /// Match words regardless of case
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Directory word list names are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub resource_dir: PathBuf,

    /// Input files; standard input is read when none are given
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
}

impl WordgateArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n.saturating_add(1),
            }
        }
    }

    /// The filter options given on the command line.
    pub fn filter_config(&self) -> WhitelistFilterConfig {
        WhitelistFilterConfig {
            ignore_case: self.ignore_case,
            words: self.words.clone(),
            format: self.word_format,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_args() {
        let args = WordgateArgs::try_parse_from([
            "wordgate",
            "-vv",
            "--format",
            "json",
            "--words",
            "keep.txt,more.txt",
            "--word-format",
            "snowball",
            "--ignore-case",
            "a.txt",
            "b.txt",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 3);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.inputs.len(), 2);

        let config = args.filter_config();
        assert!(config.ignore_case);
        assert_eq!(config.format, Some(WordListFormat::Snowball));
        assert_eq!(config.resource_names(), vec!["keep.txt", "more.txt"]);
    }

    #[test]
    fn test_defaults() {
        let args = WordgateArgs::try_parse_from(["wordgate"]).unwrap();
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.resource_dir, PathBuf::from("."));
        assert!(args.inputs.is_empty());
        assert!(!args.filter_config().ignore_case);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = WordgateArgs::try_parse_from(["wordgate", "-q", "-vvv"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_verbosity_saturates() {
        let mut args = WordgateArgs::try_parse_from(["wordgate"]).unwrap();
        args.verbose = u8::MAX;
        assert_eq!(args.verbosity(), u8::MAX);
    }

    #[test]
    fn test_rejects_unknown_word_format() {
        let result = WordgateArgs::try_parse_from(["wordgate", "--word-format", "csv"]);
        assert!(result.is_err());
    }
}
