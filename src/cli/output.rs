//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, WordgateArgs};
use crate::error::Result;

/// A token that passed the whitelist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeptToken {
    pub term: String,
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl From<&Token> for KeptToken {
    fn from(token: &Token) -> Self {
        KeptToken {
            term: token.term_text(),
            position: token.position,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
        }
    }
}

/// Filtering result for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredInput {
    pub source: String,
    pub tokens_read: usize,
    pub kept: Vec<KeptToken>,
}

/// Write results in the format selected on the command line.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[FilteredInput],
    args: &WordgateArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(out, results),
        OutputFormat::Json => write_json(out, results, args.pretty),
    }
}

/// One `position<TAB>start-end<TAB>term` line per kept token, with a
/// header per input when there are several.
fn write_human<W: Write>(out: &mut W, results: &[FilteredInput]) -> Result<()> {
    let with_headers = results.len() > 1;
    for (i, result) in results.iter().enumerate() {
        if with_headers {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "==> {} <==", result.source)?;
        }
        for token in &result.kept {
            writeln!(
                out,
                "{}\t{}-{}\t{}",
                token.position, token.start_offset, token.end_offset, token.term
            )?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, results: &[FilteredInput], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, results)?;
    } else {
        serde_json::to_writer(&mut *out, results)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn sample(source: &str) -> FilteredInput {
        FilteredInput {
            source: source.to_string(),
            tokens_read: 4,
            kept: vec![
                KeptToken::from(&Token::with_offsets("quick", 1, 4, 9)),
                KeptToken::from(&Token::with_offsets("fox", 3, 16, 19)),
            ],
        }
    }

    fn render(results: &[FilteredInput], argv: &[&str]) -> String {
        let args = WordgateArgs::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        write_results(&mut out, results, &args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_single_input() {
        let text = render(&[sample("<stdin>")], &["wordgate"]);
        assert_eq!(text, "1\t4-9\tquick\n3\t16-19\tfox\n");
    }

    #[test]
    fn test_human_multiple_inputs() {
        let text = render(&[sample("a.txt"), sample("b.txt")], &["wordgate"]);
        assert!(text.starts_with("==> a.txt <==\n1\t4-9\tquick\n"));
        assert!(text.contains("\n\n==> b.txt <==\n"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&[sample("a.txt")], &["wordgate", "--format", "json"]);
        let decoded: Vec<FilteredInput> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, vec![sample("a.txt")]);
        assert_eq!(text.lines().count(), 1);

        let pretty = render(&[sample("a.txt")], &["wordgate", "-f", "json", "--pretty"]);
        assert!(pretty.lines().count() > 1);
    }
}
