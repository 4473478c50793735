//! Command implementations for Wordgate CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::factory::{FileResourceLoader, WhitelistFilterFactory};
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::UnicodeWordTokenStream;
use crate::cli::args::WordgateArgs;
use crate::cli::output::{FilteredInput, KeptToken, write_results};
use crate::error::Result;

/// Execute the CLI.
pub fn execute_command(args: WordgateArgs) -> anyhow::Result<()> {
    let factory = build_factory(&args).context("failed to set up the whitelist")?;

    let results = if args.inputs.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        vec![filter_text("<stdin>", text, &factory)?]
    } else {
        info!("Filtering {} inputs", args.inputs.len());
        args.inputs
            .par_iter()
            .map(|path| filter_file(path, &factory))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, &results, &args)?;
    Ok(())
}

/// Build the filter factory from command line options.
pub fn build_factory(args: &WordgateArgs) -> Result<WhitelistFilterFactory> {
    let loader = FileResourceLoader::new(&args.resource_dir);
    let factory = WhitelistFilterFactory::new(args.filter_config(), &loader)?;
    info!("Whitelist loaded with {} words", factory.words().len());
    Ok(factory)
}

/// Run `text` through a fresh whitelist filter.
pub fn filter_text(
    source: &str,
    text: String,
    factory: &WhitelistFilterFactory,
) -> Result<FilteredInput> {
    let mut filter = factory.create(UnicodeWordTokenStream::new(text));
    let mut kept = Vec::new();
    while filter.advance()? {
        kept.push(KeptToken::from(filter.token()));
    }

    let tokens_read = filter.get_ref().tokens_read();
    debug!("{source}: kept {} of {tokens_read} tokens", kept.len());

    Ok(FilteredInput {
        source: source.to_string(),
        tokens_read,
        kept,
    })
}

fn filter_file(path: &Path, factory: &WhitelistFilterFactory) -> anyhow::Result<FilteredInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input '{}'", path.display()))?;
    Ok(filter_text(&path.display().to_string(), text, factory)?)
}
