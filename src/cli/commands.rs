//! Command implementations for Spelltrie CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::error::{Result, SpelltrieError};
use crate::lookup::lookup;
use crate::spelling::dictionary::load_trie;
use crate::trie::Trie;

/// Execute a CLI command.
pub fn execute_command(args: SpelltrieArgs) -> Result<()> {
    let config = load_config(&args)?;

    let start_time = Instant::now();
    let trie = load_trie(&args.dictionary)?;
    info!(
        "Built trie with {} words in {:?}",
        trie.len(),
        start_time.elapsed()
    );

    match &args.command {
        Command::Complete(complete_args) => complete(&trie, complete_args, &config, &args),
        Command::Check(check_args) => check(&trie, check_args, &config, &args),
        Command::Search(search_args) => search(&trie, search_args, &args),
        Command::Lookup(lookup_args) => {
            let result = LookupResult {
                input: lookup_args.input.clone(),
                lookup: lookup(&trie, &lookup_args.input, &config),
            };
            output_result(&result, &args)
        }
        Command::List => list(&trie, &args),
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(
                &trie,
                &config,
                stdin.lock(),
                &mut stdout.lock(),
                args.output_format,
                args.pretty,
            )
        }
    }
}

/// Load the configuration named on the command line, or the defaults.
fn load_config(args: &SpelltrieArgs) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load_from_file(path),
        None => Ok(Config::default()),
    }
}

fn require_positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(SpelltrieError::invalid_argument(format!(
            "--{name} must be greater than zero"
        )));
    }
    Ok(value)
}

/// Complete a prefix.
fn complete(
    trie: &Trie,
    args: &CompleteArgs,
    config: &Config,
    cli_args: &SpelltrieArgs,
) -> Result<()> {
    let limit = require_positive("limit", args.limit.unwrap_or(config.autocomplete_limit))?;

    let start_time = Instant::now();
    let completions = trie.autocomplete(&args.prefix, limit);
    let duration = start_time.elapsed();
    debug!("Completed {:?} in {:?}", args.prefix, duration);

    output_result(
        &CompletionResults {
            prefix: args.prefix.clone(),
            completions,
            duration_us: duration.as_micros() as u64,
        },
        cli_args,
    )
}

/// Suggest corrections for a word.
fn check(trie: &Trie, args: &CheckArgs, config: &Config, cli_args: &SpelltrieArgs) -> Result<()> {
    let max = require_positive("max", args.max.unwrap_or(config.spelling.max_suggestions))?;
    let spelling = config.spelling.clone().with_max_suggestions(max);

    let start_time = Instant::now();
    let suggestions = trie.spell_check_with_distances(&args.word, &spelling);
    let duration = start_time.elapsed();
    debug!("Spell-checked {:?} in {:?}", args.word, duration);

    output_result(
        &SpellCheckResults {
            word: args.word.clone(),
            threshold: spelling.threshold(args.word.chars().count()),
            suggestions,
            duration_us: duration.as_micros() as u64,
        },
        cli_args,
    )
}

/// Look up a single word.
fn search(trie: &Trie, args: &SearchArgs, cli_args: &SpelltrieArgs) -> Result<()> {
    output_result(
        &SearchResult {
            word: args.word.clone(),
            found: trie.search(&args.word),
        },
        cli_args,
    )
}

/// List every word.
fn list(trie: &Trie, cli_args: &SpelltrieArgs) -> Result<()> {
    output_result(
        &WordList {
            total_words: trie.len(),
            words: trie.get_all_words().to_vec(),
        },
        cli_args,
    )
}

/// Resolve every input line and write one result per line.
pub fn run_interactive<R, W>(
    trie: &Trie,
    config: &Config,
    reader: R,
    out: &mut W,
    format: OutputFormat,
    pretty: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut resolved = 0usize;
    for line in reader.lines() {
        let line = line?;
        let result = LookupResult {
            lookup: lookup(trie, &line, config),
            input: line,
        };
        write_result(out, &result, format, pretty)?;
        resolved += 1;
    }
    out.flush()?;

    debug!("Resolved {resolved} inputs");
    Ok(())
}
