//! Output formatting for CLI commands.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpelltrieArgs};
use crate::error::Result;
use crate::lookup::Lookup;
use crate::spelling::corrector::Suggestion;

/// Result structure for prefix completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResults {
    pub prefix: String,
    pub completions: Vec<String>,
    pub duration_us: u64,
}

/// Result structure for spell-checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellCheckResults {
    pub word: String,
    pub threshold: usize,
    pub suggestions: Vec<Suggestion>,
    pub duration_us: u64,
}

/// Result structure for exact search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    pub found: bool,
}

/// Result structure for a lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub input: String,
    pub lookup: Lookup,
}

/// Result structure for listing the dictionary.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordList {
    pub total_words: usize,
    pub words: Vec<String>,
}

impl fmt::Display for CompletionResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completions.is_empty() {
            return write!(f, "No words start with '{}'", self.prefix);
        }
        write_lines(f, &self.completions)
    }
}

impl fmt::Display for SpellCheckResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suggestions.is_empty() {
            return write!(
                f,
                "No match found for '{}' within distance {}",
                self.word, self.threshold
            );
        }
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} (distance {})", suggestion.word, suggestion.distance)?;
        }
        Ok(())
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "'{}' is in the dictionary", self.word)
        } else {
            write!(f, "'{}' is not in the dictionary", self.word)
        }
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lookup {
            Lookup::Empty => Ok(()),
            Lookup::NoMatch => write!(f, "No match found!"),
            Lookup::Corrections(words) => {
                writeln!(f, "Did you mean:")?;
                write_lines(f, words)
            }
            Lookup::Exact(words) | Lookup::Completions(words) => write_lines(f, words),
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lines(f, &self.words)
    }
}

fn write_lines(f: &mut fmt::Formatter<'_>, lines: &[String]) -> fmt::Result {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{line}")?;
    }
    Ok(())
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T>(result: &T, args: &SpelltrieArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, args.output_format, args.pretty)
}

/// Write a result in the given format.
pub fn write_result<W, T>(
    out: &mut W,
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<()>
where
    W: Write,
    T: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Human => output_human(out, result),
        OutputFormat::Json => output_json(out, result, pretty),
    }
}

/// Output in human-readable format.
fn output_human<W: Write, T: fmt::Display>(out: &mut W, result: &T) -> Result<()> {
    let text = result.to_string();
    if !text.is_empty() {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
