//! Command line argument parsing for Spelltrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Spelltrie - prefix completion and spelling suggestions over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "spelltrie")]
#[command(about = "Prefix completion and spelling suggestions over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Spelltrie Contributors")]
#[command(long_about = None)]
pub struct SpelltrieArgs {
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

    /// Dictionary file with one word per line
    #[arg(
        short,
        long,
        value_name = "WORDS_FILE",
        env = "SPELLTRIE_DICTIONARY",
        default_value = "data/words.txt"
    )]
    pub dictionary: PathBuf,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpelltrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Log level for the effective verbosity
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List stored words starting with a prefix
    Complete(CompleteArgs),

    /// Suggest stored words close to a (misspelled) word
    Check(CheckArgs),

    /// Check whether a word is stored
    Search(SearchArgs),

    /// Resolve input the way an interactive front end does
    Lookup(LookupArgs),

    /// List every stored word
    List,

    /// Read inputs from stdin, one per line, and resolve each of them
    Interactive,
}

/// Arguments for prefix completion
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of completions (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for spell-checking
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Word to check
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions (defaults to the configured maximum)
    #[arg(short, long)]
    pub max: Option<usize>,
}

/// Arguments for exact search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for a single lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Typed input
    #[arg(value_name = "INPUT")]
    pub input: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
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
    fn test_complete_command() {
        let args = SpelltrieArgs::try_parse_from([
            "spelltrie",
            "--dictionary",
            "/tmp/words.txt",
            "complete",
            "ca",
            "--limit",
            "5",
        ])
        .unwrap();

        assert_eq!(args.dictionary, PathBuf::from("/tmp/words.txt"));
        if let Command::Complete(complete_args) = args.command {
            assert_eq!(complete_args.prefix, "ca");
            assert_eq!(complete_args.limit, Some(5));
        } else {
            panic!("Expected Complete command");
        }
    }

    #[test]
    fn test_check_command() {
        let args = SpelltrieArgs::try_parse_from(["spelltrie", "check", "dag", "-m", "3"]).unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.word, "dag");
            assert_eq!(check_args.max, Some(3));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = SpelltrieArgs::try_parse_from(["spelltrie", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = SpelltrieArgs::try_parse_from(["spelltrie", "-v", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Multiple verbose flags
        let args = SpelltrieArgs::try_parse_from(["spelltrie", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args = SpelltrieArgs::try_parse_from(["spelltrie", "--quiet", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_log_level_follows_verbosity() {
        let cases = [
            (vec!["spelltrie", "-q", "list"], LevelFilter::Error),
            (vec!["spelltrie", "list"], LevelFilter::Warn),
            (vec!["spelltrie", "-v", "list"], LevelFilter::Info),
            (vec!["spelltrie", "-vv", "list"], LevelFilter::Debug),
            (vec!["spelltrie", "-vvvv", "list"], LevelFilter::Debug),
        ];
        for (argv, expected) in cases {
            let args = SpelltrieArgs::try_parse_from(argv.iter().copied()).unwrap();
            assert_eq!(args.log_level(), expected, "{argv:?}");
        }
    }

    #[test]
    fn test_output_format() {
        let args =
            SpelltrieArgs::try_parse_from(["spelltrie", "--format", "json", "list"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));

        let args = SpelltrieArgs::try_parse_from(["spelltrie", "list"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Human));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(SpelltrieArgs::try_parse_from(["spelltrie"]).is_err());
    }
}
