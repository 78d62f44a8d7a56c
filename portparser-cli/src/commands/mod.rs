//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod parse;
pub mod postprocess;
pub mod sentences;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split raw text files into sentences
    Sentences(sentences::SentencesArgs),

    /// Tokenize one sentence per line into CoNLL-U
    Tokenize(tokenize::TokenizeArgs),

    /// Correct lemmas and features of a parsed CoNLL-U file
    Postprocess(postprocess::PostprocessArgs),

    /// Run the whole chain through an external parsing model
    Parse(parse::ParseArgs),

    /// Write a pipeline configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a pipeline configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Sentences(args) => args.execute(),
            Commands::Tokenize(args) => args.execute(),
            Commands::Postprocess(args) => args.execute(),
            Commands::Parse(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // Already initialized when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let command = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("portparser.toml"),
        });
        let debug_str = format!("{:?}", command);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("portparser.toml"));
    }

    #[test]
    fn test_logging_can_be_initialized_twice() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
