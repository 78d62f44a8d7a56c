//! Tokenize command implementation

use super::init_logging;
use crate::config::{load_lexicon, load_pipeline_config};
use crate::input::{resolve_patterns, FileReader};
use crate::output::open_writer;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use portparser_core::Pipeline;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input files with one sentence per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output CoNLL-U file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Lexicon directory or table used for clitic and ambiguity decisions
    #[arg(long, value_name = "DIR|FILE", env = "PORTPARSER_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Split itemize prompts such as `a)` or `(iv)` like ordinary text
    #[arg(long)]
    pub no_preserve: bool,

    /// Skip paired punctuation repair
    #[arg(long)]
    pub no_match: bool,

    /// Skip headline and bullet trimming
    #[arg(long)]
    pub no_trim: bool,

    /// Sentence id model; ids continue after it (S000000 gives S000001, ...)
    #[arg(short, long, value_name = "SID")]
    pub sid: Option<String>,

    /// Pipeline configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let mut config = load_pipeline_config(self.config.as_deref())?;
        let tokenizer = &mut config.tokenizer;
        tokenizer.preserve &= !self.no_preserve;
        tokenizer.match_pairs &= !self.no_match;
        tokenizer.trim &= !self.no_trim;
        if let Some(sid) = &self.sid {
            tokenizer.sid_model = sid.clone();
        }
        config.validate()?;

        let lexicon = load_lexicon(self.lexicon.as_deref())?;
        let pipeline = Pipeline::new(Arc::new(lexicon), config);

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let mut sentences = Vec::new();
        for path in &files {
            sentences.extend(FileReader::read_sentences(path)?);
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();

        let document = pipeline.tokenize(&sentences);
        log::info!(
            "Tokenized {} of {} sentences into {} tokens",
            document.sentence_count(),
            sentences.len(),
            document.token_count()
        );

        let mut writer = open_writer(self.output.as_deref())?;
        document.write_to(&mut writer, false, false)?;
        Ok(())
    }
}
