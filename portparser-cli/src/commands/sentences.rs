//! Sentences command implementation

use super::init_logging;
use crate::config::load_pipeline_config;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{open_writer, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use portparser_core::Segmenter;
use rayon::prelude::*;
use std::path::PathBuf;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keep look-alike dashes, quotes and bullets as they are
    #[arg(long)]
    pub no_replace: bool,

    /// Split sentences longer than this many characters at `;` or `,`
    #[arg(short, long, value_name = "CHARS")]
    pub limit: Option<usize>,

    /// Pipeline configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with metadata
    Json,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting sentence segmentation");
        log::debug!("Arguments: {:?}", self);

        let mut config = load_pipeline_config(self.config.as_deref())?.segmenter;
        if self.no_replace {
            config.replace = false;
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let threads = self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("portparser-sent-{i}"))
            .build()
            .context("Failed to build worker pool")?;

        let segmenter = Segmenter::portuguese(config);
        let per_file: Vec<Vec<String>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let text = FileReader::read_text(path)?;
                    let sentences = segmenter.segment(&text);
                    log::debug!("{}: {} sentences", path.display(), sentences.len());
                    progress.file_completed(&path.display().to_string());
                    Ok(sentences)
                })
                .collect::<Result<_>>()
        })?;
        progress.finish();

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        let mut total = 0;
        for sentence in per_file.iter().flatten() {
            formatter.format_sentence(sentence, total)?;
            total += 1;
        }
        formatter.finish()?;

        log::info!("Wrote {total} sentences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>, output: PathBuf, format: OutputFormat) -> SentencesArgs {
        SentencesArgs {
            input,
            output: Some(output),
            format,
            no_replace: false,
            limit: None,
            config: None,
            threads: Some(2),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_files_are_concatenated_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "Primeira frase. Segunda frase.").unwrap();
        fs::write(dir.path().join("b.txt"), "Terceira frase!").unwrap();
        let out = dir.path().join("out.txt");

        let pattern = dir.path().join("*.txt").display().to_string();
        args(vec![pattern], out.clone(), OutputFormat::Text)
            .execute()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "Primeira frase.\nSegunda frase.\nTerceira frase!\n"
        );
    }

    #[test]
    fn test_json_indices_run_across_files() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("texto.txt");
        fs::write(&input, "Ele foi embora... Nunca mais voltou.").unwrap();
        let out = dir.path().join("out.json");

        args(
            vec![input.display().to_string()],
            out.clone(),
            OutputFormat::Json,
        )
        .execute()
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["index"], 1);
        assert_eq!(items[1]["text"], "Nunca mais voltou.");
    }
}
