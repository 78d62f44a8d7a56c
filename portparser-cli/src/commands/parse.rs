//! Parse command implementation

use super::init_logging;
use super::postprocess::write_outputs;
use crate::config::{load_lexicon, load_pipeline_config, load_usual_forms};
use crate::input::FileReader;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use portparser_core::{CommandModel, Pipeline};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input text file, one sentence per line unless --segment is given
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Parsed CoNLL-U output file; the report goes to `<FILE>.rep.tsv`
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Lexicon directory or table
    #[arg(long, value_name = "DIR|FILE", env = "PORTPARSER_LEXICON", required = true)]
    pub lexicon: PathBuf,

    /// Parser command line with {input}, {output} and {model} placeholders
    #[arg(long, value_name = "TEMPLATE", env = "PORTPARSER_MODEL_CMD", required = true)]
    pub model_cmd: String,

    /// Trained model passed to the parser as {model}
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Segment raw text into sentences first
    #[arg(long)]
    pub segment: bool,

    /// Usual-forms table (default: built-in Portuguese table)
    #[arg(long, value_name = "FILE")]
    pub usual_forms: Option<PathBuf>,

    /// Pipeline configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and the report change log
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = load_pipeline_config(self.config.as_deref())?;
        let lexicon = load_lexicon(Some(self.lexicon.as_path()))?;
        let usual = load_usual_forms(self.usual_forms.as_deref())?;
        let pipeline = Pipeline::new(Arc::new(lexicon), config).with_usual_forms(usual);

        let mut model = CommandModel::new(&self.model_cmd)?;
        if let Some(path) = &self.model {
            model = model.with_model(path);
        }

        let text = FileReader::read_text(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_stage("Parsing");
        let parsed = if self.segment {
            pipeline.parse_segmented(&text, &model)
        } else {
            pipeline.parse(&text, &model)
        };
        progress.finish();
        let (document, report) =
            parsed.with_context(|| format!("Failed to parse {}", self.input.display()))?;

        write_outputs(&document, &report, &self.output, self.quiet)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::commands::postprocess::report_path;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &TempDir, model_cmd: &str, segment: bool) -> ParseArgs {
        let input = dir.path().join("texto.txt");
        fs::write(&input, "Gosto disso. Olá!\n").unwrap();
        let lexicon = dir.path().join("lexicon.tsv");
        fs::write(&lexicon, "de\tde\tADP\t_\n").unwrap();
        ParseArgs {
            input,
            output: dir.path().join("out.conllu"),
            lexicon,
            model_cmd: model_cmd.to_string(),
            model: None,
            segment,
            usual_forms: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_through_copy_command() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "cp {input} {output}", true);
        args.execute().unwrap();

        let parsed = fs::read_to_string(&args.output).unwrap();
        assert!(parsed.contains("# sent_id = S000001\n# text = Gosto disso.\n"));
        assert!(parsed.contains("# sent_id = S000002\n# text = Olá!\n"));
        assert!(report_path(&args.output).is_file());
    }

    #[test]
    fn test_unsegmented_input_is_one_sentence_per_line() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "cat {input}", false);
        args.execute().unwrap();

        let parsed = fs::read_to_string(&args.output).unwrap();
        assert!(parsed.contains("# text = Gosto disso. Olá!\n"));
        assert!(!parsed.contains("S000002"));
    }

    #[test]
    fn test_failing_model_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "false {input}", false);
        assert!(args.execute().is_err());
        assert!(!args.output.exists());
    }
}
