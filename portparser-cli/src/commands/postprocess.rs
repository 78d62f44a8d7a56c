//! Postprocess command implementation

use super::init_logging;
use crate::config::{load_lexicon, load_pipeline_config, load_usual_forms};
use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use portparser_core::{Document, Pipeline, PipelineConfig, Report};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the postprocess command
#[derive(Debug, Args)]
pub struct PostprocessArgs {
    /// Parsed CoNLL-U input file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Corrected CoNLL-U output file; the report goes to `<FILE>.rep.tsv`
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Lexicon directory or table
    #[arg(long, value_name = "DIR|FILE", env = "PORTPARSER_LEXICON", required = true)]
    pub lexicon: PathBuf,

    /// Usual-forms table (default: built-in Portuguese table)
    #[arg(long, value_name = "FILE")]
    pub usual_forms: Option<PathBuf>,

    /// Correct lemmas only
    #[arg(long, conflicts_with = "feats_only")]
    pub lemma_only: bool,

    /// Correct features only
    #[arg(long)]
    pub feats_only: bool,

    /// Pipeline configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Leave the change log out of the report and suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PostprocessArgs {
    /// Execute the postprocess command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = self.pipeline_config()?;
        let lexicon = load_lexicon(Some(self.lexicon.as_path()))?;
        let usual = load_usual_forms(self.usual_forms.as_deref())?;
        let pipeline = Pipeline::new(Arc::new(lexicon), config).with_usual_forms(usual);

        let text = FileReader::read_text(&self.input)?;
        let mut document = Document::parse(&text)
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;

        let report = pipeline.postprocess(&mut document);
        write_outputs(&document, &report, &self.output, self.quiet)
    }

    fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = load_pipeline_config(self.config.as_deref())?;
        if self.lemma_only {
            config.postprocess.lemma = true;
            config.postprocess.feats = false;
        }
        if self.feats_only {
            config.postprocess.lemma = false;
            config.postprocess.feats = true;
        }
        Ok(config)
    }
}

/// Path of the change report written next to `output`
pub fn report_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".rep.tsv");
    PathBuf::from(name)
}

/// Write the corrected document and its change report
pub(crate) fn write_outputs(
    document: &Document,
    report: &Report,
    output: &Path,
    quiet: bool,
) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    document.write_to(&mut BufWriter::new(file), true, false)?;

    let rep_path = report_path(output);
    let file = File::create(&rep_path)
        .with_context(|| format!("Failed to create report file: {}", rep_path.display()))?;
    report.write_tsv(&mut BufWriter::new(file), quiet)?;

    log::info!(
        "Wrote {} sentences to {} and the report to {}",
        document.sentence_count(),
        output.display(),
        rep_path.display()
    );
    Ok(())
}
