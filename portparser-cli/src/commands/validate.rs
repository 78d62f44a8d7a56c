//! Validate command implementation

use anyhow::Result;
use clap::Args;
use portparser_core::PipelineConfig;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the pipeline configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating pipeline configuration: {}", self.config.display());

        match PipelineConfig::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Segmenter: replace = {}, limit = {}",
                    config.segmenter.replace, config.segmenter.limit
                );
                println!("  Sentence id model: {}", config.tokenizer.sid_model);
                println!(
                    "  Corrections: lemma = {}, feats = {}",
                    config.postprocess.lemma, config.postprocess.feats
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
