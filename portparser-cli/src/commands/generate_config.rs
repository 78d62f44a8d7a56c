//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use portparser_core::PipelineConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating pipeline configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust the pipeline");
        println!("2. Validate your configuration:");
        println!("   portparser validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   portparser tokenize -i sentences.txt -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented defaults followed by the serialized default configuration
fn generate_template() -> Result<String> {
    let body = PipelineConfig::default().to_toml_string()?;
    Ok(format!(
        r#"# Portparser pipeline configuration
#
# [segmenter]
#   replace     map look-alike dashes, quotes and bullets before splitting
#   limit       split sentences longer than this many characters (0 = never)
# [tokenizer]
#   preserve    keep SpaceAfter=No and ItemMarker=Yes markers
#   match_pairs repair unbalanced quotes, parentheses and brackets
#   trim        drop headlines and leading bullets
#   sid_model   sentence ids continue after this one
# [postprocess]
#   lemma/feats which columns to correct (at least one)
# [performance]
#   worker_threads  tokenizer threads (0 = number of CPUs)

{body}"#
    ))
}
