//! Configuration and resource loading shared by the commands

use crate::error::CliError;
use anyhow::Result;
use portparser_core::{Lexicon, PipelineConfig, UsualForms};
use std::path::Path;

/// Load the pipeline configuration, falling back to defaults
pub fn load_pipeline_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let config = PipelineConfig::from_file(path)
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load a lexicon from a directory of per-tag tables or a single table
///
/// Without a path the lexicon is empty: tokenization still works, but
/// enclisis reconstruction and post-correction have nothing to check against.
pub fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    let Some(path) = path else {
        log::warn!("No lexicon given; verb reconstruction falls back to suffix rules");
        return Ok(Lexicon::default());
    };
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let lexicon = Lexicon::load_path(path)
        .map_err(|e| CliError::LexiconError(format!("{}: {e}", path.display())))?;
    log::info!("Lexicon holds {} analyses", lexicon.len());
    Ok(lexicon)
}

/// Load a usual-forms table, or the built-in Portuguese one
pub fn load_usual_forms(path: Option<&Path>) -> Result<UsualForms> {
    match path {
        Some(path) => {
            let usual = UsualForms::load(path)
                .map_err(|e| CliError::LexiconError(format!("{}: {e}", path.display())))?;
            log::info!("Loaded {} usual forms from {}", usual.len(), path.display());
            Ok(usual)
        }
        None => Ok(UsualForms::portuguese()),
    }
}
