//! Portuguese language tables
//!
//! Abbreviations, contractions, clitic pronouns, verb terminations, itemize
//! prompts and the usual-forms table used by post-processing. The tables are
//! plain data loaded from TOML; the algorithms that consume them live in the
//! segmenter, the tokenizer and the post-processor.

mod abbreviation;
mod loader;
mod types;

pub use abbreviation::AbbreviationTrie;
pub use loader::portuguese;
pub use types::{
    AbbreviationConfig, CliticConfig, ItemizeConfig, LanguageConfig, MetadataConfig, UsualConfig,
    UsualFormConfig,
};

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Compiled language tables
#[derive(Debug, Clone)]
pub struct LanguageTables {
    code: String,
    name: String,
    abbreviations: AbbreviationTrie,
    contractions: HashMap<String, (String, String)>,
    ambiguous: HashSet<String>,
    enclitics: HashSet<String>,
    fused: HashSet<String>,
    terminations: HashSet<String>,
    itemize_prompts: HashSet<String>,
    usual: Vec<UsualFormConfig>,
}

impl LanguageTables {
    /// Compile tables from a parsed configuration
    pub fn from_config(config: LanguageConfig) -> Result<Self> {
        if config.metadata.code.is_empty() {
            return Err(Error::Config("language code must not be empty".into()));
        }

        let abbreviations = AbbreviationTrie::from_list(config.abbreviations.all());
        let contractions = config
            .contractions
            .into_iter()
            .map(|(form, [first, second])| (form, (first, second)))
            .collect();

        let mut itemize_prompts: HashSet<String> = config.itemize.romans.into_iter().collect();
        itemize_prompts.extend(config.itemize.letters.chars().map(String::from));

        Ok(Self {
            code: config.metadata.code,
            name: config.metadata.name,
            abbreviations,
            contractions,
            ambiguous: config.clitics.ambiguous.into_iter().collect(),
            enclitics: config.clitics.enclitics.into_iter().collect(),
            fused: config.clitics.fused.into_iter().collect(),
            terminations: config.clitics.terminations.into_iter().collect(),
            itemize_prompts,
            usual: config.usual.entries,
        })
    }

    /// Parse and compile tables from TOML text
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_content)
            .map_err(|e| Error::Config(format!("Failed to parse language tables: {e}")))?;
        Self::from_config(config)
    }

    /// Load tables from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn language_code(&self) -> &str {
        &self.code
    }

    pub fn language_name(&self) -> &str {
        &self.name
    }

    pub fn abbreviations(&self) -> &AbbreviationTrie {
        &self.abbreviations
    }

    /// Exact abbreviation membership (tokenizer)
    pub fn is_abbreviation(&self, text: &str) -> bool {
        self.abbreviations.contains(text)
    }

    /// Abbreviation at the end of a chunk (segmenter)
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        self.abbreviations.ends_with_abbreviation(text)
    }

    /// Expansion of a lower-cased contracted form
    pub fn contraction(&self, form: &str) -> Option<(&str, &str)> {
        self.contractions
            .get(form)
            .map(|(first, second)| (first.as_str(), second.as_str()))
    }

    /// Contracted forms that need context before splitting (exact case)
    pub fn is_ambiguous(&self, form: &str) -> bool {
        self.ambiguous.contains(form)
    }

    pub fn is_enclitic(&self, form: &str) -> bool {
        self.enclitics.contains(form)
    }

    /// Fused double pronouns such as `lho` or `ma`
    pub fn is_fused_pronoun(&self, form: &str) -> bool {
        self.fused.contains(form)
    }

    /// Future and conditional endings that follow a mesoclitic pronoun
    pub fn is_termination(&self, form: &str) -> bool {
        self.terminations.contains(form)
    }

    /// Lower-case letters and roman numerals used as list prompts
    pub fn is_itemize_prompt(&self, form: &str) -> bool {
        self.itemize_prompts.contains(form)
    }

    /// Rows of the usual-forms table
    pub fn usual_forms(&self) -> &[UsualFormConfig] {
        &self.usual
    }
}
