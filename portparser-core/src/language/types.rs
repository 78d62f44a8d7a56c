use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: MetadataConfig,
    pub abbreviations: AbbreviationConfig,
    pub contractions: HashMap<String, [String; 2]>,
    pub clitics: CliticConfig,
    pub itemize: ItemizeConfig,
    #[serde(default)]
    pub usual: UsualConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    /// Named lists that only group the table file; matching ignores them
    #[serde(flatten)]
    pub groups: HashMap<String, Vec<String>>,
}

impl AbbreviationConfig {
    /// Every abbreviation over all groups
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.groups.values().flatten().map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliticConfig {
    pub ambiguous: Vec<String>,
    pub enclitics: Vec<String>,
    pub fused: Vec<String>,
    pub terminations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemizeConfig {
    pub romans: Vec<String>,
    pub letters: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsualConfig {
    #[serde(default)]
    pub entries: Vec<UsualFormConfig>,
}

/// Row of the usual-forms table (`form`, `kind`, `upos`, `lemma`, `feats`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsualFormConfig {
    pub form: String,
    pub kind: String,
    pub upos: String,
    pub lemma: String,
    pub feats: String,
}
