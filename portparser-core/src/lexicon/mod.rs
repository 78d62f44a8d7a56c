//! Read-only Portuguese lexicon
//!
//! The lexicon maps a lower-cased word form and a part-of-speech tag to every
//! analysis (lemma, tag, features) known for that pair. Ambiguity is kept as
//! multiplicity: a form may carry several analyses under the same tag.
//!
//! Lookups are case-sensitive on the stored key. Callers lower-case the query
//! form before asking.

mod loader;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Part-of-speech tags stored in the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Pron,
    Sconj,
    Verb,
}

impl PosTag {
    /// All tags, in table order
    pub const ALL: [PosTag; 12] = [
        PosTag::Adj,
        PosTag::Adp,
        PosTag::Adv,
        PosTag::Aux,
        PosTag::Cconj,
        PosTag::Det,
        PosTag::Intj,
        PosTag::Noun,
        PosTag::Num,
        PosTag::Pron,
        PosTag::Sconj,
        PosTag::Verb,
    ];

    /// UPOS spelling of the tag
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Pron => "PRON",
            PosTag::Sconj => "SCONJ",
            PosTag::Verb => "VERB",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PosTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown lexicon tag: {s}"))
    }
}

/// One analysis of a word form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub lemma: String,
    pub pos: PosTag,
    pub features: String,
}

impl Analysis {
    pub fn new(lemma: impl Into<String>, pos: PosTag, features: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            features: features.into(),
        }
    }
}

type Candidates = SmallVec<[Analysis; 2]>;

/// Immutable lexicon with one form index per tag
#[derive(Debug, Clone)]
pub struct Lexicon {
    tables: Vec<HashMap<String, Candidates>>,
    entries: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        LexiconBuilder::new().build()
    }
}

impl Lexicon {
    /// Create a builder
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Whether the form is known under the given tag
    pub fn exists(&self, form: &str, pos: PosTag) -> bool {
        self.tables[pos.index()].contains_key(form)
    }

    /// All analyses of the form under the given tag (empty when unknown)
    pub fn get(&self, form: &str, pos: PosTag) -> &[Analysis] {
        self.tables[pos.index()]
            .get(form)
            .map(|candidates| candidates.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the form is known under any of the tags
    pub fn exists_any(&self, form: &str, tags: &[PosTag]) -> bool {
        tags.iter().any(|&tag| self.exists(form, tag))
    }

    /// Analyses of the form across several tags, in tag order
    pub fn get_all<'a>(
        &'a self,
        form: &'a str,
        tags: &'a [PosTag],
    ) -> impl Iterator<Item = &'a Analysis> + 'a {
        tags.iter().flat_map(move |&tag| self.get(form, tag).iter())
    }

    /// Total number of analyses
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

/// Incremental lexicon construction
#[derive(Debug)]
pub struct LexiconBuilder {
    tables: Vec<HashMap<String, Candidates>>,
    entries: usize,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self {
            tables: (0..PosTag::ALL.len()).map(|_| HashMap::new()).collect(),
            entries: 0,
        }
    }

    /// Add one analysis; duplicates of the same (lemma, features) are kept once
    pub fn insert(
        &mut self,
        form: impl Into<String>,
        pos: PosTag,
        lemma: impl Into<String>,
        features: impl Into<String>,
    ) -> &mut Self {
        let analysis = Analysis::new(lemma, pos, features);
        let candidates = self.tables[pos.index()].entry(form.into()).or_default();
        if !candidates.contains(&analysis) {
            candidates.push(analysis);
            self.entries += 1;
        }
        self
    }

    /// Chainable variant of [`insert`](Self::insert)
    pub fn with(mut self, form: &str, pos: PosTag, lemma: &str, features: &str) -> Self {
        self.insert(form, pos, lemma, features);
        self
    }

    pub fn build(self) -> Lexicon {
        log::debug!("Lexicon built with {} analyses", self.entries);
        Lexicon {
            tables: self.tables,
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::builder()
            .with("casa", PosTag::Noun, "casa", "Gender=Fem|Number=Sing")
            .with("casa", PosTag::Verb, "casar", "Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin")
            .with("casa", PosTag::Verb, "casar", "Mood=Imp|Number=Sing|Person=2|VerbForm=Fin")
            .build()
    }

    #[test]
    fn test_pos_tag_round_trip() {
        for tag in PosTag::ALL {
            assert_eq!(tag.as_str().parse::<PosTag>().unwrap(), tag);
        }
        assert!("PROPN".parse::<PosTag>().is_err());
    }

    #[test]
    fn test_exists_is_per_tag() {
        let lex = sample();
        assert!(lex.exists("casa", PosTag::Noun));
        assert!(lex.exists("casa", PosTag::Verb));
        assert!(!lex.exists("casa", PosTag::Adj));
    }

    #[test]
    fn test_ambiguity_is_multiplicity() {
        let lex = sample();
        assert_eq!(lex.get("casa", PosTag::Verb).len(), 2);
        assert_eq!(lex.get("casa", PosTag::Noun).len(), 1);
        assert_eq!(lex.len(), 3);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let lex = sample();
        assert!(lex.get("Casa", PosTag::Noun).is_empty());
        assert!(!lex.exists("CASA", PosTag::Noun));
    }

    #[test]
    fn test_unknown_form_is_empty_slice() {
        let lex = Lexicon::default();
        assert!(lex.is_empty());
        assert!(lex.get("qualquer", PosTag::Noun).is_empty());
    }

    #[test]
    fn test_duplicate_analysis_kept_once() {
        let mut builder = Lexicon::builder();
        builder.insert("o", PosTag::Det, "o", "Definite=Def|Gender=Masc|Number=Sing|PronType=Art");
        builder.insert("o", PosTag::Det, "o", "Definite=Def|Gender=Masc|Number=Sing|PronType=Art");
        let lex = builder.build();
        assert_eq!(lex.get("o", PosTag::Det).len(), 1);
    }

    #[test]
    fn test_get_all_across_tags() {
        let lex = sample();
        let found: Vec<_> = lex.get_all("casa", &[PosTag::Noun, PosTag::Verb]).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].pos, PosTag::Noun);
    }
}
