//! Usual forms with a fixed analysis
//!
//! Weekday and month names, common abbreviations and written ordinals get
//! their lemma and features from this table before the lexicon is asked.

use crate::error::{Error, Result};
use crate::language::{self, UsualFormConfig};
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Group a usual form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsualKind {
    Weekday,
    Month,
    Abbreviation,
    Ordinal,
}

impl FromStr for UsualKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "week" => Ok(UsualKind::Weekday),
            "month" => Ok(UsualKind::Month),
            "abbr" => Ok(UsualKind::Abbreviation),
            "ordinal" => Ok(UsualKind::Ordinal),
            other => Err(format!("unknown usual form kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsualForm {
    pub upos: String,
    pub lemma: String,
    pub feats: String,
}

/// Lower-cased form index per kind
#[derive(Debug, Clone, Default)]
pub struct UsualForms {
    entries: HashMap<(UsualKind, String), UsualForm>,
}

impl UsualForms {
    /// Built-in Portuguese table
    pub fn portuguese() -> Self {
        Self::from_configs(language::portuguese().usual_forms())
    }

    /// Build from language table rows; rows of an unknown kind are skipped
    pub fn from_configs(rows: &[UsualFormConfig]) -> Self {
        let mut forms = Self::default();
        for row in rows {
            match row.kind.parse::<UsualKind>() {
                Ok(kind) => forms.insert(kind, &row.form, &row.upos, &row.lemma, &row.feats),
                Err(reason) => log::warn!("Skipping usual form {}: {reason}", row.form),
            }
        }
        forms
    }

    /// Read rows `form \t kind \t UPOS \t lemma \t feats`
    pub fn from_tsv<R: Read>(reader: R) -> Result<Self> {
        let mut forms = Self::default();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let [form, kind, upos, lemma, feats, ..] = fields.as_slice() else {
                return Err(Error::Lexicon {
                    line: index + 1,
                    reason: format!("expected 5 fields, found {}", fields.len()),
                });
            };
            let kind = kind.parse::<UsualKind>().map_err(|reason| Error::Lexicon {
                line: index + 1,
                reason,
            })?;
            forms.insert(kind, form, upos, lemma, feats);
        }
        Ok(forms)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_tsv(fs::File::open(path)?)
    }

    pub fn insert(&mut self, kind: UsualKind, form: &str, upos: &str, lemma: &str, feats: &str) {
        self.entries.insert(
            (kind, form.to_lowercase()),
            UsualForm {
                upos: upos.to_string(),
                lemma: lemma.to_string(),
                feats: feats.to_string(),
            },
        );
    }

    /// Entry for a lower-cased form
    pub fn get(&self, kind: UsualKind, form: &str) -> Option<&UsualForm> {
        self.entries.get(&(kind, form.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
