//! Lexicon-based lemma and feature correction
//!
//! Runs over a parsed CoNLL-U document and rewrites lemmas and features the
//! parsing model got wrong, using the usual-forms table first and the
//! lexicon second. Every rewrite is logged in a [`Report`] and marks the
//! token status with the rule label.

mod report;
mod usual;

pub use report::{label, Change, Field, Report, Rule};
pub use usual::{UsualForm, UsualForms, UsualKind};

use crate::config::PostprocessOptions;
use crate::conllu::{Document, Token, EMPTY_FIELD};
use crate::lexicon::{Analysis, Lexicon, PosTag};

const FOREIGN: &str = "Foreign=Yes";
const CARDINAL: &str = "NumType=Card";
const PASSIVE: &str = "|Voice=Pass";

/// How a UPOS tag is corrected against the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// PROPN, PUNCT, SYM: the lexicon never has them
    OutOfLexicon,
    /// ADP, ADV, CCONJ, SCONJ
    Closed,
    /// DET, PRON
    PronDet,
    /// ADJ, INTJ, NOUN, NUM
    Open,
    /// AUX, VERB
    Verb,
}

impl TagCategory {
    pub fn of(upos: &str) -> Option<Self> {
        match upos {
            "PROPN" | "PUNCT" | "SYM" => Some(TagCategory::OutOfLexicon),
            "ADP" | "ADV" | "CCONJ" | "SCONJ" => Some(TagCategory::Closed),
            "DET" | "PRON" => Some(TagCategory::PronDet),
            "ADJ" | "INTJ" | "NOUN" | "NUM" => Some(TagCategory::Open),
            "AUX" | "VERB" => Some(TagCategory::Verb),
            _ => None,
        }
    }
}

/// Proposed values for one token
#[derive(Debug, Default)]
struct Fix {
    lemma: Option<(Rule, String)>,
    feats: Option<(Rule, String)>,
}

impl Fix {
    fn both(rule: Rule, lemma: &str, feats: &str) -> Self {
        Self {
            lemma: Some((rule, lemma.to_string())),
            feats: Some((rule, feats.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PostProcessor<'a> {
    lexicon: &'a Lexicon,
    usual: &'a UsualForms,
    options: PostprocessOptions,
}

impl<'a> PostProcessor<'a> {
    pub fn new(lexicon: &'a Lexicon, usual: &'a UsualForms, options: PostprocessOptions) -> Self {
        Self {
            lexicon,
            usual,
            options,
        }
    }

    /// Correct every word row of the document in place
    ///
    /// Multi-word range rows and empty nodes are left alone.
    pub fn run(&self, document: &mut Document) -> Report {
        let mut report = Report::new();
        for record in document.sentences_mut() {
            for token in record.tokens.iter_mut().filter(|token| token.id.is_word()) {
                let fix = self.propose(token);
                self.apply(&record.id, token, fix, &mut report);
            }
        }
        log::info!(
            "Post-processing changed {} lemmas and {} feature sets",
            report.changed(Field::Lemma),
            report.changed(Field::Feats)
        );
        report
    }

    fn apply(&self, sid: &str, token: &mut Token, fix: Fix, report: &mut Report) {
        let targets = [
            (Field::Lemma, fix.lemma, self.options.lemma),
            (Field::Feats, fix.feats, self.options.feats),
        ];
        for (field, proposal, enabled) in targets {
            let Some((rule, new)) = proposal.filter(|_| enabled) else {
                continue;
            };
            let current = match field {
                Field::Lemma => &mut token.lemma,
                Field::Feats => &mut token.feats,
            };
            if *current == new {
                continue;
            }
            log::debug!("{sid} {}: {} {current} -> {new}", token.id, label(field, rule));
            let old = std::mem::replace(current, new.clone());
            token.status = Some(label(field, rule));
            report.record(Change {
                sid: sid.to_string(),
                token_id: token.id.to_string(),
                form: token.form.clone(),
                field,
                rule,
                old,
                new,
            });
        }
    }

    fn propose(&self, token: &Token) -> Fix {
        let form = token.form.as_str();
        let lower = form.to_lowercase();
        let upos = token.upos.as_str();

        if let Some(entry) = self
            .usual
            .get(UsualKind::Abbreviation, &lower)
            .filter(|entry| entry.upos == upos)
        {
            return Fix::both(Rule::UsualAbbreviation, &entry.lemma, &entry.feats);
        }
        if upos == "NOUN" {
            for (kind, rule) in [(UsualKind::Weekday, Rule::Weekday), (UsualKind::Month, Rule::Month)] {
                if let Some(entry) = self.usual.get(kind, &lower) {
                    return Fix::both(rule, &entry.lemma, &entry.feats);
                }
            }
        }
        if upos == "ADJ" {
            if let Some(entry) = self.usual.get(UsualKind::Ordinal, &lower) {
                return Fix::both(Rule::Ordinal, &entry.lemma, &entry.feats);
            }
        }

        if upos == "X" {
            return Fix {
                lemma: Some((Rule::ReplacedByTag, form.to_string())),
                feats: keep_unless(&token.feats, FOREIGN),
            };
        }
        if upos == "NUM" && is_numeral(form) {
            return Fix {
                lemma: Some((Rule::ReplacedByTag, form.to_string())),
                feats: keep_unless(&token.feats, CARDINAL),
            };
        }

        let Some(category) = TagCategory::of(upos) else {
            return Fix::default();
        };
        if category == TagCategory::OutOfLexicon {
            return Fix::both(Rule::ReplacedByTag, form, EMPTY_FIELD);
        }
        let Ok(tag) = upos.parse::<PosTag>() else {
            return Fix::default();
        };
        let candidates = self.lexicon.get(&lower, tag);

        match (category, candidates) {
            (TagCategory::Closed | TagCategory::PronDet, []) => {
                Fix::both(Rule::NoLexicon, form, EMPTY_FIELD)
            }
            (_, []) => Fix::default(),
            (TagCategory::Verb, [single]) => Fix {
                lemma: Some((Rule::SingleCandidate, single.lemma.clone())),
                // Voice=Pass is added by the parser and never stored
                feats: (single.features != active_voice(&token.feats))
                    .then(|| (Rule::SingleCandidate, single.features.clone())),
            },
            (_, [single]) => Fix::both(Rule::SingleCandidate, &single.lemma, &single.features),
            (_, many) => Fix {
                lemma: guess_lemma(&token.lemma, many),
                feats: guess_feats(category, &token.feats, many),
            },
        }
    }
}

/// Replace `current` with `value` unless it already is `value` or `_`
fn keep_unless(current: &str, value: &str) -> Option<(Rule, String)> {
    (current != value && current != EMPTY_FIELD).then(|| (Rule::ReplacedByTag, value.to_string()))
}

/// Digits, optionally after a sign
fn is_numeral(form: &str) -> bool {
    let mut chars = form.chars();
    match chars.next() {
        Some('-' | '+') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}

fn active_voice(feats: &str) -> String {
    feats.replace(PASSIVE, "")
}

fn shortest<'c>(values: impl Iterator<Item = &'c str>) -> Option<&'c str> {
    values.min_by_key(|value| value.chars().count())
}

fn guess_lemma(current: &str, candidates: &[Analysis]) -> Option<(Rule, String)> {
    if candidates.iter().any(|c| c.lemma == current) {
        return None;
    }
    shortest(candidates.iter().map(|c| c.lemma.as_str()))
        .map(|lemma| (Rule::ManyCandidates, lemma.to_string()))
}

fn guess_feats(category: TagCategory, current: &str, candidates: &[Analysis]) -> Option<(Rule, String)> {
    let all = candidates.iter().map(|c| c.features.as_str());
    let guess = match category {
        TagCategory::Closed => return None,
        TagCategory::PronDet => {
            if all.clone().any(|feats| feats == current) {
                return None;
            }
            shortest(all.filter(|feats| feats.contains("Person")))
        }
        TagCategory::Verb => {
            let current = active_voice(current);
            if all.clone().any(|feats| feats == current) {
                return None;
            }
            shortest(all.filter(|feats| feats.contains("Person=3")))
        }
        TagCategory::Open | TagCategory::OutOfLexicon => {
            if all.clone().any(|feats| feats == current) {
                return None;
            }
            shortest(all)
        }
    };
    guess.map(|feats| (Rule::ManyCandidates, feats.to_string()))
}
