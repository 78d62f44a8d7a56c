//! Sentence tokenization into CoNLL-U rows
//!
//! A raw sentence goes through four stages:
//!
//! 1. [`trim`] drops list symbols, datelines and headline runs,
//! 2. [`TaggedSentence::tag`] marks list prompts as atomic bits,
//! 3. [`TaggedSentence::match_pairs`] repairs paired punctuation,
//! 4. [`Tokenizer::tokenize`] peels punctuation, splits clitics and expands
//!    contractions.
//!
//! Only the last stage needs the lexicon. Morphological fields are left as
//! `_` for the parsing model to fill.

mod disambiguate;
mod pairs;
mod split;
mod tag;
mod trim;

pub use pairs::match_pairs;
pub use tag::{Bit, ItemMarker, TaggedSentence};
pub use trim::trim;

use crate::config::TokenizerConfig;
use crate::conllu::{SentenceRecord, Token, EMPTY_FIELD, NO_SPACE_AFTER};
use crate::language::{self, LanguageTables};
use crate::lexicon::Lexicon;
use disambiguate::Context;
use split::Part;

/// Cased text with no lower-case letter (`EUA`, `À`)
pub(crate) fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Row waiting for its identifier
#[derive(Debug)]
enum Unit {
    Word { form: String, misc: &'static str },
    Range { form: String, misc: &'static str, span: u32 },
}

/// Lexicon-aware sentence tokenizer
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
    tables: &'a LanguageTables,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer over the built-in Portuguese tables
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_tables(lexicon, language::portuguese())
    }

    pub fn with_tables(lexicon: &'a Lexicon, tables: &'a LanguageTables) -> Self {
        Self { lexicon, tables }
    }

    /// Run every enabled stage on a raw sentence
    ///
    /// Returns `None` when the sentence does not survive trimming or
    /// punctuation repair.
    pub fn process_sentence(
        &self,
        raw: &str,
        sid: &str,
        config: &TokenizerConfig,
    ) -> Option<SentenceRecord> {
        let trimmed = if config.trim {
            trim(raw)
        } else {
            raw.to_string()
        };

        let tagged = if config.preserve {
            TaggedSentence::tag(&trimmed, self.tables)
        } else {
            TaggedSentence::plain(&trimmed)
        };

        let tagged = if config.match_pairs {
            tagged.match_pairs()?
        } else {
            tagged
        };

        if tagged.is_empty() {
            log::debug!("Sentence {sid} is empty after cleaning");
            return None;
        }
        Some(self.tokenize(&tagged, sid))
    }

    /// Tokenize an untagged sentence as is
    pub fn tokenize_str(&self, sentence: &str, sid: &str) -> SentenceRecord {
        self.tokenize(&TaggedSentence::plain(sentence), sid)
    }

    /// Tokenize a prepared sentence into a record with `sent_id` and `text`
    /// comments
    pub fn tokenize(&self, sentence: &TaggedSentence, sid: &str) -> SentenceRecord {
        let texts: Vec<&str> = sentence.bits().iter().map(Bit::text).collect();
        let mut units = Vec::new();

        for (index, bit) in sentence.bits().iter().enumerate() {
            match bit {
                Bit::Atomic { text, .. } => units.push(Unit::Word {
                    form: text.clone(),
                    misc: EMPTY_FIELD,
                }),
                Bit::Plain(text) => {
                    let context = Context::around(&texts, index);
                    self.split_bit(text, &context, &mut units);
                }
            }
        }

        assemble(sid, sentence.render(), units)
    }

    fn split_bit(&self, bit: &str, context: &Context<'_>, units: &mut Vec<Unit>) {
        let peeled = split::peel(bit, self.tables);
        let mut parts: Vec<Part> = peeled.pre.into_iter().map(Part::Word).collect();
        parts.extend(split::split_middle(peeled.middle, self.lexicon, self.tables));
        parts.extend(peeled.pos.into_iter().map(Part::Word));

        let last = parts.len().saturating_sub(1);
        for (i, part) in parts.into_iter().enumerate() {
            let misc = if i == last { EMPTY_FIELD } else { NO_SPACE_AFTER };
            match part {
                Part::Fused { form, pieces } => {
                    units.push(Unit::Range {
                        form,
                        misc,
                        span: pieces.len() as u32,
                    });
                    units.extend(pieces.into_iter().map(|form| Unit::Word {
                        form,
                        misc: EMPTY_FIELD,
                    }));
                }
                Part::Word(form) => self.push_word(form, misc, context, units),
            }
        }
    }

    fn push_word(
        &self,
        form: String,
        misc: &'static str,
        context: &Context<'_>,
        units: &mut Vec<Unit>,
    ) {
        let expansion = if self.tables.is_ambiguous(&form)
            && !disambiguate::should_split(&form, context, self.lexicon)
        {
            None
        } else {
            self.tables.contraction(&form.to_lowercase())
        };

        let Some((first, second)) = expansion else {
            units.push(Unit::Word { form, misc });
            return;
        };

        let (first, second) = match_case(&form, first, second);
        units.push(Unit::Range {
            form,
            misc,
            span: 2,
        });
        units.push(Unit::Word {
            form: first,
            misc: EMPTY_FIELD,
        });
        units.push(Unit::Word {
            form: second,
            misc: EMPTY_FIELD,
        });
    }
}

/// Copy the casing of a contracted form onto its expansion
fn match_case(source: &str, first: &str, second: &str) -> (String, String) {
    if is_all_caps(source) {
        return (first.to_uppercase(), second.to_uppercase());
    }
    if source.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = first.chars();
        let capitalized = match chars.next() {
            Some(initial) => initial.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        return (capitalized, second.to_string());
    }
    (first.to_string(), second.to_string())
}

fn assemble(sid: &str, text: String, units: Vec<Unit>) -> SentenceRecord {
    let mut record = SentenceRecord::new(sid, text);
    let mut last_id: u32 = 0;

    for unit in units {
        match unit {
            Unit::Range { form, misc, span } => {
                record.push_token(Token::range(last_id + 1, last_id + span, form, misc));
            }
            Unit::Word { form, misc } => {
                let form = form.trim();
                if form.is_empty() {
                    continue;
                }
                last_id += 1;
                record.push_token(Token::word(last_id, form, misc));
            }
        }
    }
    record
}
