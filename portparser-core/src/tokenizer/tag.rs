//! Itemize tagging
//!
//! List prompts such as `a)`, `(iv)` and the paragraph marker `§§` are kept
//! as atomic bits so that later stages never split them.

use crate::language::LanguageTables;

/// Shape of an atomic list prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemMarker {
    /// `(x)`
    Enclosed,
    /// `x)`
    Bare,
    /// `§§`
    Paragraph,
}

/// Space-separated piece of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bit {
    Plain(String),
    Atomic { text: String, marker: ItemMarker },
}

impl Bit {
    pub fn text(&self) -> &str {
        match self {
            Bit::Plain(text) | Bit::Atomic { text, .. } => text,
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Bit::Atomic { .. })
    }
}

/// Sentence split into plain and atomic bits
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaggedSentence {
    pub(crate) bits: Vec<Bit>,
}

impl TaggedSentence {
    /// Every bit plain; used when tagging is disabled
    pub fn plain(sentence: &str) -> Self {
        Self {
            bits: split_bits(sentence).map(|bit| Bit::Plain(bit.to_string())).collect(),
        }
    }

    /// Mark list prompts and paragraph markers as atomic
    pub fn tag(sentence: &str, tables: &LanguageTables) -> Self {
        let bits = split_bits(sentence)
            .map(|bit| match item_marker(bit, tables) {
                Some(marker) => Bit::Atomic {
                    text: bit.to_string(),
                    marker,
                },
                None => Bit::Plain(bit.to_string()),
            })
            .collect();
        Self { bits }
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<Bit> {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits joined with single spaces
    pub fn render(&self) -> String {
        self.bits.iter().map(Bit::text).collect::<Vec<_>>().join(" ")
    }
}

impl From<Vec<Bit>> for TaggedSentence {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

fn split_bits(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split(' ').filter(|bit| !bit.is_empty())
}

fn item_marker(bit: &str, tables: &LanguageTables) -> Option<ItemMarker> {
    if bit == "§§" {
        return Some(ItemMarker::Paragraph);
    }
    let prompt = bit.strip_suffix(')')?;
    match prompt.strip_prefix('(') {
        Some(inner) => tables.is_itemize_prompt(inner).then_some(ItemMarker::Enclosed),
        None => tables.is_itemize_prompt(prompt).then_some(ItemMarker::Bare),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::portuguese;

    fn atomic(text: &str, marker: ItemMarker) -> Bit {
        Bit::Atomic {
            text: text.to_string(),
            marker,
        }
    }

    #[test]
    fn test_itemize_prompts() {
        let tagged = TaggedSentence::tag("a) primeiro (iv) quarto §§ fim", portuguese());
        assert_eq!(
            tagged.bits(),
            &[
                atomic("a)", ItemMarker::Bare),
                Bit::Plain("primeiro".to_string()),
                atomic("(iv)", ItemMarker::Enclosed),
                Bit::Plain("quarto".to_string()),
                atomic("§§", ItemMarker::Paragraph),
                Bit::Plain("fim".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_prompts_stay_plain() {
        let tagged = TaggedSentence::tag("(Brasil) ab) (xl) A) ()", portuguese());
        assert!(tagged.bits().iter().all(|bit| !bit.is_atomic()));
    }

    #[test]
    fn test_render() {
        let tagged = TaggedSentence::tag("  b)  segundo item ", portuguese());
        assert_eq!(tagged.render(), "b) segundo item");
        assert_eq!(tagged.bits().len(), 3);
    }

    #[test]
    fn test_plain() {
        let tagged = TaggedSentence::plain("a) texto");
        assert_eq!(tagged.bits()[0], Bit::Plain("a)".to_string()));
        assert!(TaggedSentence::plain("   ").is_empty());
    }
}
