//! Paired punctuation repair
//!
//! Quotes, parentheses, brackets, braces and angle brackets are counted over
//! the plain bits. A sentence wrapped in exactly one pair loses the wrap, and
//! a symbol that cannot be paired is erased everywhere. Atomic bits are never
//! touched.

use super::tag::{Bit, TaggedSentence};

/// (open, close); quotes open and close with the same character
const PAIRS: [(char, char); 6] = [
    ('"', '"'),
    ('\'', '\''),
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
];

const TERMINALS: [char; 5] = ['.', '!', '?', ':', ';'];

const CLOSERS: [char; 6] = ['\'', '"', ')', ']', '}', '>'];

#[derive(Debug, Clone, Copy, Default)]
struct PairCount {
    open: usize,
    close: usize,
}

impl PairCount {
    fn of(bits: &[Bit], (open, close): (char, char)) -> Self {
        let mut count = Self::default();
        for bit in bits {
            if let Bit::Plain(text) = bit {
                for c in text.chars() {
                    if c == open {
                        count.open += 1;
                    } else if c == close {
                        count.close += 1;
                    }
                }
            }
        }
        count
    }

    fn is_single_pair(&self, symmetric: bool) -> bool {
        if symmetric {
            self.open == 2
        } else {
            self.open == 1 && self.close == 1
        }
    }

    fn is_unbalanced(&self, symmetric: bool) -> bool {
        if symmetric {
            self.open % 2 != 0
        } else {
            self.open != self.close
        }
    }
}

impl TaggedSentence {
    /// Repair paired punctuation and the sentence-final mark
    ///
    /// Returns `None` when nothing alphanumeric survives.
    pub fn match_pairs(self) -> Option<TaggedSentence> {
        let mut bits = self.bits;
        let counts = PAIRS.map(|pair| PairCount::of(&bits, pair));

        strip_wrap(&mut bits, &counts);

        for (&(open, close), count) in PAIRS.iter().zip(&counts) {
            if count.is_unbalanced(open == close) {
                for bit in bits.iter_mut() {
                    if let Bit::Plain(text) = bit {
                        text.retain(|c| c != open && c != close);
                    }
                }
            }
        }
        bits.retain(|bit| !bit.text().is_empty());

        if !bits
            .iter()
            .any(|bit| bit.text().chars().any(char::is_alphanumeric))
        {
            return None;
        }

        fix_ending(&mut bits);
        Some(TaggedSentence { bits })
    }
}

/// Repair a plain sentence string; an empty string means the sentence is
/// dropped
///
/// ```
/// use portparser_core::tokenizer::match_pairs;
///
/// assert_eq!(match_pairs("()"), "");
/// assert_eq!(match_pairs("\"Texto entre aspas.\""), "Texto entre aspas.");
/// assert_eq!(match_pairs("Item:."), "Item.");
/// ```
pub fn match_pairs(sentence: &str) -> String {
    TaggedSentence::plain(sentence)
        .match_pairs()
        .map(|tagged| tagged.render())
        .unwrap_or_default()
}

fn strip_wrap(bits: &mut Vec<Bit>, counts: &[PairCount; 6]) {
    let (Some(Bit::Plain(first)), Some(Bit::Plain(last))) = (bits.first(), bits.last()) else {
        return;
    };
    let (Some(head), Some(tail)) = (first.chars().next(), last.chars().last()) else {
        return;
    };

    let wrapped = PAIRS
        .iter()
        .zip(counts)
        .any(|(&(open, close), count)| {
            head == open && tail == close && count.is_single_pair(open == close)
        });
    if !wrapped {
        return;
    }

    if let Some(Bit::Plain(text)) = bits.first_mut() {
        text.remove(0);
    }
    if let Some(Bit::Plain(text)) = bits.last_mut() {
        text.pop();
    }
    bits.retain(|bit| !bit.text().is_empty());
}

fn fix_ending(bits: &mut Vec<Bit>) {
    if !matches!(bits.last(), Some(Bit::Plain(_))) {
        bits.push(Bit::Plain(".".to_string()));
        return;
    }
    let Some(Bit::Plain(text)) = bits.last_mut() else {
        return;
    };

    if text.ends_with("..") && !text.ends_with("...") {
        text.pop();
    } else if text.ends_with(":.") || text.ends_with(";.") {
        text.pop();
        text.pop();
        text.push('.');
    } else if !text.ends_with(TERMINALS) {
        let mut tail = text.chars().rev();
        match (tail.next(), tail.next()) {
            (Some(closer), Some(mark))
                if CLOSERS.contains(&closer) && TERMINALS.contains(&mark) =>
            {
                text.pop();
                text.pop();
                text.push(closer);
                text.push(mark);
            }
            _ => text.push('.'),
        }
    }
}
