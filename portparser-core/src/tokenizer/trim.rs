//! Headline and list-symbol trimming

use super::is_all_caps;

const ITEMIZE_SYMBOLS: &[&str] = &["*", "★", "-", "—", "–", ">", "."];

/// Drop a leading list symbol, a parenthesised dateline and a headline run
///
/// `- Item.` becomes `Item.`, `(BELO HORIZONTE) O prefeito falou.` becomes
/// `O prefeito falou.` and `CRONOLOGIA Em 1990 ...` becomes `Em 1990 ...`.
/// A sentence with nothing left returns an empty string.
pub fn trim(sentence: &str) -> String {
    let bits: Vec<&str> = sentence.split(' ').filter(|bit| !bit.is_empty()).collect();
    let Some(first) = bits.first() else {
        return String::new();
    };

    let mut start = 0;
    if ITEMIZE_SYMBOLS.contains(first) {
        if bits.len() == 1 {
            return String::new();
        }
        start = 1;
    }

    let last = bits[bits.len() - 1];
    if bits[start].starts_with('(') && !last.ends_with(')') {
        if let Some(close) = bits.iter().position(|bit| bit.ends_with(')')) {
            start = start.max(close + 1);
        }
    }

    let mut i = start;
    while i < bits.len() && is_all_caps(bits[i]) {
        start = i;
        i += 1;
    }

    // the last caps word belongs to the sentence unless a capitalised word follows
    let next_capitalized = bits
        .get(start + 1)
        .and_then(|bit| bit.chars().next())
        .is_some_and(char::is_uppercase);
    if bits[start].chars().count() > 1 && is_all_caps(bits[start]) && next_capitalized {
        start += 1;
    }

    bits[start..].join(" ")
}
