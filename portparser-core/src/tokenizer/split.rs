//! Punctuation peeling and clitic splitting of a single bit

use crate::language::LanguageTables;
use crate::lexicon::{Lexicon, PosTag};

/// Characters peeled from either side of a bit
const REMOVABLE: &[char] = &[
    '\'', '"', '(', ')', '[', ']', '{', '}', '<', '>', '!', '?', ',', ';', ':', '=', '+', '*', '★',
    '|', '/', '\\', '&', '^', '_', '`', '~', '%', '§',
];

/// Output unit of one bit before identifiers are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Part {
    /// Surface word, still subject to contraction lookup
    Word(String),
    /// Clitic compound written as `form` and analysed as `pieces`
    Fused { form: String, pieces: Vec<String> },
}

/// A bit with its leading and trailing punctuation separated
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Peeled<'a> {
    pub pre: Vec<String>,
    pub middle: &'a str,
    pub pos: Vec<String>,
}

pub(crate) fn peel<'a>(bit: &'a str, tables: &LanguageTables) -> Peeled<'a> {
    let mut middle = bit;
    let mut pre = Vec::new();

    loop {
        let mut chars = middle.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            break;
        };
        if REMOVABLE.contains(&first) || (first == '-' && !second.is_ascii_digit()) {
            pre.push(first.to_string());
            middle = &middle[first.len_utf8()..];
        } else {
            break;
        }
    }

    // collected right to left
    let mut trailing = Vec::new();
    while middle.chars().nth(1).is_some() && !tables.is_abbreviation(middle) {
        let Some(last) = middle.chars().next_back() else {
            break;
        };
        if REMOVABLE.contains(&last) || last == '-' || last == '.' {
            trailing.push(last);
            middle = &middle[..middle.len() - last.len_utf8()];
        } else {
            break;
        }
    }

    Peeled {
        pre,
        middle,
        pos: coalesce_dots(trailing.into_iter().rev()),
    }
}

/// Regroup runs of dots into `...`, `..` and `.` units
fn coalesce_dots(chars: impl Iterator<Item = char>) -> Vec<String> {
    let mut units = Vec::new();
    let mut dots = 0;
    for c in chars {
        if c == '.' {
            dots += 1;
            if dots == 3 {
                units.push("...".to_string());
                dots = 0;
            }
            continue;
        }
        if dots > 0 {
            units.push(".".repeat(dots));
            dots = 0;
        }
        units.push(c.to_string());
    }
    if dots > 0 {
        units.push(".".repeat(dots));
    }
    units
}

/// Split the middle of a bit on hyphens into clitic compounds
pub(crate) fn split_middle(middle: &str, lexicon: &Lexicon, tables: &LanguageTables) -> Vec<Part> {
    let literal = || vec![Part::Word(middle.to_string())];
    if middle.chars().nth(1).is_none() {
        return literal();
    }

    let fused = |pieces: Vec<String>| {
        vec![Part::Fused {
            form: middle.to_string(),
            pieces,
        }]
    };

    let parts: Vec<&str> = middle.split('-').collect();
    match parts.as_slice() {
        [_] => literal(),
        // enclisis: cumpri-lo, fazê-lo
        [stem, pronoun] if tables.is_enclitic(pronoun) => {
            fused(vec![infinitive(stem, lexicon), pronoun.to_string()])
        }
        // double enclisis with a fused pronoun: disse-lho, dei-ta
        [stem, pronoun] if tables.is_fused_pronoun(pronoun) => match unfuse(pronoun) {
            Some((first, second)) => fused(vec![stem.to_string(), first, second]),
            None => literal(),
        },
        // double enclisis: dá-se-lhe
        [stem, first, second] if tables.is_enclitic(first) && tables.is_enclitic(second) => {
            fused(vec![
                infinitive(stem, lexicon),
                first.to_string(),
                second.to_string(),
            ])
        }
        // mesoclisis on an infinitive: dar-lo-ia
        [stem, pronoun, ending]
            if tables.is_enclitic(pronoun)
                && stem.ends_with('r')
                && tables.is_termination(ending) =>
        {
            fused(vec![format!("{stem}{ending}"), pronoun.to_string()])
        }
        // mesoclisis on an elided infinitive: dá-lo-ia
        [stem, pronoun, ending]
            if tables.is_enclitic(pronoun)
                && elided_vowel(stem).is_some()
                && tables.is_termination(ending) =>
        {
            fused(vec![
                format!("{}{ending}", infinitive(stem, lexicon)),
                pronoun.to_string(),
            ])
        }
        _ => literal(),
    }
}

/// Plain vowel behind an accented stem ending (`á` -> `a`)
fn elided_vowel(stem: &str) -> Option<char> {
    match stem.chars().last()? {
        'á' => Some('a'),
        'ê' => Some('e'),
        'í' => Some('i'),
        'ô' => Some('o'),
        _ => None,
    }
}

/// Rebuild the infinitive behind an accented stem (`fazê` -> `fazer`)
///
/// The `r`, `s` and `z` endings are tried in that order against the verbs of
/// the lexicon; `z` is used when none is known. Other stems are returned
/// unchanged.
pub(crate) fn infinitive(stem: &str, lexicon: &Lexicon) -> String {
    let Some(vowel) = elided_vowel(stem) else {
        return stem.to_string();
    };
    let mut base: String = stem.chars().collect();
    base.pop();
    base.push(vowel);

    for ending in ['r', 's'] {
        let candidate = format!("{base}{ending}");
        if lexicon.exists(&candidate.to_lowercase(), PosTag::Verb) {
            return candidate;
        }
    }
    format!("{base}z")
}

/// Split a fused double pronoun (`lhas` -> `lhe` + `as`)
fn unfuse(pronoun: &str) -> Option<(String, String)> {
    let suffix_len = if pronoun.ends_with('a') || pronoun.ends_with('o') {
        1
    } else if pronoun.ends_with("as") || pronoun.ends_with("os") {
        2
    } else {
        return None;
    };
    let split = pronoun.len() - suffix_len;
    Some((
        format!("{}e", &pronoun[..split]),
        pronoun[split..].to_string(),
    ))
}
