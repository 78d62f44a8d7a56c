//! Context rules for contractions that are also plain words
//!
//! `nos`, `consigo`, `pra`, `pela`, `pelas`, `pelo` and `pelos` can be a
//! contraction or a word of their own (a pronoun, a verb, a noun). The
//! neighbouring bits decide, looked up in the lexicon.

use crate::lexicon::{Lexicon, PosTag};

const VERBAL: &[PosTag] = &[PosTag::Verb, PosTag::Aux];
const NOMINAL: &[PosTag] = &[PosTag::Noun, PosTag::Adj, PosTag::Det];
const NOMINAL_OR_NUMERAL: &[PosTag] = &[PosTag::Noun, PosTag::Adj, PosTag::Num, PosTag::Det];

/// Determiner-like words that never open the `o pelo` idiom
const PELO_STOPLIST: &[&str] = &["que", "dado", "tanto", "quanto", "mais"];

/// Raw neighbouring bits of the word being decided
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Context<'a> {
    pub previous: Option<&'a str>,
    pub next: Option<&'a str>,
    pub after_next: Option<&'a str>,
}

impl<'a> Context<'a> {
    pub fn around(bits: &[&'a str], index: usize) -> Self {
        Self {
            previous: index.checked_sub(1).and_then(|i| bits.get(i).copied()),
            next: bits.get(index + 1).copied(),
            after_next: bits.get(index + 2).copied(),
        }
    }
}

/// First alphabetic run of a bit, lower-cased (`(Casa),` -> `casa`)
pub(crate) fn strip_word(bit: &str) -> String {
    bit.chars()
        .skip_while(|c| !c.is_alphabetic())
        .take_while(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_any(lexicon: &Lexicon, bit: Option<&str>, tags: &[PosTag]) -> bool {
    bit.is_some_and(|bit| lexicon.exists_any(&strip_word(bit), tags))
}

/// Some analysis under `tags` has features accepted by `agrees`
fn has_agreeing(
    lexicon: &Lexicon,
    bit: Option<&str>,
    tags: &[PosTag],
    agrees: impl Fn(&str) -> bool,
) -> bool {
    let Some(bit) = bit else {
        return false;
    };
    let word = strip_word(bit);
    for analysis in lexicon.get_all(&word, tags) {
        if agrees(&analysis.features) {
            return true;
        }
    }
    false
}

fn starts_with(bit: Option<&str>, test: impl Fn(char) -> bool) -> bool {
    bit.and_then(|bit| bit.chars().next()).is_some_and(test)
}

/// Whether an ambiguous form should be expanded as a contraction
///
/// `form` must be one of the ambiguous forms in lower case; any other form
/// is never split here.
pub(crate) fn should_split(form: &str, context: &Context<'_>, lexicon: &Lexicon) -> bool {
    match form {
        "nos" => {
            // Verb before: enclitic pronoun (`deu nos tudo`). Verb after:
            // proclitic pronoun (`Ele nos ajudou`).
            let verbal = is_any(lexicon, context.previous, VERBAL)
                || is_any(lexicon, context.next, VERBAL);
            let masculine_plural_follows = has_agreeing(lexicon, context.next, NOMINAL, |f| {
                !f.contains("Number=Sing") && !f.contains("Gender=Fem")
            });
            !(verbal && !masculine_plural_follows)
        }
        "consigo" => {
            let pronoun_before = is_any(lexicon, context.previous, &[PosTag::Pron, PosTag::Adv]);
            let verb_after = is_any(lexicon, context.next, VERBAL);
            let comparison = match (context.next, context.after_next) {
                (Some(next), Some(after)) => (next == "do" && after == "que") || next == "sua",
                _ => false,
            };
            !((pronoun_before || verb_after) && !comparison)
        }
        "pra" => has_agreeing(lexicon, context.next, NOMINAL, |f| {
            !f.contains("Number=Plur") && !f.contains("Gender=Masc")
        }),
        "pela" | "pelas" => {
            is_any(lexicon, context.next, NOMINAL_OR_NUMERAL)
                || starts_with(context.next, |c| c.is_uppercase() || c.is_numeric())
        }
        "pelo" => !keeps_idiom(lexicon, context, |f| {
            !f.contains("Number=Plur") && !f.contains("Gender=Fem")
        }),
        "pelos" => !keeps_idiom(lexicon, context, |f| {
            !f.contains("Number=Sing") && !f.contains("Gender=Fem") && f.contains("PronType=Art")
        }),
        _ => false,
    }
}

/// `o pelo`, `os pelos`: a determiner before and no agreeing word after
fn keeps_idiom(lexicon: &Lexicon, context: &Context<'_>, agrees: impl Fn(&str) -> bool) -> bool {
    let determiner_before = has_agreeing(lexicon, context.previous, &[PosTag::Det], &agrees)
        && context
            .previous
            .is_some_and(|bit| !PELO_STOPLIST.contains(&strip_word(bit).as_str()));
    let agreeing_after = has_agreeing(lexicon, context.next, NOMINAL, &agrees);
    let lowercase_after = !starts_with(context.next, char::is_uppercase);
    determiner_before && !agreeing_after && lowercase_after
}
