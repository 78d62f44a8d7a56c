//! Segmentation behaviour on realistic text and generated paragraphs

use portparser_core::{segment, Segmenter, SegmenterConfig};
use proptest::prelude::*;

#[test]
fn test_news_paragraph() {
    let text = "O Sr. Silva chegou às dez horas. Ele trouxe documentos, fotos etc. \
                A reunião durou duas horas! Alguém perguntou: \"Quando termina?\" \
                Ninguém respondeu.";
    let sentences = segment(text, true, 0);
    assert_eq!(
        sentences,
        vec![
            "O Sr. Silva chegou às dez horas.",
            "Ele trouxe documentos, fotos etc. A reunião durou duas horas!",
            "Alguém perguntou:",
            "Quando termina?",
            "Ninguém respondeu.",
        ]
    );
}

#[test]
fn test_configured_segmenter_matches_free_function() {
    let text = "Primeira frase. Segunda frase.";
    let segmenter = Segmenter::portuguese(SegmenterConfig {
        replace: false,
        limit: 0,
    });
    assert_eq!(segmenter.segment(text), segment(text, false, 0));
    assert!(!segmenter.config().replace);
}

#[test]
fn test_line_breaks_inside_sentences() {
    let text = "A chuva caiu\nsobre a cidade.\r\nO rio subiu.";
    assert_eq!(
        segment(text, true, 0),
        vec!["A chuva caiu sobre a cidade.", "O rio subiu."]
    );
}

const WORDS: &[&str] = &[
    "casa", "livro", "menino", "cidade", "trabalho", "escola", "janela", "caminho", "verde",
    "rápido", "chegou", "saiu",
];

const CAPITALIZED: &[&str] = &["Casa", "Livro", "Menino", "Ontem", "Hoje", "Ninguém", "Amanhã"];

const ENDINGS: &[&str] = &[".", "!", "?", "..."];

fn arb_sentence() -> impl Strategy<Value = String> {
    (
        prop::sample::select(CAPITALIZED),
        prop::collection::vec(prop::sample::select(WORDS), 0..6),
        prop::sample::select(ENDINGS),
    )
        .prop_map(|(first, rest, end)| {
            let mut words = vec![first];
            words.extend(rest);
            format!("{}{}", words.join(" "), end)
        })
}

proptest! {
    #[test]
    fn segmented_sentences_are_the_generated_ones(
        sentences in prop::collection::vec(arb_sentence(), 1..8)
    ) {
        let text = sentences.join(" ");
        prop_assert_eq!(segment(&text, true, 0), sentences);
    }

    #[test]
    fn every_sentence_ends_with_a_terminal(text in "[A-Za-zçã ,.!?:;]{0,80}") {
        for sentence in segment(&text, true, 0) {
            let mut tail = sentence.chars().rev();
            let last = tail.next();
            let ends = match last {
                Some('.' | '!' | '?' | ':' | ';') => true,
                Some('"' | '\'') => matches!(tail.next(), Some('.' | '!' | '?')),
                _ => false,
            };
            prop_assert!(ends, "bad ending: {:?}", sentence);
        }
    }

    #[test]
    fn resegmenting_is_stable(sentences in prop::collection::vec(arb_sentence(), 1..8)) {
        let first = segment(&sentences.join(" "), true, 0);
        let second = segment(&first.join(" "), true, 0);
        prop_assert_eq!(first, second);
    }
}
