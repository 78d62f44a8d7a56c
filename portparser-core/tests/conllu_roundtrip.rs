//! CoNLL-U document loading, editing and writing

use portparser_core::{Document, Error, SentenceRecord, Token, TokenId};
use std::fs;
use tempfile::tempdir;

const PARSED: &str = "# newdoc id = corpus-1\n\
# global.columns = ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC\n\
# sent_id = S000002\n\
# text = Gosto disso.\n\
1\tGosto\tgostar\tVERB\t_\tMood=Ind|Number=Sing|Person=1|Tense=Pres|VerbForm=Fin\t0\troot\t0:root\t_\n\
2-3\tdisso\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n\
2\tde\tde\tADP\t_\t_\t3\tcase\t3:case\t_\n\
3\tisso\tisso\tPRON\t_\tGender=Masc|Number=Sing|PronType=Dem\t1\tobl\t1:obl\t_\n\
4\t.\t.\tPUNCT\t_\t_\t1\tpunct\t1:punct\t_\n\
\n\
# sent_id = S000001\n\
# text = Olá!\n\
1\tOlá\tolá\tINTJ\t_\t_\t0\troot\t0:root\tSpaceAfter=No\n\
2\t!\t!\tPUNCT\t_\t_\t1\tpunct\t1:punct\t_\n\
\n";

#[test]
fn test_sorted_round_trip() {
    let document = Document::parse(PARSED).unwrap();
    assert_eq!(document.all_ids(), vec!["S000001", "S000002"]);
    assert!(document.header().starts_with("# newdoc id = corpus-1\n"));

    let reparsed = Document::parse(&document.serialize(true, false)).unwrap();
    assert_eq!(reparsed.serialize(true, false), document.serialize(true, false));
    assert_eq!(reparsed.token_count(), 6);
}

#[test]
fn test_sorted_input_is_byte_exact() {
    let sorted = "# sent_id = A1\n# text = Oi.\n1\tOi\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n2\t.\t_\t_\t_\t_\t_\t_\t_\t_\n\n\
                  # sent_id = A2\n# text = Tchau.\n1\tTchau\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n2\t.\t_\t_\t_\t_\t_\t_\t_\t_\n\n";
    let document = Document::parse(sorted).unwrap();
    assert_eq!(document.serialize(true, false), sorted);
}

#[test]
fn test_range_rows_do_not_count() {
    let document = Document::parse(PARSED).unwrap();
    let record = document.get_by_id("S000002").unwrap();
    assert_eq!(record.token_count, 4);
    assert_eq!(record.text, "Gosto disso.");
    assert_eq!(record.token(TokenId::Range(2, 3)).unwrap().form, "disso");
    assert_eq!(document.size_range(), Some((2, 4)));
    assert_eq!(document.count_of_size(2), 1);
}

#[test]
fn test_skeleton_blanks_dependency_fields() {
    let document = Document::parse(PARSED).unwrap();
    let skeleton = document.serialize(false, true);
    assert!(!skeleton.contains("corpus-1"));
    assert!(skeleton.contains("1\tGosto\tgostar\tVERB\t_\tMood=Ind|Number=Sing|Person=1|Tense=Pres|VerbForm=Fin\t_\t_\t_\t_\n"));
}

#[test]
fn test_files_and_duplicates() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.conllu");
    fs::write(&first, PARSED).unwrap();

    let mut document = Document::load_path(&first).unwrap();
    let skipped = document.add_text(PARSED).unwrap();
    assert_eq!(skipped, 2);
    assert_eq!(document.sentence_count(), 2);

    let out = dir.path().join("out.conllu");
    let mut file = fs::File::create(&out).unwrap();
    document.write_to(&mut file, false, false).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("# sent_id = S000001\n"));
    assert_eq!(Document::load_path(&out).unwrap().sentence_count(), 2);
}

#[test]
fn test_malformed_sentence_does_not_abort_load() {
    let text = "# sent_id = S1\n# text = Oi.\n\
                1\tOi\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n2\t.\t_\t_\t_\t_\t_\t_\t_\t_\n\n\
                # sent_id = S2\n# text = Bad\n1\tBad\t_\n\n\
                # sent_id = S3\n# text = Fim.\n\
                1\tFim\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n2\t.\t_\t_\t_\t_\t_\t_\t_\t_\n\n";
    let document = Document::parse(text).unwrap();
    assert_eq!(document.all_ids(), vec!["S1", "S3"]);
    assert_eq!(document.malformed_count(), 1);
    assert_eq!(document.token_count(), 4);
}

#[test]
fn test_malformed_rows_report_line() {
    match Token::parse_line("1\tOi\t_", 3) {
        Err(Error::MalformedInput { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn test_editing_operations() {
    let mut document = Document::parse(PARSED).unwrap();

    let mut extra = SentenceRecord::new("S000003", "Fim.");
    extra.push_token(Token::word(1, "Fim", "SpaceAfter=No"));
    extra.push_token(Token::word(2, ".", "_"));
    document.try_push(extra.clone()).unwrap();
    assert!(matches!(
        document.try_push(extra),
        Err(Error::DuplicateSentenceId(id)) if id == "S000003"
    ));

    assert!(document.set_token_tag("S000002", "3", "L1LEX"));
    assert!(!document.set_token_tag("S000002", "9", "L1LEX"));
    assert!(document.set_token_tag(2usize, "1", "FnoLEX"));
    document.propagate_sentence_tags();
    assert!(!document.is_sentence_tagged(0));
    assert!(document.is_sentence_tagged(1));
    assert!(document.is_sentence_tagged(2));

    let removed = document.remove_by_id("S000001").unwrap();
    assert_eq!(removed.text, "Olá!");
    assert_eq!(document.index_of_id("S000003"), Some(1));
    assert_eq!(document.id_at(0), Some("S000002"));
    assert!(!document.contains_id("S000001"));
}
