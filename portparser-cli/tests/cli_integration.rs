//! Integration tests for the portparser CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn portparser() -> Command {
    let mut cmd = Command::cargo_bin("portparser").unwrap();
    cmd.env_remove("PORTPARSER_LEXICON")
        .env_remove("PORTPARSER_MODEL_CMD");
    cmd
}

#[test]
fn test_help_command() {
    portparser()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sentences"))
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("postprocess"));
}

#[test]
fn test_sentences_text_output() {
    portparser()
        .arg("sentences")
        .arg("-i")
        .arg(fixture_path("noticia.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("O Sr. Silva chegou às dez horas.\n"))
        .stdout(predicate::str::contains(
            "Ele trouxe documentos, fotos etc. A reunião durou duas horas!\n",
        ))
        .stdout(predicate::str::contains("Ninguém respondeu.\n"));
}

#[test]
fn test_sentences_json_output() {
    portparser()
        .arg("sentences")
        .arg("-i")
        .arg(fixture_path("noticia.txt"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\""))
        .stdout(predicate::str::contains("\"index\": 2"));
}

#[test]
fn test_sentences_glob_pattern() {
    portparser()
        .arg("sentences")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Olá, mundo!"))
        .stdout(predicate::str::contains("Ninguém respondeu."));
}

#[test]
fn test_sentences_invalid_file() {
    portparser()
        .arg("sentences")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_tokenize_to_stdout() {
    portparser()
        .arg("tokenize")
        .arg("-i")
        .arg(fixture_path("frases.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("# sent_id = S000001\n# text = O livro do menino.\n"))
        .stdout(predicate::str::contains("3-4\tdo\t_"))
        .stdout(predicate::str::contains("# sent_id = S000002\n"))
        .stdout(predicate::str::contains("1\tOlá\t_\t_\t_\t_\t_\t_\t_\tSpaceAfter=No\n"));
}

#[test]
fn test_tokenize_itemize_prompts() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("itens.txt");
    fs::write(&input, "Hoje: b) o prazo termina.\n").unwrap();

    portparser()
        .arg("tokenize")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\tb)\t"));

    portparser()
        .arg("tokenize")
        .arg("-i")
        .arg(&input)
        .arg("--no-preserve")
        .arg("-s")
        .arg("T100")
        .assert()
        .success()
        .stdout(predicate::str::contains("# sent_id = T101\n"))
        .stdout(predicate::str::contains("\tb)\t").not());
}

#[test]
fn test_postprocess_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("corrigido.conllu");

    portparser()
        .arg("postprocess")
        .arg("-i")
        .arg(fixture_path("parsed.conllu"))
        .arg("-o")
        .arg(&output)
        .arg("--lexicon")
        .arg(fixture_path("lexicon.tsv"))
        .assert()
        .success();

    let corrected = fs::read_to_string(&output).unwrap();
    assert!(corrected.contains("2\tviajou\tviajar\tVERB\t"));
    assert!(corrected.contains("5\tsábado\tsábado\tNOUN\t_\tGender=Masc|Number=Sing\t"));
    assert!(corrected.contains("3-4\tno\t_\t_\t_\t_\t_\t_\t_\t_\n"));

    let report = fs::read_to_string(temp_dir.path().join("corrigido.conllu.rep.tsv")).unwrap();
    assert!(report.contains("S000001\t5\tsábado\tFdaysW\t_\tGender=Masc|Number=Sing\n"));
    assert!(report.contains("FdaysW   - fixed: 1\n"));
    assert!(report.contains("Lchanged - fixed: 1\n"));
}

#[test]
fn test_postprocess_flags_conflict() {
    portparser()
        .arg("postprocess")
        .arg("-i")
        .arg(fixture_path("parsed.conllu"))
        .arg("-o")
        .arg("out.conllu")
        .arg("--lexicon")
        .arg(fixture_path("lexicon.tsv"))
        .arg("--lemma-only")
        .arg("--feats-only")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_postprocess_requires_lexicon() {
    portparser()
        .arg("postprocess")
        .arg("-i")
        .arg(fixture_path("parsed.conllu"))
        .arg("-o")
        .arg("out.conllu")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--lexicon"));
}

#[cfg(unix)]
#[test]
fn test_parse_through_external_command() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("parsed.conllu");

    portparser()
        .arg("parse")
        .arg("-i")
        .arg(fixture_path("noticia.txt"))
        .arg("-o")
        .arg(&output)
        .arg("--lexicon")
        .arg(fixture_path("lexicon.tsv"))
        .arg("--model-cmd")
        .arg("cp {input} {output}")
        .arg("--segment")
        .assert()
        .success();

    let parsed = fs::read_to_string(&output).unwrap();
    assert!(parsed.contains("# sent_id = S000003\n# text = Ninguém respondeu.\n"));
}

#[cfg(unix)]
#[test]
fn test_parse_failing_model() {
    let temp_dir = TempDir::new().unwrap();

    portparser()
        .arg("parse")
        .arg("-i")
        .arg(fixture_path("frases.txt"))
        .arg("-o")
        .arg(temp_dir.path().join("parsed.conllu"))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.tsv"))
        .arg("--model-cmd")
        .arg("false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("External tool 'false' failed"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("portparser.toml");

    portparser()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration template generated"));

    portparser()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[tokenizer]\nsid_model = \"\"\n").unwrap();

    portparser()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"));
}

#[test]
fn test_sentences_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("portparser.toml");
    fs::write(&config, "[segmenter]\nreplace = false\n").unwrap();

    portparser()
        .arg("sentences")
        .arg("-i")
        .arg(fixture_path("frases.txt"))
        .arg("-c")
        .arg(&config)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("O livro do menino.\nOlá, mundo!\n"));
}
