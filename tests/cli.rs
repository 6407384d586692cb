use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn normalize_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("review-wordlist");
    cmd.arg("normalize").write_stdin("<p>Hello <b>World</b></p>");
    cmd.assert().success().stdout("[\"hello\",\"world\"]\n");
}

#[test]
fn normalize_removes_english_stopwords() {
    let mut cmd = cargo_bin_cmd!("review-wordlist");
    cmd.arg("normalize")
        .arg("--remove-stopwords")
        .write_stdin("The cat sat on the mat");
    cmd.assert().success().stdout("[\"cat\",\"sat\",\"mat\"]\n");
}

#[test]
fn custom_stopword_file_replaces_english_list() {
    let dir = tempfile::tempdir().unwrap();
    let stops = dir.path().join("stops.txt");
    fs::write(&stops, "# tiny list\ncat\n").unwrap();

    let mut cmd = cargo_bin_cmd!("review-wordlist");
    cmd.arg("--stopwords")
        .arg(&stops)
        .arg("normalize")
        .arg("-r")
        .write_stdin("The cat sat");
    cmd.assert()
        .success()
        .stdout("[\"the\",\"sat\"]\n")
        .stderr(predicate::str::contains("Loaded 1 stopwords"));
}

#[test]
fn empty_stopword_file_warns_and_keeps_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let stops = dir.path().join("empty.txt");
    fs::write(&stops, "# nothing\n").unwrap();

    let mut cmd = cargo_bin_cmd!("review-wordlist");
    cmd.arg("--stopwords")
        .arg(&stops)
        .arg("normalize")
        .arg("-r")
        .write_stdin("The cat");
    cmd.assert()
        .success()
        .stdout("[\"the\",\"cat\"]\n")
        .stderr(predicate::str::contains("holds no stopwords"));
}

#[test]
fn missing_stopword_file_fails() {
    let mut cmd = cargo_bin_cmd!("review-wordlist");
    cmd.arg("--stopwords")
        .arg("/nonexistent/stops.txt")
        .arg("normalize")
        .write_stdin("anything");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading stopwords"));
}

#[test]
fn corpus_writes_one_json_line_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("reviews.txt");
    let output = dir.path().join("words.jsonl");
    fs::write(&input, "A <i>great</i> film!\n\n1234\nWorst. Movie. Ever.\n").unwrap();

    let mut cmd = cargo_bin_cmd!("review-wordlist");
    cmd.arg("corpus").arg(&input).arg("-o").arg(&output);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Normalized 4 documents into 6 tokens"));

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        [
            r#"["a","great","film"]"#,
            "[]",
            "[]",
            r#"["worst","movie","ever"]"#,
        ]
    );
}
