use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

fn cmd() -> Command {
    Command::cargo_bin("omnivore-export").unwrap()
}

#[test]
fn convert_writes_csv_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("nodes-id-url.json"),
        r#"[
            {"id": "a", "url": "https://example.com/a"},
            {"id": "b", "url": "https://example.com/b"}
        ]"#,
    )
    .unwrap();

    cmd().current_dir(dir.path()).arg("convert").assert().success();

    let csv = fs::read_to_string(dir.path().join("nodes-id-url.csv")).unwrap();
    assert_eq!(
        csv,
        "id,url\na,https://example.com/a\nb,https://example.com/b\n"
    );
}

#[test]
fn convert_without_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("convert")
        .assert()
        .failure()
        .stderr(contains("nodes-id-url.json"));
}

#[test]
fn fetch_requires_an_api_key() {
    cmd()
        .env_remove("OMNIVORE_API_KEY")
        .arg("fetch")
        .assert()
        .failure()
        .stderr(contains("--apikey"));
}
