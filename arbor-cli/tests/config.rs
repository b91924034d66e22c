use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn root_tag_comes_from_config_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.json");
    fs::write(&input, "{\"a\": \"1\"}").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[markup]
root_tag = "data"
declaration = false
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("--to")
        .arg("markup")
        .arg("--config")
        .arg(&config_path);
    cmd.assert().success().stdout("<data>\n  <a>1</a>\n</data>\n");
}

#[test]
fn working_directory_config_is_picked_up() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.xml");
    fs::write(&input, "<root><a>1</a></root>").unwrap();
    fs::write(dir.path().join("arbor.toml"), "[keyvalue]\nindent = 0\n").unwrap();

    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.current_dir(dir.path()).arg(&input).arg("--to").arg("keyvalue");
    cmd.assert().success().stdout("{\"a\":1}\n");
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.xml");
    fs::write(&input, "<root><a>1</a></root>").unwrap();

    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("--to")
        .arg("keyvalue")
        .arg("--config")
        .arg(dir.path().join("absent.toml"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn log_records_are_appended() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.json");
    let bad = dir.path().join("bad.json");
    let log = dir.path().join("runs.log");
    fs::write(&input, "{\"a\": 1}").unwrap();
    fs::write(&bad, "{\"a\": ").unwrap();

    let mut ok = cargo_bin_cmd!("arbor");
    ok.current_dir(dir.path())
        .arg(&input)
        .arg(dir.path().join("doc.yaml"))
        .arg("--log-file")
        .arg(&log);
    ok.assert().success();

    let mut failing = cargo_bin_cmd!("arbor");
    failing
        .current_dir(dir.path())
        .arg(&bad)
        .arg(dir.path().join("bad.yaml"))
        .arg("--log-file")
        .arg(&log);
    failing.assert().failure().code(1);

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("INFO"));
    assert!(contents.contains("conversion succeeded"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("conversion failed"));
    assert!(contents.find("conversion succeeded") < contents.find("conversion failed"));
}

#[test]
fn default_log_lands_in_working_directory() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.json");
    fs::write(&input, "{\"a\": 1}").unwrap();

    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.current_dir(dir.path()).arg(&input).arg("--to").arg("flow");
    cmd.assert().success();

    assert!(dir.path().join("arbor.log").exists());
}

#[test]
fn no_log_writes_no_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.json");
    fs::write(&input, "{\"a\": 1}").unwrap();

    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.current_dir(dir.path())
        .arg(&input)
        .arg("--to")
        .arg("flow")
        .arg("--no-log");
    cmd.assert().success().stdout("a: 1\n");

    assert!(!dir.path().join("arbor.log").exists());
}
