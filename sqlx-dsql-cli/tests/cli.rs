use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn sqlx_dsql(args: &[&str], stdin: &str, format_env: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sqlx-dsql"));
    command
        .args(args)
        .env_remove("SQLX_DSQL_FORMAT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(format) = format_env {
        command.env("SQLX_DSQL_FORMAT", format);
    }

    let mut child = command.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn it_splits_stdin() {
    for args in [&["split"][..], &["split", "-"][..]] {
        let output = sqlx_dsql(args, "SELECT 1; SELECT ';';", None);

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            "SELECT 1\n;\n\nSELECT ';'\n"
        );
    }
}

#[test]
fn it_splits_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0001_init.sql");
    std::fs::write(&path, "CREATE TABLE \"a;b\" (id INT);\nSELECT $$;$$;\n").unwrap();

    let output = sqlx_dsql(&["split", "--count", path.to_str().unwrap()], "", None);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n");
}

#[test]
fn it_reads_the_format_from_env() {
    let output = sqlx_dsql(&["split"], "SELECT 1; SELECT 2", Some("json"));

    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, ["SELECT 1", "SELECT 2"]);
}

#[test]
fn it_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sql");

    let output = sqlx_dsql(&["split", path.to_str().unwrap()], "", None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error:"));
    assert!(stderr.contains(&format!("failed to read {}", path.display())));
}
