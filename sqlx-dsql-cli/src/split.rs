use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::Context;
use sqlx_dsql::split_statements;

use crate::opt::{Format, SplitArgs};

pub fn run(args: &SplitArgs) -> anyhow::Result<()> {
    let sql = read_input(args.input.as_deref(), io::stdin().lock())?;
    let statements = split_statements(&sql);
    tracing::info!("found {} statement(s)", statements.len());

    let mut stdout = io::stdout().lock();
    write_statements(&mut stdout, &statements, args.format, args.count)?;
    stdout.flush()?;

    Ok(())
}

/// Reads the script from `path`, or from `stdin` when no path or `-` is given.
fn read_input<R>(path: Option<&Path>, mut stdin: R) -> anyhow::Result<String>
where
    R: Read,
{
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut sql = String::new();
            stdin
                .read_to_string(&mut sql)
                .context("failed to read stdin")?;
            Ok(sql)
        }
    }
}

fn write_statements<W>(
    out: &mut W,
    statements: &[&str],
    format: Format,
    count: bool,
) -> anyhow::Result<()>
where
    W: Write,
{
    if count {
        writeln!(out, "{}", statements.len())?;
        return Ok(());
    }

    match format {
        // The terminator goes on its own line so that a trailing line comment cannot swallow it.
        // The last statement gets none, as an unterminated quote in it would.
        Format::Lines => {
            for (i, statement) in statements.iter().enumerate() {
                if i > 0 {
                    writeln!(out, ";\n")?;
                }
                writeln!(out, "{statement}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, statements)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::Path};

    use sqlx_dsql::split_statements;

    use super::{read_input, write_statements};
    use crate::opt::Format;

    fn render(statements: &[&str], format: Format, count: bool) -> String {
        let mut out = Vec::new();
        write_statements(&mut out, statements, format, count).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lines_output() {
        let output = render(&["SELECT 1", "SELECT ';'"], Format::Lines, false);
        assert_eq!(output, "SELECT 1\n;\n\nSELECT ';'\n");
    }

    #[test]
    fn test_lines_output_splits_back() {
        let sql = "SELECT 1 -- trailing note\n; SELECT 2; SELECT 'open";
        let statements = split_statements(sql);
        let output = render(&statements, Format::Lines, false);

        assert_eq!(
            output,
            "SELECT 1 -- trailing note\n;\n\nSELECT 2\n;\n\nSELECT 'open\n"
        );
        assert_eq!(split_statements(&output), statements);
    }

    #[test]
    fn test_json_output() {
        let output = render(&["SELECT \"a;b\"", "SELECT 2"], Format::Json, false);
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, ["SELECT \"a;b\"", "SELECT 2"]);
    }

    #[test]
    fn test_count_output() {
        assert_eq!(render(&["SELECT 1", "SELECT 2"], Format::Json, true), "2\n");
        assert_eq!(render(&[], Format::Lines, true), "0\n");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"SELECT 1; SELECT 2;").unwrap();

        let sql = read_input(Some(file.path()), "ignored".as_bytes()).unwrap();
        assert_eq!(sql, "SELECT 1; SELECT 2;");
    }

    #[test]
    fn test_read_input_from_stdin() {
        let sql = read_input(None, "SELECT 1;".as_bytes()).unwrap();
        assert_eq!(sql, "SELECT 1;");

        let sql = read_input(Some(Path::new("-")), "SELECT 2;".as_bytes()).unwrap();
        assert_eq!(sql, "SELECT 2;");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");

        let err = read_input(Some(&path), "SELECT 1;".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), format!("failed to read {}", path.display()));
    }
}
