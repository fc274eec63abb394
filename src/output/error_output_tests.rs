use std::path::PathBuf;

use crate::error::SourceRole;

use super::*;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

fn render(out: &ErrorOutput, err: &CommentCheckerError) -> String {
    let mut buf = Vec::new();
    out.write_report(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Format", "bad record", None, None);
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(result, "✖ Format: bad record\n");
}

#[test]
fn error_without_colors_full() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "SourceNotFound",
        "Syntax table not found: a.csv",
        Some("No such file or directory"),
        Some("check the path"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "✖ SourceNotFound: Syntax table not found: a.csv\n  × No such file or directory\n  help: check the path\n"
    );
}

#[test]
fn error_with_colors_has_escape_codes() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Format", "bad record", Some("detail"), Some("fix it"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b[1m\x1b[31m✖ Format:\x1b[0m bad record"));
    assert!(result.contains("\x1b[2m× detail\x1b[0m"));
    assert!(result.contains("\x1b[36mhelp:\x1b[0m fix it"));
}

#[test]
fn report_includes_io_source_as_detail() {
    let err = CommentCheckerError::SourceNotFound {
        role: SourceRole::InputFile,
        path: PathBuf::from("not_in_folder.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let result = render(&make_output(false), &err);

    assert!(result.starts_with("✖ SourceNotFound: Input file not found: not_in_folder.py\n"));
    assert!(result.contains("  × no such file\n"));
    assert!(result.contains("  help: "));
}

#[test]
fn report_for_unsupported_extension() {
    let err = CommentCheckerError::unsupported(".JaVa");
    let result = render(&make_output(false), &err);

    assert!(result.contains("✖ UnsupportedExtension: Unsupported file extension: '.JaVa'"));
    assert!(!result.contains('×'));
}
