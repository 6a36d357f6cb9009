#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;

#[test]
fn selects_input_from_args() {
    assert_eq!(
        InputSource::from_args(Some(Path::new("a.c")), false),
        InputSource::Path(PathBuf::from("a.c"))
    );
    assert_eq!(
        InputSource::from_args(Some(Path::new("-")), false),
        InputSource::Stdin
    );
    assert_eq!(InputSource::from_args(None, false), InputSource::Stdin);
    assert_eq!(InputSource::from_args(None, true), InputSource::Sample);
}

#[test]
fn sample_loads_builtin_program() {
    let source = InputSource::Sample.load().ok();
    assert_eq!(source.map(|s| s.text), Some(SAMPLE_SOURCE.to_string()));
}

#[test]
fn reads_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "int x = 1;").unwrap();
    let source = InputSource::Path(file.path().to_path_buf()).load().unwrap();
    assert_eq!(source.text, "int x = 1;\n");
    assert_eq!(source.name, file.path().display().to_string());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.c");
    let err = InputSource::Path(path).load().unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().contains("missing.c"), "{err}");
}

#[test]
fn blank_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"  \n\t\n").unwrap();
    let err = InputSource::Path(file.path().to_path_buf()).load().unwrap_err();
    assert!(matches!(err, CliError::EmptySource));
    assert_eq!(err.to_string(), "no code to analyze");
}
