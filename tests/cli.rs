use std::io;

use aspark::{ConfigError, GraphError, cli::run_from};

fn run(args: &[&str], stdin: &[u8]) -> Result<String, GraphError> {
    let mut out = Vec::new();
    run_from(
        std::iter::once("aspark").chain(args.iter().copied()),
        stdin,
        &mut out,
    )?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn argument_mode_end_to_end() {
    let out = run(&["--columns", "80", "--rows", "1", "1,2,3"], b"").unwrap();
    assert_eq!(out, "_-`\n");
}

#[test]
fn argument_mode_with_negative_values() {
    let out = run(&["--columns", "80", "--rows", "1", "-3,-2,-1"], b"").unwrap();
    assert_eq!(out, "_-`\n");
}

#[test]
fn stream_mode_end_to_end() {
    let out = run(
        &["--STREAM", "--columns", "80", "--rows", "1"],
        b"  10   foo\nbad line\n20\n",
    )
    .unwrap();
    assert_eq!(out, "_`\n  \nf \no \no \n");
}

#[test]
fn binfreq_wraps_256_samples() {
    let out = run(&["--binfreq", "--columns", "100", "--rows", "1"], b"").unwrap();
    let lines: Vec<&str> = out.lines().collect();
    // per block: glyph row, margin, one row per label digit (0..=99 need two)
    assert_eq!(lines.len(), (1 + 1 + 2) + (1 + 1 + 3) + (1 + 1 + 3));
    assert_eq!(lines[0], "_".repeat(100));
    assert_eq!(lines[4], "_".repeat(100));
    assert_eq!(lines[9], "_".repeat(56));
    assert!(lines[2].starts_with("01234567891111111111"));
    assert_eq!(lines[8].chars().nth(0), Some('0'));
    assert!(lines.iter().all(|l| l.chars().count() <= 100));
}

#[test]
fn txtfreq_counts_letters() {
    let out = run(&["--txtfreq", "--columns", "80", "--rows", "1"], b"zzz").unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], format!("{}`", "_".repeat(57)));
    assert_eq!(lines[2], "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ");
}

#[test]
fn repeated_flags_are_accepted() {
    let out = run(&["--columns", "80", "--rows", "1", "--rows", "2", "1,2,3,4,5,6,7"], b"").unwrap();
    assert_eq!(out, "   _-``\n_-`    \n");
    let out = run(&["--columns", "80", "--log", "--log", "--rows", "1", "1,2,3"], b"").unwrap();
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn missing_data_fails() {
    let err = run(&["--columns", "80"], b"").unwrap_err();
    assert!(matches!(err, GraphError::Config(ConfigError::MissingData)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn data_with_stream_mode_fails() {
    let err = run(&["--stream", "1,2"], b"").unwrap_err();
    assert!(matches!(err, GraphError::Config(ConfigError::UnexpectedData { .. })));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn bad_data_fails_without_output() {
    let mut out = Vec::new();
    let err = run_from(["aspark", "--columns", "80", "1,abc,3"], io::empty(), &mut out).unwrap_err();
    assert!(matches!(err, GraphError::Data(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
}

#[test]
fn unknown_flag_fails() {
    let err = run(&["--stream", "--bogus"], b"").unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn second_positional_fails() {
    let err = run(&["1,2", "3,4"], b"").unwrap_err();
    assert!(matches!(err, GraphError::Cli(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn zero_rows_fails() {
    let err = run(&["--columns", "80", "--rows", "0", "1"], b"").unwrap_err();
    assert!(matches!(err, GraphError::Config(ConfigError::Zero("rows"))));
}

#[test]
fn help_exits_zero() {
    for flag in ["--help", "--HELP"] {
        let err = run(&[flag], b"").unwrap_err();
        assert_eq!(err.exit_code(), 0);
    }
}
