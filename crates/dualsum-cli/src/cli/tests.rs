use super::*;
use std::fs;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_two_paths() {
    let cli = parse(&["dualsum", "/path/to/a.bin", "b.bin"]);
    assert_eq!(cli.first, PathBuf::from("/path/to/a.bin"));
    assert_eq!(cli.second, PathBuf::from("b.bin"));
    assert!(cli.extra.is_empty());
}

#[test]
fn cli_parse_keeps_order() {
    let cli = parse(&["dualsum", "b", "a"]);
    assert_eq!(cli.pair(), DigestPair::new("b", "a"));
}

#[test]
fn cli_parse_same_path_twice() {
    let cli = parse(&["dualsum", "x", "x"]);
    assert_eq!(cli.first, cli.second);
}

#[test]
fn cli_parse_ignores_extra_arguments() {
    let cli = parse(&["dualsum", "a", "b", "c", "--flag-like", "-x"]);
    assert_eq!(cli.pair(), DigestPair::new("a", "b"));
    assert_eq!(cli.extra.len(), 3);
}

#[test]
fn cli_parse_missing_second_path_fails() {
    assert!(Cli::try_parse_from(["dualsum", "a"]).is_err());
}

#[test]
fn cli_parse_missing_both_paths_fails() {
    assert!(Cli::try_parse_from(["dualsum"]).is_err());
}

#[test]
fn cli_run_writes_two_lines() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, "a").unwrap();
    fs::write(&b, "").unwrap();

    let cli = Cli::try_parse_from([
        OsString::from("dualsum"),
        a.into_os_string(),
        b.into_os_string(),
    ])
    .unwrap();
    let mut out = Vec::new();
    cli.run(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0cc175b9c0f1b6a831c399e269772661\nd41d8cd98f00b204e9800998ecf8427e\n"
    );
}

#[test]
fn cli_run_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let cli = Cli {
        first: missing.clone(),
        second: missing.clone(),
        extra: Vec::new(),
    };
    let mut out = Vec::new();
    let err = cli.run(&mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(format!("{:#}", err).contains(&missing.display().to_string()));
}

#[test]
fn cli_parse_leading_hyphen_paths() {
    let cli = parse(&["dualsum", "-a", "--b"]);
    assert_eq!(cli.pair(), DigestPair::new("-a", "--b"));
    assert!(cli.extra.is_empty());
}

#[test]
fn cli_parse_hyphen_first_extra_argument() {
    let cli = parse(&["dualsum", "a", "b", "--flag", "-x"]);
    assert_eq!(cli.pair(), DigestPair::new("a", "b"));
    assert_eq!(
        cli.extra,
        vec![OsString::from("--flag"), OsString::from("-x")]
    );
}

#[test]
fn cli_parse_help_still_recognised() {
    let err = Cli::try_parse_from(["dualsum", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let cfg = config_or_default(Err(anyhow::anyhow!("parse config: unknown field")));
    assert_eq!(cfg, DualsumConfig::default());

    let custom = DualsumConfig {
        log_filter: Some("debug".to_string()),
    };
    assert_eq!(config_or_default(Ok(custom.clone())), custom);
}
