use super::Cli;
use clap::{CommandFactory, Parser};
use std::path::Path;

#[test]
fn cli_help_lists_positionals_and_flags() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("<CWL_FILE>"));
    assert!(help.contains("<ALGORITHM_NAME>"));
    assert!(help.contains("--docker-uri"));
    assert!(help.contains("--remote-cwl-uri"));
}

#[test]
fn cli_parses_positionals_with_defaults() {
    let cli = Cli::try_parse_from(["cwl-to-hysds", "file:///work/ndvi.cwl", "ndvi"])
        .expect("positionals must parse");
    assert_eq!(cli.cwl_file, "file:///work/ndvi.cwl");
    assert_eq!(cli.algorithm_name, "ndvi");
    assert_eq!(cli.docker_uri, "");
    assert_eq!(cli.log_level, "info");
    assert!(cli.config.is_none());
    assert!(cli.output_dir.is_none());
    assert!(cli.remote_cwl_uri.is_none());
}

#[test]
fn cli_parses_all_flags() {
    let cli = Cli::try_parse_from([
        "cwl-to-hysds",
        "ndvi.cwl",
        "ndvi",
        "--docker-uri",
        "s3://bucket/ndvi.tar",
        "--config",
        "converter.yaml",
        "--output-dir",
        "out",
        "--remote-cwl-uri",
        "https://repo.example.org/ndvi.cwl",
        "--log-level",
        "debug",
    ])
    .expect("flags must parse");
    assert_eq!(cli.docker_uri, "s3://bucket/ndvi.tar");
    assert_eq!(cli.config.as_deref(), Some(Path::new("converter.yaml")));
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("out")));
    assert_eq!(
        cli.remote_cwl_uri.as_deref(),
        Some("https://repo.example.org/ndvi.cwl")
    );
    assert_eq!(cli.log_level, "debug");
}

#[test]
fn cli_rejects_missing_algorithm_name() {
    let err = Cli::try_parse_from(["cwl-to-hysds", "ndvi.cwl"]).expect_err("must fail");
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}
