//! CLI integration tests: file input, file output, emit modes, config.

use std::ffi::OsStr;
use std::io::Write;
use std::process::Command;

use clap::Parser;
use tempfile::{tempdir, NamedTempFile};
use waml::cli::{self, Args, CliError};

fn source_file(src: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{src}").unwrap();
    file
}

#[test]
fn compiles_file_to_outfile() {
    let input = source_file("Constant Freq { value: 440 } export");
    let dir = tempdir().unwrap();
    let outfile = dir.path().join("out.js");

    let args = Args::try_parse_from([
        OsStr::new("waml"),
        input.path().as_os_str(),
        OsStr::new("-o"),
        outfile.as_os_str(),
    ])
    .unwrap();
    let (config, _) = cli::load_config(&args).unwrap();
    cli::run(&args, &config).unwrap();

    let js = std::fs::read_to_string(&outfile).unwrap();
    assert!(js.starts_with("(function(){\n"));
    assert!(js.contains("var Freq=440;\n"));
    assert!(js.ends_with("})();\n"));
}

#[test]
fn emits_ast_json() {
    let input = source_file("Oscillator lead { frequency: 220 } export");
    let dir = tempdir().unwrap();
    let outfile = dir.path().join("ast.json");

    let args = Args::try_parse_from([
        OsStr::new("waml"),
        input.path().as_os_str(),
        OsStr::new("--outfile"),
        outfile.as_os_str(),
        OsStr::new("--emit"),
        OsStr::new("ast"),
    ])
    .unwrap();
    cli::run(&args, &Default::default()).unwrap();

    let ast: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&outfile).unwrap()).unwrap();
    assert_eq!(ast["definitions"][0]["name"], "lead");
    assert_eq!(ast["definitions"][0]["exported"], true);
}

#[test]
fn config_file_sets_context() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "context: ctx\nlogging:\n  enabled: false").unwrap();
    let input = source_file("Oscillator o {}");
    let dir = tempdir().unwrap();
    let outfile = dir.path().join("out.js");

    let args = Args::try_parse_from([
        OsStr::new("waml"),
        input.path().as_os_str(),
        OsStr::new("-o"),
        outfile.as_os_str(),
        OsStr::new("--config"),
        config_file.path().as_os_str(),
    ])
    .unwrap();
    let (config, warning) = cli::load_config(&args).unwrap();
    assert!(warning.is_none());
    assert!(!config.logging.enabled);
    cli::run(&args, &config).unwrap();

    let js = std::fs::read_to_string(&outfile).unwrap();
    assert!(js.contains("var o=ctx.createOscillator();\n"));
}

#[test]
fn missing_config_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    let args = Args::try_parse_from([
        OsStr::new("waml"),
        OsStr::new("--config"),
        missing.as_os_str(),
    ])
    .unwrap();
    let err = cli::load_config(&args).unwrap_err();
    assert!(matches!(err, CliError::Config { .. }));
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn missing_input_file_is_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.waml");
    let err = cli::read_source(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}

#[test]
fn compile_error_leaves_no_outfile() {
    let input = source_file("Oscillator A {} Oscillator A {}");
    let dir = tempdir().unwrap();
    let outfile = dir.path().join("out.js");

    let args = Args::try_parse_from([
        OsStr::new("waml"),
        input.path().as_os_str(),
        OsStr::new("-o"),
        outfile.as_os_str(),
    ])
    .unwrap();
    let err = cli::run(&args, &Default::default()).unwrap_err();
    assert!(err.to_string().contains("AlreadyDefined"));
    assert!(!outfile.exists());
}

#[test]
fn binary_reports_failure_with_logging_disabled() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "logging:\n  enabled: false\n  colorize: false").unwrap();
    let input = source_file("Oscillator {} export");

    let output = Command::new(env!("CARGO_BIN_EXE_waml"))
        .arg("--config")
        .arg(config_file.path())
        .arg(input.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AnonymousExport"), "stderr was: {stderr}");
}

#[test]
fn binary_quiet_on_success_with_logging_disabled() {
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "logging:\n  enabled: false").unwrap();
    let input = source_file("Oscillator o {}");

    let output = Command::new(env!("CARGO_BIN_EXE_waml"))
        .arg("--config")
        .arg(config_file.path())
        .arg(input.path())
        .env("RUST_LOG", "trace")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("var o=audioCtx.createOscillator();"));
}
