//! Command-line front-end: argument parsing, input and output.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::info;

use crate::codegen::GeneratorOptions;
use crate::config::{Config, ConfigError};
use crate::dsl::{CompileError, Compiler};

#[derive(Parser, Debug)]
#[command(name = "waml")]
#[command(version, about = "Compile Web Audio Markup Language into JavaScript")]
pub struct Args {
    /// Source file; reads standard input when omitted
    pub input: Option<PathBuf>,

    /// Write output to this file instead of standard output
    #[arg(short = 'o', long = "outfile")]
    pub outfile: Option<PathBuf>,

    /// What to emit
    #[arg(long, value_enum, default_value_t = Emit::Js)]
    pub emit: Emit,

    /// Configuration file (defaults to ~/.waml/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Generated JavaScript
    Js,
    /// Classified tokens as JSON
    Tokens,
    /// Parsed program as JSON
    Ast,
}

#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed
    Io(io::Error),

    /// The source did not compile
    Compile(CompileError),

    /// The configuration file could not be loaded
    Config { path: PathBuf, source: ConfigError },

    /// JSON output could not be produced
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Compile(e) => write!(f, "compiler error: {e}"),
            CliError::Config { path, source } => {
                write!(f, "config error in {}: {source}", path.display())
            }
            CliError::Serialize(e) => write!(f, "serialization error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Compile(e) => Some(e),
            CliError::Config { source, .. } => Some(source),
            CliError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<CompileError> for CliError {
    fn from(err: CompileError) -> Self {
        CliError::Compile(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialize(err)
    }
}

pub type CliResult<T> = Result<T, CliError>;

/// Resolve the configuration for `args`.
///
/// The second value is a problem with the default config file, returned
/// instead of failing so it can be logged once logging is set up.
pub fn load_config(args: &Args) -> CliResult<(Config, Option<CliError>)> {
    resolve_config(args.config.as_deref(), Config::default_path())
}

/// An explicit path must load. The default path may be missing, and a
/// broken default file falls back to defaults.
pub fn resolve_config(
    explicit: Option<&Path>,
    default: Option<PathBuf>,
) -> CliResult<(Config, Option<CliError>)> {
    if let Some(path) = explicit {
        let config = Config::from_file(path).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok((config, None));
    }

    let Some(path) = default else {
        return Ok((Config::default(), None));
    };
    match Config::load_optional(&path) {
        Ok(config) => Ok((config.unwrap_or_default(), None)),
        Err(source) => Ok((Config::default(), Some(CliError::Config { path, source }))),
    }
}

pub fn run(args: &Args, config: &Config) -> CliResult<()> {
    let source = read_source(args.input.as_deref())?;
    let output = render(&source, args.emit, &config.generator_options())?;
    write_output(args.outfile.as_deref(), &output)
}

/// Produce the requested output for one source text.
pub fn render(source: &str, emit: Emit, options: &GeneratorOptions) -> CliResult<String> {
    let output = match emit {
        Emit::Js => Compiler::compile_with(source, options)?,
        Emit::Tokens => serde_json::to_string_pretty(&Compiler::tokenize(source))?,
        Emit::Ast => serde_json::to_string_pretty(&Compiler::parse_with(source, options)?)?,
    };
    Ok(output)
}

pub fn read_source(input: Option<&Path>) -> CliResult<String> {
    match input {
        Some(path) => {
            info!("compiling file {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            info!("awaiting data from stdin");
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

pub fn write_output(outfile: Option<&Path>, output: &str) -> CliResult<()> {
    match outfile {
        Some(path) => {
            std::fs::write(path, output)?;
            info!("wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_defaults() {
        let args = Args::try_parse_from(["waml"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.outfile.is_none());
        assert_eq!(args.emit, Emit::Js);
        assert!(args.config.is_none());
    }

    #[test]
    fn parse_args_full() {
        let args = Args::try_parse_from([
            "waml",
            "song.waml",
            "-o",
            "song.js",
            "--emit",
            "ast",
            "--config",
            "cfg.yaml",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("song.waml")));
        assert_eq!(args.outfile, Some(PathBuf::from("song.js")));
        assert_eq!(args.emit, Emit::Ast);
        assert_eq!(args.config, Some(PathBuf::from("cfg.yaml")));
    }

    #[test]
    fn parse_args_rejects_unknown_emit() {
        assert!(Args::try_parse_from(["waml", "--emit", "wasm"]).is_err());
    }

    #[test]
    fn broken_default_config_falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "context: [").unwrap();

        let (config, warning) = resolve_config(None, Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());
        match warning {
            Some(CliError::Config { path: reported, source: ConfigError::Yaml(_) }) => {
                assert_eq!(reported, path)
            }
            other => panic!("expected YAML config warning, got {other:?}"),
        }
    }

    #[test]
    fn broken_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "context: [").unwrap();

        let err = resolve_config(Some(path.as_path()), None).unwrap_err();
        assert!(matches!(err, CliError::Config { source: ConfigError::Yaml(_), .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_default_config_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warning) = resolve_config(None, Some(dir.path().join("none.yaml"))).unwrap();
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
        let (_, warning) = resolve_config(None, None).unwrap();
        assert!(warning.is_none());
    }

    #[test]
    fn render_tokens_as_json() {
        let out = render("Constant c", Emit::Tokens, &GeneratorOptions::default()).unwrap();
        let tokens: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(tokens[0]["kind"], "Class");
        assert_eq!(tokens[1]["text"], "c");
    }

    #[test]
    fn render_ast_as_json() {
        let out = render(
            "Constant c { value: 1 } export",
            Emit::Ast,
            &GeneratorOptions::default(),
        )
        .unwrap();
        let ast: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(ast["definitions"][0]["name"], "c");
        assert_eq!(ast["definitions"][0]["exported"], true);
    }

    #[test]
    fn render_compile_error() {
        let err = render("Constant { value: x }", Emit::Js, &GeneratorOptions::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Compile(_)));
        assert!(err.to_string().contains("UndefinedReference"));
    }
}
