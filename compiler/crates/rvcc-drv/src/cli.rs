//! Hand-rolled argument parsing.
//!
//! This is a two-argument tool (an input path and an optional output path),
//! not a multi-command CLI, so there is no argument-parsing dependency —
//! `std::env::args()` is read directly, matching spec.md's "Configuration /
//! CLI (ambient)" section.

use std::path::PathBuf;

use anyhow::{bail, Context};

/// What stage of the pipeline to stop at and print, instead of writing the
/// final assembly file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitType {
    Tokens,
    Ast,
    Asm,
}

impl EmitType {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "tokens" => Ok(EmitType::Tokens),
            "ast" => Ok(EmitType::Ast),
            "asm" => Ok(EmitType::Asm),
            other => bail!("unrecognized --emit value '{other}' (expected tokens|ast|asm)"),
        }
    }
}

impl Default for EmitType {
    fn default() -> Self {
        EmitType::Asm
    }
}

/// Parsed command-line configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub emit: EmitType,
    pub verbose: bool,
}

/// The program's usage text, printed on `-h`/`--help` or a malformed
/// invocation.
pub struct Usage;

impl std::fmt::Display for Usage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "usage: rvcc [-o OUTPUT] [--emit tokens|ast|asm] [-v] INPUT\n\n\
             compiles INPUT to RV32 assembly text.\n\n\
             options:\n  \
             -o, --output PATH    write output to PATH (default: INPUT with its extension replaced by .s)\n  \
             --emit STAGE         stop after STAGE and print it instead of writing assembly (tokens|ast|asm)\n  \
             -v, --verbose        echo each phase transition to stderr\n  \
             -h, --help           print this message"
        )
    }
}

/// Parses `args` (typically `std::env::args().skip(1)`) into a [`Config`].
pub fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Config> {
    let mut input = None;
    let mut output = None;
    let mut emit = EmitType::default();
    let mut verbose = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => bail!("{}", Usage),
            "-v" | "--verbose" => verbose = true,
            "-o" | "--output" => {
                let path = args.next().context("-o/--output requires a path")?;
                output = Some(PathBuf::from(path));
            }
            "--emit" => {
                let value = args.next().context("--emit requires a value")?;
                emit = EmitType::parse(&value)?;
            }
            other if other.starts_with('-') && other != "-" => {
                bail!("unrecognized option '{other}'\n\n{Usage}");
            }
            other => {
                if input.is_some() {
                    bail!("unexpected extra argument '{other}'\n\n{Usage}");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let input = input.with_context(|| format!("missing input path\n\n{Usage}"))?;

    Ok(Config {
        input,
        output,
        emit,
        verbose,
    })
}
