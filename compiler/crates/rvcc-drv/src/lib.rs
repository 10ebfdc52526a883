//! rvcc-drv — the process entry point: argument handling, file I/O, and
//! wiring `rvcc-lex` → `rvcc-par` → `rvcc-gen` together in source order.
//!
//! spec.md §1 names the driver an "external collaborator", deliberately
//! out of scope for the core's design — this crate is kept intentionally
//! thin and holds no lexing/parsing/codegen logic of its own, only the
//! glue a runnable binary needs: reading the input file, running the
//! three phases in order, and writing (or pretty-printing) whatever the
//! requested `--emit` stage produces.

mod cli;
mod error;

pub use cli::{parse_args, Config, EmitType, Usage};
pub use error::CompileError;

use std::path::{Path, PathBuf};

use rvcc_util::DiagnosticHandler;

/// Runs the full pipeline for `config`, writing assembly (or printing an
/// intermediate `--emit` stage) per spec.md §6's external interface.
/// Returns the first fatal error from any phase; there is no recovery.
pub fn compile(config: &Config) -> Result<(), CompileError> {
    let source = std::fs::read(&config.input).map_err(|source| CompileError::Io {
        path: config.input.clone(),
        source,
    })?;

    let mut diagnostics = DiagnosticHandler::new();

    if config.verbose {
        eprintln!("Lexing...");
    }
    let tokens = rvcc_lex::Lexer::new(&source).tokenize(&mut diagnostics)?;

    if config.emit == EmitType::Tokens {
        for token in &tokens {
            println!("{token}");
        }
        return Ok(());
    }

    if config.verbose {
        eprintln!("Parsing...");
    }
    let program = rvcc_par::Parser::new(&tokens).parse()?;

    if config.emit == EmitType::Ast {
        println!("{program:#?}");
        return Ok(());
    }

    if config.verbose {
        eprintln!("Generating code...");
    }
    let asm = rvcc_gen::generate(&program)?;

    let output_path = output_path_for(config);
    std::fs::write(&output_path, asm).map_err(|source| CompileError::Io {
        path: output_path,
        source,
    })?;

    if config.verbose {
        eprintln!("Wrote {}", output_path.display());
    }

    Ok(())
}

/// The output path for `config`: the explicit `--output`/`-o` path if
/// one was given, otherwise the input path with its extension replaced
/// by `.s` (spec.md's ambient CLI section).
fn output_path_for(config: &Config) -> PathBuf {
    config
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&config.input))
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("s")
}
