//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use miette::NamedSource;

use crate::symbols;
use kthx_syntax::diagnostics::FrontendError;
use kthx_syntax::lexer::{self, TokenKind};
use kthx_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Source loading
// ============================================================================

/// Read a source file, with a size guard and user-facing error messages.
fn read_source(file_path: &str) -> CliResult<String> {
    let path = Path::new(file_path);

    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Error reading '{}': {}", file_path, e)))?;
    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Error: '{}' is larger than the {} MB source limit",
            file_path,
            MAX_SOURCE_SIZE / (1024 * 1024)
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading '{}': {}", file_path, e)))
}

/// Render a front-end error with miette's source-context report.
fn render_frontend_error(file_path: &str, source: &str, error: FrontendError) -> CliError {
    let report = miette::Report::new(error)
        .with_source_code(NamedSource::new(file_path, source.to_string()));
    CliError::failure(format!("{:?}", report))
}

// ============================================================================
// Commands
// ============================================================================

/// `--lex`: tokenize only and dump the token table.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    let tokens = lexer::lex(&source).map_err(|e| render_frontend_error(file_path, &source, e))?;

    for token in tokens.iter().filter(|t| !matches!(t.kind, TokenKind::Eof)) {
        println!(
            "{:>4}:{:<4} {:<24} {}",
            token.line,
            token.column,
            token.describe(),
            token.text
        );
    }
    println!(
        "{}: {} tokens",
        file_path,
        tokens.len().saturating_sub(1)
    );
    Ok(ExitCode::SUCCESS)
}

/// `--parse`: tokenize + parse and dump the AST debug form.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    let tokens = lexer::lex(&source).map_err(|e| render_frontend_error(file_path, &source, e))?;
    let program = parser::parse(&tokens).map_err(|e| render_frontend_error(file_path, &source, e))?;

    println!("{:#?}", program);
    Ok(ExitCode::SUCCESS)
}

/// Default action: tokenize, parse, and resolve symbols.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    let tokens = lexer::lex(&source).map_err(|e| render_frontend_error(file_path, &source, e))?;
    let program = parser::parse(&tokens).map_err(|e| render_frontend_error(file_path, &source, e))?;

    let table = symbols::resolve(&program).map_err(|errors| {
        let mut message = String::new();
        for error in errors {
            let report = miette::Report::new(error)
                .with_source_code(NamedSource::new(file_path, source.to_string()));
            message.push_str(&format!("{:?}", report));
        }
        CliError::failure(message.trim_end().to_string())
    })?;

    println!(
        "{}: OK ({} statements, {} variables)",
        file_path,
        program.declarations.len() + program.body.len(),
        table.len()
    );
    Ok(ExitCode::SUCCESS)
}
