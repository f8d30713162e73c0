use std::io::{BufRead, Write};

use tally_diagnostic::prelude::*;
use tally_frontend::ast::Expr;

use crate::diagnostics::DiagnosticEmitter;
use crate::{CliError, CliResult};

pub const PROMPT: &str = ">> ";

const STDIN_NAME: &str = "<stdin>";

/// Parses each line of `input` on its own and prints the result.
///
/// Lines that fail to parse are reported through `diagnostics` and skipped.
/// Returns the number of such lines.
pub fn run_repl<D: DiagnosticEmitter>(
    mut input: impl BufRead,
    mut output: impl Write,
    diagnostics: &mut D,
    prompt: Option<&str>,
) -> CliResult<usize> {
    let mut line = String::new();
    let mut line_num = 0;
    let mut failed = 0;

    loop {
        if let Some(prompt) = prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        line_num += 1;

        let text = line.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            continue;
        }

        match tally_frontend::parse(text) {
            Ok(expr) => write_expr(&mut output, expr.as_ref())?,
            Err(err) => {
                failed += 1;

                let source = Source::new(STDIN_NAME, text).with_line_offset(line_num - 1);
                diagnostics.emit_diagnostic(err.into_diagnostic(&()), &source)?;
            }
        }
    }

    Ok(failed)
}

/// Parses a whole source as one input.
pub fn parse_source<D: DiagnosticEmitter>(
    name: &str,
    text: &str,
    show_tokens: bool,
    output: &mut impl Write,
    diagnostics: &mut D,
) -> CliResult<()> {
    if show_tokens {
        for token in tally_frontend::tokenize(text) {
            writeln!(output, "{token}")?;
        }
    }

    match tally_frontend::parse(text) {
        Ok(expr) => {
            write_expr(output, expr.as_ref())?;
            Ok(())
        }

        Err(err) => {
            let source = Source::new(name, text);
            diagnostics.emit_diagnostic(err.into_diagnostic(&()), &source)?;

            Err(CliError::HadErrors)
        }
    }
}

// an input with no expression still gets its (empty) line
fn write_expr(output: &mut impl Write, expr: Option<&Expr>) -> std::io::Result<()> {
    match expr {
        Some(expr) => writeln!(output, "{expr}"),
        None => writeln!(output),
    }
}
