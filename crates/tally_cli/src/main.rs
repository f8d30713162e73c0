mod cli;
mod diagnostics;
mod driver;

use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};

use crate::diagnostics::PrettyDiagnosticEmitter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("errors while parsing")]
    HadErrors,
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let mut diagnostics = PrettyDiagnosticEmitter::stderr(cli.color.into());

    match cli.command.unwrap_or(Command::Repl { no_prompt: false }) {
        Command::Repl { no_prompt } => {
            let prompt = (!no_prompt).then_some(driver::PROMPT);

            // a bad line is reported and skipped, it never fails the session
            driver::run_repl(
                std::io::stdin().lock(),
                std::io::stdout().lock(),
                &mut diagnostics,
                prompt,
            )?;

            Ok(())
        }

        Command::Parse {
            input,
            file,
            tokens,
        } => {
            let (name, source) = if file {
                let source = std::fs::read_to_string(&input)?;
                (input, source)
            } else {
                ("<input>".to_owned(), input)
            };

            driver::parse_source(
                &name,
                &source,
                tokens,
                &mut std::io::stdout().lock(),
                &mut diagnostics,
            )
        }
    }
}
