use clap::{Parser, Subcommand, ValueEnum};
use tally_diagnostic::termcolor::ColorChoice;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    /// Defaults to `repl`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read expressions from stdin, one per line, and print how they parse.
    Repl {
        /// Don't print a prompt before each line.
        #[arg(long)]
        no_prompt: bool,
    },

    /// Parse a single expression.
    Parse {
        /// The expression, or a path when `--file` is given.
        input: String,

        /// Read the expression from the file at `input`.
        #[arg(long, short)]
        file: bool,

        /// Print the tokens before the parsed expression.
        #[arg(long, short)]
        tokens: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorChoice {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorChoice::Auto,
            Color::Always => ColorChoice::Always,
            Color::Never => ColorChoice::Never,
        }
    }
}
