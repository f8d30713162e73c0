#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod token;

pub use lexer::{Lexer, TokenList, TokenStream};
pub use parser::{ParseError, ParseErrorKind, ParseResult, Parser};

use ast::Expr;
use token::Token;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

/// Every token of `source` up to, but not including, the end of input.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// Parses the first expression in `source`.
///
/// Returns `Ok(None)` when the input holds no expression at all. Anything
/// after the first expression, including further `;`-separated clauses, is
/// never looked at.
pub fn parse(source: &str) -> ParseResult<Option<Expr>> {
    Parser::new(Lexer::new(source)).parse_program()
}
