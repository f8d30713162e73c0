
mod expr;

use std::num::ParseIntError;

use tally_diagnostic::prelude::*;

use crate::ast::Expr;
use crate::lexer::TokenStream;
use crate::token::{Token, TokenKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("malformed integer literal {text:?}: {source}")]
    MalformedIntegerLiteral { text: String, source: ParseIntError },
}

impl IntoDiagnostic for ParseError {
    fn into_diagnostic(self, _cx: &()) -> Diagnostic {
        Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary(self.kind.to_string(), self.span))
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A precedence-climbing parser over a two token window.
pub struct Parser<'src, T: TokenStream<'src>> {
    tokens: T,

    current: Token<'src>,
    peek: Token<'src>,
}

impl<'src, T: TokenStream<'src>> Parser<'src, T> {
    pub fn new(tokens: T) -> Self {
        let placeholder = Token::end_of_input(Span::empty(0));

        let mut parser = Self {
            tokens,
            current: placeholder,
            peek: placeholder,
        };

        // fill both lookahead slots
        parser.advance();
        parser.advance();

        parser
    }

    /// Parses the first expression in the stream, skipping over tokens that
    /// can't start one. Nothing after that expression is consumed, even when
    /// it turns out incomplete.
    pub fn parse_program(mut self) -> ParseResult<Option<Expr>> {
        while self.current.kind != TokenKind::EndOfInput {
            let start = self.current.kind;
            if let Some(expr) = self.parse_expr()? {
                return Ok(Some(expr));
            }

            // a `-` starts the expression even when its operand is missing
            if start == TokenKind::Minus {
                return Ok(None);
            }

            self.advance();
        }

        Ok(None)
    }

    fn advance(&mut self) {
        self.current = self.peek;
        self.peek = self.tokens.next_token();
    }
}
