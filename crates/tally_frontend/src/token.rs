use std::fmt;

use tally_diagnostic::span::Span;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub fn end_of_input(span: Span) -> Self {
        Self::new(TokenKind::EndOfInput, "", span)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    EndOfInput,
    Integer,

    Plus,
    Minus,
    Asterisk,
    Slash,

    Semicolon,
}
