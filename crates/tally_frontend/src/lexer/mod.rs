#[cfg(test)]
mod tests;

use std::str::Chars;

use tally_diagnostic::span::Span;

use crate::token::{Token, TokenKind};

/// Where the parser pulls its tokens from.
///
/// Once exhausted a stream must keep returning [`TokenKind::EndOfInput`].
pub trait TokenStream<'src> {
    fn next_token(&mut self) -> Token<'src>;
}

/// Scans tokens on demand. The lexer only ever moves forward, so a fresh one
/// is needed for every input.
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
        }
    }

    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.token_start = self.byte_pos();

            let kind = match self.chars.next() {
                None => TokenKind::EndOfInput,

                Some(' ') => continue,

                Some('+') => TokenKind::Plus,
                Some('-') => TokenKind::Minus,
                Some('*') => TokenKind::Asterisk,
                Some('/') => TokenKind::Slash,
                Some(';') => TokenKind::Semicolon,

                Some('0'..='9') => {
                    self.eat_digits();
                    TokenKind::Integer
                }

                // unrecognized characters are dropped without a token
                Some(_) => continue,
            };

            let span = Span::new(self.token_start, self.byte_pos());
            return Token::new(kind, &self.all[span.start..span.end], span);
        }
    }

    fn eat_digits(&mut self) {
        while matches!(self.peek(), Some('0'..='9')) {
            self.chars.next();
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

impl<'src> TokenStream<'src> for Lexer<'src> {
    fn next_token(&mut self) -> Token<'src> {
        Lexer::next_token(self)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}

/// A prebuilt list of tokens, for feeding the parser input the lexer would
/// never produce.
pub struct TokenList<'src> {
    tokens: std::vec::IntoIter<Token<'src>>,
    eof_span: Span,
}

impl<'src> TokenList<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        let eof_span = tokens
            .last()
            .map_or(Span::empty(0), |token| Span::empty(token.span.end));

        Self {
            tokens: tokens.into_iter(),
            eof_span,
        }
    }
}

impl<'src> FromIterator<Token<'src>> for TokenList<'src> {
    fn from_iter<I: IntoIterator<Item = Token<'src>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'src> TokenStream<'src> for TokenList<'src> {
    fn next_token(&mut self) -> Token<'src> {
        self.tokens
            .next()
            .unwrap_or(Token::end_of_input(self.eof_span))
    }
}
