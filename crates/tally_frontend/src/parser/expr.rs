use super::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::ast::*;
use crate::lexer::TokenStream;
use crate::token::{Token, TokenKind};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,

    Sum,
    Product,
    // prefix `-` binds tighter than any of these, see `parse_prefix`
}

impl BinOp {
    fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Asterisk => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),

            // `;` and the end of input always end an expression
            TokenKind::Semicolon | TokenKind::EndOfInput | TokenKind::Integer => None,
        }
    }

    fn prec(self) -> Prec {
        match self {
            Self::Add | Self::Sub => Prec::Sum,
            Self::Mul | Self::Div => Prec::Product,
        }
    }
}

impl<'src, T: TokenStream<'src>> Parser<'src, T> {
    pub fn parse_expr(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_prec(Prec::Lowest)
    }

    // On return `current` is the last token of the parsed expression.
    fn parse_prec(&mut self, prec: Prec) -> ParseResult<Option<Expr>> {
        let Some(mut expr) = self.parse_prefix()? else {
            return Ok(None);
        };

        while let Some(op) = self.peek_bin_op(prec) {
            // step onto the operator, then past it
            self.advance();
            self.advance();

            let Some(rhs) = self.parse_prec(op.prec())? else {
                // a dangling operator is dropped
                break;
            };

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::Infix {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(Some(expr))
    }

    // A run of `-` is collected up front and wrapped around its operand
    // afterwards, so nesting depth never grows the call stack.
    fn parse_prefix(&mut self) -> ParseResult<Option<Expr>> {
        let mut negations = vec![];
        while self.current.kind == TokenKind::Minus {
            negations.push(self.current.span);
            self.advance();
        }

        let mut expr = match self.current.kind {
            TokenKind::Integer => parse_integer(self.current)?,
            _ => return Ok(None),
        };

        for span in negations.into_iter().rev() {
            let span = span.union(expr.span);
            expr = Expr::new(
                ExprKind::Prefix {
                    op: UnOp::Negate,
                    operand: Box::new(expr),
                },
                span,
            );
        }

        Ok(Some(expr))
    }

    fn peek_bin_op(&self, prec: Prec) -> Option<BinOp> {
        let op = BinOp::from_token(self.peek.kind)?;
        (op.prec() > prec).then_some(op)
    }
}

fn parse_integer(token: Token) -> ParseResult<Expr> {
    let value = token.text.parse::<i64>().map_err(|source| ParseError {
        kind: ParseErrorKind::MalformedIntegerLiteral {
            text: token.text.to_owned(),
            source,
        },
        span: token.span,
    })?;

    Ok(Expr::new(
        ExprKind::Integer {
            text: token.text.to_owned(),
            value,
        },
        token.span,
    ))
}
