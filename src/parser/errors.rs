use std::fmt;
use std::error::Error;
use crate::lexer::{Span, Token, TokenKind};


pub type ErrorKind = ParserErrorKind;

// Specifies the actual error that occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorKind {
    IllegalToken(String),
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },
    InvalidIntegerLiteral(String),
    UnexpectedEOF {
        expected: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct ParserError {
    kind: ErrorKind,
    span: Span,
}

impl ParserError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        ParserError { kind, span }
    }

    // pick the error kind that describes running into `token` while looking for `expected`
    pub fn unexpected(token: &Token, expected: &'static str) -> Self {
        let kind = match token.kind {
            TokenKind::EOF => ErrorKind::UnexpectedEOF { expected },
            TokenKind::Illegal => ErrorKind::IllegalToken(token.text.clone()),
            found => ErrorKind::UnexpectedToken { found, expected },
        };
        Self::new(kind, token.span)
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }
    pub fn span(&self) -> &Span { &self.span }
}


impl Error for ParserError { }

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind() {
            ParserErrorKind::IllegalToken(text) =>
                write!(fmt, "syntax error: illegal token {:?}", text),

            ParserErrorKind::UnexpectedToken { found, expected } =>
                write!(fmt, "syntax error: expected {}, found {}", expected, found),

            ParserErrorKind::InvalidIntegerLiteral(text) =>
                write!(fmt, "syntax error: could not parse {} as integer", text),

            ParserErrorKind::UnexpectedEOF { expected } =>
                write!(fmt, "syntax error: unexpected end of input, expected {}", expected),
        }
    }
}
