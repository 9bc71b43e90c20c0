mod token;

pub use token::*;

use std::iter::Peekable;
use std::str::CharIndices;
use crate::language;


// Lexer

/// Single-pass tokenizer. The cursor only advances; create a new `Lexer` to start over.
pub struct Lexer<'s> {
    source: &'s str,
    chars: Peekable<CharIndices<'s>>,

    current: TokenIndex, // byte offset one past the last consumed char
    done: bool, // set once EOF has been yielded by the Iterator impl
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.done = true;
        }
        Some(token)
    }
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            current: 0,
            done: false,
        }
    }

    fn peek_next(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn advance(&mut self) -> Option<char> {
        let (idx, next) = self.chars.next()?;
        self.current = idx + next.len_utf8();
        Some(next)
    }

    fn skip_whitespace(&mut self) {
        while let Some(next) = self.peek_next() {
            if !language::is_whitespace(next) {
                break;
            }
            self.advance();
        }
    }

    /// Produce the next token. Once the source is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token_start = self.current;
        let next = match self.advance() {
            Some(ch) => ch,
            None => return self.token_data(TokenKind::EOF, token_start),
        };

        let kind = match next {
            '=' => self.one_or_two(TokenKind::OpAssign, '=', TokenKind::OpEQ),
            '!' => self.one_or_two(TokenKind::OpNot, '=', TokenKind::OpNE),
            '+' => TokenKind::OpAdd,
            '-' => TokenKind::OpSub,
            '*' => TokenKind::OpMul,
            '/' => TokenKind::OpDiv,
            '<' => TokenKind::OpLT,
            '>' => TokenKind::OpGT,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '[' => TokenKind::OpenSquare,
            ']' => TokenKind::CloseSquare,

            '"' => return self.scan_string(token_start),

            ch if language::is_identifier_char(ch) => return self.scan_identifier(token_start),
            ch if ch.is_ascii_digit() => return self.scan_integer(token_start),

            _ => TokenKind::Illegal,
        };

        self.token_data(kind, token_start)
    }

    // consume the second char of a two-char operator only if it is actually there
    fn one_or_two(&mut self, single: TokenKind, second: char, double: TokenKind) -> TokenKind {
        if self.peek_next() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    fn scan_identifier(&mut self, token_start: TokenIndex) -> Token {
        while let Some(next) = self.peek_next() {
            if !language::is_identifier_char(next) {
                break;
            }
            self.advance();
        }

        let word = &self.source[token_start..self.current];
        self.token_data(language::lookup_keyword(word), token_start)
    }

    fn scan_integer(&mut self, token_start: TokenIndex) -> Token {
        while let Some(next) = self.peek_next() {
            if !next.is_ascii_digit() {
                break;
            }
            self.advance();
        }

        self.token_data(TokenKind::IntegerLiteral, token_start)
    }

    // the opening quote has already been consumed
    fn scan_string(&mut self, token_start: TokenIndex) -> Token {
        let mut value = String::new();

        loop {
            let next = match self.advance() {
                Some(ch) => ch,

                // unterminated string
                None => return Token::new(TokenKind::Illegal, &self.source[token_start..self.current], self.span(token_start)),
            };

            match next {
                '"' => break,

                '\\' => match self.peek_next().and_then(language::unescape_char) {
                    Some(unescaped) => {
                        self.advance();
                        value.push(unescaped);
                    },

                    // unrecognized escapes are kept verbatim
                    None => value.push('\\'),
                },

                ch => value.push(ch),
            }
        }

        Token::new(TokenKind::StringLiteral, value, self.span(token_start))
    }

    fn span(&self, token_start: TokenIndex) -> Span {
        Span {
            index: token_start,
            length: self.current - token_start,
        }
    }

    fn token_data(&self, kind: TokenKind, token_start: TokenIndex) -> Token {
        let text = &self.source[token_start..self.current];
        Token::new(kind, text, self.span(token_start))
    }
}
