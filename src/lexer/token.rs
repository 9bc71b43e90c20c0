use core::fmt;

// Token Types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    EOF,
    Illegal,

    // Identifiers and literals
    Identifier,
    IntegerLiteral,
    StringLiteral,

    // Operator Symbols
    OpAssign,
    OpAdd, OpSub, OpMul, OpDiv,
    OpLT, OpGT, OpEQ, OpNE,
    OpNot,

    // Delimiters, Separators, punctuation
    Comma,
    Semicolon,
    Colon,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenSquare,
    CloseSquare,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
    While,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EOF            => "end of input",
            Self::Illegal        => "illegal character",
            Self::Identifier     => "identifier",
            Self::IntegerLiteral => "integer literal",
            Self::StringLiteral  => "string literal",
            Self::OpAssign       => "'='",
            Self::OpAdd          => "'+'",
            Self::OpSub          => "'-'",
            Self::OpMul          => "'*'",
            Self::OpDiv          => "'/'",
            Self::OpLT           => "'<'",
            Self::OpGT           => "'>'",
            Self::OpEQ           => "'=='",
            Self::OpNE           => "'!='",
            Self::OpNot          => "'!'",
            Self::Comma          => "','",
            Self::Semicolon      => "';'",
            Self::Colon          => "':'",
            Self::OpenParen      => "'('",
            Self::CloseParen     => "')'",
            Self::OpenBrace      => "'{'",
            Self::CloseBrace     => "'}'",
            Self::OpenSquare     => "'['",
            Self::CloseSquare    => "']'",
            Self::Function       => "'fn'",
            Self::Let            => "'let'",
            Self::True           => "'true'",
            Self::False          => "'false'",
            Self::If             => "'if'",
            Self::Else           => "'else'",
            Self::Return         => "'return'",
            Self::While          => "'while'",
        };
        fmt.write_str(name)
    }
}


pub type TokenIndex = usize;
pub type TokenLength = usize;

/// Byte range of a token within the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub index: TokenIndex,
    pub length: TokenLength,
}

impl Span {
    pub fn end(&self) -> TokenIndex { self.index + self.length }
}


/// Token Output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token { kind, text: text.into(), span }
    }

    pub fn is_eof(&self) -> bool { matches!(self.kind, TokenKind::EOF) }
}
