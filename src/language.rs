use crate::lexer::TokenKind;


pub type IntType = i64;    // internal representation for integers

pub type InternSymbol = string_interner::symbol::SymbolU32;


// default limit on nested user function applications
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

// native stack growth used while evaluating, see `stacker::maybe_grow`
pub const STACK_RED_ZONE: usize = 64 * 1024;
pub const STACK_GROW_SIZE: usize = 2 * 1024 * 1024;


pub const KEYWORD_FUNCTION: &str = "fn";
pub const KEYWORD_LET:      &str = "let";
pub const KEYWORD_TRUE:     &str = "true";
pub const KEYWORD_FALSE:    &str = "false";
pub const KEYWORD_IF:       &str = "if";
pub const KEYWORD_ELSE:     &str = "else";
pub const KEYWORD_RETURN:   &str = "return";
pub const KEYWORD_WHILE:    &str = "while";

/// Resolve a scanned word to its keyword token kind, or `Identifier` if it is not reserved.
pub fn lookup_keyword(word: &str) -> TokenKind {
    match word {
        KEYWORD_FUNCTION => TokenKind::Function,
        KEYWORD_LET      => TokenKind::Let,
        KEYWORD_TRUE     => TokenKind::True,
        KEYWORD_FALSE    => TokenKind::False,
        KEYWORD_IF       => TokenKind::If,
        KEYWORD_ELSE     => TokenKind::Else,
        KEYWORD_RETURN   => TokenKind::Return,
        KEYWORD_WHILE    => TokenKind::While,
        _                => TokenKind::Identifier,
    }
}

// identifiers start with one of these and continue with the same set
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}


// string literal escape sequences
pub fn unescape_char(ch: char) -> Option<char> {
    let unescaped = match ch {
        'n'  => '\n',
        't'  => '\t',
        'r'  => '\r',
        '0'  => '\0',
        '\\' => '\\',
        '"'  => '"',
        _ => return None,
    };
    Some(unescaped)
}

pub fn escape_char(ch: char) -> Option<&'static str> {
    let escaped = match ch {
        '\n' => "\\n",
        '\t' => "\\t",
        '\r' => "\\r",
        '\0' => "\\0",
        '\\' => "\\\\",
        '"'  => "\\\"",
        _ => return None,
    };
    Some(escaped)
}
