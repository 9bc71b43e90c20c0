use core::fmt;
use crate::lexer::TokenKind;

// Prefix Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Not, Neg,
}

impl PrefixOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::OpNot => Some(Self::Not),
            TokenKind::OpSub => Some(Self::Neg),
            _ => None,
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            PrefixOp::Not => "!",
            PrefixOp::Neg => "-",
        };
        fmt.write_str(symbol)
    }
}


// Infix Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    // precedence level 1
    Mul, Div,

    // precedence level 2
    Add, Sub,

    // precedence level 3
    LT, GT,

    // precedence level 4
    EQ, NE,
}

pub type Precedence = u8;
pub const PRECEDENCE_END: Precedence = 0; // tightest binding
pub const PRECEDENCE_START: Precedence = 4; // weakest binding

impl InfixOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::OpMul => Self::Mul,
            TokenKind::OpDiv => Self::Div,
            TokenKind::OpAdd => Self::Add,
            TokenKind::OpSub => Self::Sub,
            TokenKind::OpLT  => Self::LT,
            TokenKind::OpGT  => Self::GT,
            TokenKind::OpEQ  => Self::EQ,
            TokenKind::OpNE  => Self::NE,
            _ => return None,
        };
        Some(op)
    }

    pub const fn precedence_level(&self) -> Precedence {
        match self {
            InfixOp::Mul | InfixOp::Div => 1,
            InfixOp::Add | InfixOp::Sub => 2,
            InfixOp::LT | InfixOp::GT => 3,
            InfixOp::EQ | InfixOp::NE => 4,
        }
    }

    pub const fn is_equality(&self) -> bool {
        matches!(self, InfixOp::EQ | InfixOp::NE)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::LT  => "<",
            InfixOp::GT  => ">",
            InfixOp::EQ  => "==",
            InfixOp::NE  => "!=",
        };
        fmt.write_str(symbol)
    }
}
