use core::fmt;
use core::mem;
use std::rc::Rc;

use crate::language::{self, IntType};
use crate::runtime::strings::StringSymbol;
use crate::parser::operator::{PrefixOp, InfixOp};
use crate::parser::stmt::{Stmt, Block};
use crate::utils;


#[derive(Debug, Clone)]
pub enum Expr {

    Identifier(StringSymbol),

    IntegerLiteral(IntType),

    StringLiteral(Rc<str>),

    Boolean(bool),

    Prefix(PrefixOp, Box<Expr>),

    Infix(InfixOp, Box<(Expr, Expr)>),

    If(Box<IfExpr>),

    // shared with the Function objects created from it
    Function(Rc<FunctionLiteral>),

    Call {
        callee: Box<Expr>,
        args: Box<[Expr]>,
    },

    Array(Box<[Expr]>),

    Index(Box<(Expr, Expr)>),

    Hash(Box<[(Expr, Expr)]>),
}

impl Expr {
    /// Text of the first token of the expression.
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(name) => name.to_string(),
            Self::IntegerLiteral(value) => value.to_string(),
            Self::StringLiteral(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::Prefix(op, ..) => op.to_string(),
            Self::Infix(op, ..) => op.to_string(),
            Self::If(..) => language::KEYWORD_IF.to_string(),
            Self::Function(..) => language::KEYWORD_FUNCTION.to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::Array(..) | Self::Index(..) => "[".to_string(),
            Self::Hash(..) => "{".to_string(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || self.fmt_expr(fmt))
    }
}

impl Expr {
    fn fmt_expr(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(fmt, "{}", name),
            Self::IntegerLiteral(value) => write!(fmt, "{}", value),
            Self::StringLiteral(value) => write_string_literal(fmt, value),
            Self::Boolean(value) => write!(fmt, "{}", value),
            Self::Prefix(op, operand) => write!(fmt, "({}{})", op, operand),
            Self::Infix(op, operands) => {
                let (lhs, rhs) = &**operands;
                write!(fmt, "({} {} {})", lhs, op, rhs)
            },
            Self::If(if_expr) => write!(fmt, "{}", if_expr),
            Self::Function(fun) => write!(fmt, "{}", fun),
            Self::Call { callee, args } => write!(fmt, "{}({})", callee, utils::fmt_join(", ", args)),
            Self::Array(items) => write!(fmt, "[{}]", utils::fmt_join(", ", items)),
            Self::Index(operands) => {
                let (collection, index) = &**operands;
                write!(fmt, "({}[{}])", collection, index)
            },
            Self::Hash(pairs) => {
                fmt.write_str("{")?;
                for (idx, (key, value)) in pairs.iter().enumerate() {
                    if idx > 0 {
                        fmt.write_str(", ")?;
                    }
                    write!(fmt, "{}: {}", key, value)?;
                }
                fmt.write_str("}")
            },
        }
    }
}

// Deeply nested trees are torn down with an explicit work list instead of recursive drop glue.

impl Drop for Expr {
    fn drop(&mut self) {
        let mut exprs = Vec::new();
        let mut stmts = Vec::new();
        self.take_children(&mut exprs, &mut stmts);
        if !exprs.is_empty() || !stmts.is_empty() {
            dismantle(exprs, stmts);
        }
    }
}

impl Expr {
    // move subexpressions and nested statements out, leaving only leaves behind
    fn take_children(&mut self, exprs: &mut Vec<Expr>, stmts: &mut Vec<Stmt>) {
        match self {
            Self::Identifier(..) | Self::IntegerLiteral(..) | Self::StringLiteral(..) | Self::Boolean(..) => { },

            Self::Prefix(_, operand) => exprs.push(take_expr(operand)),

            Self::Infix(_, operands) | Self::Index(operands) => {
                let (lhs, rhs) = &mut **operands;
                exprs.push(take_expr(lhs));
                exprs.push(take_expr(rhs));
            },

            Self::If(if_expr) => {
                exprs.push(take_expr(&mut if_expr.condition));
                stmts.extend(if_expr.consequence.take_statements());
                if let Some(alternative) = if_expr.alternative.as_mut() {
                    stmts.extend(alternative.take_statements());
                }
            },

            // still shared with live Function objects otherwise
            Self::Function(fun) => if let Some(fun) = Rc::get_mut(fun) {
                stmts.extend(fun.body.take_statements());
            },

            Self::Call { callee, args } => {
                exprs.push(take_expr(callee));
                exprs.extend(mem::take(args).into_vec());
            },

            Self::Array(items) => exprs.extend(mem::take(items).into_vec()),

            Self::Hash(pairs) => for (key, value) in mem::take(pairs).into_vec() {
                exprs.push(key);
                exprs.push(value);
            },
        }
    }
}

fn take_expr(expr: &mut Expr) -> Expr {
    mem::replace(expr, Expr::Boolean(false))
}

pub(super) fn dismantle(mut exprs: Vec<Expr>, mut stmts: Vec<Stmt>) {
    loop {
        if let Some(stmt) = stmts.pop() {
            match stmt {
                Stmt::Let { value, .. } | Stmt::Expression(value) | Stmt::Return(Some(value)) => exprs.push(value),
                Stmt::Return(None) => { },
                Stmt::While { condition, mut body } => {
                    exprs.push(condition);
                    stmts.extend(body.take_statements());
                },
            }
        } else if let Some(mut expr) = exprs.pop() {
            expr.take_children(&mut exprs, &mut stmts);
        } else {
            break;
        }
    }
}


// quoted and escaped, so that the output lexes back to the same value
fn write_string_literal(fmt: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    fmt.write_str("\"")?;
    for ch in value.chars() {
        match language::escape_char(ch) {
            Some(escaped) => fmt.write_str(escaped)?,
            None => write!(fmt, "{}", ch)?,
        }
    }
    fmt.write_str("\"")
}


#[derive(Debug, Clone)]
pub struct IfExpr {
    condition: Expr,
    consequence: Block,
    alternative: Option<Block>,
}

impl IfExpr {
    pub fn new(condition: Expr, consequence: Block, alternative: Option<Block>) -> Self {
        Self { condition, consequence, alternative }
    }

    pub fn condition(&self) -> &Expr { &self.condition }
    pub fn consequence(&self) -> &Block { &self.consequence }
    pub fn alternative(&self) -> Option<&Block> { self.alternative.as_ref() }
}

impl fmt::Display for IfExpr {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = self.alternative.as_ref() {
            write!(fmt, " else {}", alternative)?;
        }
        Ok(())
    }
}

// an `else if` chain is stored as an alternative block holding the nested if expression
impl From<IfExpr> for Block {
    fn from(if_expr: IfExpr) -> Self {
        let stmt = Stmt::Expression(Expr::If(Box::new(if_expr)));
        Block::new(vec![ stmt ])
    }
}


#[derive(Debug)]
pub struct FunctionLiteral {
    params: Box<[StringSymbol]>,
    body: Block,
}

impl FunctionLiteral {
    pub fn new(params: Vec<StringSymbol>, body: Block) -> Self {
        Self {
            params: params.into_boxed_slice(),
            body,
        }
    }

    pub fn params(&self) -> &[StringSymbol] { &self.params }
    pub fn body(&self) -> &Block { &self.body }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "fn({}) {}", utils::fmt_join(", ", &self.params), self.body)
    }
}
