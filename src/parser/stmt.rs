use core::fmt;
use core::mem;

use crate::language;
use crate::runtime::strings::StringSymbol;
use crate::parser::expr::{self, Expr};


#[derive(Debug, Clone)]
pub enum Stmt {

    Let {
        name: StringSymbol,
        value: Expr,
    },

    Return(Option<Expr>),

    Expression(Expr),

    While {
        condition: Expr,
        body: Block,
    },
}

impl Stmt {
    /// Text of the first token of the statement.
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => language::KEYWORD_LET.to_string(),
            Self::Return(..) => language::KEYWORD_RETURN.to_string(),
            Self::Expression(expr) => expr.token_literal(),
            Self::While { .. } => language::KEYWORD_WHILE.to_string(),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(fmt, "let {} = {};", name, value),
            Self::Return(Some(value)) => write!(fmt, "return {};", value),
            Self::Return(None) => fmt.write_str("return;"),
            Self::Expression(expr) => write!(fmt, "{}", expr),
            Self::While { condition, body } => write!(fmt, "while ({}) {}", condition, body),
        }
    }
}


/// A braced statement sequence. Evaluated in its own scope unless it is a function body.
#[derive(Debug, Clone, Default)]
pub struct Block {
    statements: Box<[Stmt]>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements: statements.into_boxed_slice() }
    }

    pub fn statements(&self) -> &[Stmt] { &self.statements }

    pub fn is_empty(&self) -> bool { self.statements.is_empty() }

    pub fn token_literal(&self) -> String { "{".to_string() }

    pub(super) fn take_statements(&mut self) -> Vec<Stmt> {
        mem::take(&mut self.statements).into_vec()
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        if !self.statements.is_empty() {
            expr::dismantle(Vec::new(), self.take_statements());
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || {
            fmt.write_str("{\n")?;
            for stmt in self.statements.iter() {
                writeln!(fmt, "  {}", stmt)?;
            }
            fmt.write_str("}")
        })
    }
}
