use core::fmt;

use crate::parser::stmt::Stmt;

pub use crate::parser::expr::{Expr, IfExpr, FunctionLiteral};
pub use crate::parser::stmt::Block;
pub use crate::parser::operator::{PrefixOp, InfixOp};


/// Root of a parsed source text
#[derive(Debug, Clone, Default)]
pub struct Program {
    statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Stmt] { &self.statements }

    pub fn is_empty(&self) -> bool { self.statements.is_empty() }

    pub fn token_literal(&self) -> String {
        self.statements.first()
            .map(Stmt::token_literal)
            .unwrap_or_default()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.statements.iter() {
            writeln!(fmt, "{}", stmt)?;
        }
        Ok(())
    }
}
