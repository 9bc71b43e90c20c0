mod eval;
mod ops;

use crate::language;
use crate::parser::ast::{Program, Expr};
use crate::parser::stmt::Stmt;
use crate::runtime::{Object, EnvArena, EnvId, ExecResult};
use crate::runtime::strings::StringSymbol;


#[derive(Debug, Clone)]
pub struct InterpreterOptions {
    max_call_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self { Self::new() }
}

impl InterpreterOptions {
    pub fn new() -> Self {
        Self {
            max_call_depth: language::DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Limit on nested user function applications
    pub fn set_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth; self
    }

    pub fn max_call_depth(&self) -> usize { self.max_call_depth }
}


/**
    Tree-walking evaluator.

    The interpreter owns every scope it creates. Top-level statements are
    evaluated in the root scope, so bindings persist between calls to the
    `eval_*` methods. Use a new `Interpreter` for an independent run.
*/
#[derive(Debug)]
pub struct Interpreter {
    envs: EnvArena,
    current: EnvId,
    depth: usize,
    options: InterpreterOptions,
}

impl Default for Interpreter {
    fn default() -> Self { Self::new() }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(InterpreterOptions::default())
    }

    pub fn with_options(options: InterpreterOptions) -> Self {
        let envs = EnvArena::new();
        let current = envs.root();
        Self {
            envs,
            current,
            depth: 0,
            options,
        }
    }

    pub fn options(&self) -> &InterpreterOptions { &self.options }

    /// Number of live scopes, including the root scope
    pub fn env_count(&self) -> usize { self.envs.len() }

    /// Look up a name bound in the root scope
    pub fn global(&self, name: &str) -> Option<&Object> {
        self.envs.get(self.envs.root(), &StringSymbol::intern(name))
    }

    /// Evaluate a whole program. Failures are returned as `Object::Error`.
    pub fn eval_program(&mut self, program: &Program) -> Object {
        let result = self.exec_program(program);
        self.finish(result)
    }

    pub fn eval_statement(&mut self, stmt: &Stmt) -> Object {
        let result = self.eval_stmt(stmt).map(Object::unwrap_return);
        self.finish(result)
    }

    pub fn eval_expression(&mut self, expr: &Expr) -> Object {
        let result = self.eval_operand(expr);
        self.finish(result)
    }

    fn finish(&mut self, result: ExecResult<Object>) -> Object {
        debug_assert!(self.current == self.envs.root() && self.depth == 0);

        self.envs.collect();
        log::debug!("evaluation finished with {} live scopes", self.envs.len());

        match result {
            Ok(value) => value,
            Err(error) => {
                log::debug!("evaluation failed: {}", error);
                Object::from(error)
            },
        }
    }
}
