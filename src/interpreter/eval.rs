use core::mem;
use std::rc::Rc;

use crate::builtins;
use crate::language;
use crate::parser::ast::{Program, Expr, IfExpr, Block, FunctionLiteral};
use crate::parser::stmt::Stmt;
use crate::runtime::{Object, Function, HashKey, HashObject, EnvId, RuntimeError, ExecResult};
use crate::runtime::strings::StringSymbol;
use crate::interpreter::Interpreter;
use crate::interpreter::ops;


impl Interpreter {

    pub(super) fn exec_program(&mut self, program: &Program) -> ExecResult<Object> {
        let result = self.eval_stmts(program.statements())?;
        Ok(result.unwrap_return())
    }

    // a `ReturnValue` halts the sequence and is passed up as-is
    fn eval_stmts(&mut self, stmts: &[Stmt]) -> ExecResult<Object> {
        stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || {
            let mut result = Object::Null;
            for stmt in stmts.iter() {
                result = self.eval_stmt(stmt)?;
                if let Object::ReturnValue(..) = result {
                    break;
                }
            }
            Ok(result)
        })
    }

    pub(super) fn eval_stmt(&mut self, stmt: &Stmt) -> ExecResult<Object> {
        match stmt {
            Stmt::Let { name, value } => {
                let value = self.eval_expr(value)?;
                if let Object::ReturnValue(..) = value {
                    return Ok(value);
                }
                Ok(self.envs.set(self.current, *name, value))
            },

            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_operand(expr)?,
                    None => Object::Null,
                };
                Ok(Object::ReturnValue(Box::new(value)))
            },

            Stmt::Expression(expr) => self.eval_expr(expr),

            Stmt::While { condition, body } => self.eval_while(condition, body),
        }
    }

    // the body runs in the enclosing scope so that `let` can advance the loop
    fn eval_while(&mut self, condition: &Expr, body: &Block) -> ExecResult<Object> {
        while self.eval_operand(condition)?.is_truthy() {
            let result = self.eval_stmts(body.statements())?;
            if let Object::ReturnValue(..) = result {
                return Ok(result);
            }
        }
        Ok(Object::Null)
    }

    // evaluate a block in a fresh child scope that is discarded afterwards
    fn eval_scoped_block(&mut self, block: &Block) -> ExecResult<Object> {
        let env = self.envs.new_enclosed(self.current);
        let outer = mem::replace(&mut self.current, env);

        let result = self.eval_stmts(block.statements());

        self.current = outer;
        self.envs.release(env);
        result
    }

    /*** Expressions ***/

    // evaluate an expression whose value is consumed by an enclosing expression
    pub(super) fn eval_operand(&mut self, expr: &Expr) -> ExecResult<Object> {
        self.eval_expr(expr).map(Object::unwrap_return)
    }

    // may produce a `ReturnValue` when `expr` is an if-expression
    fn eval_expr(&mut self, expr: &Expr) -> ExecResult<Object> {
        stacker::maybe_grow(language::STACK_RED_ZONE, language::STACK_GROW_SIZE, || {
            self.eval_inner_expr(expr)
        })
    }

    fn eval_inner_expr(&mut self, expr: &Expr) -> ExecResult<Object> {
        match expr {
            Expr::Identifier(name) => self.eval_identifier(name),

            Expr::IntegerLiteral(value) => Ok(Object::Integer(*value)),
            Expr::StringLiteral(value) => Ok(Object::String(value.clone())),
            Expr::Boolean(value) => Ok(Object::Boolean(*value)),

            Expr::Prefix(op, operand) => {
                let operand = self.eval_operand(operand)?;
                ops::eval_prefix(*op, &operand)
            },

            Expr::Infix(op, operands) => {
                let (lhs, rhs) = &**operands;
                let lhs = self.eval_operand(lhs)?;
                let rhs = self.eval_operand(rhs)?;
                ops::eval_infix(*op, &lhs, &rhs)
            },

            Expr::If(if_expr) => self.eval_if(if_expr),

            Expr::Function(fun) => Ok(self.eval_function_literal(fun)),

            Expr::Call { callee, args } => self.eval_call(callee, args),

            Expr::Array(items) => {
                let items = self.eval_expr_list(items)?;
                Ok(Object::from(items))
            },

            Expr::Index(operands) => {
                let (collection, index) = &**operands;
                let collection = self.eval_operand(collection)?;
                let index = self.eval_operand(index)?;
                ops::eval_index(&collection, &index)
            },

            Expr::Hash(pairs) => self.eval_hash_literal(pairs),
        }
    }

    // environment bindings shadow builtins
    fn eval_identifier(&self, name: &StringSymbol) -> ExecResult<Object> {
        if let Some(value) = self.envs.get(self.current, name) {
            return Ok(value.clone());
        }

        name.with_str(builtins::lookup)
            .map(Object::Builtin)
            .ok_or_else(|| RuntimeError::name_not_defined(*name))
    }

    fn eval_if(&mut self, if_expr: &IfExpr) -> ExecResult<Object> {
        let condition = self.eval_operand(if_expr.condition())?;

        if condition.is_truthy() {
            self.eval_scoped_block(if_expr.consequence())
        } else if let Some(alternative) = if_expr.alternative() {
            self.eval_scoped_block(alternative)
        } else {
            Ok(Object::Null)
        }
    }

    // the defining scope lives as long as the function does
    fn eval_function_literal(&mut self, fun: &Rc<FunctionLiteral>) -> Object {
        let function = Function::new(fun.clone(), self.envs.capture(self.current));
        Object::Function(Rc::new(function))
    }

    fn eval_expr_list(&mut self, exprs: &[Expr]) -> ExecResult<Vec<Object>> {
        exprs.iter()
            .map(|expr| self.eval_operand(expr))
            .collect()
    }

    fn eval_hash_literal(&mut self, pairs: &[(Expr, Expr)]) -> ExecResult<Object> {
        let mut hash = HashObject::new();
        for (key_expr, value_expr) in pairs.iter() {
            let key = self.eval_operand(key_expr)?;
            let hash_key = HashKey::try_from(&key)?;
            let value = self.eval_operand(value_expr)?;
            hash.insert_entry(hash_key, key, value);
        }
        Ok(Object::from(hash))
    }

    /*** Function Application ***/

    fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> ExecResult<Object> {
        let callee = self.eval_operand(callee)?;
        let args = self.eval_expr_list(args)?;

        match &callee {
            Object::Function(fun) => self.apply_function(fun, args),
            Object::Builtin(builtin) => builtin.invoke(&args),
            _ => Err(RuntimeError::not_callable(&callee)),
        }
    }

    fn apply_function(&mut self, fun: &Function, args: Vec<Object>) -> ExecResult<Object> {
        let params = fun.params();
        if params.len() != args.len() {
            return Err(RuntimeError::wrong_argument_count(params.len(), args.len()));
        }

        let max_depth = self.options.max_call_depth();
        if self.depth >= max_depth {
            return Err(RuntimeError::max_call_depth(max_depth));
        }

        // the call scope encloses the captured scope, not the caller's
        let env = self.new_call_env(fun.env(), params, args);
        let caller = mem::replace(&mut self.current, env);
        self.depth += 1;

        log::trace!("apply {} args at depth {}", params.len(), self.depth);

        let result = self.eval_stmts(fun.body().statements());

        self.depth -= 1;
        self.current = caller;
        self.envs.release(env);

        result.map(Object::unwrap_return)
    }

    fn new_call_env(&mut self, outer: EnvId, params: &[StringSymbol], args: Vec<Object>) -> EnvId {
        let env = self.envs.new_enclosed(outer);
        for (param, arg) in params.iter().zip(args) {
            self.envs.set(env, *param, arg);
        }
        env
    }
}
