use core::fmt;
use std::rc::Rc;

use crate::parser::ast::{FunctionLiteral, Block};
use crate::runtime::Object;
use crate::runtime::environment::{EnvId, CapturedEnv};
use crate::runtime::errors::ExecResult;
use crate::runtime::strings::StringSymbol;


/// A user function closed over the scope it was defined in.
#[derive(Debug)]
pub struct Function {
    def: Rc<FunctionLiteral>,
    env: CapturedEnv,
}

impl Function {
    pub fn new(def: Rc<FunctionLiteral>, env: CapturedEnv) -> Self {
        Self { def, env }
    }

    pub fn params(&self) -> &[StringSymbol] { self.def.params() }
    pub fn body(&self) -> &Block { self.def.body() }

    /// The captured environment
    pub fn env(&self) -> EnvId { self.env.id() }
}

impl fmt::Display for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.def)
    }
}


// Native functions

pub type BuiltinFn = fn(&[Object]) -> ExecResult<Object>;

pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str { self.name }

    pub fn invoke(&self, args: &[Object]) -> ExecResult<Object> {
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Builtin")
            .field("name", &self.name)
            .finish()
    }
}
