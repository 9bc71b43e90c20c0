use std::fmt;
use std::error::Error;

use crate::parser::operator::{PrefixOp, InfixOp};
use crate::runtime::Object;
use crate::runtime::strings::StringSymbol;


pub type ExecResult<T> = Result<T, Box<RuntimeError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownOperator,
    TypeMismatch,
    NameNotDefined,
    NotCallable,
    WrongArgumentCount,
    InvalidArgumentType,
    UnhashableValue,
    IndexNotSupported,
    OverflowError,
    DivideByZero,
    MaxCallDepth,
}

/// A failed evaluation. Carried by `Object::Error` once it leaves the interpreter.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    kind: ErrorKind,
    message: String,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: String) -> Box<Self> {
        Box::new(Self { kind, message })
    }

    pub fn kind(&self) -> ErrorKind { self.kind }
    pub fn message(&self) -> &str { &self.message }
}

impl Error for RuntimeError { }

impl fmt::Display for RuntimeError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.message)
    }
}


// Error constructor functions

impl RuntimeError {
    pub fn unknown_prefix_operator(op: PrefixOp, operand: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::UnknownOperator,
            format!("unknown operator: {}{}", op, operand.type_name()),
        )
    }

    pub fn unknown_infix_operator(op: InfixOp, lhs: &Object, rhs: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::UnknownOperator,
            format!("unknown operator: {} {} {}", lhs.type_name(), op, rhs.type_name()),
        )
    }

    pub fn type_mismatch(op: InfixOp, lhs: &Object, rhs: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("type mismatch: {} {} {}", lhs.type_name(), op, rhs.type_name()),
        )
    }

    pub fn name_not_defined(name: StringSymbol) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::NameNotDefined,
            format!("identifier not found: {}", name),
        )
    }

    pub fn not_callable(value: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::NotCallable,
            format!("not a function: {}", value.type_name()),
        )
    }

    // user functions
    pub fn wrong_argument_count(want: usize, got: usize) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::WrongArgumentCount,
            format!("wrong number of arguments: want={}, got={}", want, got),
        )
    }

    // builtins keep their own wording
    pub fn builtin_argument_count(got: usize, want: usize) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::WrongArgumentCount,
            format!("wrong number of arguments. got={}, want={}", got, want),
        )
    }

    pub fn unsupported_argument(builtin: &str, value: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::InvalidArgumentType,
            format!("argument to `{}` not supported, got {}", builtin, value.type_name()),
        )
    }

    pub fn expected_array_argument(builtin: &str, value: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::InvalidArgumentType,
            format!("argument to `{}` must be ARRAY, got {}", builtin, value.type_name()),
        )
    }

    pub fn unhashable_value(value: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::UnhashableValue,
            format!("unusable as hash key: {}", value.type_name()),
        )
    }

    pub fn index_not_supported(value: &Object) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::IndexNotSupported,
            format!("index operator not supported: {}", value.type_name()),
        )
    }

    pub fn overflow_error() -> Box<RuntimeError> {
        Self::new(ErrorKind::OverflowError, "integer overflow".to_string())
    }

    pub fn divide_by_zero() -> Box<RuntimeError> {
        Self::new(ErrorKind::DivideByZero, "division by zero".to_string())
    }

    pub fn max_call_depth(depth: usize) -> Box<RuntimeError> {
        Self::new(
            ErrorKind::MaxCallDepth,
            format!("maximum call depth exceeded ({})", depth),
        )
    }
}
