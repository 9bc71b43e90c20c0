use core::fmt;
use core::mem;
use std::rc::Rc;
use static_assertions::const_assert;

use crate::language::IntType;
use crate::runtime::HashMap;
use crate::runtime::function::{Function, Builtin};
use crate::runtime::errors::{ExecResult, RuntimeError};
use crate::utils;


// keep values small, they are cloned freely during evaluation
#[cfg(target_pointer_width = "64")]
const_assert!(mem::size_of::<Object>() <= 24);


/// Runtime value
#[derive(Debug, Clone)]
pub enum Object {
    Integer(IntType),
    String(Rc<str>),
    Boolean(bool),
    Null,

    Error(Rc<RuntimeError>),
    ReturnValue(Box<Object>),

    Function(Rc<Function>),
    Builtin(&'static Builtin),

    Array(Rc<[Object]>),
    Hash(Rc<HashObject>),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(..) => "INTEGER",
            Self::String(..) => "STRING",
            Self::Boolean(..) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Error(..) => "ERROR",
            Self::ReturnValue(..) => "RETURN_VALUE",
            Self::Function(..) => "FUNCTION",
            Self::Builtin(..) => "BUILTIN",
            Self::Array(..) => "ARRAY",
            Self::Hash(..) => "HASH",
        }
    }

    /// Only `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    pub fn as_error(&self) -> Option<&RuntimeError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Strip a `ReturnValue` wrapper, if present.
    pub fn unwrap_return(self) -> Object {
        match self {
            Self::ReturnValue(value) => *value,
            value => value,
        }
    }

    /// Identity comparison used by `==` and `!=` when no value comparison applies.
    /// Composite values are identical only if they are the same allocation.
    pub fn identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Error(a), Self::Error(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => core::ptr::eq(*a, *b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a.identical(b),
            _ => false,
        }
    }
}

impl From<IntType> for Object {
    fn from(value: IntType) -> Self { Self::Integer(value) }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self { Self::Boolean(value) }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self { Self::String(Rc::from(value)) }
}

impl From<String> for Object {
    fn from(value: String) -> Self { Self::String(Rc::from(value)) }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self { Self::Array(Rc::from(items)) }
}

impl From<HashObject> for Object {
    fn from(hash: HashObject) -> Self { Self::Hash(Rc::new(hash)) }
}

impl From<Box<RuntimeError>> for Object {
    fn from(error: Box<RuntimeError>) -> Self { Self::Error(Rc::from(error)) }
}

// inspect form
impl fmt::Display for Object {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(fmt, "{}", value),
            Self::String(value) => fmt.write_str(value),
            Self::Boolean(value) => write!(fmt, "{}", value),
            Self::Null => fmt.write_str("null"),
            Self::Error(error) => write!(fmt, "ERROR: {}", error),
            Self::ReturnValue(value) => write!(fmt, "{}", value),
            Self::Function(fun) => write!(fmt, "{}", fun),
            Self::Builtin(builtin) => write!(fmt, "builtin function {}", builtin.name()),
            Self::Array(items) => write!(fmt, "[{}]", utils::fmt_join(", ", items)),
            Self::Hash(hash) => write!(fmt, "{}", hash),
        }
    }
}


/// Key of a hash entry. Only integers, booleans and strings are hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    Integer(IntType),
    Boolean(bool),
    String(Rc<str>),
}

impl TryFrom<&Object> for HashKey {
    type Error = Box<RuntimeError>;

    fn try_from(value: &Object) -> ExecResult<Self> {
        match value {
            Object::Integer(value) => Ok(Self::Integer(*value)),
            Object::Boolean(value) => Ok(Self::Boolean(*value)),
            Object::String(value) => Ok(Self::String(value.clone())),
            _ => Err(RuntimeError::unhashable_value(value)),
        }
    }
}

impl HashKey {
    pub fn same_kind(&self, other: &HashKey) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}


#[derive(Debug, Clone)]
pub struct HashPair {
    key: Object,
    value: Object,
}

impl HashPair {
    pub fn key(&self) -> &Object { &self.key }
    pub fn value(&self) -> &Object { &self.value }
}


#[derive(Debug, Clone, Default)]
pub struct HashObject {
    pairs: HashMap<HashKey, HashPair>,
}

impl HashObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, replacing any previous pair with an equal key.
    pub fn insert(&mut self, key: Object, value: Object) -> ExecResult<()> {
        let hash_key = HashKey::try_from(&key)?;
        self.insert_entry(hash_key, key, value);
        Ok(())
    }

    // `hash_key` must have been derived from `key`
    pub fn insert_entry(&mut self, hash_key: HashKey, key: Object, value: Object) {
        self.pairs.insert(hash_key, HashPair { key, value });
    }

    pub fn get(&self, key: &HashKey) -> Option<&HashPair> {
        self.pairs.get(key)
    }

    /// True if some key in the hash is of the same kind as `key`. An empty hash accepts any key.
    pub fn accepts_key(&self, key: &HashKey) -> bool {
        self.is_empty() || self.pairs.keys().any(|other| other.same_kind(key))
    }

    pub fn len(&self) -> usize { self.pairs.len() }

    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    /// Pairs ordered by key: integers, then booleans, then strings.
    pub fn sorted_pairs(&self) -> Vec<&HashPair> {
        let mut entries = self.pairs.iter().collect::<Vec<_>>();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().map(|(_, pair)| pair).collect()
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("{")?;
        for (idx, pair) in self.sorted_pairs().into_iter().enumerate() {
            if idx > 0 {
                fmt.write_str(", ")?;
            }
            write!(fmt, "{}: {}", pair.key, pair.value)?;
        }
        fmt.write_str("}")
    }
}
