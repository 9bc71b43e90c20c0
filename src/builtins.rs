use std::io::{self, Write};
use once_cell::sync::Lazy;

use crate::language::IntType;
use crate::runtime::{Object, Builtin, HashMap, RuntimeError};

mod tests;


// Process-wide registry, consulted only after the environment chain fails to resolve a name
static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let builtins = [
        builtin!(len, params(value) => {
            let length = match value {
                Object::String(string) => string.len(),
                Object::Array(items) => items.len(),
                _ => return Err(RuntimeError::unsupported_argument("len", value)),
            };
            let length = IntType::try_from(length)
                .map_err(|_| RuntimeError::overflow_error())?;
            Ok(Object::Integer(length))
        }),

        builtin!(first, params(array) => {
            match array {
                Object::Array(items) => Ok(items.first().cloned().unwrap_or(Object::Null)),
                _ => Err(RuntimeError::expected_array_argument("first", array)),
            }
        }),

        builtin!(last, params(array) => {
            match array {
                Object::Array(items) => Ok(items.last().cloned().unwrap_or(Object::Null)),
                _ => Err(RuntimeError::expected_array_argument("last", array)),
            }
        }),

        builtin!(rest, params(array) => {
            match array {
                Object::Array(items) => match items.split_first() {
                    Some((_, rest)) => Ok(Object::from(rest.to_vec())),
                    None => Ok(Object::Null),
                },
                _ => Err(RuntimeError::expected_array_argument("rest", array)),
            }
        }),

        // the input array is left unchanged
        builtin!(push, params(array, value) => {
            match array {
                Object::Array(items) => {
                    let mut items = items.to_vec();
                    items.push(value.clone());
                    Ok(Object::from(items))
                },
                _ => Err(RuntimeError::expected_array_argument("push", array)),
            }
        }),

        builtin!(puts, variadic(args) => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            for value in args.iter() {
                // output failures don't fail the evaluation
                let _ = writeln!(stdout, "{}", value);
            }
            Ok(Object::Null)
        }),
    ];

    let mut registry = HashMap::default();
    for builtin in builtins {
        registry.insert(builtin.name(), builtin);
    }
    registry
});


/// Find a builtin by name
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

pub fn names() -> impl Iterator<Item=&'static str> {
    BUILTINS.keys().copied()
}
