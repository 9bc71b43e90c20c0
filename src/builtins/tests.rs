#![cfg(test)]

use crate::builtins;
use crate::runtime::{Object, ErrorKind, ExecResult};


fn call(name: &str, args: &[Object]) -> ExecResult<Object> {
    let builtin = builtins::lookup(name)
        .unwrap_or_else(|| panic!("builtin not found: {}", name));
    builtin.invoke(args)
}

fn array(items: &[i64]) -> Object {
    Object::from(items.iter().copied().map(Object::from).collect::<Vec<_>>())
}


#[test]
fn registry_has_all_builtins() {
    let mut names = builtins::names().collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, ["first", "last", "len", "push", "puts", "rest"]);

    assert!(builtins::lookup("print").is_none());
    assert_eq!(builtins::lookup("len").map(|builtin| builtin.name()), Some("len"));
}

#[test]
fn builtin_len() {
    let out = call("len", &[ Object::from("") ]).unwrap();
    assert!(matches!(out, Object::Integer(0)), "unexpected output: {:?}", out);

    let out = call("len", &[ Object::from("four") ]).unwrap();
    assert!(matches!(out, Object::Integer(4)), "unexpected output: {:?}", out);

    // counts bytes
    let out = call("len", &[ Object::from("é") ]).unwrap();
    assert!(matches!(out, Object::Integer(2)), "unexpected output: {:?}", out);

    let out = call("len", &[ array(&[1, 2, 3]) ]).unwrap();
    assert!(matches!(out, Object::Integer(3)), "unexpected output: {:?}", out);

    let error = call("len", &[ Object::from(1) ]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgumentType);
    assert_eq!(error.message(), "argument to `len` not supported, got INTEGER");

    let error = call("len", &[ Object::from("one"), Object::from("two") ]).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::WrongArgumentCount);
    assert_eq!(error.message(), "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_first_last_rest() {
    let items = array(&[1, 2, 3]);

    assert_eq!(call("first", &[ items.clone() ]).unwrap().to_string(), "1");
    assert_eq!(call("last", &[ items.clone() ]).unwrap().to_string(), "3");
    assert_eq!(call("rest", &[ items.clone() ]).unwrap().to_string(), "[2, 3]");
    assert_eq!(call("rest", &[ array(&[1]) ]).unwrap().to_string(), "[]");

    let empty = array(&[]);
    assert!(call("first", &[ empty.clone() ]).unwrap().is_null());
    assert!(call("last", &[ empty.clone() ]).unwrap().is_null());
    assert!(call("rest", &[ empty ]).unwrap().is_null());

    let error = call("first", &[ Object::from(1) ]).unwrap_err();
    assert_eq!(error.message(), "argument to `first` must be ARRAY, got INTEGER");

    let error = call("rest", &[]).unwrap_err();
    assert_eq!(error.message(), "wrong number of arguments. got=0, want=1");
}

#[test]
fn builtin_push_copies_the_array() {
    let items = array(&[1, 2]);
    let out = call("push", &[ items.clone(), Object::from("three") ]).unwrap();

    assert_eq!(out.to_string(), "[1, 2, three]");
    assert_eq!(items.to_string(), "[1, 2]");
    assert!(!out.identical(&items));

    let error = call("push", &[ Object::Null, Object::from(1) ]).unwrap_err();
    assert_eq!(error.message(), "argument to `push` must be ARRAY, got NULL");

    let error = call("push", &[ items ]).unwrap_err();
    assert_eq!(error.message(), "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtin_puts_returns_null() {
    let out = call("puts", &[]).unwrap();
    assert!(out.is_null());

    let out = call("puts", &[ Object::from("hello"), Object::from(1) ]).unwrap();
    assert!(out.is_null());
}
