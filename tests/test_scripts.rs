use std::fs;
use std::path::Path;

use golem::{Interpreter, InterpreterOptions, Object};


fn eval_script(path: &Path, options: InterpreterOptions) -> Object {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => panic!("could not read script \"{}\": {}", path.display(), error),
    };

    let mut interpreter = Interpreter::with_options(options);
    match golem::eval_source(&mut interpreter, &source) {
        Ok(value) => value,
        Err(errors) => {
            golem::print_build_errors(&errors, &source);
            panic!("script \"{}\" failed to build", path.display());
        },
    }
}

fn run_test_script(path: &Path, expected: &str) {
    let value = eval_script(path, InterpreterOptions::default());
    if let Some(error) = value.as_error() {
        panic!("script \"{}\" raised an error: {}", path.display(), error);
    }
    assert_eq!(value.to_string(), expected);
}

fn run_error_script(path: &Path, expected_message: &str) {
    let value = eval_script(path, InterpreterOptions::default());
    match value.as_error() {
        Some(error) => assert_eq!(error.message(), expected_message),
        None => panic!("script \"{}\" should have raised an error, got: {}", path.display(), value),
    }
}

macro_rules! test_script {
    ($name:tt, $path:expr, $expected:expr) => {
        #[test_log::test]
        fn $name() {
            run_test_script(Path::new($path), $expected)
        }
    };
}

macro_rules! test_error_script {
    ($name:tt, $path:expr, $message:expr) => {
        #[test_log::test]
        fn $name() {
            run_error_script(Path::new($path), $message)
        }
    };
}


test_script!(empty_file, "tests/scripts/empty_file.gm", "null");
test_script!(precedence, "tests/scripts/precedence.gm", "[14, 20, 4, 6, true, true]");
test_script!(strings, "tests/scripts/strings.gm", "[Hello, World!, 8, say \"hi\", true, true]");

mod function_tests {
    use super::*;

    test_script!(closures, "tests/scripts/functions/closures.gm", "[8, 13, 2]");
    test_script!(recursion, "tests/scripts/functions/recursion.gm", "[120, 3628800, 55]");
    test_script!(higher_order, "tests/scripts/functions/higher_order.gm", "[[2, 4, 6, 8], 20]");
}

mod collection_tests {
    use super::*;

    test_script!(arrays, "tests/scripts/collections/arrays.gm", "[3, 4, Anna, Dave, [Carol, Dave], Bob, null]");
    test_script!(hashes, "tests/scripts/collections/hashes.gm", "[Anna, 31, yes, one, null, {1: one, true: yes, age: 30, name: Anna}]");
}

mod control_tests {
    use super::*;

    test_script!(if_else, "tests/scripts/control/if_else.gm", "[negative, zero, positive, null]");
    test_script!(while_loop, "tests/scripts/control/while.gm", "[[3, 2, 1], 2, -1]");
}

mod error_tests {
    use super::*;

    test_error_script!(type_mismatch, "tests/scripts/errors/type_mismatch.gm", "type mismatch: INTEGER + STRING");
    test_error_script!(unknown_identifier, "tests/scripts/errors/unknown_identifier.gm", "identifier not found: y");
    test_error_script!(runaway_recursion, "tests/scripts/errors/runaway_recursion.gm", "maximum call depth exceeded (1024)");

    #[test_log::test]
    fn runaway_recursion_with_lower_limit() {
        let options = InterpreterOptions::new().set_max_call_depth(16);
        let value = eval_script(Path::new("tests/scripts/errors/runaway_recursion.gm"), options);
        assert_eq!(value.to_string(), "ERROR: maximum call depth exceeded (16)");
    }
}
