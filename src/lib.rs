use std::fmt;
use std::error::Error;

#[macro_use]
mod macros;

pub mod utils;

pub mod language;
pub mod lexer;
pub mod parser;

pub mod runtime;
pub mod builtins;
pub mod interpreter;

pub mod frontend;


use parser::{Parser, ParserError};
use parser::ast::Program;

pub use interpreter::{Interpreter, InterpreterOptions};
pub use runtime::Object;


#[derive(Debug)]
pub enum BuildErrors {
    // depending on which stage the build failed
    Syntax(ParserError),
}

impl From<ParserError> for BuildErrors {
    fn from(error: ParserError) -> Self { Self::Syntax(error) }
}

impl Error for BuildErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
        }
    }
}

impl fmt::Display for BuildErrors {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(error) => write!(fmt, "{}", error),
        }
    }
}


/// Produce AST from source text
pub fn parse_source(source: &str) -> Result<Program, ParserError> {
    log::debug!("parsing {} bytes of source", source.len());

    let program = Parser::new(source).parse_program()?;

    log::debug!("parsed {} statements", program.statements().len());
    Ok(program)
}

/// Parse and evaluate source text. Runtime failures are returned as `Object::Error`.
pub fn eval_source(interpreter: &mut Interpreter, source: &str) -> Result<Object, BuildErrors> {
    let program = parse_source(source)?;
    Ok(interpreter.eval_program(&program))
}


pub fn print_build_errors(errors: &BuildErrors, source: &str) {
    match errors {
        BuildErrors::Syntax(error) => {
            println!("{}", frontend::render_parser_error(error, source));
        }
    }
}
