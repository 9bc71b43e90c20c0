use std::io::{self, Write};
use clap::{Command, Arg, ArgMatches};

use golem::{Interpreter, InterpreterOptions, Object};
use golem::frontend;
use golem::language;


fn main() {
    env_logger::init();

    let app = Command::new("golem")
        .version(clap::crate_version!())
        .about("An interpreter for the Golem scripting language")
        .arg(
            Arg::new("cmd")
            .short('c')
            .help("Execute a snippet then exit")
            .value_name("CMD")
        )
        .arg(
            Arg::new("parse_only")
            .short('P')
            .help("Parse and print AST instead of executing")
        )
        .arg(
            Arg::new("max_depth")
            .long("max-depth")
            .help("Limit on nested function calls")
            .value_name("N")
        );

    let version = app.get_version().unwrap_or_default().to_string();
    let args = app.get_matches();

    let options = match interpreter_options(&args) {
        Ok(options) => options,
        Err(message) => {
            println!("{}", message);
            std::process::exit(2);
        },
    };

    match args.value_of("cmd") {
        Some(source) if args.is_present("parse_only") => parse_and_print_ast(source),
        Some(source) => {
            let mut interpreter = Interpreter::with_options(options);
            if !execute(&mut interpreter, source) {
                std::process::exit(1);
            }
        },
        None => {
            println!("\nGolem Version {}\n", version);
            Repl::new(options, args.is_present("parse_only")).run();
        },
    }
}

fn interpreter_options(args: &ArgMatches) -> Result<InterpreterOptions, String> {
    let mut options = InterpreterOptions::new();

    if let Some(depth) = args.value_of("max_depth") {
        let depth = depth.parse::<usize>()
            .map_err(|_| format!("Invalid value for --max-depth: \"{}\"", depth))?;
        options = options.set_max_call_depth(depth);
    }

    log::debug!("max call depth: {} (default {})", options.max_call_depth(), language::DEFAULT_MAX_CALL_DEPTH);
    Ok(options)
}

// returns false if the source could not be built or evaluation failed
fn execute(interpreter: &mut Interpreter, source: &str) -> bool {
    match golem::eval_source(interpreter, source) {
        Err(errors) => {
            golem::print_build_errors(&errors, source);
            false
        },

        Ok(Object::Error(error)) => {
            println!("{}", frontend::render_runtime_error(&error));
            false
        },

        Ok(value) => {
            println!("{}", value);
            true
        },
    }
}

fn parse_and_print_ast(source: &str) {
    match golem::parse_source(source) {
        Ok(program) => print!("{}", program),
        Err(error) => println!("{}", frontend::render_parser_error(&error, source)),
    }
}


//////// REPL ////////


const PROMPT_START: &str = ">>> ";
const PROMPT_CONTINUE: &str = "... ";

struct Repl {
    interpreter: Interpreter,
    parse_only: bool,
}

enum ReadLine {
    Ok(String),
    Empty,
    Restart,
    Quit,
}

impl Repl {
    pub fn new(options: InterpreterOptions, parse_only: bool) -> Self {
        Self {
            interpreter: Interpreter::with_options(options),
            parse_only,
        }
    }

    fn read_line(&self, prompt: &'static str) -> ReadLine {
        let mut stdout = io::stdout();
        if stdout.write_all(prompt.as_bytes()).and_then(|_| stdout.flush()).is_err() {
            return ReadLine::Quit;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            // end of input
            Ok(0) => return ReadLine::Quit,
            Ok(_) => { },
            Err(error) => {
                println!("Could not read input: {}", error);
                return ReadLine::Restart;
            },
        }

        let input = input.trim_end();

        if input.is_empty() {
            return ReadLine::Empty;
        }

        if input == "quit" || input.contains('\x04') {
            return ReadLine::Quit;
        }

        ReadLine::Ok(input.to_string())
    }

    pub fn run(&mut self) {
        loop {
            let mut input = String::new();

            loop {
                let prompt =
                    if input.is_empty() { PROMPT_START }
                    else { PROMPT_CONTINUE };

                match self.read_line(prompt) {
                    ReadLine::Quit => return,
                    ReadLine::Restart => continue,
                    ReadLine::Empty => {
                        if input.is_empty() { continue }
                        else { break }
                    },
                    ReadLine::Ok(line) => {
                        input.push_str(&line);

                        // If we can't parse the input without errors, then we assume we need to continue
                        if line.ends_with(';') || golem::parse_source(&input).is_ok() {
                            break
                        }

                        input.push('\n')
                    }
                }
            }

            if self.parse_only {
                parse_and_print_ast(&input);
            } else {
                execute(&mut self.interpreter, &input);
            }
        }
    }
}
