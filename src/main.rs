use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use cde::{
    error::Diagnostics,
    execute,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
};
use clap::{Parser, error::ErrorKind};
use log::{error, info, warn};

const EXIT_USAGE: u8 = 64;
const EXIT_SYNTAX: u8 = 65;
const EXIT_RUNTIME: u8 = 70;
const EXIT_NO_INPUT: u8 = 72;

/// cde runs programs written in CODE, a small block-structured teaching
/// language.
///
/// Without a source file an interactive prompt is started. Type a program
/// between a `BEGIN CODE` line and an `END CODE` line to run it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CODE program to run.
    source: Option<PathBuf>,

    /// Parse the program and print its syntax tree instead of running it.
    #[arg(long)]
    print_ast: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(usage) => {
            let code = match usage.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            if let Err(failure) = usage.print() {
                error!("failed to print usage: {failure}");
            }
            return ExitCode::from(code);
        },
    };

    match &args.source {
        Some(path) => run_file(path, args.print_ast),
        None => run_prompt(args.print_ast),
    }
}

fn run_file(path: &Path, print_ast: bool) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(failure) => {
            eprintln!("Failed to read the source file '{}': {failure}", path.display());
            return ExitCode::from(EXIT_NO_INPUT);
        },
    };
    info!("running {}", path.display());

    let mut diagnostics = Diagnostics::new();
    if print_ast {
        print_syntax_tree(&source, &mut diagnostics);
    } else {
        let stdin = io::stdin();
        let mut interpreter = Interpreter::new(stdin.lock(), io::stdout());
        execute(&source, &mut interpreter, &mut diagnostics);
    }
    report(&diagnostics);

    if diagnostics.has_syntax_error() {
        ExitCode::from(EXIT_SYNTAX)
    } else if diagnostics.has_runtime_error() {
        ExitCode::from(EXIT_RUNTIME)
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads programs from standard input, one `BEGIN CODE` ... `END CODE`
/// block at a time, and runs each with a fresh interpreter.
fn run_prompt(print_ast: bool) -> ExitCode {
    println!("cde {} interactive prompt", env!("CARGO_PKG_VERSION"));
    println!("Enter a program between BEGIN CODE and END CODE. Type exit to quit.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut diagnostics = Diagnostics::new();
    let mut block: Option<String> = None;

    loop {
        prompt(if block.is_some() { "... " } else { ">>> " });

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            },
            Err(failure) => {
                eprintln!("Failed to read from standard input: {failure}");
                return ExitCode::from(EXIT_NO_INPUT);
            },
            Ok(_) => {},
        }
        let command = line.trim();

        match block.as_mut() {
            None if command == "exit" || command == "quit" => return ExitCode::SUCCESS,
            None if command == "BEGIN CODE" => block = Some(line),
            None => {},
            Some(source) => {
                source.push_str(&line);
                if command == "END CODE"
                   && let Some(source) = block.take()
                {
                    run_block(&source, print_ast, &mut input, &mut diagnostics);
                }
            },
        }
    }
}

/// Runs one submitted block. `SCAN` reads from the lines typed after it.
fn run_block(source: &str,
             print_ast: bool,
             input: &mut impl BufRead,
             diagnostics: &mut Diagnostics) {
    if print_ast {
        print_syntax_tree(source, diagnostics);
    } else {
        let mut interpreter = Interpreter::new(input, io::stdout());
        execute(source, &mut interpreter, diagnostics);
    }
    report(diagnostics);
    diagnostics.clear();
}

fn print_syntax_tree(source: &str, diagnostics: &mut Diagnostics) {
    let tokens = scan(source, diagnostics);
    if let Some(statements) = parse(&tokens, diagnostics)
       && !diagnostics.has_syntax_error()
    {
        for statement in &statements {
            println!("{statement}");
        }
    }
}

fn report(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}

fn prompt(text: &str) {
    print!("{text}");
    if let Err(failure) = io::stdout().flush() {
        warn!("failed to flush the prompt: {failure}");
    }
}
