//! The `lox` command-line interface.

use std::process::ExitCode;

use lox_diagnostic::emitter::ColorMode;
use loxc::commands::{check_file, lex_file, parse_file, repl, run_file};
use loxc::{tracing_setup, DriverError};

fn main() -> ExitCode {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_color(&args).and_then(|(color, rest)| dispatch(&rest, color));

    match result {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(error, DriverError::Usage(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::from(error.exit_code())
        }
    }
}

/// Pull `--color=<mode>` out of the arguments.
fn parse_color(args: &[String]) -> Result<(ColorMode, Vec<&str>), DriverError> {
    let mut color = ColorMode::Auto;
    let mut rest = Vec::with_capacity(args.len());
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value).ok_or_else(|| {
                DriverError::Usage(format!(
                    "invalid color mode '{value}' (expected auto, always, or never)"
                ))
            })?;
        } else {
            rest.push(arg.as_str());
        }
    }
    Ok((color, rest))
}

fn dispatch(args: &[&str], color: ColorMode) -> Result<u8, DriverError> {
    match args {
        [] => repl(color),
        ["help" | "--help" | "-h"] => {
            print_usage();
            Ok(0)
        }
        ["version" | "--version" | "-V"] => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        ["run", path] => run_file(path, color),
        ["lex", path] => lex_file(path, color),
        ["parse", path] => parse_file(path, color),
        ["check", path] => check_file(path, color),
        [command @ ("run" | "lex" | "parse" | "check")] => Err(DriverError::Usage(format!(
            "missing file: lox {command} <file.lox>"
        ))),
        [path] if !path.starts_with('-') => run_file(path, color),
        _ => Err(DriverError::Usage(format!(
            "unrecognized arguments: {}",
            args.join(" ")
        ))),
    }
}

fn print_usage() {
    println!("Lox interpreter");
    println!();
    println!("Usage: lox [--color=auto|always|never] [command]");
    println!();
    println!("Commands:");
    println!("  (none)              Start an interactive prompt");
    println!("  <file.lox>          Run a file");
    println!("  run <file.lox>      Run a file");
    println!("  lex <file.lox>      Print the tokens of a file");
    println!("  parse <file.lox>    Print the syntax tree of a file");
    println!("  check <file.lox>    Report static errors without running");
    println!("  help                Show this message");
    println!("  version             Show the version");
    println!();
    println!("Exit status: 65 static error, 70 runtime error, 74 unreadable file, 64 usage.");
    println!();
    println!("Set LOX_LOG (e.g. LOX_LOG=debug) to trace the pipeline on stderr.");
}
