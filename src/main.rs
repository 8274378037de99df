use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use arithmetic_engine::{
    parse,
    service::{
        DEFAULT_MAX_EXPRESSION_LENGTH, EvaluatorService, Response, ServiceConfig, Status,
    },
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// calc evaluates arithmetic expressions built from numbers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print each result as a JSON response envelope.
    #[arg(short, long)]
    json: bool,

    /// Reject expressions longer than this many characters.
    #[arg(long, env = "CALC_MAX_LENGTH", default_value_t = DEFAULT_MAX_EXPRESSION_LENGTH)]
    max_length: usize,

    /// Accept expressions of any length.
    #[arg(long)]
    no_length_limit: bool,

    /// Print the parsed expression tree before each result.
    #[arg(long, conflicts_with = "json")]
    print_ast: bool,

    /// Evaluate `2+2`, print the response and exit.
    #[arg(long)]
    health_check: bool,

    /// Expressions to evaluate. Read one per line from stdin if none are given.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls the log level, warnings and errors by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    let max_expression_length = (!args.no_length_limit).then_some(args.max_length);
    let service = EvaluatorService::new(ServiceConfig { max_expression_length });

    if args.health_check {
        return exit_code(report(&service.health_check(), args.json));
    }

    let mut failed = false;
    if args.expressions.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Failed to read from stdin: {e}");
                    return ExitCode::FAILURE;
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            failed |= !run(&service, &line, &args);
        }
    } else {
        for expression in &args.expressions {
            failed |= !run(&service, expression, &args);
        }
    }

    exit_code(!failed)
}

const fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Evaluates one expression and prints its outcome. Returns whether it
/// succeeded.
fn run(service: &EvaluatorService, expression: &str, args: &Args) -> bool {
    if args.print_ast
       && service.check_length(expression).is_ok()
       && let Ok(ast) = parse(expression)
    {
        println!("{ast}");
    }

    report(&service.evaluate(expression), args.json)
}

/// Prints a response, either as JSON on stdout or as plain text. Returns
/// whether the response reports success.
fn report(response: &Response, json: bool) -> bool {
    if json {
        match serde_json::to_string(response) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Failed to serialize the response: {e}");
                return false;
            },
        }
    } else {
        match (response.status, response.result, &response.message) {
            (Status::Ok, Some(result), Some(message)) => println!("{result} ({message})"),
            (Status::Ok, Some(result), None) => println!("{result}"),
            (_, _, message) => eprintln!("error: {}", message.as_deref().unwrap_or("unknown")),
        }
    }

    response.status == Status::Ok
}
