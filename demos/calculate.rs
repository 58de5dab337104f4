//! Evaluate a formula given on the command line.
//!
//! ```text
//! cargo run --example calculate -- "2 * x + sin(y)" x=3 y=0.5
//! RUST_LOG=formulator=trace cargo run --example calculate -- "2 ^ 3 ^ 2"
//! ```

use formulator::{missing_variables, Calculator, Options, VariableMap};
use log::warn;
use std::env;
use std::process;

fn parse_assignment(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", arg))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{}': {}", name, e))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let formula = match args.next() {
        Some(formula) => formula,
        None => {
            eprintln!("usage: calculate <formula> [name=value ...]");
            process::exit(2);
        }
    };

    let mut variables = VariableMap::new();
    for arg in args {
        match parse_assignment(&arg) {
            Ok((name, value)) => {
                variables.insert(name, value);
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(2);
            }
        }
    }

    for name in missing_variables(&formula, &variables) {
        warn!("variable '{}' is not defined, using 0", name);
    }

    let options = if env::var_os("FORMULATOR_STRICT").is_some() {
        Options::new().strict()
    } else {
        Options::new()
    };

    match Calculator::new(options).evaluate(&formula, &variables) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => {
            eprintln!("Invalid formula. Please check your input. ({})", err);
            process::exit(1);
        }
    }
}
