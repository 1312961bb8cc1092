//! Interactive demo: wires a small registry to stdin.
//!
//! Runs one scripted line first so the output is useful even without a
//! terminal, then interprets lines until EOF. Try `help`, or:
//!
//! ```text
//! print_args --int_arg 123 --float_arg 2.5 --string_arg "hello from stdin"
//! ```

use core::cell::Cell;
use core::fmt;
use std::io::{self, BufRead};

use cli_core::{ArgSpec, CliEngine, Command, StrCell};

const MAX_TOKEN_LEN: usize = 128;

/// `core::fmt::Write` adapter over stdout for the engine's sink.
struct StdoutSink;

impl fmt::Write for StdoutSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{s}");
        Ok(())
    }
}

fn main() {
    let int_value = Cell::new(0i32);
    let float_value = Cell::new(0f32);
    let string_value = StrCell::<MAX_TOKEN_LEN>::new();

    let print_args = || {
        println!("Received arguments:");
        println!("  --int_arg: {}", int_value.get());
        println!("  --float_arg: {}", float_value.get());
        println!("  --string_arg: {}", string_value.get());
    };

    let args = [
        ArgSpec::int("--int_arg", &int_value),
        ArgSpec::float("--float_arg", &float_value),
        ArgSpec::string("--string_arg", &string_value),
    ];
    let commands = [Command { name: "print_args", handler: Some(&print_args), args: &args }];

    let mut engine = CliEngine::<_, MAX_TOKEN_LEN>::new(StdoutSink);
    engine.register(&commands);

    let scripted = "print_args --int_arg 123 --float_arg 2.5 --string_arg \"hello from example\"";
    println!("Processing command: {scripted}");
    engine.process(scripted);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        engine.process(line.trim_end_matches(['\r', '\n']));
    }
}
