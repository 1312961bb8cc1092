//! Registration, dispatch and help rendering.
//!
//! `CliEngine` is the explicit engine object: it owns the output sink,
//! borrows the registry and carries no other state, so independent engines
//! can coexist (one per UART, one per test). Processing is synchronous and
//! non-reentrant; handlers must not call back into `process`.

use core::fmt::Write;

use crate::command::Command;
use crate::token::Cursor;

/// Line interpreter over a borrowed command registry.
///
/// `MAX` is the scratch capacity: the longest representable token is
/// `MAX - 1` bytes, longer tokens are silently clipped before matching and
/// binding. `W` is the sink receiving help listings and diagnostics; write
/// errors are ignored, the engine never reports an error to the caller.
pub struct CliEngine<'r, W: Write, const MAX: usize> {
    sink: W,
    commands: &'r [Command<'r, MAX>],
}

impl<'r, W: Write, const MAX: usize> CliEngine<'r, W, MAX> {
    /// Creates an engine with an empty registry.
    pub fn new(sink: W) -> Self {
        Self { sink, commands: &[] }
    }

    /// Read access to the sink, mainly for inspecting captured output.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Installs `commands`, replacing any prior registry, and renders the
    /// full help listing as a discoverability side effect.
    ///
    /// An empty slice is a no-op: the prior registry stays installed and
    /// nothing is printed. Names are not validated; with duplicates the
    /// first entry wins.
    pub fn register(&mut self, commands: &'r [Command<'r, MAX>]) {
        if commands.is_empty() {
            return;
        }
        self.commands = commands;
        self.render_help();
    }

    /// Interprets one line: matches the leading token against the registry,
    /// binds `--flag value` pairs into their targets and, when every
    /// declared argument was supplied, invokes the handler.
    ///
    /// Unknown commands and unknown argument tokens are dropped silently.
    /// The only diagnostic is the incomplete-arguments message, written to
    /// the sink together with the help listing.
    pub fn process(&mut self, line: &str) {
        // Built-in, checked before any tokenization; not a registry entry.
        if line == "help" {
            self.render_help();
            return;
        }

        let limit = MAX.saturating_sub(1);
        let mut cursor = Cursor::new(line);

        let name = cursor.bare_token(limit);
        let Some(command) = self.commands.iter().find(|c| c.name == name) else {
            return;
        };

        let mut matched = 0;
        loop {
            cursor.skip_spaces();
            if cursor.at_end() {
                break;
            }
            let arg_name = cursor.bare_token(limit);
            let Some(spec) = command.args.iter().find(|a| a.name == arg_name) else {
                // Unknown argument name: one token eaten, nothing bound.
                continue;
            };
            cursor.skip_spaces();
            spec.target.bind(&mut cursor);
            matched += 1;
        }

        if matched == command.args.len() {
            if let Some(handler) = command.handler {
                handler();
            }
        } else {
            let _ = writeln!(
                self.sink,
                "Error: Incomplete arguments for command '{}'",
                command.name
            );
            self.render_help();
        }
    }

    /// Writes the command listing: one line per registered command with its
    /// argument names and type annotations, plus the built-in `help`.
    fn render_help(&mut self) {
        let _ = writeln!(self.sink, "Commands:");
        for command in self.commands {
            let _ = write!(self.sink, "  {}", command.name);
            for arg in command.args {
                let _ = write!(self.sink, " {} {}", arg.name, arg.target.annotation());
            }
            let _ = writeln!(self.sink);
        }
        let _ = writeln!(self.sink, "  help");
    }
}
