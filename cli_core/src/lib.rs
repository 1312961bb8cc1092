#![no_std]

//! # cli_core
//!
//! A zero-allocation, line-oriented command interpreter for embedded or
//! constrained environments. Given one text line it matches a registered
//! command, extracts named typed arguments (`--flag value`), writes each
//! parsed value into caller-owned storage and invokes a zero-argument
//! handler.
//!
//! - No heap: all scratch space is an index cursor over the borrowed input
//!   line; string targets are fixed-capacity `heapless` buffers.
//! - Token capacity is a const generic (`MAX`); the longest representable
//!   token is `MAX - 1` characters, overlong tokens are silently clipped.
//! - One user-visible failure path (incomplete arguments), reported on the
//!   injected output sink; everything else fails silently by design.
//!
//! ```no_run
//! use core::cell::Cell;
//! use cli_core::{ArgSpec, CliEngine, Command, StrCell};
//!
//! let level = Cell::new(0i32);
//! let name = StrCell::<64>::new();
//! let apply = || { /* read `level` and `name` here */ };
//!
//! let args = [
//!     ArgSpec::int("--level", &level),
//!     ArgSpec::string("--name", &name),
//! ];
//! let commands = [Command { name: "set", handler: Some(&apply), args: &args }];
//!
//! let mut engine = CliEngine::<_, 64>::new(heapless::String::<256>::new());
//! engine.register(&commands);
//! engine.process("set --level 3 --name \"lab bench\"");
//! ```

pub mod command;
pub mod engine;
pub mod token;
mod value;

pub use command::{ArgSpec, ArgTarget, Command, StrCell};
pub use engine::CliEngine;
