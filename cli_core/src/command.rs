//! Caller-owned command and argument descriptors.
//!
//! The engine borrows everything defined here; registry entries, argument
//! specs and their targets must outlive the registration. Targets use
//! interior mutability so the engine can store values through the shared
//! registry borrow while handlers read them back.

use core::cell::{Cell, RefCell};
use heapless::String;

/// Fixed-capacity string cell written by the engine and read by handlers.
///
/// `MAX` is the same constant the owning `CliEngine` is instantiated with,
/// so a target too small for the configured token length is a type error
/// rather than a buffer overflow.
#[derive(Debug, Default)]
pub struct StrCell<const MAX: usize> {
    buf: RefCell<String<MAX>>,
}

impl<const MAX: usize> StrCell<MAX> {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self { buf: RefCell::new(String::new()) }
    }

    /// Returns a copy of the stored text.
    pub fn get(&self) -> String<MAX> {
        self.buf.borrow().clone()
    }

    /// Replaces the stored text. The token is already clipped to
    /// `MAX - 1` characters by the tokenizer, so capacity always suffices.
    pub(crate) fn set(&self, token: &str) {
        let mut buf = self.buf.borrow_mut();
        buf.clear();
        let _ = buf.push_str(token);
    }
}

/// Where a parsed argument value is stored.
///
/// The variant doubles as the argument's type: the binder consumes a bare
/// token for the numeric variants and a bare-or-quoted token for `Str`.
#[derive(Debug, Clone, Copy)]
pub enum ArgTarget<'a, const MAX: usize> {
    /// Signed integer cell; malformed input binds 0.
    Int(&'a Cell<i32>),
    /// Single-precision float cell; malformed input binds 0.0.
    Float(&'a Cell<f32>),
    /// Fixed-capacity string buffer.
    Str(&'a StrCell<MAX>),
}

impl<const MAX: usize> ArgTarget<'_, MAX> {
    /// Type annotation shown by the help listing.
    pub(crate) fn annotation(&self) -> &'static str {
        match self {
            ArgTarget::Int(_) => "<int>",
            ArgTarget::Float(_) => "<float>",
            ArgTarget::Str(_) => "<string>",
        }
    }
}

/// One named argument of a command: a `--flag`-style key and the storage
/// its value is written to.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec<'a, const MAX: usize> {
    pub name: &'a str,
    pub target: ArgTarget<'a, MAX>,
}

impl<'a, const MAX: usize> ArgSpec<'a, MAX> {
    /// Integer argument writing into `target`.
    pub const fn int(name: &'a str, target: &'a Cell<i32>) -> Self {
        Self { name, target: ArgTarget::Int(target) }
    }

    /// Float argument writing into `target`.
    pub const fn float(name: &'a str, target: &'a Cell<f32>) -> Self {
        Self { name, target: ArgTarget::Float(target) }
    }

    /// String argument writing into `target`.
    pub const fn string(name: &'a str, target: &'a StrCell<MAX>) -> Self {
        Self { name, target: ArgTarget::Str(target) }
    }
}

/// A registered command.
///
/// `name` is matched against the first token of the line; duplicates are
/// not rejected, the first registry entry wins. `handler` runs only when
/// every declared argument was supplied; `None` is a no-op handler.
/// Argument order matters only for the help listing.
#[derive(Clone, Copy)]
pub struct Command<'a, const MAX: usize> {
    pub name: &'a str,
    pub handler: Option<&'a dyn Fn()>,
    pub args: &'a [ArgSpec<'a, MAX>],
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_str_cell_starts_empty() {
        let cell = StrCell::<16>::new();
        assert_eq!(cell.get().as_str(), "");
    }

    #[test]
    fn test_str_cell_set_replaces_content() {
        let cell = StrCell::<16>::new();
        cell.set("first");
        cell.set("second");
        assert_eq!(cell.get().as_str(), "second");
    }

    #[test]
    fn test_annotations_per_variant() {
        let int_cell = Cell::new(0i32);
        let float_cell = Cell::new(0f32);
        let str_cell = StrCell::<16>::new();

        assert_eq!(ArgSpec::<16>::int("--a", &int_cell).target.annotation(), "<int>");
        assert_eq!(ArgSpec::<16>::float("--b", &float_cell).target.annotation(), "<float>");
        assert_eq!(ArgSpec::string("--c", &str_cell).target.annotation(), "<string>");
    }
}
