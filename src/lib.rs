//! `lilarg` is a minimal command line parser for Rust, in the style of python's `argparse`.
//!
//! `lilarg` deliberately keeps a small surface.
//! It prioritizes the following design concerns:
//! * *Typed handles*:
//! Each registered argument is read back through a typed handle (`FlagArg`, `IntArg`, `StringArg`), rather than by name.
//! * *Argument vs. option paradigm*:
//! Arguments are required parameters specified positionally on the Cli.
//! Options are optional parameters specified via `--NAME` or `-N` syntax.
//! * *Familiar UX*:
//! The usage, help, and error messages follow the layout of python's `argparse`, byte for byte.
//! * *No I/O*:
//! The parser never prints nor exits; the caller decides what to do with the rendered message.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/cli_test.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ cli_test -h
//! usage: cli_test [-h] [-f FIRST] [-s SECOND] input output
//!
//! positional arguments:
//!   input                 input file
//!   output                output file
//!
//! optional arguments:
//!   -h, --help            show this help message and exit
//!   -f FIRST, --first FIRST
//!                         first int optional argument
//!   -s SECOND, --second SECOND
//!                         second string optional argument
//!
//! $ cli_test a b -f 3
//! input: 'a'
//! output: 'b'
//! first: 3
//! second: 'default'
//!
//! $ cli_test a
//! usage: cli_test [-h] [-f FIRST] [-s SECOND] input output
//! cli_test: error: the following arguments are required: output
//!
//! $ cli_test a b --third
//! usage: cli_test [-h] [-f FIRST] [-s SECOND] input output
//! cli_test: error: unrecognized arguments: --third
//! ```
//!
//! # Builder Api
//! Configure `lilarg` by starting with an [`ArgumentParser`] and `add`ing arguments.
//! The keyword passed to `add` selects the kind of argument:
//! * `--NAME` registers an option by its long form.
//! * `-N` registers an option by its short form.
//! * Anything else registers a positional argument (including the lone `-`).
//!
//! The handle type selects the value type:
//! * [`FlagArg`]: an option taking no value; its value is whether it was specified.
//! * [`IntArg`]: a base-10 integer (`i64`).
//! Parsing is permissive: leading ASCII whitespace and a sign are accepted, the scan stops at the first non-digit, and out of range values saturate.
//! Non-numeric input reads as `0`; it is never an error.
//! * [`StringArg`]: text, borrowed from the Cli input (`&'a str`).
//!
//! Options may be given their other form via [`ArgumentParser::set_alt`], and every argument may be documented via [`ArgumentParser::set_help`].
//! Integer and string arguments report a default value when not specified ([`ArgumentParser::set_default`]).
//!
//! ```
//! use lilarg::{ArgumentParser, FlagArg, IntArg, ParseStatus, StringArg};
//!
//! let mut parser = ArgumentParser::new().unwrap();
//! let path: StringArg = parser.add("path").unwrap();
//! let depth: IntArg = parser.add("--depth").unwrap();
//! parser.set_alt(depth, "-d");
//! parser.set_default(depth, 3);
//! let verbose: FlagArg = parser.add("-v").unwrap();
//!
//! let args = ["walk", "/tmp", "-v"];
//! assert_eq!(parser.parse(&args).unwrap(), ParseStatus::Ok);
//! assert_eq!(parser.value(path), "/tmp");
//! assert_eq!(parser.value(depth), 3);
//! assert!(parser.value(verbose));
//! ```
//!
//! # Cli Semantics
//! `lilarg` parses the Cli tokens according to the following set of rules.
//!
//! * The first token is the program name, used in the rendered messages.
//! * A token directly following a value-taking option is always its value, even if it looks like an option.
//! For example, `--name -v` assigns `-v` to `--name`.
//! * Options are matched by their exact `--NAME` or `-N` keyword.
//! An unknown keyword stops the parse with an *unrecognized arguments* error.
//! * Any other token fills the next positional argument, in registration order.
//! Surplus positional tokens are silently discarded.
//! * Every positional argument is required; any left unfilled produce a *required* error.
//! * The `-h, --help` flag produces [`ParseStatus::Help`], taking precedence over missing positional arguments.
//! * A value-taking option at the very end of the Cli (missing its value) stays unfilled.
//!
//! Unsupported by design: `--NAME=VALUE`, combined short flags (`-abc`), repeated arguments, and sub-commands.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for parser internals.
pub use lilarg_builder::*;
