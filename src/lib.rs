//! `cliscan` is a command line parser that binds options, positional arguments and sub-commands onto variables you own.
//!
//! The parser never allocates your values.
//! Instead, each parameter holds a `&mut` handle onto a variable, and parsing writes straight through it.
//! `cliscan` prioritizes the following design concerns:
//! * *Typed bindings*:
//! Every destination type knows how to scan itself from the Cli tokens (see [Scan](./prelude/trait.Scan.html)).
//! This covers text, booleans, integers, floats, comma separated sequences, fixed size arrays and small tuples.
//! * *Familiar syntax*:
//! `--name value`, `--name=value`, `-n value`, `-nvalue`, `-n=value` and clusters such as `-abc5` all bind the same way.
//! * *Sub-commands*:
//! A command may host named sub-commands, selected (case-insensitively) by the leading tokens.
//! * *Repeatable parsing*:
//! Each parse first restores the resolved command's variables to their defaults, so a built parser may be evaluated any number of times.
//!
//! # Usage
//! This page includes a few demos on using `cliscan`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/derived.rs")]
//! ```
//!
//! ```console
//! $ derived -h
//! Usage: derived [options] [command] ...
//!
//! Inspect and copy a collection of files.
//!
//! Options:
//!   -h, --help Show this help message and exit.
//!
//! Commands:
//!   copy      Copy the files into a directory.
//!   list      List the files.
//!
//! $ derived copy -h
//! Usage: derived copy [options] destination sources...
//!
//! Copy the files into a directory.
//!
//! Options:
//!       --dry-run         Only show what would be copied.
//!   -h, --help            Show this help message and exit.
//!   -n, --attempts=1 uint The number of attempts per file.
//!
//! Arguments:
//!   destination  The destination directory.
//!   sources      The files to copy.
//!
//! $ derived copy --dry-run out a.txt b.txt
//! Would copy 'a.txt' into 'out' (1 attempts).
//! Would copy 'b.txt' into 'out' (1 attempts).
//! ```
//!
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/fraction.rs")]
//! ```
//!
//! ```console
//! $ fraction -h
//! Usage: fraction [options] value
//!
//! Scale a value by a fraction.
//!
//! Options:
//!   -h, --help               Show this help message and exit.
//!   -p, --precision=2 uint   The number of decimal places to print.
//!   -r, --ratio=1/1 fraction The fraction to scale by (ex: '3/4' or '3 / 4').
//!
//! Arguments:
//!   value     The value to scale.
//!
//! $ fraction --ratio 3 / 4 10
//! 7.50
//!
//! $ fraction -r3/4 abc
//! Parse error: argument 0 'value': cannot convert 'abc' to f64.
//! Usage: fraction [options] value
//! ```
//!
//! # Builder Api
//! Configure `cliscan` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are three classes of parameters:
//! * [`Parameter::option`]: matched by `--NAME` (case-insensitive) or the short name `-N`.
//! * [`Parameter::argument`]: matched by position, from index 0.
//! Indices must be contiguous within a command.
//! * [`Parameter::rest`]: captures every positional token beyond the last argument.
//!
//! Each option or argument takes a *binding*:
//! * [`Scalar`]: binds any [Scan](./prelude/trait.Scan.html) type.
//! The variable's initial value is its default, unless one is declared via [`Parameter::default`].
//! * [`Custom`]: binds any [ArgumentScanner](./prelude/trait.ArgumentScanner.html), which scans the raw tokens itself.
//! [`Count`] and [`Append`] are provided out of the box.
//!
//! Sub-commands are configured via [`CommandLineParser::command`].
//! When the leading tokens name a sub-command, parsing descends into it and only its variables are bound.
//!
//! # Cli Semantics
//! * Every token after `--` is positional.
//! Empty tokens are dropped, while a lone `-` is positional.
//! * A `bool` option without a recognizable value (ex: `--verbose` or `--verbose=maybe`) is set to `true`.
//! Otherwise the following token is consumed when it is a boolean literal (ex: `--verbose false`).
//! * Sequences are comma separated, and may be split at any comma across tokens (ex: `--sizes 1, 2 ,3`).
//! * In a short cluster (ex: `-abc5`), each option takes what remains of the cluster as its value.
//! When it consumes that value the cluster ends, otherwise the next character is treated as an option.
//! * Positional tokens nothing absorbs are an error during [`Command::evaluate`].
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while configuring and parsing.
#![deny(missing_docs)]
pub mod derive;

pub use cliscan_builder::*;
