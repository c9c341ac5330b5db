//! Derive Api for `cliscan` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(Default, CliParser)]`.
//! This generates:
//! * `impl CliTarget for S`, which adds the fields of `S` to a [`CommandLineParser`].
//! * `S::cli_parse() -> (S, Vec<String>)`, which parses the Cli into a new `S`, alongside the names of the invoked command path.
//!
//! Bring the macro and the items its expansion refers to into scope via `use cliscan::derive::*;`.
//!
//! ```
//! use cliscan::derive::*;
//!
//! #[derive(Debug, Default, CliParser)]
//! #[cliscan(program = "demo")]
//! struct Parameters {
//!     #[cliscan(short = 'v')]
//!     verbose: bool,
//!     #[cliscan(index = 0)]
//!     count: u32,
//! }
//!
//! let mut parameters = Parameters::default();
//! let mut command = parameters
//!     .setup(CommandLineParser::new("demo"))
//!     .build();
//! command.evaluate(&["-v", "3"]).unwrap();
//! drop(command);
//!
//! assert!(parameters.verbose);
//! assert_eq!(parameters.count, 3);
//! ```
//!
//! ### Parser Configuration
//! The struct may be configured with `#[cliscan(..)]`:
//! * `program = ".."` names the program in `cli_parse` (default: `env!("CARGO_CRATE_NAME")`).
//! * `about = ".."` documents the command ([`CommandLineParser::about`]).
//! * `dispatch_only` marks the command as a pure grouping of sub-commands ([`CommandLineParser::dispatch_only`]).
//!
//! ### Parameter Configuration
//! Every field is an option named after the field, in kebab-case (ex: `dry_run` is `--dry-run`).
//! The following field attributes adjust this:
//! * `name = ".."` renames the parameter.
//! * `short = 'c'` sets the short name of an option.
//! * `index = N` makes the field the positional argument at index `N`.
//! * `rest` makes the field (a `Vec<String>`) capture every positional token beyond the last argument.
//! * `scanner` binds the field via [`Custom`] rather than [`Scalar`]; the field must implement [ArgumentScanner](../prelude/trait.ArgumentScanner.html).
//! * `command = ".."` makes the field a sub-command; the field's type must also be instrumented with `CliParser`.
//! * `help = ".."` documents the parameter (or the sub-command).
//! * `default = ".."` declares the default in its Cli representation ([`Parameter::default`]).
//! * `skip` leaves the field off the Cli.
//!
//! Incompatible combinations are compile errors:
//! `rest` with `index`, `short`, `default` or `scanner`;
//! `command` with anything but `help`;
//! `index` with `short`;
//! `skip` with anything.
//!
//! ```ignore
//! #[derive(Default, CliParser)]
//! struct Parameters {
//!     #[cliscan(short = 'q', help = "do something quietly")]
//!     quiet: bool,
//!     // the above generates:
//!     //  .add(Parameter::option(Scalar::new(&mut self.quiet), "quiet", Some('q'))
//!     //      .help("do something quietly"))
//!
//!     #[cliscan(index = 0)]
//!     source: String,
//!     // the above generates:
//!     //  .add(Parameter::argument(Scalar::new(&mut self.source), "source").index(0))
//!
//!     #[cliscan(scanner, default = "1/2")]
//!     ratio: Fraction,
//!     // the above generates:
//!     //  .add(Parameter::option(Custom::new(&mut self.ratio), "ratio", None).default("1/2"))
//!     // assumes: `impl ArgumentScanner for Fraction`
//!
//!     #[cliscan(command = "run")]
//!     run: Run,
//!     // the above generates:
//!     //  .command("run", move |sub| CliTarget::setup(&mut self.run, sub))
//!     // assumes: `Run` is instrumented with `CliParser`
//! }
//! ```
pub use cliscan_builder::{CliTarget, CommandLineParser, Custom, Parameter, Scalar};
pub use cliscan_derive::*;
