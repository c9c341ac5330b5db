use std::env;

use crate::parser::{Command, ConsoleInterface, ParseError, Printer, UserInterface};

impl<'a> Command<'a> {
    /// Parse the `tokens`, and judge whether the resolved command may run.
    ///
    /// Returns the invocation path: the names from the root to the resolved command.
    /// A set help switch results in [`ParseError::ShowHelp`], a command without a runnable action results in [`ParseError::NoAction`], and tokens left over after binding result in [`ParseError::UnexpectedInput`].
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{CommandLineParser, ErrorKind, Parameter, Scalar};
    ///
    /// let mut value: u32 = 0;
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut value), "value"))
    ///     .build();
    ///
    /// assert_eq!(parser.evaluate(&["1"]).unwrap(), vec!["program"]);
    /// assert_eq!(parser.evaluate(&["1", "2"]).unwrap_err().kind(), ErrorKind::UnexpectedInput);
    /// assert_eq!(parser.evaluate(&["-h"]).unwrap_err().kind(), ErrorKind::ShowHelp);
    /// ```
    pub fn evaluate(&mut self, tokens: &[&str]) -> Result<Vec<String>, ParseError> {
        let (command, path, remaining) = self.parse_tokens(tokens)?.into_parts();

        if command.help_requested() {
            return Err(ParseError::ShowHelp { path });
        }

        if !command.is_runnable() {
            return Err(ParseError::NoAction { path });
        }

        if !remaining.is_empty() {
            return Err(ParseError::UnexpectedInput(remaining));
        }

        Ok(path)
    }

    /// Run the command line parser against the `tokens`, printing the outcome.
    ///
    /// Returns the invocation path, or the code the program should exit with:
    /// * `0` after printing the help message to stdout, if requested.
    /// * `2` after printing the help message to stderr, if the resolved command has no runnable action.
    /// * `2` after printing the error and usage to stderr, on any other error.
    pub fn run_tokens(&mut self, tokens: &[&str]) -> Result<Vec<String>, i32> {
        self.run_with_interface(tokens, &ConsoleInterface::default(), &Printer::terminal())
    }

    fn run_with_interface(
        &mut self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
        printer: &Printer,
    ) -> Result<Vec<String>, i32> {
        match self.evaluate(tokens) {
            Ok(path) => Ok(path),
            Err(ParseError::ShowHelp { path }) => {
                let command = self.locate(&path);
                for line in printer.help(command, &path) {
                    user_interface.print(line);
                }
                Err(0)
            }
            Err(ParseError::NoAction { path }) => {
                let command = self.locate(&path);
                for line in printer.help(command, &path) {
                    user_interface.print_error(line);
                }
                Err(2)
            }
            Err(error) => {
                let path = self.resolve_path(tokens);
                let command = self.locate(&path);
                user_interface.print_error(format!("Parse error: {error}"));
                for line in printer.usage(command, &path) {
                    user_interface.print_error(line);
                }
                Err(2)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`] (skipping the program name).
    ///
    /// Returns the invocation path: the names from the root to the resolved command.
    /// Exits via [`std::process::exit`] when parsing does not lead to a runnable command, see [`Command::run_tokens`].
    pub fn parse(&mut self) -> Vec<String> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.run_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(path) => path,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    /// Print the help message of this command to stdout.
    pub fn print_help(&self) {
        let user_interface = ConsoleInterface::default();
        for line in Printer::terminal().help(self, &[self.name.clone()]) {
            user_interface.print(line);
        }
    }

    /// The path the leading `tokens` select, without binding anything.
    fn resolve_path(&self, tokens: &[&str]) -> Vec<String> {
        let mut path = vec![self.name.clone()];
        let mut command = self;

        for token in tokens {
            match command.sub_command(token) {
                Some(sub_command) => {
                    path.push(sub_command.name.clone());
                    command = sub_command;
                }
                None => break,
            }
        }

        path
    }

    fn locate(&self, path: &[String]) -> &Command<'a> {
        match self.find_command(&path[1..]) {
            Some(command) => command,
            None => unreachable!("internal error - the invocation path must lead to a command"),
        }
    }
}
