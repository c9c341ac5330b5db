use crate::api::Parameter;
use crate::parser::{Command, ConfigError};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use cliscan_builder as cliscan;
/// use cliscan::CommandLineParser;
///
/// let mut parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add and CommandLineParser::command.
///     .build();
/// parser.evaluate(empty::slice()).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    command: Command<'a>,
    deferred_error: Option<ConfigError>,
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.evaluate(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            command: Command::new(program, None, true),
            deferred_error: None,
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final message will apply.
    ///
    /// For a sub-command, the about message also describes it in the parent's list of commands.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.evaluate(vec![].as_slice()).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.command.about = Some(description.into());
        self
    }

    /// Add an option/argument/rest to the command line parser.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut a), "a"))
    ///     .add(Parameter::argument(Scalar::new(&mut b), "b"))
    ///     .build();
    ///
    /// parser.evaluate(vec!["1", "2"].as_slice()).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add(mut self, parameter: Parameter<'a>) -> Self {
        if self.deferred_error.is_none() {
            if let Err(error) = self.command.register(parameter.consume()) {
                self.deferred_error.replace(error);
            }
        }

        self
    }

    /// Add a sub-command, configured by `setup`.
    /// The sub-command is selected when its name (case-insensitive) leads the tokens.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// let mut count: u32 = 0;
    /// let mut parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Scalar::new(&mut verbose), "verbose", Some('v')))
    ///     .command("the-command", |sub| {
    ///         sub.add(Parameter::argument(Scalar::new(&mut count), "count"))
    ///     })
    ///     .build();
    ///
    /// let path = parser.evaluate(vec!["the-command", "2"].as_slice()).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(path, vec!["program", "the-command"]);
    /// assert_eq!(count, 2);
    /// ```
    pub fn command(
        mut self,
        name: impl Into<String>,
        setup: impl FnOnce(CommandLineParser<'a>) -> CommandLineParser<'a>,
    ) -> Self {
        if self.deferred_error.is_none() {
            let name = name.into();
            let result = setup(CommandLineParser::new(name.clone()))
                .finish()
                .and_then(|sub_command| self.command.register_command(&name, sub_command));

            if let Err(error) = result {
                self.deferred_error.replace(error);
            }
        }

        self
    }

    /// Mark this command as a pure grouping of sub-commands, which cannot itself run.
    /// Parsing that resolves to this command reports that a command is required.
    pub fn dispatch_only(mut self) -> Self {
        self.command.runnable = false;
        self
    }

    fn finish(self) -> Result<Command<'a>, ConfigError> {
        let CommandLineParser {
            mut command,
            deferred_error,
        } = self;

        if let Some(error) = deferred_error {
            return Err(error);
        }

        command.finalize()?;
        Ok(command)
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_parser(self) -> Result<Command<'a>, ConfigError> {
        self.finish()
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Command<'a> {
        match self.build_parser() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// Behaviour for a type that configures a command line parser over its own fields.
///
/// Usually implemented via the derive macro.
pub trait CliTarget<'a> {
    /// Add this value's parameters and sub-commands to `parser`.
    fn setup(&'a mut self, parser: CommandLineParser<'a>) -> CommandLineParser<'a>;
}
