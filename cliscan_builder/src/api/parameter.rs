use crate::api::field::Rest;
use crate::api::GenericBinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParameterClass {
    Opt,
    Arg,
    Rest,
}

pub(crate) struct ParameterInner<'a> {
    pub(crate) class: ParameterClass,
    pub(crate) binding: Box<dyn GenericBinding + 'a>,
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) index: Option<usize>,
    pub(crate) help: Option<String>,
    pub(crate) default: Option<String>,
}

impl<'a> std::fmt::Debug for ParameterInner<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match &self.class {
            ParameterClass::Opt => format!("--{n}", n = self.name),
            ParameterClass::Arg | ParameterClass::Rest => self.name.clone(),
        };
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let index = match &self.index {
            Some(i) => format!(" @{i},"),
            None => "".to_string(),
        };
        let (_, type_name) = self.binding.describe();

        write!(
            f,
            "{class:?}[{type_name}, {name},{short}{index} {help:?}]",
            class = self.class,
            help = self.help,
        )
    }
}

/// An option, positional argument or rest capture for the command parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
///
/// Misconfigurations (ex: a duplicate name) are reported when the parser is built.
pub struct Parameter<'a>(ParameterInner<'a>);

impl<'a> Parameter<'a> {
    /// Create an option parameter, matched by `--NAME` or `-SHORT`.
    /// The name may be empty only when a short name is given, in which case the short name doubles as the name.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::option(Scalar::new(&mut verbose), "verbose", Some('v'));
    /// ```
    pub fn option(
        field: impl GenericBinding + 'a,
        name: impl Into<String>,
        short: Option<char>,
    ) -> Self {
        Self(ParameterInner {
            class: ParameterClass::Opt,
            binding: Box::new(field),
            name: name.into(),
            short,
            index: None,
            help: None,
            default: None,
        })
    }

    /// Create a positional argument parameter.
    /// It takes the next free index, unless one is declared via [`Parameter::index`].
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{Parameter, Scalar};
    ///
    /// let mut path: String = String::default();
    /// Parameter::argument(Scalar::new(&mut path), "path");
    /// ```
    pub fn argument(field: impl GenericBinding + 'a, name: impl Into<String>) -> Self {
        Self(ParameterInner {
            class: ParameterClass::Arg,
            binding: Box::new(field),
            name: name.into(),
            short: None,
            index: None,
            help: None,
            default: None,
        })
    }

    /// Create the rest parameter, which captures every positional token beyond the last argument.
    /// At most one may be declared per command, and it cannot take a default.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::Parameter;
    ///
    /// let mut files: Vec<String> = Vec::default();
    /// Parameter::rest(&mut files, "files");
    /// ```
    pub fn rest(variable: &'a mut Vec<String>, name: impl Into<String>) -> Self {
        Self(ParameterInner {
            class: ParameterClass::Rest,
            binding: Box::new(Rest::new(variable)),
            name: name.into(),
            short: None,
            index: None,
            help: None,
            default: None,
        })
    }

    /// Declare the position of this parameter, turning an option into a positional argument.
    /// Positions must be contiguous from 0 within a command.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{Parameter, Scalar};
    ///
    /// let mut destination: String = String::default();
    /// Parameter::argument(Scalar::new(&mut destination), "destination").index(1);
    /// ```
    pub fn index(self, index: usize) -> Self {
        let mut inner = self.0;
        if inner.class == ParameterClass::Opt {
            inner.class = ParameterClass::Arg;
        }
        inner.index = Some(index);
        Self(inner)
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{Parameter, Scalar};
    ///
    /// let mut verbose: bool = false;
    /// Parameter::option(Scalar::new(&mut verbose), "verbose", None)
    ///     .help("--this will get discarded--")
    ///     .help("Make the program output verbose.");
    /// ```
    pub fn help(self, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.help = Some(description.into());
        Self(inner)
    }

    /// Declare the default for this parameter, in its Cli representation.
    /// The text is split the way a shell would (see [`split_arguments`](./fn.split_arguments.html)) and then scanned.
    ///
    /// ### Example
    /// ```
    /// # use cliscan_builder as cliscan;
    /// use cliscan::{Parameter, Scalar};
    ///
    /// let mut sizes: Vec<u32> = Vec::default();
    /// Parameter::option(Scalar::new(&mut sizes), "sizes", Some('s')).default("1,2,3");
    /// ```
    pub fn default(self, value: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.default = Some(value.into());
        Self(inner)
    }

    pub(crate) fn consume(self) -> ParameterInner<'a> {
        self.0
    }
}
