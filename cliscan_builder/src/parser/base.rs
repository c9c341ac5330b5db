use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

use crate::api::{GenericBinding, HelpSwitch, ParameterClass, ParameterInner, ScanError};
use crate::constant::*;
use crate::model::{ErrorKind, Role};
use crate::tokenizer::split_arguments;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The ways a command line parser may be misconfigured.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An option name contains characters other than letters, digits, `_` and (not leading) `-`.
    #[error("Config error: invalid option name '--{0}'.")]
    InvalidName(String),

    /// A name is already registered in the command.
    #[error("Config error: cannot duplicate the parameter '{0}'.")]
    DuplicateName(String),

    /// An option was declared with neither a name nor a short name.
    #[error("Config error: option must have a name or a short name.")]
    MissingName,

    /// A short name is not a letter, digit or `_`.
    #[error("Config error: invalid short option name '-{0}'.")]
    InvalidShort(char),

    /// A short name is already registered in the command.
    #[error("Config error: cannot duplicate the short option '-{0}'.")]
    DuplicateShort(char),

    /// A positional parameter was declared with a short name.
    #[error("Config error: cannot set both a short name and an index on '{0}'.")]
    IndexedShort(String),

    /// The rest parameter was declared with an index.
    #[error("Config error: the rest parameter '{0}' cannot take an index.")]
    IndexedRest(String),

    /// An index is already registered in the command.
    #[error("Config error: cannot duplicate the argument index {0}.")]
    DuplicateIndex(usize),

    /// The argument indices have a gap.
    #[error("Config error: missing the argument index {0}; indices must be contiguous from 0.")]
    MissingIndex(usize),

    /// A second rest parameter was declared in the command.
    #[error("Config error: cannot declare more than one rest parameter ('{0}').")]
    DuplicateRest(String),

    /// The rest parameter was declared with a default.
    #[error("Config error: the rest parameter '{0}' cannot take a default.")]
    RestDefault(String),

    /// A declared default failed to scan.
    #[error("Config error: invalid default for '{name}': {source}")]
    BadDefault {
        /// The parameter name.
        name: String,
        /// The scan failure.
        source: ScanError,
    },

    /// A sub-command name is empty or starts with `-`.
    #[error("Config error: invalid command name '{0}'.")]
    InvalidCommand(String),

    /// A sub-command name is already registered in the command.
    #[error("Config error: cannot duplicate the command '{0}'.")]
    DuplicateCommand(String),
}

/// The ways parsing the command line may end without a successful binding.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The option name/short is not registered.
    #[error("unknown option '{0}'.")]
    UnknownOption(String),

    /// An option failed to scan its value.
    #[error("option '{name}' {tokens:?}: {source}")]
    InvalidOption {
        /// The option as written (ex: `--count`).
        name: String,
        /// The value tokens offered to the option.
        tokens: Vec<String>,
        /// The scan failure.
        source: ScanError,
    },

    /// A positional argument failed to scan its token.
    #[error("argument {index} '{name}': {source}")]
    InvalidArgument {
        /// The argument index.
        index: usize,
        /// The argument name.
        name: String,
        /// The offending token.
        token: String,
        /// The scan failure.
        source: ScanError,
    },

    /// Tokens were left over with nothing to absorb them.
    #[error("unexpected input {0:?}.")]
    UnexpectedInput(Vec<String>),

    /// A default failed to apply at the start of the parse.
    #[error("invalid default for '{name}': {source}")]
    BadDefault {
        /// The parameter name.
        name: String,
        /// The scan failure.
        source: ScanError,
    },

    /// The help switch was set.
    #[error("help requested for '{}'.", .path.join(" "))]
    ShowHelp {
        /// The names from the root to the resolved command.
        path: Vec<String>,
    },

    /// The resolved command has no runnable action.
    #[error("'{}' requires a command.", .path.join(" "))]
    NoAction {
        /// The names from the root to the resolved command.
        path: Vec<String>,
    },
}

impl ParseError {
    /// The category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnknownOption(_) => ErrorKind::UnknownOption,
            ParseError::InvalidOption { source, .. }
            | ParseError::InvalidArgument { source, .. } => source.kind(),
            ParseError::UnexpectedInput(_) => ErrorKind::UnexpectedInput,
            ParseError::BadDefault { .. } => ErrorKind::BadDefault,
            ParseError::ShowHelp { .. } => ErrorKind::ShowHelp,
            ParseError::NoAction { .. } => ErrorKind::NoAction,
        }
    }
}

pub(crate) fn is_valid_name(name: &str) -> bool {
    name.chars()
        .enumerate()
        .all(|(i, c)| c.is_alphanumeric() || c == '_' || (c == '-' && i != 0))
}

pub(crate) struct Variable<'a> {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) role: Role,
    pub(crate) description: Option<String>,
    pub(crate) is_set: bool,
    pub(crate) binding: Box<dyn GenericBinding + 'a>,
}

/// A built command, with its variables and sub-commands.
///
/// Parse via [`Command::parse`](#method.parse), or [`Command::evaluate`](#method.evaluate) to handle the outcome yourself.
pub struct Command<'a> {
    pub(crate) name: String,
    pub(crate) about: Option<String>,
    pub(crate) variables: Vec<Variable<'a>>,
    pub(crate) sub_commands: HashMap<String, Command<'a>>,
    pub(crate) help: Option<Rc<Cell<bool>>>,
    pub(crate) runnable: bool,
}

impl<'a> std::fmt::Debug for Command<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sub_commands: Vec<&String> = self.sub_commands.keys().collect();
        sub_commands.sort();
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("variables", &self.variables.len())
            .field("sub_commands", &sub_commands)
            .field("runnable", &self.runnable)
            .finish()
    }
}

impl<'a> Command<'a> {
    pub(crate) fn new(name: impl Into<String>, about: Option<String>, runnable: bool) -> Self {
        Self {
            name: name.into(),
            about,
            variables: Vec::default(),
            sub_commands: HashMap::default(),
            help: None,
            runnable,
        }
    }

    /// The display name of this command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description of this command.
    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// Whether this command may run (ex: a pure grouping of sub-commands is not runnable).
    pub fn is_runnable(&self) -> bool {
        self.runnable
    }

    /// Whether the help switch was set during the most recent parse.
    pub fn help_requested(&self) -> bool {
        self.help.as_ref().map(|requested| requested.get()).unwrap_or(false)
    }

    /// Whether the parameter `name` was explicitly matched during the most recent parse.
    /// An unknown name is never set.
    pub fn is_set(&self, name: &str) -> bool {
        self.find_by_long_name(name)
            .map(|variable| variable.is_set)
            .unwrap_or(false)
    }

    /// Look up the direct sub-command `name` (case-insensitive).
    pub fn sub_command(&self, name: &str) -> Option<&Command<'a>> {
        self.sub_commands.get(&name.to_lowercase())
    }

    /// Look up a descendant by the sequence of sub-command names leading to it.
    pub fn find_command(&self, path: &[impl AsRef<str>]) -> Option<&Command<'a>> {
        match path.split_first() {
            None => Some(self),
            Some((head, tail)) => self.sub_command(head.as_ref())?.find_command(tail),
        }
    }

    pub(crate) fn register(&mut self, parameter: ParameterInner<'a>) -> Result<(), ConfigError> {
        let ParameterInner {
            class,
            mut binding,
            name,
            short,
            index,
            help,
            default,
        } = parameter;
        let mut name = name.to_lowercase();

        if let Some(short) = short {
            if !is_valid_name(&short.to_string()) {
                return Err(ConfigError::InvalidShort(short));
            }

            if self.position_by_short(short).is_some() {
                return Err(ConfigError::DuplicateShort(short));
            }
        }

        let role = match class {
            ParameterClass::Opt => {
                if name.is_empty() {
                    name = short.ok_or(ConfigError::MissingName)?.to_string();
                }

                if !is_valid_name(&name) {
                    return Err(ConfigError::InvalidName(name));
                }

                Role::Opt
            }
            ParameterClass::Arg => {
                if short.is_some() {
                    return Err(ConfigError::IndexedShort(name));
                }

                let index = index.unwrap_or_else(|| self.next_index());
                if self.position_by_index(index).is_some() {
                    return Err(ConfigError::DuplicateIndex(index));
                }

                Role::Arg(index)
            }
            ParameterClass::Rest => {
                if short.is_some() {
                    return Err(ConfigError::IndexedShort(name));
                }

                if index.is_some() {
                    return Err(ConfigError::IndexedRest(name));
                }

                if self.position_by_rest().is_some() {
                    return Err(ConfigError::DuplicateRest(name));
                }

                if default.is_some() {
                    return Err(ConfigError::RestDefault(name));
                }

                Role::Rest
            }
        };

        if !name.is_empty() && self.position_by_long_name(&name).is_some() {
            return Err(ConfigError::DuplicateName(name));
        }

        if let Some(text) = default {
            let tokens = split_arguments(&text);
            let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
            binding
                .set_default(&tokens)
                .map_err(|source| ConfigError::BadDefault {
                    name: name.clone(),
                    source,
                })?;
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering {role:?} '{name}' (short: {short:?}) in '{}'.", self.name);
        }

        self.variables.push(Variable {
            name,
            short,
            role,
            description: help,
            is_set: false,
            binding,
        });
        Ok(())
    }

    pub(crate) fn register_command(
        &mut self,
        name: &str,
        sub_command: Command<'a>,
    ) -> Result<(), ConfigError> {
        if name.is_empty() || name.starts_with('-') {
            return Err(ConfigError::InvalidCommand(name.to_string()));
        }

        let key = name.to_lowercase();
        if self.sub_commands.contains_key(&key) {
            return Err(ConfigError::DuplicateCommand(name.to_string()));
        }

        self.sub_commands.insert(key, sub_command);
        Ok(())
    }

    /// Check the indices are contiguous and install the help switch, unless the user claimed its name.
    pub(crate) fn finalize(&mut self) -> Result<(), ConfigError> {
        let maximum = self
            .variables
            .iter()
            .filter_map(|variable| match variable.role {
                Role::Arg(index) => Some(index),
                _ => None,
            })
            .max();

        if let Some(maximum) = maximum {
            if let Some(missing) = (0..maximum).find(|i| self.position_by_index(*i).is_none()) {
                return Err(ConfigError::MissingIndex(missing));
            }
        }

        if self.position_by_long_name(HELP_NAME).is_none() {
            let requested = Rc::new(Cell::new(false));
            let short = match self.position_by_short(HELP_SHORT) {
                Some(_) => None,
                None => Some(HELP_SHORT),
            };
            self.variables.push(Variable {
                name: HELP_NAME.to_string(),
                short,
                role: Role::Opt,
                description: Some(HELP_DESCRIPTION.to_string()),
                is_set: false,
                binding: Box::new(HelpSwitch::new(requested.clone())),
            });
            self.help = Some(requested);
        }

        Ok(())
    }

    fn next_index(&self) -> usize {
        self.variables
            .iter()
            .filter_map(|variable| match variable.role {
                Role::Arg(index) => Some(index.saturating_add(1)),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    fn position_by_long_name(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }

        let mut name = name.to_lowercase();
        if let Some(end) = name.find(|c| c == '.' || c == '[') {
            name.truncate(end);
        }

        self.variables.iter().position(|variable| {
            variable.name == name
                || (variable.name.is_empty()
                    && variable.short.map(|short| short.to_string()).as_ref() == Some(&name))
        })
    }

    fn position_by_short(&self, short: char) -> Option<usize> {
        self.variables
            .iter()
            .position(|variable| variable.short == Some(short))
    }

    fn position_by_index(&self, index: usize) -> Option<usize> {
        self.variables
            .iter()
            .position(|variable| variable.role == Role::Arg(index))
    }

    fn position_by_rest(&self) -> Option<usize> {
        self.variables
            .iter()
            .position(|variable| variable.role == Role::Rest)
    }

    pub(crate) fn find_by_long_name(&self, name: &str) -> Option<&Variable<'a>> {
        self.position_by_long_name(name)
            .map(|position| &self.variables[position])
    }

    // Parsing works on positions so it can borrow the variable mutably; these lookups serve the tests.
    #[cfg(test)]
    pub(crate) fn find_by_short(&self, short: char) -> Option<&Variable<'a>> {
        self.position_by_short(short)
            .map(|position| &self.variables[position])
    }

    #[cfg(test)]
    pub(crate) fn find_by_index(&self, index: usize) -> Option<&Variable<'a>> {
        self.position_by_index(index)
            .map(|position| &self.variables[position])
    }

    #[cfg(test)]
    pub(crate) fn find_rest(&self) -> Option<&Variable<'a>> {
        self.position_by_rest()
            .map(|position| &self.variables[position])
    }

    /// Parse the `tokens`, binding values onto the variables of the resolved (sub-)command.
    ///
    /// The leading tokens select a sub-command while they name one (case-insensitive).
    /// Only the resolved command's variables are touched: they are first restored to their defaults, then bound from the remaining tokens.
    /// Positional tokens nothing absorbs are returned in the [`Resolved`].
    pub fn parse_tokens<'c>(&'c mut self, tokens: &[&str]) -> Result<Resolved<'c, 'a>, ParseError> {
        let mut path = vec![self.name.clone()];
        let (command, remaining) = self.dispatch(tokens, &mut path)?;
        Ok(Resolved {
            command,
            path,
            remaining,
        })
    }

    fn dispatch<'c>(
        &'c mut self,
        tokens: &[&str],
        path: &mut Vec<String>,
    ) -> Result<(&'c Command<'a>, Vec<String>), ParseError> {
        if let Some(first) = tokens.first() {
            let key = first.to_lowercase();

            if self.sub_commands.contains_key(&key) {
                // The parent binds nothing when a sub-command is selected.
                for variable in self.variables.iter_mut() {
                    variable.is_set = false;
                }

                let sub_command = match self.sub_commands.get_mut(&key) {
                    Some(sub_command) => sub_command,
                    None => unreachable!("internal error - sub-command must exist"),
                };
                path.push(sub_command.name.clone());

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dispatching to sub-command '{}'.", path.join(" "));
                }

                return sub_command.dispatch(&tokens[1..], path);
            }
        }

        self.apply_defaults()?;
        let positionals = self.walk(tokens)?;
        let remaining = self.assign_positionals(positionals)?;
        let command: &'c Command<'a> = self;
        Ok((command, remaining))
    }

    fn apply_defaults(&mut self) -> Result<(), ParseError> {
        for variable in self.variables.iter_mut() {
            variable.is_set = false;
            variable
                .binding
                .reset(&variable.name)
                .map_err(|source| ParseError::BadDefault {
                    name: variable.name.clone(),
                    source,
                })?;
        }

        Ok(())
    }

    fn walk(&mut self, tokens: &[&str]) -> Result<Vec<String>, ParseError> {
        let mut positionals = Vec::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];

            if token == TERMINATOR {
                positionals.extend(tokens[i + 1..].iter().map(|t| t.to_string()));
                break;
            }

            if let Some(option) = token.strip_prefix("--") {
                i += self.bind_long(option, &tokens[i + 1..])?;
            } else if token.len() > 1 && token.starts_with('-') {
                i += self.bind_short_cluster(&token[1..], &tokens[i + 1..])?;
            } else {
                if !token.is_empty() {
                    positionals.push(token.to_string());
                }

                i += 1;
            }
        }

        Ok(positionals)
    }

    /// Returns the number of tokens stepped over, including the option token itself.
    fn bind_long(&mut self, option: &str, following: &[&str]) -> Result<usize, ParseError> {
        let (name, glued) = match option.split_once('=') {
            Some((name, "")) => (name, None),
            Some((name, value)) => (name, Some(value)),
            None => (option, None),
        };
        let position = self
            .position_by_long_name(name)
            .ok_or_else(|| ParseError::UnknownOption(format!("--{name}")))?;
        let values: Vec<&str> = glued
            .into_iter()
            .chain(following.iter().copied())
            .collect();
        let variable = &mut self.variables[position];
        let consumed = variable
            .binding
            .scan(name, &values)
            .map_err(|source| ParseError::InvalidOption {
                name: format!("--{name}"),
                tokens: values.iter().map(|v| v.to_string()).collect(),
                source,
            })?;
        variable.is_set = true;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Bound '--{name}' from {consumed} tokens.");
        }

        // A glued value lives in the option token.
        match glued {
            Some(_) => Ok(1 + consumed.saturating_sub(1)),
            None => Ok(1 + consumed),
        }
    }

    /// Returns the number of tokens stepped over, including the cluster token itself.
    fn bind_short_cluster(&mut self, cluster: &str, following: &[&str]) -> Result<usize, ParseError> {
        for (offset, short) in cluster.char_indices() {
            let position = self
                .position_by_short(short)
                .ok_or_else(|| ParseError::UnknownOption(format!("-{short}")))?;
            let remainder = &cluster[offset + short.len_utf8()..];
            let remainder = remainder.strip_prefix('=').unwrap_or(remainder);
            let glued = !remainder.is_empty();
            let values: Vec<&str> = if glued {
                std::iter::once(remainder)
                    .chain(following.iter().copied())
                    .collect()
            } else {
                following.to_vec()
            };
            let variable = &mut self.variables[position];
            let consumed = variable
                .binding
                .scan(&short.to_string(), &values)
                .map_err(|source| ParseError::InvalidOption {
                    name: format!("-{short}"),
                    tokens: values.iter().map(|v| v.to_string()).collect(),
                    source,
                })?;
            variable.is_set = true;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Bound '-{short}' from {consumed} tokens.");
            }

            if consumed > 0 {
                return Ok(match glued {
                    true => consumed,
                    false => 1 + consumed,
                });
            }
        }

        Ok(1)
    }

    fn assign_positionals(&mut self, positionals: Vec<String>) -> Result<Vec<String>, ParseError> {
        let mut positionals = positionals;
        let mut index = 0;

        while index < positionals.len() {
            let position = match self.position_by_index(index) {
                Some(position) => position,
                None => break,
            };
            let token = &positionals[index];
            let variable = &mut self.variables[position];
            variable
                .binding
                .scan("", &[token.as_str()])
                .map_err(|source| ParseError::InvalidArgument {
                    index,
                    name: variable.name.clone(),
                    token: token.clone(),
                    source,
                })?;
            variable.is_set = true;
            index += 1;
        }

        let leftover = positionals.split_off(index);

        match self.position_by_rest() {
            Some(position) => {
                let variable = &mut self.variables[position];
                variable.is_set = !leftover.is_empty();
                variable.binding.capture_rest(leftover);
                Ok(Vec::default())
            }
            None => Ok(leftover),
        }
    }
}

/// The outcome of [`Command::parse_tokens`].
#[derive(Debug)]
pub struct Resolved<'c, 'a> {
    command: &'c Command<'a>,
    path: Vec<String>,
    remaining: Vec<String>,
}

impl<'c, 'a> Resolved<'c, 'a> {
    /// The resolved (sub-)command.
    pub fn command(&self) -> &'c Command<'a> {
        self.command
    }

    /// The names from the root to the resolved command.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The positional tokens nothing absorbed.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Whether the help switch of the resolved command was set.
    pub fn help_requested(&self) -> bool {
        self.command.help_requested()
    }

    /// Whether the parameter `name` of the resolved command was explicitly matched.
    pub fn is_set(&self, name: &str) -> bool {
        self.command.is_set(name)
    }

    pub(crate) fn into_parts(self) -> (&'c Command<'a>, Vec<String>, Vec<String>) {
        (self.command, self.path, self.remaining)
    }
}
