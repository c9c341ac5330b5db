use terminal_size::{terminal_size, Width};

use crate::constant::{COLUMN_MINIMUM, NAME_COLUMN_MAXIMUM, OPTION_COLUMN_MAXIMUM};
use crate::model::Role;
use crate::parser::interface::chunk;
use crate::parser::{Command, Variable};

#[derive(Debug, PartialEq, Eq)]
struct OptionHelp {
    short: Option<String>,
    name: String,
    type_name: String,
    description: String,
}

impl OptionHelp {
    fn new(variable: &Variable<'_>) -> Self {
        let (mut value, type_name) = variable.binding.describe();
        let mut short = variable.short.map(|s| s.to_string());
        let mut name = variable.name.clone();

        if !value.is_empty() {
            if value.contains(' ') {
                value = format!("'{value}'");
            }

            match (&mut short, name.is_empty()) {
                (Some(short), true) => {
                    short.push('=');
                    short.push_str(&value);
                }
                _ => {
                    name.push('=');
                    name.push_str(&value);
                }
            }
        }

        Self {
            short,
            name,
            type_name,
            description: variable.description.clone().unwrap_or_default(),
        }
    }

    fn left(&self) -> String {
        let mut left = match &self.short {
            Some(short) => format!("  -{short}, --{n}", n = self.name),
            None => format!("      --{n}", n = self.name),
        };

        if !self.type_name.is_empty() {
            left.push(' ');
            left.push_str(&self.type_name);
        }

        left
    }
}

fn clamp(width: usize, maximum: usize) -> usize {
    width.clamp(COLUMN_MINIMUM, maximum)
}

fn sort_key(variable: &Variable<'_>) -> String {
    match variable.short {
        Some(short) => short.to_string(),
        None => variable.name.clone(),
    }
}

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self { terminal_width }
    }

    #[cfg(test)]
    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn usage(&self, command: &Command<'_>, path: &[String]) -> Vec<String> {
        let base = path.join(" ");
        let mut lines = Vec::default();
        let mut arguments = arguments_of(command);
        arguments.sort_by_key(|variable| match variable.role {
            Role::Arg(index) => (0, index),
            _ => (1, 0),
        });
        let mut args = String::default();

        if command.variables.iter().any(|variable| variable.role == Role::Opt) {
            args.push_str(" [options]");
        }

        if !command.sub_commands.is_empty() {
            lines.push(format!("Usage: {base}{args} [command] ..."));
        }

        for variable in &arguments {
            args.push(' ');
            args.push_str(&variable.name);

            if variable.role == Role::Rest {
                args.push_str("...");
            }
        }

        if !arguments.is_empty() || command.sub_commands.is_empty() {
            lines.push(format!("Usage: {base}{args}"));
        }

        lines
    }

    pub(crate) fn help(&self, command: &Command<'_>, path: &[String]) -> Vec<String> {
        let mut lines = self.usage(command, path);

        if let Some(about) = &command.about {
            lines.push(String::default());
            match self.terminal_width {
                Some(width) if width > COLUMN_MINIMUM => lines.extend(chunk(about, width)),
                _ => lines.push(about.clone()),
            }
        }

        let mut options: Vec<&Variable<'_>> = command
            .variables
            .iter()
            .filter(|variable| variable.role == Role::Opt)
            .collect();
        options.sort_by_key(|variable| sort_key(variable));

        if !options.is_empty() {
            let helps: Vec<OptionHelp> = options.into_iter().map(OptionHelp::new).collect();
            let column = clamp(
                helps
                    .iter()
                    .map(|help| help.left().chars().count() + 1)
                    .max()
                    .unwrap_or(0),
                OPTION_COLUMN_MAXIMUM,
            );
            lines.push(String::default());
            lines.push("Options:".to_string());

            for help in &helps {
                let left = help.left();
                let overflow = column <= left.chars().count();
                self.columns(&mut lines, left, column, overflow, &help.description);
            }
        }

        if !command.sub_commands.is_empty() {
            let mut sub_commands: Vec<(&String, &Command<'_>)> =
                command.sub_commands.iter().collect();
            sub_commands.sort_by(|a, b| a.0.cmp(b.0));
            let column = clamp(
                sub_commands
                    .iter()
                    .map(|(_, sub_command)| 2 + sub_command.name.chars().count())
                    .max()
                    .unwrap_or(0),
                NAME_COLUMN_MAXIMUM,
            );
            lines.push(String::default());
            lines.push("Commands:".to_string());

            for (_, sub_command) in sub_commands {
                let left = format!("  {}", sub_command.name);
                let overflow = column < left.chars().count();
                let description = sub_command.about.clone().unwrap_or_default();
                self.columns(&mut lines, left, column + 2, overflow, &description);
            }
        }

        let mut arguments = arguments_of(command);
        arguments.sort_by_key(|variable| match variable.role {
            Role::Arg(index) => (0, index),
            _ => (1, 0),
        });

        if !arguments.is_empty() {
            let column = clamp(
                arguments
                    .iter()
                    .map(|variable| 2 + variable.name.chars().count())
                    .max()
                    .unwrap_or(0),
                NAME_COLUMN_MAXIMUM,
            );
            lines.push(String::default());
            lines.push("Arguments:".to_string());

            for variable in arguments {
                let left = format!("  {}", variable.name);
                let overflow = column < left.chars().count();
                let description = variable.description.clone().unwrap_or_default();
                self.columns(&mut lines, left, column + 2, overflow, &description);
            }
        }

        lines
    }

    /// Lay out `left` with `description` starting at the `indent` column, wrapping the description to the terminal.
    fn columns(
        &self,
        lines: &mut Vec<String>,
        left: String,
        indent: usize,
        overflow: bool,
        description: &str,
    ) {
        let pieces = match self.terminal_width {
            Some(width) if width > indent + COLUMN_MINIMUM => chunk(description, width - indent),
            _ if description.is_empty() => Vec::default(),
            _ => vec![description.to_string()],
        };
        let mut pieces = pieces.into_iter();
        let first = if overflow {
            lines.push(left);
            String::default()
        } else {
            left
        };

        match pieces.next() {
            Some(piece) => lines.push(format!("{first:<indent$}{piece}")),
            None if !first.is_empty() => lines.push(first),
            None => {}
        }

        for piece in pieces {
            lines.push(format!("{:indent$}{piece}", ""));
        }
    }
}

fn arguments_of<'c, 'a>(command: &'c Command<'a>) -> Vec<&'c Variable<'a>> {
    command
        .variables
        .iter()
        .filter(|variable| variable.role != Role::Opt)
        .collect()
}
