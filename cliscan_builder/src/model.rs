/// The category of destination a parameter binds onto.
///
/// Every scannable type reports its `Kind`, which determines the help message type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// `String`.
    Text,
    /// `bool`.
    Boolean,
    /// Signed integers (ex: `i32`).
    Integer,
    /// Unsigned integers (ex: `u32`).
    Unsigned,
    /// Floating point numbers (ex: `f64`).
    Float,
    /// A comma separated, variable length sequence (ex: `Vec<u32>`).
    Sequence(Box<Kind>),
    /// A comma separated, fixed length sequence (ex: `[u32; 3]`).
    FixedArray(Box<Kind>, usize),
    /// A composite of leaves scanned from successive tokens (ex: `(u32, String)`).
    Composite(Vec<Kind>),
    /// A type implementing [`ArgumentScanner`](./prelude/trait.ArgumentScanner.html).
    Custom,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Text => write!(f, "string"),
            Kind::Boolean | Kind::Custom => Ok(()),
            Kind::Integer => write!(f, "int"),
            Kind::Unsigned => write!(f, "uint"),
            Kind::Float => write!(f, "float"),
            Kind::Sequence(inner) => write!(f, "[]{inner}"),
            Kind::FixedArray(inner, length) => write!(f, "[{length}]{inner}"),
            Kind::Composite(leaves) => {
                let leaves: Vec<String> = leaves.iter().map(|leaf| leaf.to_string()).collect();
                write!(f, "({})", leaves.join(","))
            }
        }
    }
}

/// How a variable is addressed on the Cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// `--NAME` or `-N`.
    Opt,
    /// Positional, by index.
    Arg(usize),
    /// Captures every positional token beyond the last index.
    Rest,
}

/// The broad category of a [`ParseError`](./struct.ParseError.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The option name/short is not registered.
    UnknownOption,
    /// A value was required, but no token was available.
    MissingValue,
    /// A token failed type specific parsing.
    InvalidValue,
    /// A fixed size sequence received the wrong number of elements.
    CountMismatch,
    /// Tokens were left over with nothing to absorb them.
    UnexpectedInput,
    /// A declared default failed to apply.
    BadDefault,
    /// The help switch was set.
    ShowHelp,
    /// The resolved command has no runnable action.
    NoAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Text, "string")]
    #[case(Kind::Boolean, "")]
    #[case(Kind::Integer, "int")]
    #[case(Kind::Unsigned, "uint")]
    #[case(Kind::Float, "float")]
    #[case(Kind::Custom, "")]
    #[case(Kind::Sequence(Box::new(Kind::Integer)), "[]int")]
    #[case(Kind::Sequence(Box::new(Kind::Sequence(Box::new(Kind::Text)))), "[][]string")]
    #[case(Kind::FixedArray(Box::new(Kind::Float), 3), "[3]float")]
    #[case(Kind::Composite(vec![Kind::Unsigned, Kind::Text]), "(uint,string)")]
    fn kind_display(#[case] kind: Kind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
