//! Traits to extend the set of types `cliscan` can bind onto.
use crate::api::ScanError;
use crate::model::Kind;

/// Behaviour to scan a value of this type from the head of a token list.
///
/// Implementations exist for `String`, `bool`, the integer and floating point primitives, `Vec<T>`, `[T; N]` and 2/3 element tuples.
/// Sequences are comma separated and may span multiple tokens (ex: `--values 1 ,2,3` and `--values=1,2,3` are equivalent).
pub trait Scan: Sized + Clone {
    /// The kind of destination this type represents.
    fn kind() -> Kind;

    /// Scan a value from the head of `tokens`, returning the number of tokens consumed alongside the value.
    fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError>;

    /// The value to assign when scanning fails, consuming nothing.
    /// Only `bool` uses this, so that a bare `--flag` means `true`.
    fn fallback() -> Option<Self> {
        None
    }

    /// Whether this value is the zero value of its type.
    /// Zero values are omitted from the help message.
    fn is_zero(&self) -> bool;

    /// Render this value the way it would be written on the Cli.
    fn render(&self) -> String;
}

/// Behaviour for a user supplied value that scans itself.
///
/// ### Example
/// ```
/// # use cliscan_builder as cliscan;
/// use cliscan::prelude::*;
/// use cliscan::{CommandLineParser, Custom, Parameter, ScanError};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Ratio(u32, u32);
///
/// impl ArgumentScanner for Ratio {
///     fn help(&self) -> (String, String) {
///         (format!("{}:{}", self.0, self.1), "ratio".to_string())
///     }
///
///     fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
///         let token = tokens.first().ok_or(ScanError::MissingValue)?;
///         let (a, b) = token
///             .split_once(':')
///             .ok_or_else(|| ScanError::Custom(format!("'{token}' is not a ratio")))?;
///         self.0 = a.parse().map_err(|_| ScanError::Custom(format!("bad numerator '{a}'")))?;
///         self.1 = b.parse().map_err(|_| ScanError::Custom(format!("bad denominator '{b}'")))?;
///         Ok(1)
///     }
/// }
///
/// let mut ratio = Ratio::default();
/// let mut parser = CommandLineParser::new("program")
///     .add(Parameter::option(Custom::new(&mut ratio), "ratio", None))
///     .build_parser()
///     .unwrap();
/// parser.evaluate(&["--ratio", "3:4"]).unwrap();
/// drop(parser);
/// assert_eq!(ratio, Ratio(3, 4));
/// ```
pub trait ArgumentScanner {
    /// Describe this value for the help message: the rendered value (empty to omit) and the type name.
    fn help(&self) -> (String, String);

    /// Scan from the head of `tokens`, returning the number of tokens consumed.
    /// The `name` is the option name as written by the user, or empty for positional arguments.
    fn scan(&mut self, name: &str, tokens: &[&str]) -> Result<usize, ScanError>;
}

impl<S> ArgumentScanner for &mut S
where
    S: ArgumentScanner + ?Sized,
{
    fn help(&self) -> (String, String) {
        (**self).help()
    }

    fn scan(&mut self, name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        (**self).scan(name, tokens)
    }
}

/// Behaviour for a numeric type that can be counted up by repeated flags (ex: `-vvv`).
pub trait Countable: Scan {
    /// Increase the value by one, saturating at the type's maximum.
    fn increment(&mut self);
}

macro_rules! countable {
    ($($t:ty),*) => {
        $(
            impl Countable for $t {
                fn increment(&mut self) {
                    *self = self.saturating_add(1);
                }
            }
        )*
    };
}

countable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
