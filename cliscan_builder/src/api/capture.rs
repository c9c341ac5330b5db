use thiserror::Error;

use crate::model::ErrorKind;

/// Behaviour to bind scanned tokens onto a caller owned variable.
///
/// We use this at the bottom of the command line parser object graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait GenericBinding {
    /// Scan from the head of `tokens` into the variable, returning the number of tokens consumed.
    fn scan(&mut self, name: &str, tokens: &[&str]) -> Result<usize, ScanError>;

    /// Restore the variable to its default, in preparation for a parse.
    fn reset(&mut self, name: &str) -> Result<(), ScanError>;

    /// Declare the default from its Cli representation.
    fn set_default(&mut self, tokens: &[&str]) -> Result<(), ScanError>;

    /// Describe the variable for the help message: the rendered default (empty to omit) and the type name.
    fn describe(&self) -> (String, String);

    /// Capture every leftover positional token.
    fn capture_rest(&mut self, _tokens: Vec<String>) {
        unreachable!("internal error - only the rest binding may capture the remaining tokens");
    }
}

/// The ways scanning a value from its tokens may fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No token was available.
    #[error("missing value.")]
    MissingValue,

    /// The token is not a valid representation of the type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidValue {
        /// The offending token.
        token: String,
        /// The type being scanned.
        type_name: &'static str,
    },

    /// A fixed size sequence received the wrong number of elements.
    #[error("expected {expected} elements, found {found}.")]
    CountMismatch {
        /// The declared length.
        expected: usize,
        /// The number of elements scanned.
        found: usize,
    },

    /// An element of a sequence failed to scan.
    #[error("element {index}: {source}")]
    Element {
        /// The 0-based element index.
        index: usize,
        /// The element's failure.
        source: Box<ScanError>,
    },

    /// A failure reported by an [`ArgumentScanner`](./prelude/trait.ArgumentScanner.html).
    #[error("{0}")]
    Custom(String),
}

impl ScanError {
    /// The category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::MissingValue => ErrorKind::MissingValue,
            ScanError::InvalidValue { .. } | ScanError::Custom(_) => ErrorKind::InvalidValue,
            ScanError::CountMismatch { .. } => ErrorKind::CountMismatch,
            ScanError::Element { source, .. } => source.kind(),
        }
    }
}
