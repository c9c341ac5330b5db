use crate::api::ScanError;
use crate::model::Kind;
use crate::prelude::{ArgumentScanner, Countable, Scan};

/// A counter that increments each time its option is matched (ex: `-vvv`).
///
/// An explicit value is accepted when the next token begins with a digit (ex: `-v 3`), in which case it replaces the count.
pub struct Count<'a, T> {
    variable: &'a mut T,
}

impl<'a, T: Countable> Count<'a, T> {
    /// Create a count.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T: Countable> ArgumentScanner for Count<'a, T> {
    fn help(&self) -> (String, String) {
        let value = if self.variable.is_zero() {
            String::default()
        } else {
            self.variable.render()
        };
        (value, T::kind().to_string())
    }

    fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        match tokens.first() {
            Some(token) if token.starts_with(|c: char| c.is_ascii_digit()) => {
                let (consumed, value) = T::scan(tokens)?;
                *self.variable = value;
                Ok(consumed)
            }
            _ => {
                self.variable.increment();
                Ok(0)
            }
        }
    }
}

/// A sequence that accumulates across repeated options (ex: `--tag a --tag b,c`).
pub struct Append<'a, T> {
    variable: &'a mut Vec<T>,
}

impl<'a, T: Scan> Append<'a, T> {
    /// Create an append.
    pub fn new(variable: &'a mut Vec<T>) -> Self {
        Self { variable }
    }
}

impl<'a, T: Scan> ArgumentScanner for Append<'a, T> {
    fn help(&self) -> (String, String) {
        (
            self.variable.render(),
            Kind::Sequence(Box::new(T::kind())).to_string(),
        )
    }

    fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        let (consumed, values) = Vec::<T>::scan(tokens)?;
        self.variable.extend(values);
        Ok(consumed)
    }
}
