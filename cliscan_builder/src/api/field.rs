use std::cell::Cell;
use std::rc::Rc;

use crate::api::capture::*;
use crate::prelude::{ArgumentScanner, Scan};
use crate::scan::scan_sequence;

fn scan_with_fallback<T: Scan>(tokens: &[&str]) -> Result<(usize, T), ScanError> {
    match T::scan(tokens) {
        Ok(scanned) => Ok(scanned),
        Err(error) => match T::fallback() {
            Some(value) => Ok((0, value)),
            None => Err(error),
        },
    }
}

/// A parameter bound onto a variable of a [`Scan`](./prelude/trait.Scan.html) type.
///
/// The variable's value at construction is its default, unless one is declared via [`Parameter::default`](./struct.Parameter.html#method.default).
pub struct Scalar<'a, T> {
    variable: &'a mut T,
    default: T,
}

impl<'a, T: Scan> Scalar<'a, T> {
    /// Create a scalar parameter.
    pub fn new(variable: &'a mut T) -> Self {
        let default = variable.clone();
        Self { variable, default }
    }
}

impl<'a, T: Scan> GenericBinding for Scalar<'a, T> {
    fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        let (consumed, value) = scan_with_fallback(tokens)?;
        *self.variable = value;
        Ok(consumed)
    }

    fn reset(&mut self, _name: &str) -> Result<(), ScanError> {
        *self.variable = self.default.clone();
        Ok(())
    }

    fn set_default(&mut self, tokens: &[&str]) -> Result<(), ScanError> {
        let (_, value) = scan_with_fallback(tokens)?;
        self.default = value;
        Ok(())
    }

    fn describe(&self) -> (String, String) {
        let default = if self.default.is_zero() {
            String::default()
        } else {
            self.default.render()
        };
        (default, T::kind().to_string())
    }
}

/// A parameter bound onto an [`ArgumentScanner`](./prelude/trait.ArgumentScanner.html), which scans itself.
///
/// A declared default is kept in its Cli representation and scanned anew at the start of every parse.
pub struct Custom<S> {
    scanner: S,
    default: Option<Vec<String>>,
}

impl<S: ArgumentScanner> Custom<S> {
    /// Create a custom parameter.
    pub fn new(scanner: S) -> Self {
        Self {
            scanner,
            default: None,
        }
    }
}

impl<S: ArgumentScanner> GenericBinding for Custom<S> {
    fn scan(&mut self, name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        self.scanner.scan(name, tokens)
    }

    fn reset(&mut self, name: &str) -> Result<(), ScanError> {
        if let Some(default) = &self.default {
            let tokens: Vec<&str> = default.iter().map(String::as_str).collect();
            self.scanner.scan(name, &tokens)?;
        }

        Ok(())
    }

    fn set_default(&mut self, tokens: &[&str]) -> Result<(), ScanError> {
        self.default = Some(tokens.iter().map(|token| token.to_string()).collect());
        Ok(())
    }

    fn describe(&self) -> (String, String) {
        self.scanner.help()
    }
}

pub(crate) struct Rest<'a> {
    variable: &'a mut Vec<String>,
    default: Vec<String>,
}

impl<'a> Rest<'a> {
    pub(crate) fn new(variable: &'a mut Vec<String>) -> Self {
        let default = variable.clone();
        Self { variable, default }
    }
}

impl<'a> GenericBinding for Rest<'a> {
    fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        let (consumed, values) = scan_sequence(tokens)?;
        *self.variable = values;
        Ok(consumed)
    }

    fn reset(&mut self, _name: &str) -> Result<(), ScanError> {
        *self.variable = self.default.clone();
        Ok(())
    }

    fn set_default(&mut self, _tokens: &[&str]) -> Result<(), ScanError> {
        unreachable!("internal error - the rest binding cannot take a default");
    }

    fn describe(&self) -> (String, String) {
        (String::default(), Vec::<String>::kind().to_string())
    }

    fn capture_rest(&mut self, tokens: Vec<String>) {
        *self.variable = tokens;
    }
}

pub(crate) struct HelpSwitch {
    requested: Rc<Cell<bool>>,
}

impl HelpSwitch {
    pub(crate) fn new(requested: Rc<Cell<bool>>) -> Self {
        Self { requested }
    }
}

impl GenericBinding for HelpSwitch {
    fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        let (consumed, value) = scan_with_fallback::<bool>(tokens)?;
        self.requested.set(value);
        Ok(consumed)
    }

    fn reset(&mut self, _name: &str) -> Result<(), ScanError> {
        self.requested.set(false);
        Ok(())
    }

    fn set_default(&mut self, _tokens: &[&str]) -> Result<(), ScanError> {
        unreachable!("internal error - the help switch cannot take a default");
    }

    fn describe(&self) -> (String, String) {
        (String::default(), String::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec!["5"], 1, 5)]
    #[case(vec!["5", "6"], 1, 5)]
    fn scalar_scan(#[case] tokens: Vec<&str>, #[case] consumed: usize, #[case] expected: u32) {
        let mut variable: u32 = 0;
        let mut scalar = Scalar::new(&mut variable);
        assert_eq!(scalar.scan("value", &tokens).unwrap(), consumed);
        drop(scalar);
        assert_eq!(variable, expected);
    }

    #[test]
    fn scalar_scan_invalid() {
        let mut variable: u32 = 3;
        let mut scalar = Scalar::new(&mut variable);
        assert_matches!(
            scalar.scan("value", &["x"]),
            Err(ScanError::InvalidValue { .. })
        );
        drop(scalar);
        assert_eq!(variable, 3);
    }

    #[rstest]
    #[case(vec![], 0, true)]
    #[case(vec!["false"], 1, false)]
    #[case(vec!["other"], 0, true)]
    fn scalar_bool_fallback(
        #[case] tokens: Vec<&str>,
        #[case] consumed: usize,
        #[case] expected: bool,
    ) {
        let mut variable = false;
        let mut scalar = Scalar::new(&mut variable);
        assert_eq!(scalar.scan("flag", &tokens).unwrap(), consumed);
        drop(scalar);
        assert_eq!(variable, expected);
    }

    #[test]
    fn scalar_default() {
        let mut variable: i32 = 7;
        let mut scalar = Scalar::new(&mut variable);
        assert_eq!(scalar.describe(), ("7".to_string(), "int".to_string()));

        scalar.scan("value", &["9"]).unwrap();
        scalar.reset("value").unwrap();
        assert_eq!(*scalar.variable, 7);

        scalar.set_default(&["-2"]).unwrap();
        scalar.reset("value").unwrap();
        assert_eq!(*scalar.variable, -2);
        assert_eq!(scalar.describe(), ("-2".to_string(), "int".to_string()));

        assert_matches!(
            scalar.set_default(&["x"]),
            Err(ScanError::InvalidValue { .. })
        );
    }

    #[test]
    fn scalar_describe_zero() {
        let mut variable: Vec<String> = Vec::default();
        let scalar = Scalar::new(&mut variable);
        assert_eq!(scalar.describe(), ("".to_string(), "[]string".to_string()));
    }

    struct Upper(String);

    impl ArgumentScanner for Upper {
        fn help(&self) -> (String, String) {
            (self.0.clone(), "upper".to_string())
        }

        fn scan(&mut self, name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
            let token = tokens.first().ok_or(ScanError::MissingValue)?;
            self.0 = format!("{name}:{}", token.to_uppercase());
            Ok(1)
        }
    }

    #[test]
    fn custom_scan() {
        let mut upper = Upper(String::default());
        let mut custom = Custom::new(&mut upper);
        assert_eq!(custom.scan("n", &["abc", "def"]).unwrap(), 1);
        assert_eq!(custom.describe(), ("n:ABC".to_string(), "upper".to_string()));
        drop(custom);
        assert_eq!(upper.0, "n:ABC");
    }

    #[test]
    fn custom_default_replayed() {
        let mut upper = Upper("untouched".to_string());
        let mut custom = Custom::new(&mut upper);
        custom.reset("n").unwrap();
        assert_eq!(custom.describe().0, "untouched");

        custom.set_default(&["xyz"]).unwrap();
        custom.reset("n").unwrap();
        assert_eq!(custom.describe().0, "n:XYZ");
    }

    #[test]
    fn rest_capture() {
        let mut variable = vec!["initial".to_string()];
        let mut rest = Rest::new(&mut variable);
        rest.capture_rest(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(*rest.variable, vec!["a".to_string(), "b".to_string()]);
        rest.reset("").unwrap();
        assert_eq!(*rest.variable, vec!["initial".to_string()]);
        assert_eq!(rest.scan("files", &["x,y"]).unwrap(), 1);
        assert_eq!(*rest.variable, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn help_switch() {
        let requested = Rc::new(Cell::new(false));
        let mut switch = HelpSwitch::new(requested.clone());
        assert_eq!(switch.scan("help", empty::slice()).unwrap(), 0);
        assert!(requested.get());
        switch.reset("help").unwrap();
        assert!(!requested.get());
        assert_eq!(switch.scan("h", &["false"]).unwrap(), 1);
        assert!(!requested.get());
    }
}
