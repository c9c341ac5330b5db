use cliscan::prelude::ArgumentScanner;
use cliscan::{CommandLineParser, Custom, Parameter, Scalar, ScanError};

/// A fraction written as `N/D`, optionally spread over tokens (ex: `3 / 4`).
#[derive(Debug)]
struct Fraction {
    numerator: f64,
    denominator: f64,
}

fn parse_part(token: &str) -> Result<f64, ScanError> {
    token
        .trim()
        .parse()
        .map_err(|_| ScanError::Custom(format!("invalid number '{token}'.")))
}

impl ArgumentScanner for Fraction {
    fn help(&self) -> (String, String) {
        (
            format!("{}/{}", self.numerator, self.denominator),
            "fraction".to_string(),
        )
    }

    fn scan(&mut self, _name: &str, tokens: &[&str]) -> Result<usize, ScanError> {
        let first = *tokens.first().ok_or(ScanError::MissingValue)?;
        let (numerator, denominator, consumed) = match first.split_once('/') {
            Some((numerator, "")) => (numerator, tokens.get(1).copied(), 2),
            Some((numerator, denominator)) => (numerator, Some(denominator), 1),
            None => match tokens.get(1).copied() {
                Some("/") => (first, tokens.get(2).copied(), 3),
                Some(next) if next.starts_with('/') => (first, Some(&next[1..]), 2),
                _ => return Err(ScanError::Custom("missing fraction.".to_string())),
            },
        };
        let denominator = denominator.ok_or(ScanError::MissingValue)?;

        self.numerator = parse_part(numerator)?;
        self.denominator = parse_part(denominator)?;
        Ok(consumed)
    }
}

fn main() {
    let mut ratio = Fraction {
        numerator: 1.0,
        denominator: 1.0,
    };
    let mut value: f64 = 0.0;
    let mut precision: usize = 2;

    let mut parser = CommandLineParser::new("fraction")
        .about("Scale a value by a fraction.")
        .add(
            Parameter::option(Custom::new(&mut ratio), "ratio", Some('r'))
                .help("The fraction to scale by (ex: '3/4' or '3 / 4')."),
        )
        .add(
            Parameter::option(Scalar::new(&mut precision), "precision", Some('p'))
                .help("The number of decimal places to print."),
        )
        .add(Parameter::argument(Scalar::new(&mut value), "value").help("The value to scale."))
        .build();

    parser.parse();
    drop(parser);

    let scaled = value * ratio.numerator / ratio.denominator;
    println!("{scaled:.precision$}");
}
