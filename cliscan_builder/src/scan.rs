use std::str::FromStr;

use crate::api::ScanError;
use crate::model::Kind;
use crate::prelude::Scan;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Recognize the boolean literals.
pub(crate) fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn scan_single<T: FromStr>(tokens: &[&str]) -> Result<(usize, T), ScanError> {
    let token = tokens.first().ok_or(ScanError::MissingValue)?;
    let value = T::from_str(token).map_err(|_| ScanError::InvalidValue {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })?;
    Ok((1, value))
}

impl Scan for String {
    fn kind() -> Kind {
        Kind::Text
    }

    fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError> {
        match tokens.first() {
            Some(token) => Ok((1, token.to_string())),
            None => Ok((0, String::default())),
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Scan for bool {
    fn kind() -> Kind {
        Kind::Boolean
    }

    fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError> {
        let token = tokens.first().ok_or(ScanError::MissingValue)?;
        let value = parse_bool(token).ok_or_else(|| ScanError::InvalidValue {
            token: token.to_string(),
            type_name: "bool",
        })?;
        Ok((1, value))
    }

    fn fallback() -> Option<Self> {
        Some(true)
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! scan_number {
    ($kind:expr, $zero:expr; $($t:ty),*) => {
        $(
            impl Scan for $t {
                fn kind() -> Kind {
                    $kind
                }

                fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError> {
                    scan_single(tokens)
                }

                fn is_zero(&self) -> bool {
                    *self == $zero
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

scan_number!(Kind::Integer, 0; i8, i16, i32, i64, i128, isize);
scan_number!(Kind::Unsigned, 0; u8, u16, u32, u64, u128, usize);
scan_number!(Kind::Float, 0.0; f32, f64);

/// Walks the tokens of a comma separated sequence, which may be split at any comma.
struct Cursor<'t, 's> {
    tokens: &'t [&'s str],
    index: usize,
    offset: usize,
}

impl<'t, 's> Cursor<'t, 's> {
    fn new(tokens: &'t [&'s str]) -> Self {
        Self {
            tokens,
            index: 0,
            offset: 0,
        }
    }

    fn current(&self) -> Option<&'s str> {
        let token: &'s str = self.tokens.get(self.index)?;
        Some(&token[self.offset..])
    }

    fn advance(&mut self) {
        self.index += 1;
        self.offset = 0;
    }

    fn skip(&mut self, bytes: usize) {
        self.offset += bytes;
    }

    fn consumed(&self) -> usize {
        self.index
    }
}

pub(crate) fn scan_sequence<T: Scan>(tokens: &[&str]) -> Result<(usize, Vec<T>), ScanError> {
    let first = tokens.first().ok_or(ScanError::MissingValue)?;

    if first.is_empty() {
        return Ok((1, Vec::default()));
    }

    let mut cursor = Cursor::new(tokens);
    let mut values: Vec<T> = Vec::default();

    loop {
        if !values.is_empty() {
            // A separator must follow each element, possibly after empty tokens.
            while cursor.current() == Some("") {
                cursor.advance();
            }

            match cursor.current() {
                Some(",") => cursor.advance(),
                Some(current) if current.starts_with(',') => cursor.skip(1),
                _ => break,
            }
        }

        let element = match cursor.current() {
            None => "",
            Some(current) => match current.find(',') {
                Some(end) => {
                    cursor.skip(end);
                    &current[..end]
                }
                None => {
                    cursor.advance();
                    current
                }
            },
        };

        let (_, value) = T::scan(&[element]).map_err(|error| ScanError::Element {
            index: values.len(),
            source: Box::new(error),
        })?;
        values.push(value);
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Scanned {} elements from {} tokens.",
            values.len(),
            cursor.consumed()
        );
    }

    Ok((cursor.consumed(), values))
}

fn render_all<'v, T: Scan + 'v>(values: impl Iterator<Item = &'v T>, separator: &str) -> String {
    values
        .map(|value| value.render())
        .collect::<Vec<String>>()
        .join(separator)
}

impl<T: Scan> Scan for Vec<T> {
    fn kind() -> Kind {
        Kind::Sequence(Box::new(T::kind()))
    }

    fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError> {
        scan_sequence(tokens)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> String {
        render_all(self.iter(), ",")
    }
}

impl<T: Scan, const N: usize> Scan for [T; N] {
    fn kind() -> Kind {
        Kind::FixedArray(Box::new(T::kind()), N)
    }

    fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError> {
        let (consumed, values) = scan_sequence::<T>(tokens)?;
        let found = values.len();
        let array = <[T; N]>::try_from(values)
            .map_err(|_| ScanError::CountMismatch { expected: N, found })?;
        Ok((consumed, array))
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|value| value.is_zero())
    }

    fn render(&self) -> String {
        render_all(self.iter(), ",")
    }
}

macro_rules! scan_composite {
    ($($t:ident),+) => {
        impl<$($t: Scan),+> Scan for ($($t,)+) {
            fn kind() -> Kind {
                Kind::Composite(vec![$($t::kind()),+])
            }

            fn scan(tokens: &[&str]) -> Result<(usize, Self), ScanError> {
                let mut consumed = 0;
                let value = ($(
                    {
                        let (leaf_consumed, leaf) = $t::scan(&tokens[consumed..])?;
                        consumed += leaf_consumed;
                        leaf
                    },
                )+);
                Ok((consumed, value))
            }

            #[allow(non_snake_case)]
            fn is_zero(&self) -> bool {
                let ($($t,)+) = self;
                true $(&& $t.is_zero())+
            }

            #[allow(non_snake_case)]
            fn render(&self) -> String {
                let ($($t,)+) = self;
                vec![$($t.render()),+].join(" ")
            }
        }
    };
}

scan_composite!(A, B);
scan_composite!(A, B, C);
