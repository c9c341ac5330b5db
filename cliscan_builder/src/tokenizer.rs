use std::mem;

#[derive(Debug, Clone, Copy)]
enum State {
    Normal,
    Quoted(char),
    Escaped(Option<char>),
}

/// Split a default value string into tokens, the way a shell would.
///
/// Whitespace separates tokens, single or double quotes delimit literal runs, and a backslash escapes the next character.
/// Consecutive whitespace produces no empty tokens, although an explicitly quoted empty run does.
/// An entirely empty input yields a single empty token.
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut arguments = Vec::default();
    let mut current = String::default();
    let mut started = false;
    let mut state = State::Normal;

    for c in input.chars() {
        state = match state {
            State::Escaped(quote) => {
                current.push(c);
                started = true;
                quote.map_or(State::Normal, State::Quoted)
            }
            State::Quoted(quote) if c == quote => State::Normal,
            State::Quoted(quote) if c == '\\' => State::Escaped(Some(quote)),
            quoted @ State::Quoted(_) => {
                current.push(c);
                quoted
            }
            State::Normal if c == '\\' => State::Escaped(None),
            State::Normal if c == '\'' || c == '"' => {
                started = true;
                State::Quoted(c)
            }
            State::Normal if c.is_whitespace() => {
                if started {
                    arguments.push(mem::take(&mut current));
                    started = false;
                }
                State::Normal
            }
            State::Normal => {
                current.push(c);
                started = true;
                State::Normal
            }
        };
    }

    if started || arguments.is_empty() {
        arguments.push(current);
    }

    arguments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foobar", vec!["foobar"])]
    #[case("foo bar", vec!["foo", "bar"])]
    #[case("'foo bar'", vec!["foo bar"])]
    #[case("'foo'\"bar\"", vec!["foobar"])]
    #[case("'foo\\'bar'", vec!["foo'bar"])]
    #[case("foo ' bar '", vec!["foo", " bar "])]
    #[case("", vec![""])]
    #[case("  a   b  ", vec!["a", "b"])]
    #[case("a ''", vec!["a", ""])]
    #[case("\"it's\"", vec!["it's"])]
    #[case("a\\ b", vec!["a b"])]
    #[case("'unterminated run", vec!["unterminated run"])]
    #[case("1,2 ,3", vec!["1,2", ",3"])]
    fn split(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_arguments(input), expected);
    }
}
