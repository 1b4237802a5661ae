use crate::app::float::Float;
use crate::app::{Error, Result};
use crate::key::Name;
use std::io::BufRead;
use std::str::FromStr;

/// Splits an input stream into whitespace-separated tokens, reading one line at a time.
pub struct Scanner<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R> Scanner<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            pending: Vec::new(),
        }
    }

    /// Returns the next token, or `None` at the end of the input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }

    /// Returns the next token, failing with `Error::UnexpectedEof` at the end of the input.
    pub fn token(&mut self) -> Result<String> {
        self.next_token()?.ok_or(Error::UnexpectedEof)
    }

    pub fn parse<T>(&mut self) -> Result<T>
    where
        T: Parse,
    {
        T::parse(self)
    }
}

/// A value that can be read from a `Scanner`.
pub trait Parse: Sized {
    fn parse<R>(scanner: &mut Scanner<R>) -> Result<Self>
    where
        R: BufRead;
}

fn parse_token<T, R>(scanner: &mut Scanner<R>, expected: &'static str) -> Result<T>
where
    T: FromStr,
    R: BufRead,
{
    let token = scanner.token()?;
    token.parse().map_err(|_| Error::Parse { token, expected })
}

macro_rules! impl_parse_from_str {
    ($($type:ty: $expected:expr,)*) => {
        $(
            impl Parse for $type {
                fn parse<R>(scanner: &mut Scanner<R>) -> Result<Self>
                where
                    R: BufRead,
                {
                    parse_token(scanner, $expected)
                }
            }
        )*
    };
}

impl_parse_from_str! {
    i32: "an integer",
    usize: "a non-negative integer",
    String: "a string",
}

impl Parse for Float {
    fn parse<R>(scanner: &mut Scanner<R>) -> Result<Self>
    where
        R: BufRead,
    {
        parse_token(scanner, "a float").map(Float)
    }
}

impl Parse for Name {
    fn parse<R>(scanner: &mut Scanner<R>) -> Result<Self>
    where
        R: BufRead,
    {
        let first = scanner.token()?;
        let last = scanner.token()?;
        Ok(Name { first, last })
    }
}

#[cfg(test)]
mod tests {
    use super::Scanner;
    use crate::app::float::Float;
    use crate::app::Error;
    use crate::key::Name;

    #[test]
    fn test_tokens_across_lines() {
        let mut scanner = Scanner::new("insert 1\n\n  two\tthree \n".as_bytes());
        assert_eq!(scanner.next_token().unwrap(), Some(String::from("insert")));
        assert_eq!(scanner.next_token().unwrap(), Some(String::from("1")));
        assert_eq!(scanner.next_token().unwrap(), Some(String::from("two")));
        assert_eq!(scanner.next_token().unwrap(), Some(String::from("three")));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    #[test]
    fn test_parse() {
        let mut scanner = Scanner::new("-3 2.5 Ada Lovelace word".as_bytes());
        assert_eq!(scanner.parse::<i32>().unwrap(), -3);
        assert_eq!(scanner.parse::<Float>().unwrap(), Float(2.5));
        assert_eq!(scanner.parse::<Name>().unwrap(), Name::new("Ada", "Lovelace"));
        assert_eq!(scanner.parse::<String>().unwrap(), "word");
        match scanner.parse::<i32>() {
            Err(Error::UnexpectedEof) => {},
            _ => panic!("Expected the scanner to run out of tokens."),
        }
    }

    #[test]
    fn test_parse_error() {
        let mut scanner = Scanner::new("x".as_bytes());
        match scanner.parse::<usize>() {
            Err(Error::Parse { token, expected }) => {
                assert_eq!(token, "x");
                assert_eq!(expected, "a non-negative integer");
            },
            _ => panic!("Expected a parse error."),
        }
    }
}
