use crate::app::scanner::{Parse, Scanner};
use crate::app::Result;
use std::fmt;
use std::io::BufRead;

/// A single instruction of a command script.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<K, V> {
    Insert(K, V),
    Peek(K),
    Extract(K),
    Size,
    Empty,
    Print,
    MinimumKey,
    MaximumKey,
    HashCode(K),
    BucketCount,
    Resize(usize),
    Quit,
}

impl<K, V> Command<K, V>
where
    K: Parse,
    V: Parse,
{
    /// Reads the arguments of the command called `name`. Returns `None` if `name` is not one of
    /// `accepted`, in which case nothing is consumed.
    pub fn read<R>(name: &str, accepted: &[&str], scanner: &mut Scanner<R>) -> Result<Option<Self>>
    where
        R: BufRead,
    {
        if !accepted.contains(&name) {
            return Ok(None);
        }
        let command = match name {
            "insert" => {
                let key = scanner.parse()?;
                let value = scanner.parse()?;
                Command::Insert(key, value)
            },
            "peek" => Command::Peek(scanner.parse()?),
            "extract" => Command::Extract(scanner.parse()?),
            "size" => Command::Size,
            "empty" => Command::Empty,
            "print" => Command::Print,
            "minimum_key" => Command::MinimumKey,
            "maximum_key" => Command::MaximumKey,
            "hash_code" => Command::HashCode(scanner.parse()?),
            "bucket_count" => Command::BucketCount,
            "resize" => Command::Resize(scanner.parse()?),
            "quit" => Command::Quit,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

impl<K, V> Command<K, V> {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(..) => "insert",
            Command::Peek(_) => "peek",
            Command::Extract(_) => "extract",
            Command::Size => "size",
            Command::Empty => "empty",
            Command::Print => "print",
            Command::MinimumKey => "minimum_key",
            Command::MaximumKey => "maximum_key",
            Command::HashCode(_) => "hash_code",
            Command::BucketCount => "bucket_count",
            Command::Resize(_) => "resize",
            Command::Quit => "quit",
        }
    }
}

/// Formats the command the way it is echoed into a transcript.
impl<K, V> fmt::Display for Command<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Command::Insert(key, value) => write!(f, " {} {}", key, value),
            Command::Peek(key) | Command::Extract(key) | Command::HashCode(key) => {
                write!(f, " {}", key)
            },
            Command::Resize(bucket_count) => write!(f, " {}", bucket_count),
            _ => Ok(()),
        }
    }
}
