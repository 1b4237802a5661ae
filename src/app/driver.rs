use crate::adaptive_hash_map::AdaptiveHashMap;
use crate::app::command::Command;
use crate::app::{Error, Result};
use crate::hash_map::HashMap;
use crate::key::Modulo;
use crate::print;
use crate::splay_tree::SplayTree;
use std::fmt::{Display, Write};

/// A container that can be driven by a command script.
pub trait Driver<K, V> {
    /// Names of the commands the container understands. Other tokens in command position are
    /// skipped.
    const COMMANDS: &'static [&'static str];

    /// Runs `command` and appends its output to `out`. Container errors are returned as
    /// `Error::Container` so the caller can report them and carry on.
    fn execute(&mut self, command: Command<K, V>, out: &mut String) -> Result<()>;
}

fn write_empty(out: &mut String, empty: bool) -> Result<()> {
    writeln!(out, "{}", if empty { "true" } else { "false" })?;
    Ok(())
}

impl<K, V> Driver<K, V> for SplayTree<K, V>
where
    K: Ord + Display,
    V: Display,
{
    const COMMANDS: &'static [&'static str] = &[
        "insert",
        "peek",
        "extract",
        "size",
        "empty",
        "print",
        "minimum_key",
        "maximum_key",
        "quit",
    ];

    fn execute(&mut self, command: Command<K, V>, out: &mut String) -> Result<()> {
        match command {
            Command::Insert(key, value) => self.insert(key, value)?,
            Command::Peek(key) => writeln!(out, "{}", self.peek(&key)?)?,
            Command::Extract(key) => writeln!(out, "{}", self.extract(&key)?)?,
            Command::Size => writeln!(out, "{}", self.len())?,
            Command::Empty => write_empty(out, self.is_empty())?,
            Command::Print => print::write_tree(out, self)?,
            Command::MinimumKey => writeln!(out, "{}", self.minimum_key()?)?,
            Command::MaximumKey => writeln!(out, "{}", self.maximum_key()?)?,
            command => return Err(Error::UnsupportedCommand(command.name())),
        }
        Ok(())
    }
}

impl<K, V> Driver<K, V> for AdaptiveHashMap<K, V>
where
    K: Ord + Modulo + Display,
    V: Display,
{
    const COMMANDS: &'static [&'static str] = &[
        "insert",
        "peek",
        "extract",
        "size",
        "empty",
        "print",
        "hash_code",
        "bucket_count",
        "quit",
    ];

    fn execute(&mut self, command: Command<K, V>, out: &mut String) -> Result<()> {
        match command {
            Command::Insert(key, value) => self.insert(key, value)?,
            Command::Peek(key) => writeln!(out, "{}", self.peek(&key)?)?,
            Command::Extract(key) => writeln!(out, "{}", self.extract(&key)?)?,
            Command::Size => writeln!(out, "{}", self.len())?,
            Command::Empty => write_empty(out, self.is_empty())?,
            Command::Print => print::write_adaptive_hash_map(out, self)?,
            Command::HashCode(key) => writeln!(out, "{}", self.hash_code(&key))?,
            Command::BucketCount => writeln!(out, "{}", self.bucket_count())?,
            command => return Err(Error::UnsupportedCommand(command.name())),
        }
        Ok(())
    }
}

impl<K, V> Driver<K, V> for HashMap<K, V>
where
    K: Eq + Modulo + Display,
    V: Display,
{
    const COMMANDS: &'static [&'static str] = &[
        "insert",
        "peek",
        "extract",
        "size",
        "empty",
        "print",
        "hash_code",
        "bucket_count",
        "resize",
        "quit",
    ];

    fn execute(&mut self, command: Command<K, V>, out: &mut String) -> Result<()> {
        match command {
            Command::Insert(key, value) => self.insert(key, value)?,
            Command::Peek(key) => writeln!(out, "{}", self.peek(&key)?)?,
            Command::Extract(key) => writeln!(out, "{}", self.extract(&key)?)?,
            Command::Size => writeln!(out, "{}", self.len())?,
            Command::Empty => write_empty(out, self.is_empty())?,
            Command::Print => print::write_hash_map(out, self)?,
            Command::HashCode(key) => writeln!(out, "{}", self.hash_code(&key))?,
            Command::BucketCount => writeln!(out, "{}", self.bucket_count())?,
            Command::Resize(bucket_count) => self.resize(bucket_count),
            command => return Err(Error::UnsupportedCommand(command.name())),
        }
        Ok(())
    }
}
