//! Line-oriented command interpreters for the containers.
//!
//! A script starts with a header naming the key type and the value type (`int`, `float`,
//! `string` or `name`; `float` is only valid for values), followed by the initial bucket count
//! for the hash table interpreters. The rest of the script is a stream of commands. Every
//! command the container understands is echoed into the transcript before it runs, followed by
//! its output or by the message of the error it raised:
//!
//! ```
//! use splay_collections::app::{self, App};
//!
//! let script = "int string\ninsert 1 one\npeek 1\npeek 2\nquit\n";
//! let mut transcript = Vec::new();
//! app::run(App::SplayTree, script.as_bytes(), &mut transcript).unwrap();
//! assert_eq!(
//!     String::from_utf8(transcript).unwrap(),
//!     "insert 1 one\npeek 1\none\npeek 2\nKey does not exist!\nquit\n",
//! );
//! ```

mod command;
mod driver;
mod float;
mod scanner;

pub use self::command::Command;
pub use self::driver::Driver;
pub use self::float::Float;
pub use self::scanner::{Parse, Scanner};

use crate::adaptive_hash_map::AdaptiveHashMap;
use crate::error;
use crate::hash_map::HashMap;
use crate::key::{Modulo, Name};
use crate::splay_tree::SplayTree;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io::{self, BufRead, Write};
use std::result;

/// Environment variable that holds the log level of the binaries.
pub const LOG_LEVEL_VAR: &str = "SPLAY_LOG";

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    FormatError(fmt::Error),
    /// A container rejected a command. Reported in the transcript; the session continues.
    Container(error::Error),
    /// The script ended in the middle of a header or a command.
    UnexpectedEof,
    Parse {
        token: String,
        expected: &'static str,
    },
    UnknownType(String),
    InvalidBucketCount,
    UnsupportedCommand(&'static str),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Error {
        Error::FormatError(err)
    }
}

impl From<error::Error> for Error {
    fn from(err: error::Error) -> Error {
        Error::Container(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::FormatError(error) => Some(error),
            Error::Container(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::FormatError(error) => write!(f, "{}", error),
            Error::Container(error) => write!(f, "{}", error),
            Error::UnexpectedEof => write!(f, "unexpected end of input"),
            Error::Parse { token, expected } => write!(f, "expected {}, found `{}`", expected, token),
            Error::UnknownType(name) => write!(f, "unknown type `{}`", name),
            Error::InvalidBucketCount => write!(f, "bucket count must be positive"),
            Error::UnsupportedCommand(name) => write!(f, "unsupported command `{}`", name),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The container an interpreter drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum App {
    SplayTree,
    AdaptiveHashMap,
    HashMap,
}

/// Initializes logging to stderr at the level named by `SPLAY_LOG` (default `warn`).
pub fn init_logging() {
    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if WriteLogger::init(level, Config::default(), io::stderr()).is_err() {
        warn!("logger was already initialized");
    }
}

/// Runs every command of `scanner` against `driver` until `quit` or the end of the input.
pub fn run_commands<D, K, V, R, W>(driver: &mut D, scanner: &mut Scanner<R>, out: &mut W) -> Result<()>
where
    D: Driver<K, V>,
    K: Parse + Display,
    V: Parse + Display,
    R: BufRead,
    W: Write,
{
    let mut buffer = String::new();
    loop {
        let name = match scanner.next_token()? {
            Some(name) => name,
            None => {
                warn!("input ended without `quit`");
                return Ok(());
            },
        };
        let command = match Command::<K, V>::read(&name, D::COMMANDS, scanner)? {
            Some(command) => command,
            None => {
                debug!("skipping unknown command `{}`", name);
                continue;
            },
        };

        writeln!(out, "{}", command)?;
        if let Command::Quit = command {
            return Ok(());
        }

        buffer.clear();
        match driver.execute(command, &mut buffer) {
            Ok(()) => out.write_all(buffer.as_bytes())?,
            Err(Error::Container(error)) => {
                debug!("{} failed: {}", name, error);
                out.write_all(buffer.as_bytes())?;
                writeln!(out, "{}", error)?;
            },
            Err(error) => return Err(error),
        }
    }
}

fn read_bucket_count<R>(scanner: &mut Scanner<R>) -> Result<usize>
where
    R: BufRead,
{
    match scanner.parse::<usize>()? {
        0 => Err(Error::InvalidBucketCount),
        bucket_count => Ok(bucket_count),
    }
}

fn run_typed<K, V, R, W>(app: App, scanner: &mut Scanner<R>, out: &mut W) -> Result<()>
where
    K: Parse + Display + Ord + Modulo,
    V: Parse + Display,
    R: BufRead,
    W: Write,
{
    match app {
        App::SplayTree => run_commands(&mut SplayTree::<K, V>::new(), scanner, out),
        App::AdaptiveHashMap => {
            let bucket_count = read_bucket_count(scanner)?;
            run_commands(&mut AdaptiveHashMap::<K, V>::new(bucket_count), scanner, out)
        },
        App::HashMap => {
            let bucket_count = read_bucket_count(scanner)?;
            run_commands(&mut HashMap::<K, V>::new(bucket_count), scanner, out)
        },
    }
}

macro_rules! run_with_value_type {
    ($value_type:expr, $key:ty, ($($arg:expr),*)) => {
        match $value_type {
            "int" => run_typed::<$key, i32, _, _>($($arg),*),
            "float" => run_typed::<$key, Float, _, _>($($arg),*),
            "string" => run_typed::<$key, String, _, _>($($arg),*),
            "name" => run_typed::<$key, Name, _, _>($($arg),*),
            other => Err(Error::UnknownType(other.to_string())),
        }
    };
}

/// Reads the script header from `input`, builds the container named by `app` and runs the
/// script against it, writing the transcript to `output`.
pub fn run<R, W>(app: App, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut scanner = Scanner::new(input);
    let key_type = scanner.token()?;
    let value_type = scanner.token()?;
    info!("running {:?} with {} keys and {} values", app, key_type, value_type);

    let out = &mut output;
    let scanner = &mut scanner;
    let result = match key_type.as_str() {
        "int" => run_with_value_type!(value_type.as_str(), i32, (app, scanner, out)),
        "string" => run_with_value_type!(value_type.as_str(), String, (app, scanner, out)),
        "name" => run_with_value_type!(value_type.as_str(), Name, (app, scanner, out)),
        other => Err(Error::UnknownType(other.to_string())),
    };
    result?;
    output.flush()?;
    Ok(())
}
