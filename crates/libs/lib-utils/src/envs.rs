//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Get a boolean flag. Accepts `1/0`, `true/false`, `yes/no`, `on/off`.
pub fn get_env_bool(name: &'static str) -> Result<bool, Error> {
    let val = get_env(name)?;
    parse_bool(&val).ok_or(Error::WrongFormat(name))
}

/// Get and parse an environment variable, falling back to `default` when it is unset.
///
/// A value that is set but malformed is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

/// Boolean counterpart of [`get_env_parse_or`].
pub fn get_env_bool_or(name: &'static str, default: bool) -> Result<bool, Error> {
    match get_env_bool(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} is not set"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid value"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
