pub mod bytes;
pub mod text;

use std::fmt::Display;
use std::str::FromStr;

use crate::error::CliError;

/// Parse a command-line value, naming the expected type on failure.
pub(crate) fn parse_value<T>(ty: &'static str, value: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e: T::Err| CliError::Value {
        ty,
        value: value.to_string(),
        detail: e.to_string(),
    })
}
