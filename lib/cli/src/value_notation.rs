use std::fmt::Display;

use itertools::Itertools;
use regex::Regex;

use crate::config::{OutputConfig, Radix};

lazy_static::lazy_static! {
    static ref DECIMAL_REGEX: Regex = Regex::new(r"^[0-9][0-9_]*$").unwrap();
    static ref HEX_REGEX: Regex = Regex::new(r"^0[xX]([0-9a-fA-F_]*)$").unwrap();
    static ref BINARY_REGEX: Regex = Regex::new(r"^0[bB]([01_]*)$").unwrap();
    static ref BYTE_SEPARATOR_REGEX: Regex = Regex::new(r"[\s:]").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    Malformed(String),
    OutOfRange(String),
    InvalidHex { hex: String, message: String },
}

impl Display for NotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(token) => f.write_fmt(format_args!(
                "'{}' is not a decimal, 0x hex or 0b binary integer",
                token
            )),
            Self::OutOfRange(token) => f.write_fmt(format_args!(
                "'{}' does not fit in an unsigned 32-bit integer",
                token
            )),
            Self::InvalidHex { hex, message } => {
                f.write_fmt(format_args!("invalid hex '{}': {}", hex, message))
            }
        }
    }
}

/// Parses an integer written in decimal, `0x` hex or `0b` binary.
/// Underscores may separate digits.
pub fn parse_value(token: &str) -> Result<u32, NotationError> {
    let trimmed = token.trim();
    let (digits, radix) = if let Some(captures) = HEX_REGEX.captures(trimmed) {
        (captures[1].to_string(), 16)
    } else if let Some(captures) = BINARY_REGEX.captures(trimmed) {
        (captures[1].to_string(), 2)
    } else if DECIMAL_REGEX.is_match(trimmed) {
        (trimmed.to_string(), 10)
    } else {
        return Err(NotationError::Malformed(token.to_string()));
    };

    let digits = digits.replace('_', "");
    if digits.is_empty() {
        return Err(NotationError::Malformed(token.to_string()));
    }

    // the regexes only admit valid digits, so any failure here is overflow
    u32::from_str_radix(&digits, radix).map_err(|_| NotationError::OutOfRange(token.to_string()))
}

pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u32>, NotationError> {
    tokens.iter().map(|token| parse_value(token.as_ref())).collect()
}

/// Joins `tokens` into one byte string. Whitespace and `:` between digits
/// are ignored.
pub fn parse_hex<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>, NotationError> {
    let joined = tokens.iter().map(|token| token.as_ref()).join("");
    let hex = BYTE_SEPARATOR_REGEX.replace_all(&joined, "");
    hex::decode(hex.as_bytes()).map_err(|err| NotationError::InvalidHex {
        hex: joined.clone(),
        message: err.to_string(),
    })
}

pub fn format_bytes(bytes: &[u8], config: &OutputConfig) -> String {
    bytes
        .iter()
        .map(|byte| {
            if config.uppercase {
                hex::encode_upper([*byte])
            } else {
                hex::encode([*byte])
            }
        })
        .join(&config.byte_separator)
}

pub fn format_values(values: &[u32], config: &OutputConfig) -> String {
    values
        .iter()
        .map(|value| match (config.radix, config.uppercase) {
            (Radix::Decimal, _) => value.to_string(),
            (Radix::Hex, true) => format!("0x{:X}", value),
            (Radix::Hex, false) => format!("0x{:x}", value),
        })
        .join(&config.value_separator)
}
