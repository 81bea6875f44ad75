//! Strict coercion of text tokens into integers, floats and boolean flags.
//!
//! Integers are decimal with an optional sign. Floats follow Rust's `f64` grammar, which
//! covers every value the writers produce (`1.500000000000000e+00`, `nan`, `-inf`). A flag
//! is an integer where `0` is `false` and any other value is `true`. Anything else is
//! rejected; no token is ever coerced to zero.

use super::error::{FieldErrorKind, FormatError};
use std::str::FromStr;
use std::str::SplitWhitespace;

pub fn parse_int<T: FromStr>(token: &str, field: &'static str) -> Result<T, FieldErrorKind> {
    token.parse().map_err(|_| FieldErrorKind::InvalidInt {
        field,
        value: token.to_string(),
    })
}

pub fn parse_float(token: &str, field: &'static str) -> Result<f64, FieldErrorKind> {
    token.parse().map_err(|_| FieldErrorKind::InvalidFloat {
        field,
        value: token.to_string(),
    })
}

pub fn parse_flag(token: &str, field: &'static str) -> Result<bool, FieldErrorKind> {
    token
        .parse::<i64>()
        .map(|value| value != 0)
        .map_err(|_| FieldErrorKind::InvalidFlag {
            field,
            value: token.to_string(),
        })
}

/// The whitespace-separated fields of one input line, consumed left to right.
///
/// Every accessor names the field it expects so that failures point at both the line and
/// the value. Tokens left over after the last accessor are ignored.
pub struct Record<'a> {
    line: usize,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Record<'a> {
    pub fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            tokens: text.split_whitespace(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn word(&mut self, field: &'static str) -> Result<&'a str, FormatError> {
        self.tokens
            .next()
            .ok_or_else(|| FormatError::malformed(self.line, FieldErrorKind::Missing { field }))
    }

    pub fn int<T: FromStr>(&mut self, field: &'static str) -> Result<T, FormatError> {
        let token = self.word(field)?;
        parse_int(token, field).map_err(|kind| FormatError::malformed(self.line, kind))
    }

    pub fn float(&mut self, field: &'static str) -> Result<f64, FormatError> {
        let token = self.word(field)?;
        parse_float(token, field).map_err(|kind| FormatError::malformed(self.line, kind))
    }

    pub fn flag(&mut self, field: &'static str) -> Result<bool, FormatError> {
        let token = self.word(field)?;
        parse_flag(token, field).map_err(|kind| FormatError::malformed(self.line, kind))
    }
}
