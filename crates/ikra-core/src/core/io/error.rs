use crate::core::models::condition::PotentialType;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed field on line {line}: {kind}")]
    MalformedField { line: usize, kind: FieldErrorKind },
    #[error("Unknown potential type '{tag}' on line {line}")]
    UnknownPotentialType { line: usize, tag: String },
    #[error("Input ended after line {line} while expecting {expected}")]
    TruncatedInput { line: usize, expected: &'static str },
    #[error("A trajectory frame needs at least one atom; a zero count ends the stream")]
    EmptyFrame,
    #[error("Atom count mismatch: header declares {declared}, found {found} atom records")]
    AtomCountMismatch { declared: usize, found: usize },
    #[error(
        "Potential '{potential_type}' needs {expected} potential file(s) for the declared elements, found {found}"
    )]
    PotentialFileCountMismatch {
        potential_type: PotentialType,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldErrorKind {
    #[error("Invalid integer for {field} (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid float for {field} (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Invalid flag for {field} (value: '{value}')")]
    InvalidFlag { field: &'static str, value: String },
    #[error("Required field {field} is missing")]
    Missing { field: &'static str },
    #[error("Line is not valid UTF-8")]
    InvalidText,
}

impl FormatError {
    pub(crate) fn malformed(line: usize, kind: FieldErrorKind) -> Self {
        Self::MalformedField { line, kind }
    }
}
