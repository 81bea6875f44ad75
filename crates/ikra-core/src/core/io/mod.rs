//! Provides input/output functionality for MDL structure and XYZ trajectory files.
//!
//! Both formats are line oriented: one logical record per line, fields separated by
//! whitespace, floating-point values written in C-style scientific notation with fifteen
//! fractional digits. Decoding is strict; any malformed token or missing line aborts the
//! read with a [`FormatError`](error::FormatError) that names the offending line.

pub mod condition;
pub mod error;
pub mod format;
pub mod lines;
pub mod mdl;
pub mod scalar;
pub mod traits;
pub mod xyz;

#[cfg(test)]
pub(crate) mod test_fixtures;
