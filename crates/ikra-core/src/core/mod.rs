//! # Core Module
//!
//! Data models and text codecs for MDL structure files and XYZ trajectory files.
//!
//! - **Data Models** ([`models`]) - Conditions, elements, boundary parameters, atoms,
//!   structures and trajectory cursors.
//! - **File I/O** ([`io`]) - Strict scalar coercion, the potential-type schema table, and the
//!   condition, structure and trajectory codecs.

pub mod io;
pub mod models;
