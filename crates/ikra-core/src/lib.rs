//! # Ikra Core Library
//!
//! Readers and writers for the two companion text formats used to drive and record
//! molecular-dynamics runs: the MDL structure file (simulation conditions plus an atomic
//! snapshot) and the XYZ trajectory file (a sequence of frames with per-atom energies).
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Plain value types for conditions, structures and
//!   trajectory frames (`models`), and the line-oriented codecs that decode and encode them
//!   byte-for-byte (`io`).
//!
//! - **[`workflows`]: The Public API.** Batch procedures built on the codecs, such as
//!   regenerating a family of structure files from condition files and walking the frames of
//!   a trajectory. They report progress through a callback and log through `tracing`.

pub mod core;
pub mod workflows;
