//! # Workflows Module
//!
//! Batch procedures built on the codecs in [`crate::core::io`].
//!
//! - **Regeneration** ([`regenerate`]) - Rewrites a structure file once per condition file,
//!   carrying the structure's boundary geometry across each condition swap.
//! - **Trajectory** ([`trajectory`]) - Walks the frames of an XYZ stream to summarize them or
//!   pull a single frame out.
//!
//! Workflows own file handling and report their progress through a
//! [`ProgressReporter`](progress::ProgressReporter); the codecs underneath never open files.

pub mod error;
pub mod progress;
pub mod regenerate;
pub mod trajectory;
