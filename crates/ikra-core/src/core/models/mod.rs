//! Value types shared by the structure and trajectory codecs.
//!
//! Every type here is a plain aggregate with no shared backing storage, so `Clone` is a
//! full deep copy.

pub mod condition;
pub mod geometry;
pub mod structure;
pub mod trajectory;
