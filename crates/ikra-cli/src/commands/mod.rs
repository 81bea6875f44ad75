pub mod check;
pub mod frames;
pub mod regen;
