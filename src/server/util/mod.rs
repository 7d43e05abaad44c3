//! Small helpers shared across layers.

pub mod crypto;
pub mod parse;
