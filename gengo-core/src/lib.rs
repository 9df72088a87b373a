//! Core utilities for the gengo Go code generator.
//!
//! This crate has no dependencies and is shared by the IR and the
//! code generator.

mod literal;
mod naming;

// Identifier casing
pub use naming::{Caser, DEFAULT_ABBREVIATIONS, to_lower_camel, to_upper_camel};
// Go literals
pub use literal::{quote, raw_or_quote};
