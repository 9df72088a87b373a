//! Intermediate representation of Go type declarations.
//!
//! Callers build a [`File`] out of [`TypeDecl`]s whose [`Type`] is one of
//! three closed shapes: an identifier reference, an inline struct, or a
//! slice of an identifier. The IR is plain data: it renders nothing itself
//! apart from field [`Tag`]s, and serializes to the JSON interchange format
//! through `serde`.
//!
//! # Architecture
//!
//! ```text
//! caller → gengo-ir (File) → gengo-codegen (lower → Go syntax → text)
//! ```

mod attrs;
mod error;
mod file;
mod serde_helpers;
mod tag;
mod types;

pub use attrs::{Attrs, TypeKey};
pub use error::{Error, Result};
pub use file::{File, Import, Named, TypeDecl, sort_by_name};
pub use tag::{Tag, TagPart};
pub use types::{Field, Kind, Type};
