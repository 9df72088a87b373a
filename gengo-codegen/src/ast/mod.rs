//! Go syntax tree produced by [`lower`](crate::lower) and printed by
//! [`Printer`](crate::Printer).
//!
//! The tree covers only what type declarations need: a package clause, one
//! grouped import declaration and `type` specs over identifiers, slices and
//! structs. Every node implements [`Renderable`](crate::builder::Renderable).

mod comment;
mod decl;
mod file;

pub use comment::{CommentGroup, trailing_comment};
pub use decl::{Expr, FieldNode, StructType, TypeSpec};
pub use file::{GoFile, ImportDecl, ImportSpec};
