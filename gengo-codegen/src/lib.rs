//! Go source generation for the gengo IR.
//!
//! This crate turns a [`gengo_ir::File`] into Go source text in two steps:
//! [`lower`] translates the IR into a small Go syntax tree ([`ast`]), and
//! the [`Printer`] lays that tree out through a [`builder::CodeBuilder`].
//! [`render_interchange`] and [`parse_interchange`] convert the IR to and
//! from JSON without going through the syntax tree.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - Go syntax nodes
//! - [`lower`] - IR to syntax tree (Lowerer, EmbedPolicy)
//! - [`printer`] - Source text output
//! - [`interchange`] - JSON codec
//! - [`config`] - `gengo.toml` options

pub mod ast;
pub mod builder;
pub mod config;
mod error;
pub mod interchange;
pub mod lower;
pub mod printer;

pub use config::{Config, NamingOptions, RenderOptions};
pub use error::{Error, Result};
pub use interchange::{parse_interchange, render_interchange};
pub use lower::{EmbedPolicy, Lowerer};
pub use printer::Printer;
