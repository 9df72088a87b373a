//! Type declarations and type expressions.

use super::CommentGroup;
use crate::builder::{CodeFragment, Renderable};

/// `type Name Expr`, with an optional leading comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub name: String,
    pub ty: Expr,
}

impl Renderable for TypeSpec {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        match (&self.ty, self.ty.inline()) {
            (_, Some(inline)) => {
                fragments.push(CodeFragment::line(format!("type {} {}", self.name, inline)));
            }
            (Expr::Struct(st), None) => fragments.push(CodeFragment::block(
                format!("type {} struct {{", self.name),
                st.body(),
                Some("}".to_string()),
            )),
            // Only non-empty structs span lines.
            (_, None) => {}
        }
        fragments
    }
}

/// Type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `Name` or `pkg.Name`.
    Ident(String),
    /// `[]Elem`.
    Slice(String),
    Struct(StructType),
}

impl Expr {
    /// Single-line form, or `None` for a struct with fields.
    pub fn inline(&self) -> Option<String> {
        match self {
            Expr::Ident(name) => Some(name.clone()),
            Expr::Slice(elem) => Some(format!("[]{elem}")),
            Expr::Struct(st) if st.fields.is_empty() => Some("struct{}".to_string()),
            Expr::Struct(_) => None,
        }
    }
}

/// `struct { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructType {
    pub fields: Vec<FieldNode>,
}

impl StructType {
    /// Fragments between the braces.
    ///
    /// Consecutive single-line named fields form one aligned run. A doc
    /// comment, an embedded field or a multi-line struct ends the run.
    pub fn body(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        let mut run: Vec<Vec<String>> = Vec::new();

        for field in &self.fields {
            if field.doc.is_some() {
                flush(&mut run, &mut fragments);
                fragments.extend(field.doc.to_fragments());
            }

            match (&field.name, field.ty.inline()) {
                (Some(name), Some(ty)) => {
                    let mut row = vec![name.clone(), ty];
                    row.extend(field.tag.clone());
                    run.push(row);
                }
                (None, Some(ty)) => {
                    flush(&mut run, &mut fragments);
                    let line = match &field.tag {
                        Some(tag) => format!("{ty} {tag}"),
                        None => ty,
                    };
                    fragments.push(CodeFragment::Line(line));
                }
                (name, None) => {
                    flush(&mut run, &mut fragments);
                    let body = match &field.ty {
                        Expr::Struct(st) => st.body(),
                        _ => Vec::new(),
                    };
                    let header = match name {
                        Some(name) => format!("{name} struct {{"),
                        None => "struct {".to_string(),
                    };
                    let close = match &field.tag {
                        Some(tag) => format!("}} {tag}"),
                        None => "}".to_string(),
                    };
                    fragments.push(CodeFragment::block(header, body, Some(close)));
                }
            }
        }
        flush(&mut run, &mut fragments);
        fragments
    }
}

fn flush(run: &mut Vec<Vec<String>>, fragments: &mut Vec<CodeFragment>) {
    if !run.is_empty() {
        fragments.push(CodeFragment::columns(std::mem::take(run)));
    }
}

/// A struct field. `name` is `None` for an embedded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub doc: Option<CommentGroup>,
    pub name: Option<String>,
    pub ty: Expr,
    /// Tag as a Go string literal, quotes included.
    pub tag: Option<String>,
}
