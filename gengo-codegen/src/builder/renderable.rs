//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Syntax nodes describe themselves as fragments; the
//! [`CodeBuilder`](super::CodeBuilder) turns fragments into text.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Consecutive lines split into cells. Every cell that is followed by
    /// another cell is padded to the widest cell of its column, counted over
    /// the adjacent rows that also continue past that column.
    Columns(Vec<Vec<String>>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create an aligned column fragment.
    pub fn columns(rows: Vec<Vec<String>>) -> Self {
        Self::Columns(rows)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable> Renderable for Option<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().map(T::to_fragments).unwrap_or_default()
    }
}
