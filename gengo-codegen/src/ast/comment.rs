//! Line comments.

use crate::builder::{CodeFragment, Renderable};

/// A run of `//` comment lines attached above a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    lines: Vec<String>,
}

impl CommentGroup {
    /// Build a comment group from free-form documentation.
    ///
    /// Every line gets a `// ` prefix unless it already starts with `//`.
    /// Blank documentation yields `None`.
    pub fn from_doc(doc: &str) -> Option<Self> {
        if doc.trim().is_empty() {
            return None;
        }
        Some(Self {
            lines: doc.trim_end().lines().map(comment_line).collect(),
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Renderable for CommentGroup {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.lines.iter().map(CodeFragment::line).collect()
    }
}

/// Collapse documentation into a single trailing comment.
pub fn trailing_comment(doc: &str) -> Option<String> {
    let text = doc
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        None
    } else {
        Some(comment_line(&text))
    }
}

fn comment_line(line: &str) -> String {
    let line = line.trim_end();
    if line.starts_with("//") {
        line.to_string()
    } else if line.is_empty() {
        "//".to_string()
    } else {
        format!("// {line}")
    }
}
