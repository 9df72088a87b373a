//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Mutable API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use gengo_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("type Point struct {")
///     .push_indent()
///     .push_columns(&[
///         vec!["X".to_string(), "int".to_string()],
///         vec!["Name".to_string(), "string".to_string()],
///     ])
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "type Point struct {\n\tX    int\n\tName string\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    align: bool,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            align: true,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Enable or disable column alignment of [`CodeFragment::Columns`].
    ///
    /// When disabled, cells are separated by a single space.
    pub fn with_alignment(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add rows of cells, one line per row, aligned in columns.
    pub fn push_columns(&mut self, rows: &[Vec<String>]) -> &mut Self {
        let widths = if self.align {
            column_widths(rows)
        } else {
            Vec::new()
        };

        for (i, row) in rows.iter().enumerate() {
            let mut line = String::new();
            for (j, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if j + 1 < row.len() {
                    let width = widths.get(i).and_then(|w| w.get(j)).copied().unwrap_or(0);
                    let pad = width.saturating_sub(display_width(cell)) + 1;
                    line.extend(std::iter::repeat_n(' ', pad));
                }
            }
            self.push_line(&line);
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Columns(rows) => {
                self.push_columns(&rows);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Width of every non-final cell: the widest cell among the maximal run of
/// adjacent rows that all continue past that column.
fn column_widths(rows: &[Vec<String>]) -> Vec<Vec<usize>> {
    let mut widths: Vec<Vec<usize>> = rows
        .iter()
        .map(|row| vec![0; row.len().saturating_sub(1)])
        .collect();
    let columns = widths.iter().map(Vec::len).max().unwrap_or(0);

    for col in 0..columns {
        let continues = |i: usize| rows[i].len() > col + 1;
        let mut start = 0;
        while start < rows.len() {
            if !continues(start) {
                start += 1;
                continue;
            }
            let end = (start..rows.len())
                .find(|&i| !continues(i))
                .unwrap_or(rows.len());
            let width = rows[start..end]
                .iter()
                .map(|row| display_width(&row[col]))
                .max()
                .unwrap_or(0);
            for row_widths in &mut widths[start..end] {
                row_widths[col] = width;
            }
            start = end;
        }
    }
    widths
}
