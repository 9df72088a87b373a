//! Go source printer.

use std::io;

use gengo_ir::{File, TypeDecl};

use crate::{
    Lowerer, Result,
    ast::{CommentGroup, GoFile},
    builder::{CodeBuilder, CodeFragment},
    config::RenderOptions,
};

/// Renders IR files as Go source text.
///
/// # Example
///
/// ```
/// use gengo_codegen::Printer;
/// use gengo_ir::{Field, File, TagPart, Type, TypeDecl};
///
/// let file = File::new("models").decl(TypeDecl::new(
///     "User",
///     Type::struct_([
///         Field::new("ID", Type::ident("int64")).tag(TagPart::json("id")),
///         Field::new("Name", Type::ident("string")),
///     ]),
/// ));
///
/// assert_eq!(
///     Printer::default().render_source(&file),
///     "package models\n\ntype User struct {\n\tID   int64 `json:\"id\"`\n\tName string\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Printer {
    options: RenderOptions,
}

impl Printer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn lowerer(&self) -> Lowerer {
        Lowerer::new(self.options.embed)
    }

    fn builder(&self) -> CodeBuilder {
        CodeBuilder::new(self.options.indent).with_alignment(self.options.align)
    }

    /// Lower and print a whole file.
    pub fn render_source(&self, file: &File) -> String {
        self.print(&self.lowerer().lower_file(file))
    }

    /// Print a single declaration, without package clause.
    pub fn render_decl(&self, decl: &TypeDecl) -> String {
        let mut builder = self.builder();
        builder.emit(&self.lowerer().lower_decl(decl));
        builder.build()
    }

    /// Print an already lowered file.
    pub fn print(&self, file: &GoFile) -> String {
        let mut builder = self.builder();
        if let Some(header) = self.options.header.as_deref().and_then(CommentGroup::from_doc) {
            builder.emit(&header);
            builder.apply_fragment(CodeFragment::Blank);
        }
        builder.emit(file);

        let source = builder.build();
        tracing::debug!(package = %file.package, bytes = source.len(), "printed source");
        source
    }

    /// Render `file` and write it to `out`.
    ///
    /// Rendering completes before the first byte is written.
    pub fn write_source<W: io::Write>(&self, file: &File, mut out: W) -> Result<()> {
        let source = self.render_source(file);
        out.write_all(source.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
