//! Source files and import declarations.

use super::{CommentGroup, TypeSpec};
use crate::builder::{CodeFragment, Renderable};

/// A Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    pub doc: Option<CommentGroup>,
    pub package: String,
    /// `None` when the file has no imports; an empty group is never printed.
    pub imports: Option<ImportDecl>,
    pub decls: Vec<TypeSpec>,
}

impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::line(format!("package {}", self.package)));

        let imports = self.imports.iter().map(Renderable::to_fragments);
        let decls = self.decls.iter().map(Renderable::to_fragments);
        for section in imports.chain(decls) {
            fragments.push(CodeFragment::Blank);
            fragments.extend(section);
        }
        fragments
    }
}

/// Grouped `import ( ... )` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub specs: Vec<ImportSpec>,
}

impl Renderable for ImportDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let rows = self.specs.iter().map(ImportSpec::cells).collect();
        vec![CodeFragment::block(
            "import (",
            vec![CodeFragment::columns(rows)],
            Some(")".to_string()),
        )]
    }
}

/// One import line: optional alias, quoted path, optional trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<String>,
    /// Path as a Go string literal, quotes included.
    pub path: String,
    pub comment: Option<String>,
}

impl ImportSpec {
    fn cells(&self) -> Vec<String> {
        let spec = match &self.name {
            Some(name) => format!("{name} {}", self.path),
            None => self.path.clone(),
        };
        let mut cells = vec![spec];
        cells.extend(self.comment.clone());
        cells
    }
}
