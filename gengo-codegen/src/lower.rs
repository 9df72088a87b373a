//! Lowering from the IR to the Go syntax tree.
//!
//! Lowering is a pure function of its input: the same [`File`] always
//! produces the same [`GoFile`].

use gengo_core::{quote, raw_or_quote};
use gengo_ir::{Field, File, Import, Tag, Type, TypeDecl};
use serde::{Deserialize, Serialize};

use crate::ast::{
    CommentGroup, Expr, FieldNode, GoFile, ImportDecl, ImportSpec, StructType, TypeSpec,
    trailing_comment,
};

/// When a struct field is printed without its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedPolicy {
    /// Embed a field whose type is an identifier equal to the field name.
    #[default]
    IdentOnly,
    /// Always print field names.
    Never,
}

impl EmbedPolicy {
    pub fn embeds(&self, field: &Field) -> bool {
        match self {
            EmbedPolicy::IdentOnly => field.names_own_ident(),
            EmbedPolicy::Never => false,
        }
    }
}

/// Translates IR nodes into syntax nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowerer {
    embed: EmbedPolicy,
}

impl Lowerer {
    pub fn new(embed: EmbedPolicy) -> Self {
        Self { embed }
    }

    pub fn embed_policy(&self) -> EmbedPolicy {
        self.embed
    }

    /// Lower a whole file.
    pub fn lower_file(&self, file: &File) -> GoFile {
        tracing::debug!(
            package = %file.package_name,
            imports = file.imports.len(),
            decls = file.type_decls.len(),
            "lowering file"
        );

        let imports = (!file.imports.is_empty()).then(|| ImportDecl {
            specs: file.imports.iter().map(|i| self.lower_import(i)).collect(),
        });

        GoFile {
            doc: lower_doc(file.doc.as_deref()),
            package: file.package_name.clone(),
            imports,
            decls: file
                .type_decls
                .iter()
                .map(|d| self.lower_decl(d))
                .collect(),
        }
    }

    pub fn lower_import(&self, import: &Import) -> ImportSpec {
        ImportSpec {
            name: import.name.clone().filter(|n| !n.is_empty()),
            path: quote(&import.path),
            comment: import.doc.as_deref().and_then(trailing_comment),
        }
    }

    pub fn lower_decl(&self, decl: &TypeDecl) -> TypeSpec {
        TypeSpec {
            doc: lower_doc(decl.doc.as_deref()),
            name: decl.name.clone(),
            ty: self.lower_type(&decl.ty),
        }
    }

    pub fn lower_type(&self, ty: &Type) -> Expr {
        match ty {
            Type::Ident(name) => Expr::Ident(name.clone()),
            Type::Array(elem) => Expr::Slice(elem.clone()),
            Type::Struct(fields) => Expr::Struct(StructType {
                fields: fields.iter().map(|f| self.lower_field(f)).collect(),
            }),
        }
    }

    pub fn lower_field(&self, field: &Field) -> FieldNode {
        let embedded = self.embed.embeds(field);
        if embedded {
            tracing::debug!(field = %field.name, "embedding field");
        }
        FieldNode {
            doc: lower_doc(field.doc.as_deref()),
            name: (!embedded).then(|| field.name.clone()),
            ty: self.lower_type(&field.ty),
            tag: lower_tag(&field.tag),
        }
    }
}

fn lower_doc(doc: Option<&str>) -> Option<CommentGroup> {
    doc.and_then(CommentGroup::from_doc)
}

fn lower_tag(tag: &Tag) -> Option<String> {
    let rendered = tag.render();
    (!rendered.is_empty()).then(|| raw_or_quote(&rendered))
}
