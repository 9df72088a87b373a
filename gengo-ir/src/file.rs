//! Files, imports and type declarations.

use serde::{Deserialize, Serialize};

use crate::{
    Field, Type, TypeKey,
    serde_helpers::{deserialize_non_empty, is_unset, non_empty},
};

/// A Go source file: package clause, imports and type declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Package name. Not validated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_decls: Vec<TypeDecl>,
    /// Package documentation.
    #[serde(
        default,
        skip_serializing_if = "is_unset",
        deserialize_with = "deserialize_non_empty"
    )]
    pub doc: Option<String>,
}

impl File {
    /// Create an empty file for a package.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = non_empty(doc.into());
        self
    }

    /// Add an import.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a type declaration.
    pub fn decl(mut self, decl: TypeDecl) -> Self {
        self.type_decls.push(decl);
        self
    }

    /// Add multiple type declarations.
    pub fn decls(mut self, decls: impl IntoIterator<Item = TypeDecl>) -> Self {
        self.type_decls.extend(decls);
        self
    }

    /// Return a copy of this file without the declarations named `name`.
    ///
    /// `self` is left untouched; the returned file owns its own copies of
    /// the retained declarations.
    pub fn remove_decl(&self, name: &str) -> File {
        File {
            package_name: self.package_name.clone(),
            imports: self.imports.clone(),
            type_decls: self
                .type_decls
                .iter()
                .filter(|decl| decl.name != name)
                .cloned()
                .collect(),
            doc: self.doc.clone(),
        }
    }

    /// Return a copy of this file with declarations sorted by name.
    pub fn sorted(&self) -> File {
        let mut file = self.clone();
        sort_by_name(&mut file.type_decls);
        file
    }

    /// Find the first declaration with the given name.
    pub fn find_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.type_decls.iter().find(|decl| decl.name == name)
    }

    /// Resolve a key to the type node it addresses.
    ///
    /// Duplicate names resolve to their first occurrence.
    pub fn resolve(&self, key: &TypeKey) -> Option<&Type> {
        let decl = self.find_decl(key.decl_name())?;
        key.path()
            .iter()
            .try_fold(&decl.ty, |ty, name| ty.field(name).map(|f| &f.ty))
    }
}

/// An imported package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Local alias (`j "encoding/json"`).
    #[serde(
        default,
        skip_serializing_if = "is_unset",
        deserialize_with = "deserialize_non_empty"
    )]
    pub name: Option<String>,
    pub path: String,
    /// Trailing comment.
    #[serde(
        default,
        skip_serializing_if = "is_unset",
        deserialize_with = "deserialize_non_empty"
    )]
    pub doc: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            doc: None,
        }
    }

    /// Set the local alias.
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Set the trailing comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = non_empty(doc.into());
        self
    }
}

/// A named type declaration: `type Name T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(
        default,
        skip_serializing_if = "is_unset",
        deserialize_with = "deserialize_non_empty"
    )]
    pub doc: Option<String>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = non_empty(doc.into());
        self
    }
}

/// Items ordered by [`sort_by_name`].
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for TypeDecl {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Stable sort by name. Rendering never reorders on its own; call this
/// explicitly when sorted output is wanted.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| a.name().cmp(b.name()));
}
