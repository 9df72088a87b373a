//! Type shapes and struct fields.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Tag,
    serde_helpers::{deserialize_non_empty, is_unset, non_empty},
};

/// The shape of a type.
///
/// Serialized as an object with a `kind` discriminant (`"ident"`,
/// `"struct"` or `"array"`) plus the data of that variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TypeRepr", try_from = "TypeRepr")]
pub enum Type {
    /// Reference to a named type: `string`, `time.Time`, `User`.
    Ident(String),
    /// Inline struct with ordered fields.
    Struct(Vec<Field>),
    /// Slice of a named element type: `[]string`.
    Array(String),
}

impl Type {
    /// Create an identifier type.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Create an array type of the given element identifier.
    pub fn array(elem: impl Into<String>) -> Self {
        Self::Array(elem.into())
    }

    /// Create a struct type from fields.
    pub fn struct_(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::Struct(fields.into_iter().collect())
    }

    /// Get the discriminant of this type.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Ident(_) => Kind::Ident,
            Self::Struct(_) => Kind::Struct,
            Self::Array(_) => Kind::Array,
        }
    }

    /// Identifier for `Ident` types, element identifier for `Array` types.
    pub fn ident_name(&self) -> Option<&str> {
        match self {
            Self::Ident(name) | Self::Array(name) => Some(name),
            Self::Struct(_) => None,
        }
    }

    /// Fields of a struct type.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Mutable fields of a struct type.
    pub fn fields_mut(&mut self) -> Option<&mut Vec<Field>> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Find a direct field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields()?.iter().find(|f| f.name == name)
    }
}

/// Discriminant of [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Ident,
    Struct,
    Array,
}

impl Kind {
    /// Name used in the interchange format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Ident => "ident",
            Kind::Struct => "struct",
            Kind::Array => "array",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    /// Parse a kind name. `""` and `"[]"` are older spellings of `ident`
    /// and `array`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ident" | "" => Ok(Kind::Ident),
            "struct" => Ok(Kind::Struct),
            "array" | "[]" => Ok(Kind::Array),
            other => Err(Error::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Wire shape of [`Type`].
#[derive(Serialize, Deserialize)]
struct TypeRepr {
    kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    ident: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl From<Type> for TypeRepr {
    fn from(ty: Type) -> Self {
        let kind = ty.kind().as_str().to_string();
        match ty {
            Type::Ident(ident) | Type::Array(ident) => Self {
                kind,
                ident,
                fields: Vec::new(),
            },
            Type::Struct(fields) => Self {
                kind,
                ident: String::new(),
                fields,
            },
        }
    }
}

impl TryFrom<TypeRepr> for Type {
    type Error = Error;

    fn try_from(repr: TypeRepr) -> Result<Self, Self::Error> {
        let kind: Kind = repr.kind.parse()?;
        if kind != Kind::Struct && !repr.fields.is_empty() {
            return Err(Error::UnexpectedFields {
                kind: kind.as_str(),
            });
        }
        match kind {
            Kind::Ident => Ok(Type::Ident(repr.ident)),
            Kind::Array => Ok(Type::Array(repr.ident)),
            Kind::Struct if !repr.ident.is_empty() => {
                Err(Error::UnexpectedIdent { ident: repr.ident })
            }
            Kind::Struct => Ok(Type::Struct(repr.fields)),
        }
    }
}

/// A struct member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Tag::is_empty")]
    pub tag: Tag,
    #[serde(
        default,
        skip_serializing_if = "is_unset",
        deserialize_with = "deserialize_non_empty"
    )]
    pub doc: Option<String>,
}

impl Field {
    /// Create a field with no tag and no doc.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            tag: Tag::default(),
            doc: None,
        }
    }

    /// Create a field whose name is its own type identifier, which renders
    /// as an embedded field.
    pub fn embedded(ident: impl Into<String>) -> Self {
        let ident = ident.into();
        Self::new(ident.clone(), Type::Ident(ident))
    }

    /// Set the tag.
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = non_empty(doc.into());
        self
    }

    /// True when the field type is an identifier equal to the field name.
    pub fn names_own_ident(&self) -> bool {
        matches!(&self.ty, Type::Ident(ident) if *ident == self.name)
    }
}
