//! Struct field tags.
//!
//! A [`Tag`] is the metadata string attached to a Go struct field, made of
//! space-separated `encoding:"value"` parts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One `encoding:"name,options"` part of a field tag.
///
/// Decoding also accepts capitalized keys (`"Encoding"`, `"OmitEmpty"`, ...)
/// as written by older producers of the interchange format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPart {
    /// Encoding key, e.g. `json` or `yaml`. An empty encoding renders nothing.
    #[serde(alias = "Encoding")]
    pub encoding: String,
    /// Field name override.
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Type hint option, e.g. `string` in `json:"id,string"`.
    #[serde(
        default,
        rename = "type",
        alias = "Type",
        skip_serializing_if = "String::is_empty"
    )]
    pub type_hint: String,
    /// Field is skipped by this encoding (`json:"-"`).
    #[serde(default, alias = "Omitted", skip_serializing_if = "is_false")]
    pub omitted: bool,
    /// Append the `omitempty` option.
    #[serde(default, alias = "OmitEmpty", skip_serializing_if = "is_false")]
    pub omit_empty: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl TagPart {
    pub fn new(encoding: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a `json` part.
    pub fn json(name: impl Into<String>) -> Self {
        Self::new("json", name)
    }

    pub fn type_hint(mut self, hint: impl Into<String>) -> Self {
        self.type_hint = hint.into();
        self
    }

    pub fn omitted(mut self) -> Self {
        self.omitted = true;
        self
    }

    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Render as `encoding:"name[,type][,omitempty]"`.
    ///
    /// Returns an empty string when the encoding is empty.
    pub fn render(&self) -> String {
        if self.encoding.is_empty() {
            return String::new();
        }
        if self.omitted {
            return format!("{}:\"-\"", self.encoding);
        }
        let mut segments = vec![self.name.as_str()];
        if !self.type_hint.is_empty() {
            segments.push(&self.type_hint);
        }
        if self.omit_empty {
            segments.push("omitempty");
        }
        format!("{}:\"{}\"", self.encoding, segments.join(","))
    }
}

impl fmt::Display for TagPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Ordered list of tag parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag {
    pub parts: Vec<TagPart>,
}

impl Tag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part.
    pub fn part(mut self, part: TagPart) -> Self {
        self.parts.push(part);
        self
    }

    /// True when the tag has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render non-empty parts joined by a single space.
    pub fn render(&self) -> String {
        self.parts
            .iter()
            .map(TagPart::render)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<TagPart> for Tag {
    fn from(part: TagPart) -> Self {
        Self { parts: vec![part] }
    }
}

impl FromIterator<TagPart> for Tag {
    fn from_iter<I: IntoIterator<Item = TagPart>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
