//! Indentation configuration for code generation.

use serde::{Deserialize, Serialize};

/// Indentation style for generated code.
///
/// In `gengo.toml` this is written `indent = "tab"` or
/// `indent = { spaces = 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as written by gofmt.
    pub const GO: Self = Self::Tab;

    /// Append one indentation level to `buf`.
    pub fn write_to(&self, buf: &mut String) {
        match self {
            Self::Spaces(n) => buf.extend(std::iter::repeat_n(' ', usize::from(*n))),
            Self::Tab => buf.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}
