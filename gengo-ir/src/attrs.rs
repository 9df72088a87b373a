//! Caller-owned attributes attached to type nodes.
//!
//! The IR itself carries no free-form data. Tools that want to annotate
//! types (generation hints, source schema locations, ...) keep an
//! [`Attrs`] table next to the [`File`](crate::File) and address nodes with
//! a [`TypeKey`]. The code generator never reads these tables.

use std::fmt;

use indexmap::IndexMap;

use crate::File;

/// Stable address of a type node: a declaration name followed by a path
/// of struct field names.
///
/// ```
/// use gengo_ir::TypeKey;
///
/// let key = TypeKey::decl("User").field("Address").field("Street");
/// assert_eq!(key.to_string(), "User.Address.Street");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    decl: String,
    path: Vec<String>,
}

impl TypeKey {
    /// Key of a declaration's own type.
    pub fn decl(name: impl Into<String>) -> Self {
        Self {
            decl: name.into(),
            path: Vec::new(),
        }
    }

    /// Descend into a struct field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.path.push(name.into());
        self
    }

    pub fn decl_name(&self) -> &str {
        &self.decl
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decl)?;
        for segment in &self.path {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

/// Typed attribute table keyed by [`TypeKey`] and attribute name.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Attrs<V> {
    entries: IndexMap<TypeKey, IndexMap<String, V>>,
}

impl<V> Attrs<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Set an attribute, returning the previous value.
    pub fn set(&mut self, key: &TypeKey, attr: impl Into<String>, value: V) -> Option<V> {
        self.entries
            .entry(key.clone())
            .or_default()
            .insert(attr.into(), value)
    }

    /// Get an attribute.
    pub fn get(&self, key: &TypeKey, attr: &str) -> Option<&V> {
        self.entries.get(key)?.get(attr)
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, key: &TypeKey, attr: &str) -> Option<V> {
        let attrs = self.entries.get_mut(key)?;
        let value = attrs.shift_remove(attr);
        if attrs.is_empty() {
            self.entries.shift_remove(key);
        }
        value
    }

    /// Iterate over the attributes of one node.
    pub fn iter_key(&self, key: &TypeKey) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .get(key)
            .into_iter()
            .flat_map(|attrs| attrs.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Iterate over keys that carry at least one attribute.
    pub fn keys(&self) -> impl Iterator<Item = &TypeKey> {
        self.entries.keys()
    }

    /// Drop entries whose key no longer resolves in `file`.
    pub fn prune(&mut self, file: &File) {
        self.entries.retain(|key, _| file.resolve(key).is_some());
    }

    /// Number of keys with attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for Attrs<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Type, TypeDecl};

    #[derive(Debug, Clone, PartialEq)]
    enum Hint {
        Nullable,
        Format(&'static str),
    }

    #[test]
    fn test_set_get() {
        let mut attrs = Attrs::new();
        let key = TypeKey::decl("User").field("Email");

        assert_eq!(attrs.set(&key, "format", Hint::Format("email")), None);
        assert_eq!(attrs.get(&key, "format"), Some(&Hint::Format("email")));
        assert_eq!(attrs.get(&key, "nullable"), None);
        assert_eq!(attrs.get(&TypeKey::decl("User"), "format"), None);
    }

    #[test]
    fn test_set_replaces() {
        let mut attrs = Attrs::new();
        let key = TypeKey::decl("User");
        attrs.set(&key, "hint", Hint::Nullable);
        let prev = attrs.set(&key, "hint", Hint::Format("uuid"));
        assert_eq!(prev, Some(Hint::Nullable));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_remove_clears_empty_key() {
        let mut attrs = Attrs::new();
        let key = TypeKey::decl("User");
        attrs.set(&key, "hint", Hint::Nullable);

        assert_eq!(attrs.remove(&key, "hint"), Some(Hint::Nullable));
        assert!(attrs.is_empty());
        assert_eq!(attrs.remove(&key, "hint"), None);
    }

    #[test]
    fn test_iter_key_in_insertion_order() {
        let mut attrs: Attrs<u32> = Attrs::new();
        let key = TypeKey::decl("T");
        attrs.set(&key, "b", 2);
        attrs.set(&key, "a", 1);

        let items: Vec<_> = attrs.iter_key(&key).collect();
        assert_eq!(items, [("b", &2), ("a", &1)]);
        assert_eq!(attrs.iter_key(&TypeKey::decl("Other")).count(), 0);
    }

    #[test]
    fn test_prune() {
        let file = File::new("p").decl(TypeDecl::new(
            "User",
            Type::struct_([Field::new("Name", Type::ident("string"))]),
        ));
        let mut attrs = Attrs::new();
        attrs.set(&TypeKey::decl("User").field("Name"), "k", 1);
        attrs.set(&TypeKey::decl("Gone"), "k", 2);

        attrs.prune(&file);
        let keys: Vec<String> = attrs.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["User.Name"]);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(TypeKey::decl("User").to_string(), "User");
        assert_eq!(TypeKey::decl("A").field("B").to_string(), "A.B");
    }
}
