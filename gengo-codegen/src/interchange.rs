//! JSON interchange format.
//!
//! The JSON mirrors the IR directly: keys appear in declaration order and
//! empty optional values are omitted. A type is an object with a `kind` of
//! `"ident"`, `"struct"` or `"array"`:
//!
//! ```json
//! {"kind": "struct", "fields": [{"name": "ID", "type": {"kind": "ident", "ident": "int64"}}]}
//! ```

use gengo_ir::File;

use crate::Result;

/// Serialize a file to pretty-printed JSON.
pub fn render_interchange(file: &File) -> String {
    // Every IR type has string keys and no fallible serializer.
    serde_json::to_string_pretty(file).expect("IR values serialize to JSON")
}

/// Decode a file from interchange JSON.
pub fn parse_interchange(json: &str) -> Result<File> {
    let file: File = serde_json::from_str(json)?;
    tracing::debug!(
        package = %file.package_name,
        decls = file.type_decls.len(),
        "decoded interchange"
    );
    Ok(file)
}
