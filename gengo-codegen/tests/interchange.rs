//! JSON interchange output and decoding.

use gengo_codegen::{Error, parse_interchange, render_interchange};
use gengo_ir::{Field, File, Import, TagPart, Type, TypeDecl};

fn user_file() -> File {
    File::new("models").import(Import::new("time")).decl(
        TypeDecl::new(
            "User",
            Type::struct_([
                Field::new("ID", Type::ident("int64")).tag(TagPart::json("id").omit_empty()),
                Field::new("Tags", Type::array("string")),
            ]),
        )
        .doc("User is a person."),
    )
}

#[test]
fn test_render_interchange_snapshot() {
    insta::assert_snapshot!(render_interchange(&user_file()), @r#"
{
  "package_name": "models",
  "imports": [
    {
      "path": "time"
    }
  ],
  "type_decls": [
    {
      "name": "User",
      "type": {
        "kind": "struct",
        "fields": [
          {
            "name": "ID",
            "type": {
              "kind": "ident",
              "ident": "int64"
            },
            "tag": [
              {
                "encoding": "json",
                "name": "id",
                "omit_empty": true
              }
            ]
          },
          {
            "name": "Tags",
            "type": {
              "kind": "array",
              "ident": "string"
            }
          }
        ]
      },
      "doc": "User is a person."
    }
  ]
}
"#);
}

#[test]
fn test_empty_file_snapshot() {
    insta::assert_snapshot!(render_interchange(&File::new("p")), @r#"
{
  "package_name": "p"
}
"#);
}

#[test]
fn test_interchange_is_deterministic() {
    let file = user_file();
    assert_eq!(render_interchange(&file), render_interchange(&file.clone()));
}

#[test]
fn test_roundtrip_preserves_file() {
    let file = user_file();
    let decoded = parse_interchange(&render_interchange(&file)).unwrap();
    assert_eq!(decoded, file);
}

#[test]
fn test_legacy_kind_spellings() {
    let json = r#"{
        "package_name": "p",
        "type_decls": [
            {"name": "A", "type": {"kind": "", "ident": "int"}},
            {"name": "B", "type": {"kind": "[]", "ident": "byte"}}
        ]
    }"#;
    let file = parse_interchange(json).unwrap();
    assert_eq!(file.type_decls[0].ty, Type::ident("int"));
    assert_eq!(file.type_decls[1].ty, Type::array("byte"));
    assert!(render_interchange(&file).contains(r#""kind": "array""#));
}

#[test]
fn test_malformed_kind_is_rejected() {
    let json = r#"{"package_name": "p", "type_decls": [{"name": "M", "type": {"kind": "map", "ident": "x"}}]}"#;
    let err = parse_interchange(json).unwrap_err();
    assert!(matches!(err, Error::Interchange(_)));
    assert!(err.to_string().contains("unknown type kind 'map'"));
}

#[test]
fn test_fields_on_ident_are_rejected() {
    let json = r#"{"package_name": "p", "type_decls": [{"name": "M", "type": {
        "kind": "ident", "ident": "x",
        "fields": [{"name": "A", "type": {"kind": "ident", "ident": "int"}}]
    }}]}"#;
    let err = parse_interchange(json).unwrap_err();
    assert!(err.to_string().contains("cannot carry fields"));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        parse_interchange("{").unwrap_err(),
        Error::Interchange(_)
    ));
}

#[test]
fn test_empty_optional_strings_omitted() {
    let file = File::new("p")
        .doc("")
        .import(Import::new("fmt").alias("").doc(""))
        .decl(
            TypeDecl::new(
                "T",
                Type::struct_([Field::new("A", Type::ident("int")).doc("")]),
            )
            .doc(""),
        );
    let json = render_interchange(&file);
    assert!(!json.contains(r#""doc""#));
    assert!(!json.contains(r#""name": """#));

    let mut raw = file.clone();
    raw.doc = Some(String::new());
    raw.imports[0].name = Some(String::new());
    assert_eq!(render_interchange(&raw), json);
}

#[test]
fn test_struct_field_order_preserved() {
    let names = ["Zeta", "Alpha", "Mid"];
    let file = File::new("p").decl(TypeDecl::new(
        "T",
        Type::struct_(names.map(|n| Field::new(n, Type::ident("int")))),
    ));

    let json = render_interchange(&file);
    let positions: Vec<_> = names
        .iter()
        .map(|n| json.find(&format!(r#""name": "{n}""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let decoded = parse_interchange(&json).unwrap();
    let fields = decoded.type_decls[0].ty.fields().unwrap();
    let decoded_names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(decoded_names, names);
}

#[test]
fn test_capitalized_tag_keys_accepted() {
    let json = r#"{"package_name": "p", "type_decls": [{"name": "T", "type": {"kind": "struct", "fields": [
        {"name": "ID", "type": {"kind": "ident", "ident": "int64"},
         "tag": [{"Encoding": "json", "Name": "id", "Type": "string", "Omitted": false, "OmitEmpty": true}]}
    ]}}]}"#;
    let file = parse_interchange(json).unwrap();
    let field = &file.type_decls[0].ty.fields().unwrap()[0];
    assert_eq!(field.tag.render(), r#"json:"id,string,omitempty""#);
}
