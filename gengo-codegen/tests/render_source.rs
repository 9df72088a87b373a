//! Go source output of complete files.

use gengo_codegen::{EmbedPolicy, Printer, RenderOptions};
use gengo_ir::{Field, File, Import, TagPart, Type, TypeDecl};

fn models() -> File {
    File::new("models")
        .doc("Package models is generated.")
        .import(Import::new("time"))
        .import(Import::new("encoding/json").alias("j").doc("codec"))
        .decl(TypeDecl::new("ID", Type::ident("string")))
        .decl(
            TypeDecl::new(
                "User",
                Type::struct_([
                    Field::embedded("Base"),
                    Field::new("ID", Type::ident("ID")).tag(TagPart::json("id")),
                    Field::new("DisplayName", Type::ident("string"))
                        .tag(TagPart::json("display_name").omit_empty()),
                    Field::new("CreatedAt", Type::ident("time.Time")).doc("Creation time."),
                    Field::new("Tags", Type::array("string")),
                    Field::new(
                        "Address",
                        Type::struct_([
                            Field::new("Street", Type::ident("string"))
                                .tag(TagPart::json("street")),
                            Field::new("Zip", Type::ident("string")),
                        ]),
                    )
                    .tag(TagPart::json("address")),
                    Field::new("Raw", Type::ident("j.RawMessage"))
                        .tag(TagPart::json("raw").omitted()),
                ]),
            )
            .doc("User is a person."),
        )
        .decl(TypeDecl::new("Empty", Type::struct_([])))
}

#[test]
fn test_full_file() {
    let expected = concat!(
        "// Package models is generated.\n",
        "package models\n",
        "\n",
        "import (\n",
        "\t\"time\"\n",
        "\tj \"encoding/json\" // codec\n",
        ")\n",
        "\n",
        "type ID string\n",
        "\n",
        "// User is a person.\n",
        "type User struct {\n",
        "\tBase\n",
        "\tID          ID     `json:\"id\"`\n",
        "\tDisplayName string `json:\"display_name,omitempty\"`\n",
        "\t// Creation time.\n",
        "\tCreatedAt time.Time\n",
        "\tTags      []string\n",
        "\tAddress struct {\n",
        "\t\tStreet string `json:\"street\"`\n",
        "\t\tZip    string\n",
        "\t} `json:\"address\"`\n",
        "\tRaw j.RawMessage `json:\"-\"`\n",
        "}\n",
        "\n",
        "type Empty struct{}\n",
    );
    assert_eq!(Printer::default().render_source(&models()), expected);
}

#[test]
fn test_rendering_is_deterministic() {
    let file = models();
    let printer = Printer::default();
    assert_eq!(printer.render_source(&file), printer.render_source(&file));
    assert_eq!(
        printer.render_source(&file),
        printer.render_source(&file.clone())
    );
}

#[test]
fn test_no_imports_no_import_block() {
    let file = File::new("p").decl(TypeDecl::new("T", Type::ident("int")));
    let source = Printer::default().render_source(&file);
    assert_eq!(source, "package p\n\ntype T int\n");
    assert!(!source.contains("import"));
}

#[test]
fn test_imports_render_in_input_order() {
    let file = File::new("p")
        .import(Import::new("time"))
        .import(Import::new("fmt"));
    assert_eq!(
        Printer::default().render_source(&file),
        "package p\n\nimport (\n\t\"time\"\n\t\"fmt\"\n)\n"
    );
}

#[test]
fn test_embedding_policy() {
    let file = File::new("p").decl(TypeDecl::new(
        "T",
        Type::struct_([
            Field::embedded("Base"),
            Field::new("Other", Type::ident("Base")),
            Field::new("List", Type::array("List")),
        ]),
    ));

    assert_eq!(
        Printer::default().render_source(&file),
        "package p\n\ntype T struct {\n\tBase\n\tOther Base\n\tList  []List\n}\n"
    );

    let never = Printer::new(RenderOptions {
        embed: EmbedPolicy::Never,
        ..RenderOptions::default()
    });
    assert_eq!(
        never.render_source(&file),
        "package p\n\ntype T struct {\n\tBase  Base\n\tOther Base\n\tList  []List\n}\n"
    );
}

#[test]
fn test_field_order_preserved() {
    let names = ["Zeta", "Alpha", "Mid"];
    let file = File::new("p").decl(TypeDecl::new(
        "T",
        Type::struct_(names.map(|n| Field::new(n, Type::ident("int")))),
    ));
    let source = Printer::default().render_source(&file);
    let positions: Vec<_> = names
        .iter()
        .map(|n| source.find(&format!("\t{n} ")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_duplicate_decls_render_as_is() {
    let file = File::new("p").decls([
        TypeDecl::new("T", Type::ident("int")),
        TypeDecl::new("T", Type::ident("string")),
    ]);
    assert_eq!(
        Printer::default().render_source(&file),
        "package p\n\ntype T int\n\ntype T string\n"
    );
}

#[test]
fn test_removed_decl_not_rendered() {
    let file = File::new("p").decls([
        TypeDecl::new("A", Type::ident("int")),
        TypeDecl::new("B", Type::ident("int")),
    ]);
    let source = Printer::default().render_source(&file.remove_decl("A"));
    assert_eq!(source, "package p\n\ntype B int\n");
    assert!(Printer::default().render_source(&file).contains("type A int"));
}

#[test]
fn test_tag_with_backquote_falls_back_to_quoted() {
    let file = File::new("p").decl(TypeDecl::new(
        "T",
        Type::struct_([Field::new("X", Type::ident("int")).tag(TagPart::new("doc", "a`b"))]),
    ));
    assert_eq!(
        Printer::default().render_source(&file),
        "package p\n\ntype T struct {\n\tX int \"doc:\\\"a`b\\\"\"\n}\n"
    );
}

#[test]
fn test_multiple_tag_parts() {
    let file = File::new("p").decl(TypeDecl::new(
        "T",
        Type::struct_([Field::new("Count", Type::ident("int64")).tag(
            [
                TagPart::json("count").type_hint("string"),
                TagPart::new("yaml", "count").omit_empty(),
            ]
            .into_iter()
            .collect::<gengo_ir::Tag>(),
        )]),
    ));
    assert_eq!(
        Printer::default().render_source(&file),
        "package p\n\ntype T struct {\n\tCount int64 `json:\"count,string\" yaml:\"count,omitempty\"`\n}\n"
    );
}

#[test]
fn test_empty_optional_strings_render_nothing() {
    let mut import = Import::new("fmt");
    import.name = Some(String::new());
    import.doc = Some(String::new());
    let mut field = Field::new("A", Type::ident("int"));
    field.doc = Some(String::new());
    let mut decl = TypeDecl::new("T", Type::struct_([field]));
    decl.doc = Some(String::new());
    let mut file = File::new("p").import(import).decl(decl);
    file.doc = Some(String::new());

    assert_eq!(
        Printer::default().render_source(&file),
        "package p\n\nimport (\n\t\"fmt\"\n)\n\ntype T struct {\n\tA int\n}\n"
    );
}
