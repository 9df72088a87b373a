use std::{io, path::PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};

use crate::input;

#[derive(Args)]
pub struct RenderCommand {
    /// IR file in interchange JSON
    input: PathBuf,

    /// Write Go source here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to gengo.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sort type declarations by name
    #[arg(long)]
    sort: bool,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let config = input::read_config(self.config.as_deref())?;
        let mut file = input::read_ir(&self.input)?;
        if self.sort {
            file = file.sorted();
        }

        let printer = config.printer();
        match &self.output {
            Some(path) => {
                let source = printer.render_source(&file);
                input::write_output(Some(path.as_path()), &source)?;
                eprintln!("Wrote {}", path.display());
            }
            None => printer
                .write_source(&file, io::stdout().lock())
                .wrap_err("Failed to write Go source")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_render_to_file_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let ir = dir.path().join("ir.json");
        let out = dir.path().join("models.go");
        fs::write(
            &ir,
            r#"{"package_name": "models", "type_decls": [
                {"name": "B", "type": {"kind": "ident", "ident": "int"}},
                {"name": "A", "type": {"kind": "array", "ident": "string"}}
            ]}"#,
        )
        .unwrap();

        RenderCommand {
            input: ir,
            output: Some(out.clone()),
            config: None,
            sort: true,
        }
        .run()
        .unwrap();

        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "package models\n\ntype A []string\n\ntype B int\n"
        );
    }

    #[test]
    fn test_render_with_header_config() {
        let dir = tempfile::tempdir().unwrap();
        let ir = dir.path().join("ir.json");
        let config = dir.path().join("gengo.toml");
        let out = dir.path().join("p.go");
        fs::write(&ir, r#"{"package_name": "p"}"#).unwrap();
        fs::write(&config, "[render]\nheader = \"Code generated. DO NOT EDIT.\"\n").unwrap();

        RenderCommand {
            input: ir,
            output: Some(out.clone()),
            config: Some(config),
            sort: false,
        }
        .run()
        .unwrap();

        assert_eq!(
            fs::read_to_string(out).unwrap(),
            "// Code generated. DO NOT EDIT.\n\npackage p\n"
        );
    }
}
