//! Reading IR and configuration files.

use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use gengo_codegen::{Config, parse_interchange};
use gengo_ir::File;

/// Read and decode an interchange JSON file.
pub fn read_ir(path: &Path) -> Result<File> {
    let content = read(path)?;
    parse_interchange(&content).wrap_err_with(|| format!("Failed to decode {}", path.display()))
}

/// Read `gengo.toml`, or use defaults when no path is given.
pub fn read_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = read(path)?;
    Config::from_toml_str(&content).wrap_err_with(|| format!("Failed to load {}", path.display()))
}

pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
