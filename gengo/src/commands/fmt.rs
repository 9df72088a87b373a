use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use gengo_codegen::{parse_interchange, render_interchange};

use crate::input;

#[derive(Args)]
pub struct FmtCommand {
    /// IR file in interchange JSON
    input: PathBuf,

    /// Rewrite the file in place instead of printing it
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// Check if file is formatted without making changes (exit 1 if not)
    #[arg(long)]
    check: bool,
}

impl FmtCommand {
    pub fn run(&self) -> Result<()> {
        let content = input::read(&self.input)?;
        let formatted = normalize(&content)
            .wrap_err_with(|| format!("Failed to decode {}", self.input.display()))?;

        if self.check {
            if content != formatted {
                eprintln!("error: {} is not formatted", self.input.display());
                eprintln!("Run `gengo fmt --write` to fix.");
                std::process::exit(1);
            }
            println!("{} is formatted", self.input.display());
        } else if self.write {
            if content == formatted {
                println!("{} is already formatted", self.input.display());
            } else {
                fs::write(&self.input, &formatted)?;
                println!("Formatted {}", self.input.display());
            }
        } else {
            print!("{formatted}");
        }

        Ok(())
    }
}

/// Canonical interchange text, with a trailing newline.
fn normalize(content: &str) -> gengo_codegen::Result<String> {
    let file = parse_interchange(content)?;
    Ok(format!("{}\n", render_interchange(&file)))
}
