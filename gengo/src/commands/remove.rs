use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use gengo_codegen::render_interchange;
use gengo_ir::File;

use crate::input;

#[derive(Args)]
pub struct RemoveCommand {
    /// IR file in interchange JSON
    input: PathBuf,

    /// Type declaration to remove (repeatable)
    #[arg(short, long = "name", required = true)]
    names: Vec<String>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RemoveCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.apply(input::read_ir(&self.input)?)?;
        input::write_output(
            self.output.as_deref(),
            &format!("{}\n", render_interchange(&file)),
        )
    }

    fn apply(&self, mut file: File) -> Result<File> {
        for name in &self.names {
            if file.find_decl(name).is_none() {
                bail!("Type '{}' does not exist", name);
            }
            file = file.remove_decl(name);
            tracing::debug!(name = %name, "removed declaration");
        }
        Ok(file)
    }
}
