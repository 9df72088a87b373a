use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::input;

#[derive(Args)]
pub struct CaseCommand {
    /// snake_case name to convert
    name: String,

    /// Produce lowerCamel instead of UpperCamel
    #[arg(long)]
    lower: bool,

    /// Path to gengo.toml for extra abbreviations
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CaseCommand {
    pub fn run(&self) -> Result<()> {
        let caser = input::read_config(self.config.as_deref())?.caser();
        let cased = if self.lower {
            caser.lower_camel(&self.name)
        } else {
            caser.upper_camel(&self.name)
        };
        println!("{cased}");
        Ok(())
    }
}
