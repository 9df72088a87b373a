mod case;
mod completions;
mod fmt;
mod remove;
mod render;

use case::CaseCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fmt::FmtCommand;
use remove::RemoveCommand;
use render::RenderCommand;

use crate::logging;

#[derive(Parser)]
#[command(name = "gengo")]
#[command(version)]
#[command(about = "Generate Go type declarations from a JSON IR")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);

        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Fmt(cmd) => cmd.run(),
            Commands::Remove(cmd) => cmd.run(),
            Commands::Case(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render Go source from an IR file
    Render(RenderCommand),

    /// Normalize an IR file
    Fmt(FmtCommand),

    /// Remove type declarations from an IR file
    Remove(RemoveCommand),

    /// Convert a snake_case name to Go camel case
    Case(CaseCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
