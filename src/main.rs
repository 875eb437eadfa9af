mod assemble;
mod cli;
mod commands;
mod error;
mod page_ref;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Insert {
            a,
            b,
            position,
            dest,
        } => {
            commands::insert::run(&a, &b, position, dest.as_deref())?;
        }
        Commands::AppendInto { dest, sources } => {
            commands::append::run_into(&dest, &sources)?;
        }
        Commands::Append { sources } => {
            commands::append::run_in_place(&sources)?;
        }
        Commands::Slice { file, dest } => {
            commands::slice::run(&file, dest.as_deref(), false)?;
        }
        Commands::Reverse { file, dest } => {
            commands::slice::run(&file, dest.as_deref(), true)?;
        }
        Commands::Merge { dest, sources } => {
            commands::merge::run(&dest, &sources)?;
        }
        Commands::Split { file, prefix } => {
            commands::split::run(&file, prefix.as_deref())?;
        }
    }

    Ok(())
}
