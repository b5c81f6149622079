//! Dispatch from parsed arguments to the command handlers.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init, translate::translate},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
