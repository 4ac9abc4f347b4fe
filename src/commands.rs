//! `/hangman`-style command parsing and dispatch

use std::path::Path;

use crate::editor::{StructureEditor, StructureStore};
use crate::error::{HangmanError, HangmanResult};
use crate::game::{GameCoordinator, PlayerRef};
use crate::world::{HostWorld, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new session on every game
    Reset,
    SaveLetterBoard(String),
    SaveStructure(String),
    Build(String),
}

impl Command {
    /// Recognize a command label and its arguments; `None` for anything else
    pub fn parse(label: &str, args: &[&str]) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "reset" => Some(Command::Reset),
            "save" => match args {
                [kind, name] if kind.eq_ignore_ascii_case("letterboard") => {
                    Some(Command::SaveLetterBoard(name.to_string()))
                }
                [kind, name] if kind.eq_ignore_ascii_case("structure") => {
                    Some(Command::SaveStructure(name.to_string()))
                }
                _ => None,
            },
            "build" => match args {
                [name] => Some(Command::Build(name.to_string())),
                _ => None,
            },
            _ => None,
        }
    }

    /// Split a whitespace-separated line into label and arguments, then parse
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let label = words.next()?;
        let args: Vec<&str> = words.collect();
        Self::parse(label, &args)
    }
}

/// Everything a command may touch
pub struct CommandContext<'a> {
    pub world: &'a mut dyn HostWorld,
    pub games: &'a mut [GameCoordinator],
    pub editor: &'a mut StructureEditor,
    pub store: &'a mut StructureStore,
    /// Where the store is persisted after a save, if anywhere
    pub store_path: Option<&'a Path>,
}

impl CommandContext<'_> {
    fn persist_store(&self) -> HangmanResult<()> {
        match self.store_path {
            Some(path) => self.store.save(path),
            None => Ok(()),
        }
    }
}

/// Run `command` for `sender`, standing at `location`
///
/// Returns `Ok(false)` when the command cannot run in the sender's current
/// state (nothing selected, unknown structure).
pub fn dispatch(
    command: &Command,
    sender: &PlayerRef,
    location: &Location,
    ctx: &mut CommandContext<'_>,
) -> HangmanResult<bool> {
    let result = run(command, sender, location, ctx);

    match result {
        Ok(()) => Ok(true),
        Err(e @ (HangmanError::IncompleteSelection(_) | HangmanError::UnknownStructure(_))) => {
            log::debug!("{} cannot run {:?}: {}", sender.name, command, e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn run(
    command: &Command,
    sender: &PlayerRef,
    location: &Location,
    ctx: &mut CommandContext<'_>,
) -> HangmanResult<()> {
    match command {
        Command::Reset => {
            for game in ctx.games.iter_mut() {
                game.reset(&mut *ctx.world);
            }
        }
        Command::SaveLetterBoard(name) => {
            ctx.editor
                .save_letter_board(&*ctx.world, sender, name, &mut *ctx.store)?;
            ctx.persist_store()?;
        }
        Command::SaveStructure(name) => {
            ctx.editor.save_structure(sender, name, &mut *ctx.store)?;
            ctx.persist_store()?;
        }
        Command::Build(name) => {
            ctx.editor
                .build(&mut *ctx.world, sender, name, location, &*ctx.store)?;
        }
    }
    Ok(())
}
