//! Console host for a single hangman game
//!
//! Runs the game against an in-memory world and reads commands from stdin:
//! `guess <player> <letter>`, `tick <n>`, `state`, `quit`, plus the
//! `reset` / `save` / `build` game commands.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hangman_engine::game::{
    InteractAction, InteractionEvent, LetterMenu, LetterSelector, LogMessenger, MonotonicClock,
    TickScheduler,
};
use hangman_engine::{
    dispatch, init_logging, Command, CommandContext, GameCoordinator, GameSetup, HangmanConfig,
    HostServices, MemoryWorld, PlayerRef, StructureEditor, StructureStore,
};

const DEFAULT_CONFIG: &str = "hangman.toml";

/// Selector that only reports the menu it would show
struct LogSelector;

impl LetterSelector for LogSelector {
    fn open(&mut self, player: &PlayerRef, menu: LetterMenu) {
        log::debug!(
            "Opening {}-slot letter menu for {} at {}",
            menu.size(),
            player.name,
            menu.clicked().pos
        );
    }
}

fn main() -> Result<()> {
    init_logging();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = HangmanConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;
    let setup = GameSetup::from_config(&config).context("Failed to restore board and stages")?;

    let mut world = MemoryWorld::new(config.world_id());
    for block in setup.letter_board.positions().blocks() {
        world.fill(block.pos, setup.letter_board.blank().clone());
    }

    let scheduler = TickScheduler::new();
    let services = HostServices {
        scheduler: Box::new(scheduler.clone()),
        messenger: Box::new(LogMessenger),
        clock: Box::new(MonotonicClock::new()),
        selector: Box::new(LogSelector),
        rng: Box::new(StdRng::from_entropy()),
    };

    let anchor = config.anchor();
    let game = GameCoordinator::new(anchor.clone(), config.max_guesses, setup, services, &mut world)
        .context("Failed to start hangman")?;
    let mut games = vec![game];
    let mut editor = StructureEditor::new(config.stamp_mode);
    let mut store = StructureStore::new();
    let console = PlayerRef::new("console", "Console");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["state"] => {
                let game = &games[0];
                writeln!(
                    stdout,
                    "{}  wrong {}/{}  {:?}",
                    game.masked_word(),
                    game.wrong_guesses(),
                    game.max_guesses(),
                    game.phase()
                )?;
            }
            ["tick", n] => {
                let ticks: u64 = n.parse().with_context(|| format!("Bad tick count {}", n))?;
                for task in scheduler.advance(ticks) {
                    for game in games.iter_mut() {
                        game.run_task(&mut world, task);
                    }
                }
            }
            ["guess", name, letter] => {
                let Some(letter) = letter.chars().next().map(|c| c.to_ascii_uppercase()) else {
                    continue;
                };
                let player = PlayerRef::new(*name, *name);
                let game = &mut games[0];
                let Some(slot) = game.letter_board().positions().block_at(0) else {
                    log::warn!("Letter board has no slots");
                    continue;
                };

                let mut event = InteractionEvent::new(
                    player.clone(),
                    InteractAction::RightClickBlock,
                    Some(slot.clone()),
                );
                if game.on_interaction(&mut event) {
                    game.make_guess(&mut world, &slot, letter, &player);
                }
            }
            [label, args @ ..] => match Command::parse(label, args) {
                Some(command) => {
                    let mut ctx = CommandContext {
                        world: &mut world,
                        games: &mut games,
                        editor: &mut editor,
                        store: &mut store,
                        store_path: None,
                    };
                    if !dispatch(&command, &console, &anchor, &mut ctx)? {
                        log::warn!("Command {:?} could not run", command);
                    }
                }
                None => log::warn!("Unknown command: {}", line.trim()),
            },
        }
        stdout.flush()?;
    }

    Ok(())
}
