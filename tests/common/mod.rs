// Shared fakes for the integration tests: a recording messenger, a manual
// clock, a recording letter selector and a small game fixture.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use hangman_engine::game::{
    Clock, GameSettings, GameSetup, LetterMenu, LetterSelector, Messenger, TickScheduler,
};
use hangman_engine::{
    BlockDescriptor, BlockPos, BlockRef, BlockRegion, GameCoordinator, GlyphCatalog, HostServices,
    HostWorld, LetterBoard, Location, MemoryWorld, PlayerId, PlayerRef, WorldId,
};

pub const WORLD: &str = "overworld";

/// Materials of stage 0, 1, 2, ... so each stamp can be told apart
pub const STAGE_MATERIALS: [&str; 7] = [
    "minecraft:oak_planks",
    "minecraft:oak_fence",
    "minecraft:stone",
    "minecraft:cobblestone",
    "minecraft:glass",
    "minecraft:white_wool",
    "minecraft:black_wool",
];

pub fn world_id() -> WorldId {
    WorldId::new(WORLD)
}

pub fn at(x: f64, y: f64, z: f64) -> Location {
    Location::new(world_id(), x, y, z)
}

pub fn head() -> BlockDescriptor {
    BlockDescriptor::parse("minecraft:player_wall_head[facing=south]").unwrap()
}

pub fn player(name: &str) -> PlayerRef {
    PlayerRef::new(format!("{}-id", name.to_lowercase()), name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    /// `None` for a broadcast
    pub to: Option<PlayerId>,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
    pub sent: Rc<RefCell<Vec<Sent>>>,
}

impl Messenger for RecordingMessenger {
    fn send_action_bar(&mut self, player: &PlayerId, text: &str) {
        self.sent.borrow_mut().push(Sent {
            to: Some(player.clone()),
            text: text.to_string(),
        });
    }

    fn broadcast_action_bar(&mut self, text: &str) {
        self.sent.borrow_mut().push(Sent {
            to: None,
            text: text.to_string(),
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub now: Rc<Cell<u64>>,
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSelector {
    pub opened: Rc<RefCell<Vec<(PlayerRef, LetterMenu)>>>,
}

impl LetterSelector for RecordingSelector {
    fn open(&mut self, player: &PlayerRef, menu: LetterMenu) {
        self.opened.borrow_mut().push((player.clone(), menu));
    }
}

/// Stage `k` is a single block of `STAGE_MATERIALS[k]` at `(100 + k, 0, 0)`
pub fn stages(count: usize) -> Vec<BlockRegion> {
    let mut studio = MemoryWorld::new(world_id());
    (0..count)
        .map(|k| {
            let pos = BlockPos::new(100 + k as i32, 0, 0);
            studio.fill(pos, BlockDescriptor::parse(STAGE_MATERIALS[k]).unwrap());
            let corner = Location::from_block(world_id(), pos);
            BlockRegion::capture(&studio, &corner, &corner, at(0.0, 0.0, 0.0)).unwrap()
        })
        .collect()
}

/// Board of `slots` heads along x at y=66
pub fn letter_board(slots: usize) -> LetterBoard {
    let mut board = LetterBoard::new(at(0.0, 64.0, 0.0));
    board.set_blank(head());
    for x in 0..slots {
        board.add(&at(x as f64, 66.0, 0.0));
    }
    board
}

pub struct Fixture {
    pub world: MemoryWorld,
    pub game: GameCoordinator,
    pub scheduler: TickScheduler,
    pub sent: Rc<RefCell<Vec<Sent>>>,
    pub clock: Rc<Cell<u64>>,
    pub opened: Rc<RefCell<Vec<(PlayerRef, LetterMenu)>>>,
}

pub struct FixtureBuilder {
    words: Vec<String>,
    max_guesses: usize,
    stage_count: usize,
    board_slots: usize,
    stages: Option<Vec<BlockRegion>>,
    settings: GameSettings,
}

impl FixtureBuilder {
    pub fn new(word: &str) -> Self {
        Self {
            words: vec![word.to_string()],
            max_guesses: 4,
            stage_count: 5,
            board_slots: 8,
            stages: None,
            settings: GameSettings {
                game_cooldown_ticks: 200,
                player_cooldown_ms: 1000,
                global_cooldown_ms: 500,
                ..GameSettings::default()
            },
        }
    }

    pub fn max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    pub fn stage_count(mut self, stage_count: usize) -> Self {
        self.stage_count = stage_count;
        self
    }

    /// Use these stages instead of the numbered single-block ones
    pub fn stages(mut self, stages: Vec<BlockRegion>) -> Self {
        self.stages = Some(stages);
        self
    }

    pub fn words(mut self, words: &[&str]) -> Self {
        self.words = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn cooldowns(mut self, player_ms: u64, global_ms: u64) -> Self {
        self.settings.player_cooldown_ms = player_ms;
        self.settings.global_cooldown_ms = global_ms;
        self
    }

    pub fn setup(&self) -> GameSetup {
        GameSetup {
            word_list: self.words.clone(),
            letter_board: letter_board(self.board_slots),
            stages: self
                .stages
                .clone()
                .unwrap_or_else(|| stages(self.stage_count)),
            settings: self.settings.clone(),
        }
    }

    pub fn try_build(self) -> hangman_engine::HangmanResult<Fixture> {
        let mut world = MemoryWorld::new(world_id());
        let scheduler = TickScheduler::new();
        let messenger = RecordingMessenger::default();
        let clock = ManualClock::default();
        let selector = RecordingSelector::default();
        let (sent, now, opened) = (
            messenger.sent.clone(),
            clock.now.clone(),
            selector.opened.clone(),
        );

        let services = HostServices {
            scheduler: Box::new(scheduler.clone()),
            messenger: Box::new(messenger),
            clock: Box::new(clock),
            selector: Box::new(selector),
            rng: Box::new(StdRng::seed_from_u64(7)),
        };
        let game = GameCoordinator::new(
            at(0.0, 64.0, 0.0),
            self.max_guesses,
            self.setup(),
            services,
            &mut world,
        )?;

        Ok(Fixture {
            world,
            game,
            scheduler,
            sent,
            clock: now,
            opened,
        })
    }

    pub fn build(self) -> Fixture {
        self.try_build().unwrap()
    }
}

impl Fixture {
    pub fn slot(&self, index: usize) -> BlockRef {
        self.game.letter_board().positions().block_at(index).unwrap()
    }

    pub fn guess(&mut self, letter: char, who: &PlayerRef) -> bool {
        let slot = self.slot(0);
        self.game.make_guess(&mut self.world, &slot, letter, who)
    }

    /// Guess at an absolute clock time
    pub fn guess_at(&mut self, now: u64, letter: char, who: &PlayerRef) -> bool {
        self.clock.set(now);
        self.guess(letter, who)
    }

    /// Number of times stage `k` has been written to the world
    pub fn stamps_of(&self, k: usize) -> usize {
        let material = BlockDescriptor::parse(STAGE_MATERIALS[k]).unwrap();
        self.world
            .writes()
            .iter()
            .filter(|(pos, descriptor)| {
                *pos == BlockPos::new(100 + k as i32, 0, 0) && *descriptor == material
            })
            .count()
    }

    /// Letter currently shown on board slot `index`
    pub fn shown(&self, index: usize) -> Option<char> {
        let pos = self.slot(index).pos;
        let profile = self.world.profile_at(pos)?;
        GlyphCatalog::iter()
            .find(|glyph| glyph.profile() == *profile)
            .map(|glyph| glyph.symbol)
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter(|s| s.to.is_none())
            .map(|s| s.text.clone())
            .collect()
    }

    pub fn told(&self, who: &PlayerRef) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .filter(|s| s.to.as_ref() == Some(&who.id))
            .map(|s| s.text.clone())
            .collect()
    }

    pub fn clear_messages(&self) {
        self.sent.borrow_mut().clear();
    }

    /// Advance the scheduler and run whatever came due
    pub fn tick(&mut self, ticks: u64) -> usize {
        let due = self.scheduler.advance(ticks);
        let count = due.len();
        for task in due {
            self.game.run_task(&mut self.world, task);
        }
        count
    }

    pub fn block(&self, pos: BlockPos) -> BlockDescriptor {
        self.world.get_block(pos)
    }
}
