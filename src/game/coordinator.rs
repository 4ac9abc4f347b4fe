//! Hangman session state machine
//!
//! One secret word shared by every player. Correct letters reveal board
//! slots, wrong letters stamp the next gallows stage, and a win or loss
//! schedules a reset after the game cooldown.
//!
//! All mutation happens on the host's main thread; the coordinator never
//! blocks and defers work only through `Scheduler`.

use rand::seq::SliceRandom;

use crate::board::LetterBoard;
use crate::constants::alphabet::{letter_index, HIDDEN_GLYPH, LETTER_COUNT};
use crate::constants::timing::{MILLIS_PER_SECOND, TICKS_PER_SECOND};
use crate::error::{HangmanError, HangmanResult};
use crate::game::{
    GameTask, GuessCooldowns, HostServices, InteractionEvent, LetterMenu, MessageKey, Messages,
    PlayerRef, QuitEvent,
};
use crate::geometry::{BlockRegion, StampMode};
use crate::world::{BlockRef, HostWorld, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Active,
    Won,
    Lost,
}

/// Timing, stamping and message configuration captured at construction
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    /// Delay from a win or loss to the automatic reset, in scheduler ticks
    pub game_cooldown_ticks: u64,
    /// Minimum spacing between two guesses of one player
    pub player_cooldown_ms: u64,
    /// Minimum spacing between any two guesses
    pub global_cooldown_ms: u64,
    pub stamp_mode: StampMode,
    pub messages: Messages,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            game_cooldown_ticks: 10 * TICKS_PER_SECOND,
            player_cooldown_ms: 3 * MILLIS_PER_SECOND,
            global_cooldown_ms: MILLIS_PER_SECOND,
            stamp_mode: StampMode::default(),
            messages: Messages::default(),
        }
    }
}

/// Board, stages and word pool a coordinator is built from
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub word_list: Vec<String>,
    pub letter_board: LetterBoard,
    /// `stages[k]` is stamped after exactly `k` wrong guesses
    pub stages: Vec<BlockRegion>,
    pub settings: GameSettings,
}

#[derive(Debug)]
pub struct GameCoordinator {
    anchor: Location,
    max_guesses: usize,
    letter_board: LetterBoard,
    stages: Vec<BlockRegion>,
    word_list: Vec<String>,
    settings: GameSettings,
    services: HostServices,

    word: String,
    guessed: [bool; LETTER_COUNT],
    wrong_guesses: usize,
    phase: GamePhase,
    cooldowns: GuessCooldowns,
}

impl GameCoordinator {
    /// Validate the setup and start the first session
    pub fn new(
        anchor: Location,
        max_guesses: usize,
        setup: GameSetup,
        services: HostServices,
        world: &mut dyn HostWorld,
    ) -> HangmanResult<Self> {
        if max_guesses > setup.stages.len() {
            log::error!(
                "Hangman at {} allows {} wrong guesses but only {} stages exist",
                anchor.block_pos(),
                max_guesses,
                setup.stages.len()
            );
            return Err(HangmanError::TooManyGuesses {
                max_guesses,
                stages: setup.stages.len(),
            });
        }
        if max_guesses == setup.stages.len() {
            log::warn!(
                "No stage for the final wrong guess ({} stages, {} guesses); it will be skipped",
                setup.stages.len(),
                max_guesses
            );
        }

        let word_list = normalize_words(setup.word_list)?;
        for word in &word_list {
            if word.len() > setup.letter_board.len() {
                log::warn!(
                    "Word {} is longer than the letter board ({} slots)",
                    word,
                    setup.letter_board.len()
                );
            }
        }

        let cooldowns = GuessCooldowns::new(
            setup.settings.player_cooldown_ms,
            setup.settings.global_cooldown_ms,
        );
        let mut coordinator = Self {
            anchor,
            max_guesses,
            letter_board: setup.letter_board,
            stages: setup.stages,
            word_list,
            settings: setup.settings,
            services,
            word: String::new(),
            guessed: [false; LETTER_COUNT],
            wrong_guesses: 0,
            phase: GamePhase::Active,
            cooldowns,
        };
        coordinator.reset(world);
        Ok(coordinator)
    }

    /// Start a new session with a freshly drawn word
    pub fn reset(&mut self, world: &mut dyn HostWorld) {
        if let Err(e) = self.letter_board.reset(world) {
            log::error!("Failed to reset letter board: {}", e);
        }
        self.guessed = [false; LETTER_COUNT];
        self.wrong_guesses = 0;
        if let Some(word) = self.word_list.choose(&mut *self.services.rng) {
            self.word = word.clone();
        }
        self.build_stage(world, 0);
        self.phase = GamePhase::Active;

        log::info!(
            "Hangman session started at {} with a {}-letter word",
            self.anchor.block_pos(),
            self.word.len()
        );
    }

    /// Run a task the coordinator scheduled earlier
    pub fn run_task(&mut self, world: &mut dyn HostWorld, task: GameTask) {
        match task {
            GameTask::Reset => self.reset(world),
        }
    }

    /// Nominate `letter` on behalf of `player`; true iff the letter is in the word
    pub fn make_guess(
        &mut self,
        world: &mut dyn HostWorld,
        clicked: &BlockRef,
        letter: char,
        player: &PlayerRef,
    ) -> bool {
        if self.phase != GamePhase::Active {
            return false;
        }

        let now = self.services.clock.now_millis();
        if !self.cooldowns.can_guess(&player.id, now) {
            log::debug!("{} guessed {} during cooldown", player.name, letter);
            self.tell(player, MessageKey::Cooldown, letter);
            return false;
        }

        let Some(index) = letter_index(letter) else {
            return false;
        };
        if self.guessed[index] {
            self.tell(player, MessageKey::AlreadyGuessed, letter);
            return false;
        }

        self.guessed[index] = true;
        self.cooldowns.record(&player.id, now);
        log::debug!("{} guessed {} from slot {}", player.name, letter, clicked.pos);

        if self.word.contains(letter) {
            self.register_right_guess(world, letter, player);
            true
        } else {
            self.register_wrong_guess(world, letter, player);
            false
        }
    }

    fn register_right_guess(
        &mut self,
        world: &mut dyn HostWorld,
        letter: char,
        player: &PlayerRef,
    ) {
        for (i, c) in self.word.chars().enumerate() {
            if c != letter {
                continue;
            }
            if let Err(e) = self.letter_board.reveal_at(world, &self.word, i, true) {
                log::error!("Failed to reveal slot {}: {}", i, e);
            }
        }

        if self.has_won() {
            self.phase = GamePhase::Won;
            log::info!("{} completed the word {}", player.name, self.word);
            self.announce(MessageKey::GameWon, player, letter);
            self.services
                .scheduler
                .schedule(self.settings.game_cooldown_ticks, GameTask::Reset);
        } else {
            self.announce(MessageKey::RightGuess, player, letter);
        }
    }

    fn register_wrong_guess(
        &mut self,
        world: &mut dyn HostWorld,
        letter: char,
        player: &PlayerRef,
    ) {
        self.wrong_guesses += 1;
        if self.wrong_guesses == self.max_guesses {
            self.phase = GamePhase::Lost;
            log::info!("Hangman lost, the word was {}", self.word);
            self.announce(MessageKey::GameLost, player, letter);
            self.services
                .scheduler
                .schedule(self.settings.game_cooldown_ticks, GameTask::Reset);
        } else {
            self.announce(MessageKey::WrongGuess, player, letter);
        }
        self.build_stage(world, self.wrong_guesses);
    }

    fn build_stage(&self, world: &mut dyn HostWorld, index: usize) {
        let Some(stage) = self.stages.get(index) else {
            log::error!(
                "Stage {} requested but only {} stages exist",
                index,
                self.stages.len()
            );
            return;
        };
        match stage.stamp_with(world, self.settings.stamp_mode) {
            Ok(written) => log::debug!("Stamped stage {} ({} blocks)", index, written),
            Err(e) => log::error!("Failed to stamp stage {}: {}", index, e),
        }
    }

    /// Every character of the word has been guessed
    pub fn has_won(&self) -> bool {
        !self.word.is_empty()
            && self
                .word
                .chars()
                .all(|c| letter_index(c).map_or(false, |i| self.guessed[i]))
    }

    pub fn has_lost(&self) -> bool {
        self.wrong_guesses == self.max_guesses
    }

    fn announce(&mut self, key: MessageKey, player: &PlayerRef, letter: char) {
        let text = self.settings.messages.render(key, &player.name, letter);
        self.services.messenger.broadcast_action_bar(&text);
    }

    fn tell(&mut self, player: &PlayerRef, key: MessageKey, letter: char) {
        let text = self.settings.messages.render(key, &player.name, letter);
        self.services.messenger.send_action_bar(&player.id, &text);
    }

    /// Open the letter selector when an active board slot is clicked
    ///
    /// Returns true when the event was taken over (and cancelled).
    pub fn on_interaction(&mut self, event: &mut InteractionEvent) -> bool {
        if !event.action.is_block_click() || self.phase != GamePhase::Active {
            return false;
        }
        let Some(clicked) = event.clicked.as_ref() else {
            return false;
        };
        if !self.letter_board.contains(clicked) {
            return false;
        }

        self.services
            .selector
            .open(&event.player, LetterMenu::new(clicked.clone()));
        event.cancelled = true;
        true
    }

    pub fn on_quit(&mut self, event: &QuitEvent) {
        self.cooldowns.forget(&event.player.id);
    }

    pub fn anchor(&self) -> &Location {
        &self.anchor
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Whether `letter` has been nominated this session
    pub fn is_guessed(&self, letter: char) -> bool {
        letter_index(letter).map_or(false, |i| self.guessed[i])
    }

    pub fn letter_board(&self) -> &LetterBoard {
        &self.letter_board
    }

    pub fn stages(&self) -> &[BlockRegion] {
        &self.stages
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn cooldowns(&self) -> &GuessCooldowns {
        &self.cooldowns
    }

    /// Word as shown on the board, `?` for hidden letters
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.is_guessed(c) { c } else { HIDDEN_GLYPH })
            .collect()
    }
}

/// Upper-case every word and reject anything outside A-Z
fn normalize_words(words: Vec<String>) -> HangmanResult<Vec<String>> {
    if words.is_empty() {
        return Err(HangmanError::EmptyWordList);
    }
    words
        .into_iter()
        .map(|word| {
            let upper = word.trim().to_ascii_uppercase();
            if upper.is_empty() || !upper.chars().all(|c| c.is_ascii_uppercase()) {
                Err(HangmanError::InvalidWord(word))
            } else {
                Ok(upper)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_words() {
        let words = normalize_words(vec!["apple".into(), " Pear ".into()]).unwrap();
        assert_eq!(words, vec!["APPLE", "PEAR"]);
    }

    #[test]
    fn test_normalize_rejects_empty_and_invalid() {
        assert!(matches!(normalize_words(vec![]), Err(HangmanError::EmptyWordList)));
        assert!(matches!(
            normalize_words(vec!["ice cream".into()]),
            Err(HangmanError::InvalidWord(_))
        ));
        assert!(matches!(
            normalize_words(vec!["".into()]),
            Err(HangmanError::InvalidWord(_))
        ));
    }
}
