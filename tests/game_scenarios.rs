// End-to-end hangman sessions driven through the coordinator with recording
// fakes for messaging, time, scheduling and the letter selector.

mod common;

use common::{player, FixtureBuilder};
use hangman_engine::game::{InteractAction, InteractionEvent, MessageKey, Messages, QuitEvent};
use hangman_engine::{BlockPos, BlockRef, BlockRegion, GamePhase, HangmanError, MemoryWorld};

fn render(key: MessageKey, who: &str, letter: char) -> String {
    Messages::default().render(key, who, letter)
}

#[test]
fn test_clean_win() {
    let mut f = FixtureBuilder::new("CAT").max_guesses(4).stage_count(5).build();
    let p1 = player("P1");

    assert!(f.guess_at(0, 'C', &p1));
    assert!(f.guess_at(1001, 'A', &p1));
    assert!(f.guess_at(2002, 'T', &p1));

    assert_eq!(f.game.phase(), GamePhase::Won);
    assert!(f.game.is_guessed('C') && f.game.is_guessed('A') && f.game.is_guessed('T'));
    assert_eq!(f.game.wrong_guesses(), 0);

    let broadcasts = f.broadcasts();
    assert_eq!(broadcasts.len(), 3);
    assert_eq!(broadcasts[0], render(MessageKey::RightGuess, "P1", 'C'));
    assert_eq!(broadcasts[1], render(MessageKey::RightGuess, "P1", 'A'));
    assert_eq!(broadcasts[2], render(MessageKey::GameWon, "P1", 'T'));

    assert_eq!(f.stamps_of(0), 1);
    assert_eq!(f.scheduler.pending(), 1);

    assert_eq!(f.shown(0), Some('C'));
    assert_eq!(f.shown(1), Some('A'));
    assert_eq!(f.shown(2), Some('T'));
    assert_eq!(f.shown(3), Some('?'));
}

#[test]
fn test_won_game_resets_after_cooldown() {
    let mut f = FixtureBuilder::new("HI").build();
    let p1 = player("P1");
    assert!(f.guess_at(0, 'H', &p1));
    assert!(f.guess_at(2000, 'I', &p1));
    assert_eq!(f.game.phase(), GamePhase::Won);

    assert_eq!(f.tick(199), 0);
    assert_eq!(f.game.phase(), GamePhase::Won);
    assert_eq!(f.tick(1), 1);

    assert_eq!(f.game.phase(), GamePhase::Active);
    assert_eq!(f.game.word(), "HI");
    assert!(!f.game.is_guessed('H'));
    assert_eq!(f.stamps_of(0), 2);
    assert_eq!(f.shown(0), Some('?'));
    assert_eq!(f.shown(1), Some('?'));
}

#[test]
fn test_clean_loss() {
    let mut f = FixtureBuilder::new("AB").max_guesses(2).stage_count(3).build();
    let p1 = player("P1");

    assert!(!f.guess_at(0, 'X', &p1));
    assert_eq!(f.game.wrong_guesses(), 1);
    assert_eq!(f.game.phase(), GamePhase::Active);
    assert_eq!(f.stamps_of(1), 1);
    assert_eq!(f.broadcasts(), vec![render(MessageKey::WrongGuess, "P1", 'X')]);

    assert!(!f.guess_at(1001, 'Y', &p1));
    assert_eq!(f.game.wrong_guesses(), 2);
    assert_eq!(f.game.phase(), GamePhase::Lost);
    assert!(f.game.has_lost());
    assert_eq!(f.stamps_of(2), 1);
    assert_eq!(
        f.broadcasts().last(),
        Some(&render(MessageKey::GameLost, "P1", 'Y'))
    );
    assert_eq!(f.scheduler.pending(), 1);

    // Terminal state ignores further guesses entirely
    f.clear_messages();
    assert!(!f.guess_at(5000, 'A', &p1));
    assert!(f.sent.borrow().is_empty());
    assert!(!f.game.is_guessed('A'));
    assert_eq!(f.game.wrong_guesses(), 2);
}

#[test]
fn test_duplicate_guess() {
    let mut f = FixtureBuilder::new("AB").build();
    let p1 = player("P1");

    assert!(f.guess_at(0, 'A', &p1));
    let broadcasts = f.broadcasts().len();

    assert!(!f.guess_at(5000, 'A', &p1));
    assert_eq!(f.told(&p1), vec![render(MessageKey::AlreadyGuessed, "P1", 'A')]);
    assert_eq!(f.broadcasts().len(), broadcasts);
    assert_eq!(f.game.wrong_guesses(), 0);
    assert_eq!(f.stamps_of(1), 0);
    assert_eq!(f.game.cooldowns().last_guess_at(&p1.id), Some(0));
    assert_eq!(f.game.cooldowns().last_global_guess_at(), Some(0));
}

#[test]
fn test_cooldown_enforcement() {
    let mut f = FixtureBuilder::new("APPLE").cooldowns(1000, 500).build();
    let (p1, p2) = (player("P1"), player("P2"));

    assert!(f.guess_at(0, 'A', &p1));

    assert!(!f.guess_at(400, 'P', &p2));
    assert_eq!(f.told(&p2), vec![render(MessageKey::Cooldown, "P2", 'P')]);
    assert!(f.told(&p1).is_empty());
    assert!(!f.game.is_guessed('P'));

    assert!(f.guess_at(600, 'P', &p2));
    assert_eq!(f.shown(0), Some('A'));
    assert_eq!(f.shown(1), Some('P'));
    assert_eq!(f.shown(2), Some('P'));
    assert_eq!(f.shown(3), Some('?'));
}

#[test]
fn test_player_cooldown_boundary_is_strict() {
    let mut f = FixtureBuilder::new("APPLE").cooldowns(1000, 0).build();
    let p1 = player("P1");

    assert!(f.guess_at(0, 'A', &p1));
    assert!(!f.guess_at(1000, 'P', &p1));
    assert!(!f.game.is_guessed('P'));
    assert!(f.guess_at(1001, 'P', &p1));
}

#[test]
fn test_non_letter_input_is_ignored() {
    let mut f = FixtureBuilder::new("AB").build();
    let p1 = player("P1");

    assert!(!f.guess_at(0, '1', &p1));
    assert!(!f.guess_at(0, 'a', &p1));
    assert!(f.sent.borrow().is_empty());
    assert_eq!(f.game.cooldowns().last_global_guess_at(), None);
    assert_eq!(f.game.cooldowns().tracked_players(), 0);
    assert_eq!(f.game.wrong_guesses(), 0);
}

#[test]
fn test_wrong_guesses_never_exceed_max() {
    let mut f = FixtureBuilder::new("Q").max_guesses(3).stage_count(4).build();
    let p1 = player("P1");

    for (i, letter) in "ABCDEF".chars().enumerate() {
        f.guess_at(i as u64 * 2000, letter, &p1);
        assert!(f.game.wrong_guesses() <= f.game.max_guesses());
    }
    assert_eq!(f.game.phase(), GamePhase::Lost);
    assert_eq!(f.game.wrong_guesses(), 3);
    assert!(!f.game.is_guessed('D'));
}

#[test]
fn test_missing_final_stage_is_skipped() {
    let mut f = FixtureBuilder::new("AB").max_guesses(2).stage_count(2).build();
    let p1 = player("P1");

    assert!(!f.guess_at(0, 'X', &p1));
    assert!(!f.guess_at(2000, 'Y', &p1));
    assert_eq!(f.game.phase(), GamePhase::Lost);
    assert_eq!(f.stamps_of(1), 1);
}

#[test]
fn test_stage_past_the_block_range_is_skipped() {
    let edge = 2_147_483_000;
    let mut studio = MemoryWorld::new(common::world_id());
    studio.fill(BlockPos::new(edge, 0, 0), common::head());
    let corner = common::at(edge as f64, 0.0, 0.0);
    let far_stage = BlockRegion::capture(&studio, &corner, &corner, corner.clone()).unwrap();

    let mut stages = common::stages(3);
    stages[1] = far_stage;
    let mut f = FixtureBuilder::new("AB").max_guesses(2).stages(stages).build();
    let p1 = player("P1");

    assert!(!f.guess_at(0, 'X', &p1));
    assert_eq!(f.game.wrong_guesses(), 1);
    assert_eq!(f.game.phase(), GamePhase::Active);
    assert!(f.world.writes().iter().all(|(pos, _)| pos.x != edge));

    assert!(!f.guess_at(2000, 'Y', &p1));
    assert_eq!(f.game.phase(), GamePhase::Lost);
    assert_eq!(f.stamps_of(2), 1);
}

#[test]
fn test_construction_errors() {
    let err = FixtureBuilder::new("AB")
        .max_guesses(5)
        .stage_count(3)
        .try_build()
        .err()
        .unwrap();
    assert!(matches!(
        err,
        HangmanError::TooManyGuesses { max_guesses: 5, stages: 3 }
    ));

    let err = FixtureBuilder::new("AB").words(&[]).try_build().err().unwrap();
    assert!(matches!(err, HangmanError::EmptyWordList));

    let err = FixtureBuilder::new("AB")
        .words(&["fine", "not fine"])
        .try_build()
        .err()
        .unwrap();
    assert!(matches!(err, HangmanError::InvalidWord(w) if w == "not fine"));
}

#[test]
fn test_words_are_upper_cased() {
    let mut f = FixtureBuilder::new("cat").build();
    assert_eq!(f.game.word(), "CAT");
    assert!(f.guess_at(0, 'C', &player("P1")));
}

#[test]
fn test_reset_twice_matches_reset_once() {
    let mut f = FixtureBuilder::new("AB").build();
    let p1 = player("P1");
    f.guess_at(0, 'A', &p1);
    f.guess_at(2000, 'X', &p1);

    f.game.reset(&mut f.world);
    let once = (f.game.phase(), f.game.wrong_guesses(), f.game.masked_word());
    let shown_once: Vec<_> = (0..4).map(|i| f.shown(i)).collect();

    f.game.reset(&mut f.world);
    assert_eq!(
        (f.game.phase(), f.game.wrong_guesses(), f.game.masked_word()),
        once
    );
    assert_eq!((0..4).map(|i| f.shown(i)).collect::<Vec<_>>(), shown_once);
    assert_eq!(once, (GamePhase::Active, 0, "??".to_string()));
    assert!(!f.game.is_guessed('A') && !f.game.is_guessed('X'));
}

#[test]
fn test_clicking_board_slot_opens_selector() {
    let mut f = FixtureBuilder::new("AB").build();
    let p1 = player("P1");
    let slot = f.slot(1);

    let mut event =
        InteractionEvent::new(p1.clone(), InteractAction::RightClickBlock, Some(slot.clone()));
    assert!(f.game.on_interaction(&mut event));
    assert!(event.cancelled);

    let opened = f.opened.borrow();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].0, p1);
    assert_eq!(opened[0].1.clicked(), &slot);
}

#[test]
fn test_other_clicks_are_ignored() {
    let mut f = FixtureBuilder::new("AB").build();
    let p1 = player("P1");
    let elsewhere = BlockRef::new(common::world_id(), BlockPos::new(50, 66, 0));

    let mut event =
        InteractionEvent::new(p1.clone(), InteractAction::RightClickBlock, Some(elsewhere));
    assert!(!f.game.on_interaction(&mut event));
    assert!(!event.cancelled);

    let mut event = InteractionEvent::new(p1.clone(), InteractAction::RightClickAir, None);
    assert!(!f.game.on_interaction(&mut event));

    let mut event = InteractionEvent::new(p1.clone(), InteractAction::Physical, Some(f.slot(0)));
    assert!(!f.game.on_interaction(&mut event));
    assert!(f.opened.borrow().is_empty());
}

#[test]
fn test_finished_game_does_not_open_selector() {
    let mut f = FixtureBuilder::new("A").build();
    let p1 = player("P1");
    assert!(f.guess_at(0, 'A', &p1));
    assert_eq!(f.game.phase(), GamePhase::Won);

    let mut event = InteractionEvent::new(p1, InteractAction::LeftClickBlock, Some(f.slot(0)));
    assert!(!f.game.on_interaction(&mut event));
    assert!(!event.cancelled);
}

#[test]
fn test_quit_forgets_player_cooldown() {
    let mut f = FixtureBuilder::new("APPLE").cooldowns(1000, 500).build();
    let p1 = player("P1");

    assert!(f.guess_at(0, 'A', &p1));
    f.game.on_quit(&QuitEvent { player: p1.clone() });
    assert_eq!(f.game.cooldowns().last_guess_at(&p1.id), None);

    assert!(!f.guess_at(400, 'P', &p1));
    assert!(f.guess_at(600, 'P', &p1));
}
