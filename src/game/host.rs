//! Services the host runtime hands to the game coordinator
//!
//! Everything the coordinator needs besides the world is injected here, so the
//! coordinator never reaches for a global. The world itself is lent per call.

use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use rand::RngCore;

use crate::game::LetterMenu;

/// Stable player identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Borrowed view of an online player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

/// Deferred work the coordinator asks the host to run later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameTask {
    /// Start a new session after a win or loss
    Reset,
}

/// Host scheduler primitive
pub trait Scheduler {
    /// Run `task` on the main thread after `delay_ticks` scheduler ticks
    fn schedule(&mut self, delay_ticks: u64, task: GameTask);
}

/// Action-bar delivery
pub trait Messenger {
    /// Show `text` to one player
    fn send_action_bar(&mut self, player: &PlayerId, text: &str);

    /// Show `text` to every online player
    fn broadcast_action_bar(&mut self, text: &str);
}

/// Monotonic millisecond clock
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Opens the 26-letter selector for a player
pub trait LetterSelector {
    fn open(&mut self, player: &PlayerRef, menu: LetterMenu);
}

/// Everything the coordinator needs from the host besides the world
pub struct HostServices {
    pub scheduler: Box<dyn Scheduler>,
    pub messenger: Box<dyn Messenger>,
    pub clock: Box<dyn Clock>,
    pub selector: Box<dyn LetterSelector>,
    pub rng: Box<dyn RngCore>,
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct TickQueue {
    now: u64,
    sequence: u64,
    pending: BinaryHeap<Reverse<(u64, u64, GameTask)>>,
}

/// Tick-driven scheduler queue
///
/// Clones share one queue: hand one clone to `HostServices` and keep another
/// in the host loop to `advance` it.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    queue: Rc<RefCell<TickQueue>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward and return every task that came due, in order
    pub fn advance(&self, ticks: u64) -> Vec<GameTask> {
        let mut queue = self.queue.borrow_mut();
        queue.now += ticks;
        let now = queue.now;

        let mut due = Vec::new();
        loop {
            let at = match queue.pending.peek() {
                Some(Reverse((at, _, _))) => *at,
                None => break,
            };
            if at > now {
                break;
            }
            if let Some(Reverse((_, _, task))) = queue.pending.pop() {
                due.push(task);
            }
        }
        due
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&mut self, delay_ticks: u64, task: GameTask) {
        let mut queue = self.queue.borrow_mut();
        let at = queue.now + delay_ticks;
        let sequence = queue.sequence;
        queue.sequence += 1;
        queue.pending.push(Reverse((at, sequence, task)));
    }
}

/// Messenger that writes every action bar to the log
#[derive(Debug, Default)]
pub struct LogMessenger;

impl Messenger for LogMessenger {
    fn send_action_bar(&mut self, player: &PlayerId, text: &str) {
        log::info!("[{}] {}", player, text);
    }

    fn broadcast_action_bar(&mut self, text: &str) {
        log::info!("[all] {}", text);
    }
}

/// Milliseconds since the clock was created
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
