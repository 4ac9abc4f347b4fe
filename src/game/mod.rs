//! Game layer: the session coordinator and the host services it talks through

pub mod cooldown;
pub mod coordinator;
pub mod events;
pub mod host;
pub mod menu;
pub mod messages;

pub use cooldown::GuessCooldowns;
pub use coordinator::{GameCoordinator, GamePhase, GameSettings, GameSetup};
pub use events::{InteractAction, InteractionEvent, QuitEvent};
pub use host::{
    Clock, GameTask, HostServices, LetterSelector, LogMessenger, Messenger, MonotonicClock,
    PlayerId, PlayerRef, Scheduler, TickScheduler,
};
pub use menu::{LetterMenu, MenuButton, MenuChoice};
pub use messages::{colorize, MessageKey, Messages};
