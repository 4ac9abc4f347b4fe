use crate::game::PlayerRef;
use crate::world::BlockRef;

/// Kind of player interaction reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    LeftClickBlock,
    RightClickBlock,
    LeftClickAir,
    RightClickAir,
    Physical,
}

impl InteractAction {
    pub fn is_block_click(self) -> bool {
        matches!(self, InteractAction::LeftClickBlock | InteractAction::RightClickBlock)
    }
}

/// A player clicked something
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    pub player: PlayerRef,
    pub action: InteractAction,
    pub clicked: Option<BlockRef>,
    /// Set by a handler to suppress the host's default interaction
    pub cancelled: bool,
}

impl InteractionEvent {
    pub fn new(player: PlayerRef, action: InteractAction, clicked: Option<BlockRef>) -> Self {
        Self {
            player,
            action,
            clicked,
            cancelled: false,
        }
    }
}

/// A player left the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuitEvent {
    pub player: PlayerRef,
}
