//! Host world interface
//!
//! The core never owns a world. The host lends one for the duration of each
//! call and the geometry and board layers read and write blocks through this
//! trait.

use crate::error::WorldError;
use crate::world::{BlockDescriptor, BlockPos, SkullState, WorldId};

/// Block access the core needs from the host voxel runtime
pub trait HostWorld {
    /// Identifier of this world
    fn id(&self) -> &WorldId;

    /// Get the descriptor of the block at the specified position
    fn get_block(&self, pos: BlockPos) -> BlockDescriptor;

    /// Set the block at the specified position
    fn set_block(&mut self, pos: BlockPos, descriptor: &BlockDescriptor) -> Result<(), WorldError>;

    /// Skull state of the block, `None` if the block cannot hold a head profile
    fn skull_state(&self, pos: BlockPos) -> Option<SkullState>;

    /// Write a modified skull state back to its block
    fn commit_skull(&mut self, state: SkullState) -> Result<(), WorldError>;
}
