use std::collections::HashMap;

use crate::error::WorldError;
use crate::world::{BlockDescriptor, BlockPos, HeadProfile, HostWorld, SkullState, WorldId};

/// Sparse in-memory world; every unset block is air
///
/// Keeps a log of block writes so callers can see exactly what a stamp or a
/// board update touched.
#[derive(Debug, Clone)]
pub struct MemoryWorld {
    id: WorldId,
    blocks: HashMap<BlockPos, BlockDescriptor>,
    profiles: HashMap<BlockPos, HeadProfile>,
    writes: Vec<(BlockPos, BlockDescriptor)>,
}

impl MemoryWorld {
    pub fn new(id: WorldId) -> Self {
        Self {
            id,
            blocks: HashMap::new(),
            profiles: HashMap::new(),
            writes: Vec::new(),
        }
    }

    /// Place a block without recording it as a write
    pub fn fill(&mut self, pos: BlockPos, descriptor: BlockDescriptor) {
        self.profiles.remove(&pos);
        if descriptor.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, descriptor);
        }
    }

    pub fn profile_at(&self, pos: BlockPos) -> Option<&HeadProfile> {
        self.profiles.get(&pos)
    }

    /// Block writes since the last `take_writes`, in order
    pub fn writes(&self) -> &[(BlockPos, BlockDescriptor)] {
        &self.writes
    }

    pub fn take_writes(&mut self) -> Vec<(BlockPos, BlockDescriptor)> {
        std::mem::take(&mut self.writes)
    }
}

impl HostWorld for MemoryWorld {
    fn id(&self) -> &WorldId {
        &self.id
    }

    fn get_block(&self, pos: BlockPos) -> BlockDescriptor {
        self.blocks.get(&pos).cloned().unwrap_or_default()
    }

    fn set_block(&mut self, pos: BlockPos, descriptor: &BlockDescriptor) -> Result<(), WorldError> {
        self.fill(pos, descriptor.clone());
        self.writes.push((pos, descriptor.clone()));
        Ok(())
    }

    fn skull_state(&self, pos: BlockPos) -> Option<SkullState> {
        if !self.get_block(pos).is_skull() {
            return None;
        }
        Some(SkullState {
            pos,
            profile: self.profiles.get(&pos).cloned(),
        })
    }

    fn commit_skull(&mut self, state: SkullState) -> Result<(), WorldError> {
        if !self.get_block(state.pos).is_skull() {
            return Err(WorldError::NotASkull { pos: state.pos });
        }
        match state.profile {
            Some(profile) => {
                self.profiles.insert(state.pos, profile);
            }
            None => {
                self.profiles.remove(&state.pos);
            }
        }
        Ok(())
    }
}
