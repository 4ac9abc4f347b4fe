//! World model: positions, block descriptors and the host world seam

pub mod block;
pub mod memory_world;
pub mod position;
pub mod world_interface;

pub use block::{BlockDescriptor, BlockRef, HeadProfile, ProfileProperty, SkullState};
pub use memory_world::MemoryWorld;
pub use position::{BlockPos, Location, WorldId};
pub use world_interface::HostWorld;
