//! Geometry substrate: cuboids, captured block regions and ordered position sets,
//! together with their JSON forms

pub mod block_region;
pub mod codec;
pub mod cuboid;
pub mod position_set;

pub use block_region::{BlockRegion, StampMode};
pub use cuboid::Cuboid;
pub use position_set::PositionSet;
