use glam::DVec3;
use serde_json::Value;

use crate::constants::codec::{KEY_LOC_A, KEY_LOC_B};
use crate::error::{malformed, HangmanError, HangmanResult, WorldError};
use crate::geometry::codec::{self, JsonObject};
use crate::world::{BlockPos, BlockRef, Location, WorldId};

/// Axis-aligned box in one world with canonical corners (`min <= max`)
///
/// Both corners lie inside the `i32` block range and the block count fits
/// in `usize`; every constructor checks this.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    min: Location,
    max: Location,
    size: (usize, usize, usize),
}

impl Cuboid {
    /// Build a cuboid from two arbitrary corners in the same world
    pub fn new(a: &Location, b: &Location) -> HangmanResult<Self> {
        if a.world != b.world {
            return Err(HangmanError::CrossWorldBoundary {
                a: a.world.to_string(),
                b: b.world.to_string(),
            });
        }
        Self::canonical(a.world.clone(), a.position, b.position)
            .ok_or_else(|| WorldError::OutOfBounds { pos: b.block_pos() }.into())
    }

    fn canonical(world: WorldId, a: DVec3, b: DVec3) -> Option<Self> {
        let a_block = BlockPos::try_from_world_pos(a)?;
        let b_block = BlockPos::try_from_world_pos(b)?;
        let size = block_span(
            a_block.component_min(b_block),
            a_block.component_max(b_block),
        )?;

        let min = a.min(b);
        let max = a.max(b);
        Some(Self {
            min: Location::new(world.clone(), min.x, min.y, min.z),
            max: Location::new(world, max.x, max.y, max.z),
            size,
        })
    }

    pub fn world(&self) -> &WorldId {
        &self.min.world
    }

    pub fn corner_min(&self) -> Location {
        self.min.clone()
    }

    pub fn corner_max(&self) -> Location {
        self.max.clone()
    }

    pub fn min_block(&self) -> BlockPos {
        self.min.block_pos()
    }

    pub fn max_block(&self) -> BlockPos {
        self.max.block_pos()
    }

    /// Number of blocks along x, y and z
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.size
    }

    pub fn volume(&self) -> usize {
        let (dx, dy, dz) = self.size;
        dx * dy * dz
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        let min = self.min_block();
        let max = self.max_block();
        (min.x..=max.x).contains(&pos.x)
            && (min.y..=max.y).contains(&pos.y)
            && (min.z..=max.z).contains(&pos.z)
    }

    /// Block at absolute coordinates in this cuboid's world
    ///
    /// Not bounds-checked against the cuboid.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> BlockRef {
        BlockRef::new(self.world().clone(), BlockPos::new(x, y, z))
    }

    pub(crate) fn write_fields(&self, object: &mut JsonObject) {
        object.insert(KEY_LOC_A.into(), Value::String(codec::location_to_string(&self.min)));
        object.insert(KEY_LOC_B.into(), Value::String(codec::location_to_string(&self.max)));
    }

    pub(crate) fn read_fields(object: &JsonObject, world: &WorldId) -> HangmanResult<Self> {
        let raw_a = codec::get_str(object, KEY_LOC_A)?;
        let raw_b = codec::get_str(object, KEY_LOC_B)?;
        let a = codec::string_to_location(raw_a, world)?;
        let b = codec::string_to_location(raw_b, world)?;
        Self::canonical(world.clone(), a.position, b.position).ok_or_else(|| {
            malformed(format!(
                "corners {raw_a:?} and {raw_b:?} do not span a valid block range"
            ))
        })
    }

    pub fn serialize(&self) -> Value {
        let mut object = JsonObject::new();
        self.write_fields(&mut object);
        Value::Object(object)
    }

    /// Restore a serialized cuboid into `world`
    pub fn deserialize(value: &Value, world: &WorldId) -> HangmanResult<Self> {
        Self::read_fields(codec::as_object(value)?, world)
    }
}

/// Block counts between two canonical corners, `None` if they do not fit `usize`
fn block_span(min: BlockPos, max: BlockPos) -> Option<(usize, usize, usize)> {
    let axis = |lo: i32, hi: i32| usize::try_from(i64::from(hi) - i64::from(lo) + 1).ok();
    let size = (axis(min.x, max.x)?, axis(min.y, max.y)?, axis(min.z, max.z)?);
    size.0.checked_mul(size.1)?.checked_mul(size.2)?;
    Some(size)
}
