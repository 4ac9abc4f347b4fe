//! Captured block snapshots ("stages")
//!
//! A `BlockRegion` is a dense copy of every block descriptor inside a cuboid,
//! plus the origin it is stamped relative to. The descriptor array is never
//! modified after capture or deserialization.
//!
//! Storage order is x outermost, y middle, z innermost:
//! `index = x * dy * dz + y * dz + z` with `dy`, `dz` the block counts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::codec::{KEY_BLOCK_DATA, KEY_ORIGIN, KEY_SAVE_AIR, KEY_X, KEY_Y, KEY_Z};
use crate::error::{malformed, HangmanError, HangmanResult, WorldError};
use crate::geometry::codec::{self, JsonObject};
use crate::geometry::Cuboid;
use crate::world::{BlockDescriptor, BlockPos, BlockRef, HostWorld, Location, WorldId};

/// Where `stamp` writes each captured slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StampMode {
    /// Capture address translated by the origin's block coordinates.
    /// Every persisted stage was authored against this arithmetic.
    #[default]
    CaptureOffset,
    /// Slot offset from the origin's block coordinates
    OriginRelative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockRegion {
    cuboid: Cuboid,
    origin: Location,
    save_air: bool,
    size: (usize, usize, usize),
    blocks: Vec<Option<BlockDescriptor>>,
}

impl BlockRegion {
    /// Snapshot every block between corners `a` and `b`
    pub fn capture(
        world: &dyn HostWorld,
        a: &Location,
        b: &Location,
        origin: Location,
    ) -> HangmanResult<Self> {
        let cuboid = Cuboid::new(a, b)?;
        if cuboid.world() != world.id() {
            return Err(HangmanError::CrossWorldBoundary {
                a: cuboid.world().to_string(),
                b: world.id().to_string(),
            });
        }
        let size = cuboid.dimensions();
        let (min, max) = (cuboid.min_block(), cuboid.max_block());

        let mut blocks = Vec::with_capacity(cuboid.volume());
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    blocks.push(Some(world.get_block(BlockPos::new(x, y, z))));
                }
            }
        }

        log::debug!(
            "Captured {}x{}x{} region at {} in {}",
            size.0,
            size.1,
            size.2,
            min,
            cuboid.world()
        );

        Ok(Self {
            cuboid,
            origin,
            save_air: false,
            size,
            blocks,
        })
    }

    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Same snapshot anchored at a different origin
    pub fn with_origin(mut self, origin: Location) -> Self {
        self.origin = origin;
        self
    }

    pub fn save_air(&self) -> bool {
        self.save_air
    }

    /// Slot counts along x, y and z
    pub fn size(&self) -> (usize, usize, usize) {
        self.size
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let (dx, dy, dz) = self.size;
        if x >= dx || y >= dy || z >= dz {
            return None;
        }
        Some(x * dy * dz + y * dz + z)
    }

    /// Captured descriptor at slot `(x, y, z)`; `None` for an empty slot or out of range
    pub fn descriptor_at(&self, x: usize, y: usize, z: usize) -> Option<&BlockDescriptor> {
        self.index(x, y, z)
            .and_then(|i| self.blocks.get(i))
            .and_then(Option::as_ref)
    }

    /// Visit every slot in storage order with its capture-address block
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(BlockRef, Option<&BlockDescriptor>),
    {
        let (min, max) = (self.cuboid.min_block(), self.cuboid.max_block());
        let mut slots = self.blocks.iter();
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    let descriptor = slots.next().and_then(Option::as_ref);
                    visitor(self.cuboid.block_at(x, y, z), descriptor);
                }
            }
        }
    }

    /// Destination of the slot whose capture address is `capture`
    ///
    /// Fails with `WorldError::OutOfBounds` when the destination leaves the
    /// `i32` block range.
    pub fn stamp_target(
        &self,
        capture: BlockPos,
        mode: StampMode,
    ) -> Result<BlockPos, WorldError> {
        let origin = self.origin.block_pos();
        let target = match mode {
            StampMode::CaptureOffset => capture.checked_add(origin),
            StampMode::OriginRelative => capture
                .checked_sub(self.cuboid.min_block())
                .and_then(|slot| origin.checked_add(slot)),
        };
        target.ok_or(WorldError::OutOfBounds { pos: capture })
    }

    /// Write every captured descriptor back to the world
    pub fn stamp(&self, world: &mut dyn HostWorld) -> HangmanResult<usize> {
        self.stamp_with(world, StampMode::default())
    }

    /// Stamp using the given target arithmetic; returns the number of blocks written
    ///
    /// Every destination is resolved before the first write, so a region that
    /// would leave the block range writes nothing.
    pub fn stamp_with(&self, world: &mut dyn HostWorld, mode: StampMode) -> HangmanResult<usize> {
        let mut writes = Vec::with_capacity(self.blocks.len());
        let mut failed = None;
        self.for_each(|block, descriptor| {
            let Some(descriptor) = descriptor.filter(|_| failed.is_none()) else {
                return;
            };
            match self.stamp_target(block.pos, mode) {
                Ok(target) => writes.push((target, descriptor.clone())),
                Err(err) => failed = Some(err),
            }
        });
        if let Some(err) = failed {
            return Err(err.into());
        }

        for (pos, descriptor) in &writes {
            world.set_block(*pos, descriptor)?;
        }
        Ok(writes.len())
    }

    pub fn serialize(&self) -> Value {
        let mut object = JsonObject::new();
        self.cuboid.write_fields(&mut object);
        object.insert(KEY_SAVE_AIR.into(), Value::Bool(self.save_air));
        object.insert(KEY_X.into(), Value::from(self.size.0));
        object.insert(KEY_Y.into(), Value::from(self.size.1));
        object.insert(KEY_Z.into(), Value::from(self.size.2));
        object.insert(
            KEY_ORIGIN.into(),
            Value::String(codec::location_to_string(&self.origin)),
        );
        object.insert(
            KEY_BLOCK_DATA.into(),
            Value::Array(
                self.blocks
                    .iter()
                    .map(|d| Value::String(codec::descriptor_to_string(d.as_ref())))
                    .collect(),
            ),
        );
        Value::Object(object)
    }

    /// Restore a serialized region into `world`, keeping its stored origin
    pub fn deserialize(value: &Value, world: &WorldId) -> HangmanResult<Self> {
        let object = codec::as_object(value)?;
        let cuboid = Cuboid::read_fields(object, world)?;
        let save_air = codec::get_bool(object, KEY_SAVE_AIR)?;
        let size = (
            codec::get_usize(object, KEY_X)?,
            codec::get_usize(object, KEY_Y)?,
            codec::get_usize(object, KEY_Z)?,
        );
        if size != cuboid.dimensions() {
            return Err(malformed(format!(
                "region size {:?} does not match its corners {:?}",
                size,
                cuboid.dimensions()
            )));
        }

        let raw_origin = codec::get_str(object, KEY_ORIGIN)?;
        let origin = codec::string_to_location(raw_origin, world)?;
        if BlockPos::try_from_world_pos(origin.position).is_none() {
            return Err(malformed(format!(
                "origin {raw_origin:?} is outside the block range"
            )));
        }

        let blocks = codec::get_str_array(object, KEY_BLOCK_DATA)?
            .into_iter()
            .map(codec::string_to_descriptor)
            .collect::<HangmanResult<Vec<_>>>()?;
        if blocks.len() != cuboid.volume() {
            return Err(malformed(format!(
                "blockData holds {} entries, expected {}",
                blocks.len(),
                cuboid.volume()
            )));
        }

        Ok(Self {
            cuboid,
            origin,
            save_air,
            size,
            blocks,
        })
    }

    /// Restore a serialized region and anchor it at `origin`
    pub fn deserialize_at(value: &Value, world: &WorldId, origin: Location) -> HangmanResult<Self> {
        Ok(Self::deserialize(value, world)?.with_origin(origin))
    }
}
