use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a host world
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub String);

impl WorldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Integer position of a voxel in the world (world coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise sum, `None` if any axis leaves the `i32` range
    pub fn checked_add(&self, other: BlockPos) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
            self.z.checked_add(other.z)?,
        ))
    }

    /// Componentwise difference, `None` if any axis leaves the `i32` range
    pub fn checked_sub(&self, other: BlockPos) -> Option<Self> {
        Some(Self::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
            self.z.checked_sub(other.z)?,
        ))
    }

    /// Componentwise minimum
    pub fn component_min(self, other: BlockPos) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Componentwise maximum
    pub fn component_max(self, other: BlockPos) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Block containing a floating-point position
    ///
    /// Saturates at the `i32` bounds; use `try_from_world_pos` for untrusted input.
    pub fn from_world_pos(pos: DVec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }

    /// Block containing `pos`, `None` for non-finite or out-of-range coordinates
    pub fn try_from_world_pos(pos: DVec3) -> Option<Self> {
        fn axis(v: f64) -> Option<i32> {
            let v = v.floor();
            (v.is_finite() && v >= i32::MIN as f64 && v <= i32::MAX as f64).then_some(v as i32)
        }
        Some(Self::new(axis(pos.x)?, axis(pos.y)?, axis(pos.z)?))
    }
}


impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A point in a world with a view direction
///
/// Geometry only ever looks at the floored block position; the fractional
/// part and the rotation are carried so serialized forms round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub world: WorldId,
    pub position: DVec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Location {
    pub fn new(world: WorldId, x: f64, y: f64, z: f64) -> Self {
        Self {
            world,
            position: DVec3::new(x, y, z),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn with_rotation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Location of the lower corner of a block
    pub fn from_block(world: WorldId, pos: BlockPos) -> Self {
        Self::new(world, pos.x as f64, pos.y as f64, pos.z as f64)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// The block this location falls in
    pub fn block_pos(&self) -> BlockPos {
        BlockPos::from_world_pos(self.position)
    }

    /// A copy of this location moved by `delta`; rotation is kept
    pub fn offset_by(&self, delta: DVec3) -> Location {
        Location {
            world: self.world.clone(),
            position: self.position + delta,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    /// Vector from `origin` to this location
    pub fn delta_from(&self, origin: &Location) -> DVec3 {
        self.position - origin.position
    }
}
