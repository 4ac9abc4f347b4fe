use glam::DVec3;
use serde_json::Value;

use crate::constants::codec::{KEY_LOCATION_VECTORS, KEY_ORIGIN};
use crate::error::HangmanResult;
use crate::geometry::codec::{self, JsonObject};
use crate::world::{BlockPos, BlockRef, Location, WorldId};

/// Ordered world positions stored as offsets from an origin
///
/// Insertion order is significant: slot `i` of a letter board is the `i`th
/// position added. Duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSet {
    origin: Location,
    vectors: Vec<DVec3>,
}

impl PositionSet {
    pub fn new(origin: Location) -> Self {
        Self {
            origin,
            vectors: Vec::new(),
        }
    }

    /// Append `position - origin`
    pub fn add(&mut self, position: &Location) {
        self.vectors.push(position.delta_from(&self.origin));
    }

    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Same offsets measured from a different origin
    pub fn with_origin(mut self, origin: Location) -> Self {
        self.origin = origin;
        self
    }

    pub fn vectors(&self) -> &[DVec3] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn resolve(&self, vector: DVec3) -> BlockRef {
        BlockRef::new(
            self.origin.world.clone(),
            BlockPos::from_world_pos(self.origin.position + vector),
        )
    }

    /// Block at `origin + v_i` for every stored offset, in order
    pub fn blocks(&self) -> Vec<BlockRef> {
        self.vectors.iter().map(|v| self.resolve(*v)).collect()
    }

    pub fn block_at(&self, index: usize) -> Option<BlockRef> {
        self.vectors.get(index).map(|v| self.resolve(*v))
    }

    pub fn for_each_block<F>(&self, mut visitor: F)
    where
        F: FnMut(BlockRef),
    {
        for vector in &self.vectors {
            visitor(self.resolve(*vector));
        }
    }

    /// First slot resolving to `block`
    pub fn index_of(&self, block: &BlockRef) -> Option<usize> {
        self.vectors.iter().position(|v| &self.resolve(*v) == block)
    }

    pub(crate) fn write_fields(&self, object: &mut JsonObject) {
        object.insert(
            KEY_ORIGIN.into(),
            Value::String(codec::location_to_string(&self.origin)),
        );
        object.insert(
            KEY_LOCATION_VECTORS.into(),
            Value::Array(
                self.vectors
                    .iter()
                    .map(|v| Value::String(codec::vector_to_string(*v)))
                    .collect(),
            ),
        );
    }

    pub(crate) fn read_fields(object: &JsonObject, world: &WorldId) -> HangmanResult<Self> {
        let origin = codec::string_to_location(codec::get_str(object, KEY_ORIGIN)?, world)?;
        let vectors = codec::get_str_array(object, KEY_LOCATION_VECTORS)?
            .into_iter()
            .map(codec::string_to_vector)
            .collect::<HangmanResult<Vec<_>>>()?;
        Ok(Self { origin, vectors })
    }

    pub fn serialize(&self) -> Value {
        let mut object = JsonObject::new();
        self.write_fields(&mut object);
        Value::Object(object)
    }

    pub fn deserialize(value: &Value, world: &WorldId) -> HangmanResult<Self> {
        Self::read_fields(codec::as_object(value)?, world)
    }

    /// Restore the offsets and measure them from `origin`
    pub fn deserialize_at(value: &Value, world: &WorldId, origin: Location) -> HangmanResult<Self> {
        Ok(Self::deserialize(value, world)?.with_origin(origin))
    }
}
