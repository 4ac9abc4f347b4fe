//! String and JSON codecs for the persisted geometry forms
//!
//! * loc-string: `worldUUID;x;y;z;yaw;pitch`, every number in floating-point form
//! * vec-string: `x;y;z`
//! * descriptor string: canonical block descriptor, empty for "no block"
//!
//! The world field of a loc-string is written but never read back; callers
//! pass the world that the configuration resolves to.

use glam::DVec3;
use serde_json::{Map, Value};

use crate::constants::codec::SEPARATOR;
use crate::error::{malformed, HangmanResult};
use crate::world::{BlockDescriptor, Location, WorldId};

/// JSON object the geometry serializers write their fields into
pub type JsonObject = Map<String, Value>;

pub fn location_to_string(location: &Location) -> String {
    format!(
        "{}{sep}{:?}{sep}{:?}{sep}{:?}{sep}{:?}{sep}{:?}",
        location.world,
        location.x(),
        location.y(),
        location.z(),
        location.yaw,
        location.pitch,
        sep = SEPARATOR
    )
}

pub fn string_to_location(raw: &str, world: &WorldId) -> HangmanResult<Location> {
    let fields: Vec<&str> = raw.split(SEPARATOR).collect();
    if fields.len() != 6 {
        return Err(malformed(format!(
            "location {raw:?} has {} fields, expected 6",
            fields.len()
        )));
    }
    let x = parse_f64(fields[1], raw)?;
    let y = parse_f64(fields[2], raw)?;
    let z = parse_f64(fields[3], raw)?;
    let yaw = parse_f32(fields[4], raw)?;
    let pitch = parse_f32(fields[5], raw)?;
    Ok(Location::new(world.clone(), x, y, z).with_rotation(yaw, pitch))
}

pub fn vector_to_string(vector: DVec3) -> String {
    format!(
        "{:?}{sep}{:?}{sep}{:?}",
        vector.x,
        vector.y,
        vector.z,
        sep = SEPARATOR
    )
}

pub fn string_to_vector(raw: &str) -> HangmanResult<DVec3> {
    let fields: Vec<&str> = raw.split(SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "vector {raw:?} has {} fields, expected 3",
            fields.len()
        )));
    }
    Ok(DVec3::new(
        parse_f64(fields[0], raw)?,
        parse_f64(fields[1], raw)?,
        parse_f64(fields[2], raw)?,
    ))
}

pub fn descriptor_to_string(descriptor: Option<&BlockDescriptor>) -> String {
    descriptor.map(|d| d.as_str().to_string()).unwrap_or_default()
}

pub fn string_to_descriptor(raw: &str) -> HangmanResult<Option<BlockDescriptor>> {
    if raw.is_empty() {
        return Ok(None);
    }
    BlockDescriptor::parse(raw).map(Some)
}

fn parse_f64(field: &str, raw: &str) -> HangmanResult<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|e| malformed(format!("bad number {field:?} in {raw:?}: {e}")))
}

fn parse_f32(field: &str, raw: &str) -> HangmanResult<f32> {
    field
        .trim()
        .parse::<f32>()
        .map_err(|e| malformed(format!("bad number {field:?} in {raw:?}: {e}")))
}

/// View a value as the JSON object a serializer produced
pub fn as_object(value: &Value) -> HangmanResult<&JsonObject> {
    value
        .as_object()
        .ok_or_else(|| malformed("expected a JSON object"))
}

pub fn get_str<'a>(object: &'a JsonObject, key: &str) -> HangmanResult<&'a str> {
    field(object, key)?
        .as_str()
        .ok_or_else(|| malformed(format!("{key:?} is not a string")))
}

pub fn get_bool(object: &JsonObject, key: &str) -> HangmanResult<bool> {
    field(object, key)?
        .as_bool()
        .ok_or_else(|| malformed(format!("{key:?} is not a boolean")))
}

pub fn get_usize(object: &JsonObject, key: &str) -> HangmanResult<usize> {
    field(object, key)?
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| malformed(format!("{key:?} is not a non-negative integer")))
}

/// Every element of an array field as a string
pub fn get_str_array<'a>(object: &'a JsonObject, key: &str) -> HangmanResult<Vec<&'a str>> {
    let array = field(object, key)?
        .as_array()
        .ok_or_else(|| malformed(format!("{key:?} is not an array")))?;
    array
        .iter()
        .map(|v| {
            v.as_str()
                .ok_or_else(|| malformed(format!("{key:?} holds a non-string element")))
        })
        .collect()
}

fn field<'a>(object: &'a JsonObject, key: &str) -> HangmanResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| malformed(format!("missing key {key:?}")))
}
