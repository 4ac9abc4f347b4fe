use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::blocks;
use crate::error::{malformed, HangmanResult};
use crate::world::{BlockPos, WorldId};

/// Full state of one voxel in its canonical string form
///
/// `minecraft:oak_planks` or `minecraft:chest[facing=north,type=single]`.
/// Descriptors compare by their canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockDescriptor(String);

impl BlockDescriptor {
    /// Parse a descriptor string, adding the default namespace if it is missing
    pub fn parse(raw: &str) -> HangmanResult<Self> {
        let raw = raw.trim();
        let (material, properties) = match raw.find('[') {
            Some(open) => {
                if !raw.ends_with(']') {
                    return Err(malformed(format!("unterminated block properties in {raw:?}")));
                }
                (&raw[..open], Some(&raw[open + 1..raw.len() - 1]))
            }
            None => (raw, None),
        };

        let (namespace, path) = match material.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => ("minecraft", material),
        };
        if !is_identifier(namespace) || !is_identifier(path) {
            return Err(malformed(format!("invalid block material {material:?}")));
        }

        if let Some(properties) = properties {
            for pair in properties.split(',').filter(|p| !p.is_empty()) {
                match pair.split_once('=') {
                    Some((key, value)) if is_identifier(key) && is_identifier(value) => {}
                    _ => return Err(malformed(format!("invalid block property {pair:?}"))),
                }
            }
        }

        let mut canonical = format!("{namespace}:{path}");
        if let Some(properties) = properties {
            canonical.push('[');
            canonical.push_str(properties);
            canonical.push(']');
        }
        Ok(Self(canonical))
    }

    pub fn air() -> Self {
        Self(blocks::AIR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespaced material without block properties
    pub fn material(&self) -> &str {
        match self.0.find('[') {
            Some(open) => &self.0[..open],
            None => &self.0,
        }
    }

    pub fn is_air(&self) -> bool {
        matches!(
            self.material(),
            "minecraft:air" | "minecraft:cave_air" | "minecraft:void_air"
        )
    }

    /// True for the floor and wall variants of the player head
    pub fn is_player_head(&self) -> bool {
        matches!(self.material(), blocks::PLAYER_HEAD | blocks::PLAYER_WALL_HEAD)
    }

    /// True for any block whose state can carry a head profile
    pub fn is_skull(&self) -> bool {
        let material = self.material();
        material.ends_with("_head") || material.ends_with("_skull")
    }
}

impl Default for BlockDescriptor {
    fn default() -> Self {
        Self::air()
    }
}

impl fmt::Display for BlockDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | '/')
        })
}

/// A named property attached to a head profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
}

/// Player profile rendered by a head block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadProfile {
    pub id: String,
    pub properties: Vec<ProfileProperty>,
}

impl HeadProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: Vec::new(),
        }
    }

    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.push(ProfileProperty {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Texture payload, if one was attached
    pub fn texture(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == blocks::TEXTURES_PROPERTY)
            .map(|p| p.value.as_str())
    }
}

/// Mutable view of a skull block's state; changes land on `HostWorld::commit_skull`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkullState {
    pub pos: BlockPos,
    pub profile: Option<HeadProfile>,
}

impl SkullState {
    pub fn set_profile(&mut self, profile: HeadProfile) {
        self.profile = Some(profile);
    }
}

/// Handle to one block in one world
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockRef {
    pub world: WorldId,
    pub pos: BlockPos,
}

impl BlockRef {
    pub fn new(world: WorldId, pos: BlockPos) -> Self {
        Self { world, pos }
    }
}
