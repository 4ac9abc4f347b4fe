// Hangman constants
//
// Values shared by the geometry codecs, the board and the game coordinator.

/// Host scheduler timing
pub mod timing {
    /// Scheduler ticks per second
    pub const TICKS_PER_SECOND: u64 = 20;
    pub const MILLIS_PER_SECOND: u64 = 1000;
}

/// Guessable alphabet
pub mod alphabet {
    pub const LETTERS: [char; 26] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
        'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];
    pub const LETTER_COUNT: usize = LETTERS.len();

    /// Glyph shown for a hidden slot
    pub const HIDDEN_GLYPH: char = '?';

    /// Index of an uppercase Latin letter, `None` for anything else
    pub fn letter_index(letter: char) -> Option<usize> {
        if letter.is_ascii_uppercase() {
            Some((letter as u8 - b'A') as usize)
        } else {
            None
        }
    }
}

/// Serialized form details
pub mod codec {
    pub const SEPARATOR: char = ';';

    pub const KEY_LOC_A: &str = "locA";
    pub const KEY_LOC_B: &str = "locB";
    pub const KEY_SAVE_AIR: &str = "saveAir";
    pub const KEY_X: &str = "x";
    pub const KEY_Y: &str = "y";
    pub const KEY_Z: &str = "z";
    pub const KEY_ORIGIN: &str = "origin";
    pub const KEY_BLOCK_DATA: &str = "blockData";
    pub const KEY_LOCATION_VECTORS: &str = "locationVectors";
    pub const KEY_LETTER_BLOCK_DATA: &str = "letterBlockData";
}

/// Well-known block descriptors
pub mod blocks {
    pub const AIR: &str = "minecraft:air";
    pub const PLAYER_HEAD: &str = "minecraft:player_head";
    pub const PLAYER_WALL_HEAD: &str = "minecraft:player_wall_head";

    /// Profile property carrying a head texture
    pub const TEXTURES_PROPERTY: &str = "textures";
}

/// Letter selector layout
pub mod menu {
    pub const SIZE: usize = 27;
    pub const CLOSE_SLOT: usize = 26;
    pub const CLOSE_LABEL: &str = "Close menu";
}
