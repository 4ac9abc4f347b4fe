//! Head textures for every glyph a board slot can show
//!
//! `A`-`Z`, `.` and `?`. The table is static; a missing glyph is a
//! configuration error reported as `HangmanError::MissingGlyph`.

use crate::constants::blocks::TEXTURES_PROPERTY;
use crate::error::{HangmanError, HangmanResult};
use crate::world::HeadProfile;

/// Profile identity and texture payload of one glyph head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
    pub profile_id: &'static str,
    pub texture: &'static str,
}

impl Glyph {
    /// Head profile rendering this glyph
    pub fn profile(&self) -> HeadProfile {
        let mut profile = HeadProfile::new(self.profile_id);
        profile.add_property(TEXTURES_PROPERTY, self.texture);
        profile
    }
}

/// Static glyph lookup
pub struct GlyphCatalog;

impl GlyphCatalog {
    pub fn get(symbol: char) -> Option<&'static Glyph> {
        GLYPHS.iter().find(|g| g.symbol == symbol)
    }

    /// Glyph for `symbol`, upper-casing letters first
    pub fn lookup(symbol: char) -> HangmanResult<&'static Glyph> {
        let symbol = symbol.to_ascii_uppercase();
        Self::get(symbol).ok_or(HangmanError::MissingGlyph(symbol))
    }

    pub fn profile_for(symbol: char) -> HangmanResult<HeadProfile> {
        Self::lookup(symbol).map(Glyph::profile)
    }

    pub fn iter() -> impl Iterator<Item = &'static Glyph> {
        GLYPHS.iter()
    }
}

static GLYPHS: [Glyph; 28] = [
    Glyph {
        symbol: 'A',
        profile_id: "5a48a074-296f-42c0-b6f2-02de0a5828e2",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNGU0MTc0ODEyMTYyNmYyMmFlMTZhNGM2NjRjNzMwMWE5ZjhlYTU5MWJmNGQyOTg4ODk1NzY4MmE5ZmRhZiJ9fX0=",
    },
    Glyph {
        symbol: 'B',
        profile_id: "6659159e-57b8-4177-b2f5-9268b9add0e3",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNDJiOWUxNmUyNjIwNmE3MDliZjA3YzI0OTNjYTRjNWQyNGY1Njc1NjU0ZmMxMzBkMWQ1ZWM1ZThjNWJlNSJ9fX0=",
    },
    Glyph {
        symbol: 'C',
        profile_id: "73ca3c0b-ef4c-4b03-9e77-4db5a27824ef",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNjJhNTg3NjExMzMyMmYzOWFhMmJiZWY0YmQ2Yjc5ZWM2YjUyYTk3YmI2ZmFiNjc0YmRkYmQ3YjZlYWIzYmEifX19",
    },
    Glyph {
        symbol: 'D',
        profile_id: "eea0c86a-be64-4004-9419-2945070dc5fe",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZmE2NjE0MTlkZTQ5ZmY0YTJjOTdiMjdmODY4MDE0ZmJkYWViOGRkN2Y0MzkyNzc3ODMwYjI3MTRjYWFmZDFmIn19fQ==",
    },
    Glyph {
        symbol: 'E',
        profile_id: "40777fac-0c0e-44e5-85e9-5cad15e0bfff",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvMWFlZWY4OGUyYzkyOGI0NjZjNmVkNWRlYWE0ZTE5NzVhOTQzNmMyYjFiNDk4ZjlmN2NiZjkyYTliNTk5YTYifX19",
    },
    Glyph {
        symbol: 'F',
        profile_id: "f1c8b8e5-5b3f-430e-a5ba-372a496b208d",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvY2Q5ZDZlOTZiNWI5MmZmY2FmNDdkZDFjYWY2MWQzZjZlODQyOTEzZmM4ODg0OWYzZGU1NDhiZWVkNzFmYTgifX19",
    },
    Glyph {
        symbol: 'G',
        profile_id: "d34a2268-53e2-45f5-90c9-899a7ada1109",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvMjIwYzNiMmJiZmExZWQzYWM4YzM1YjNkZDM4MjQ3NDU2NTYzYzkyYWNlZmQ1OTI2YjEyNWNjYzY3ZDdkNWZkIn19fQ==",
    },
    Glyph {
        symbol: 'H',
        profile_id: "3539c341-0f8e-4108-8cfa-08b0197a0af6",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvN2JhOWMzM2E5NWZhMWU1MTlmODVhNDFjYTU2Nzk5Mzg0ZGI0MWZlN2UxZDdhNzkxNzUxZWNlOWJiYWU1ZDI3ZiJ9fX0=",
    },
    Glyph {
        symbol: 'I',
        profile_id: "05f5c4c3-7a37-4893-bad5-9318991a1cb0",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNWM5OWRmYjI3MDRlMWJkNmU3ZmFjZmI0M2IzZTZmYmFiYWYxNmViYzdlMWZhYjA3NDE3YTZjNDY0ZTFkIn19fQ==",
    },
    Glyph {
        symbol: 'J',
        profile_id: "a8859c64-d8b8-4796-8ad3-af41e9442d88",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNzgxZWZhYTliYzNiNjA3NDdhNzUwYTY0OGIxOTg3ODdmMTg2ZWI5Mzg1OWFlYTUyMDMxZDVhOGM4ODEwNzUifX19",
    },
    Glyph {
        symbol: 'K',
        profile_id: "4ada0d9d-546d-4954-a3a0-82d82a244b65",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvMzVkYzZkNTEzY2YxNjMzMzcyZjQxY2FhMDI2MTM5NmU2Y2M2NzIwZTA1OTMwOGM2NzlkNDRiNDdlZDYifX19",
    },
    Glyph {
        symbol: 'L',
        profile_id: "e23fdeb8-791b-4a51-9f93-68280470adc3",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZDRhZmZhNDU1YjdmNTgyMTdkZThhY2JiZDkyMDFjOWVhODdjMTM0YWEzNTYyNTQ5NGY1ZDNmNjVjZTk0NiJ9fX0=",
    },
    Glyph {
        symbol: 'M',
        profile_id: "bea97301-e9dc-4115-9844-4f1b09f0a890",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvYzhkZWM0NjY2YjRjNjdkODc1OTcxNGM4NTcxNGJlNmVhNGUzOWZmOTYyODg0OWY5OGI1MTRlZGYxYzNlNDY4MCJ9fX0=",
    },
    Glyph {
        symbol: 'N',
        profile_id: "acf1430e-5b8f-4468-96f4-69d3591eb59b",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZGEyMjFlNGY5NmJlZTYyNjE3NTIzOTZhMzI2NWZmYTRkZWRmOGZmNDgzOWFiZDE0ZjQ5ZWRlZTFlNTMwOTIifX19",
    },
    Glyph {
        symbol: 'O',
        profile_id: "9299a92b-b0e4-4386-9dce-0566c74a3ebf",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvY2JiMWQxN2NlYmM1ZjBlY2M5ODdiODBlZmMwM2UzMmVjYjFjYjQwZGJjNWJjZTJmYWYzZTYwNTQyYTQwIn19fQ==",
    },
    Glyph {
        symbol: 'P',
        profile_id: "51e6761d-8cf2-494b-b9e8-1c0d70c77ad8",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZDAyYzEwYWRjMzFiMWMyMWNjOThlY2Y4MDkyMjVmODdlMjVlNzIzNzhjZjQxN2RiNGJlM2Y2N2U5MWJiMSJ9fX0=",
    },
    Glyph {
        symbol: 'Q',
        profile_id: "07ee041b-4d6d-4d2c-8b14-8c527fc0e46b",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNDUyNGQyOGM4MmYzNzExYTk3NTAxNDExZWNjM2NiNDY2ODc3NDgzYjEyMmEyNjU2YzhlZWFkZmI4ZDIxIn19fQ==",
    },
    Glyph {
        symbol: 'R',
        profile_id: "29d15adf-36c8-4b19-89a6-1aeff5e8331a",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNzhhODFlZmRhZTQ3YmNiNDgwYTI1ZWQ5MWZmNmRlOTc3MmIwN2FlODdjM2M0ZTI3NzcwNWFiYmJkMzQxOSJ9fX0=",
    },
    Glyph {
        symbol: 'S',
        profile_id: "5961be5a-b47f-46b1-9776-4d1e1b9d3a9c",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZDcxMDEzODQxNjUyODg4OTgxNTU0OGI0NjIzZDI4ZDg2YmJiYWU1NjE5ZDY5Y2Q5ZGJjNWFkNmI0Mzc0NCJ9fX0=",
    },
    Glyph {
        symbol: 'T',
        profile_id: "4a8ae907-f4fe-41b1-8562-10ef8cd57636",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvYTNmYjUwZmU3NTU5YmM5OWYxM2M0NzM1NmNjZTk3ZmRhM2FhOTIzNTU3ZmI1YmZiMTdjODI1YWJmNGIxZDE5In19fQ==",
    },
    Glyph {
        symbol: 'U',
        profile_id: "08345212-4e65-43c7-8a74-393381f6eb88",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZDY5OTFkY2JhMjVlYWUyNDNlYjVjZWI4MzI1ZjRhYjc4ZjlmMTQxMjdjMzgyZjZjZDQyYzRjNzgwNDJkNGI1In19fQ==",
    },
    Glyph {
        symbol: 'V',
        profile_id: "d431bcd6-7bdf-4c5a-b929-ed5da081babf",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvZThkNjgwMTg5OTRmMmYyZjU5ZDllNWYyZTNiYTNkNDZkOGIwYjllYTBlNjg0YmZiYjhlY2M3Yjg2ZWI5MjRjIn19fQ==",
    },
    Glyph {
        symbol: 'W',
        profile_id: "f7dcead1-c5bd-458f-8d1a-5b9c291fa500",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvODBjOTQ4M2Y1MWQxMjY3NDMyZTBmMmYzYmFhOGNkOTNlNjViNWVhYzc0ODJiMjdkYmNjZWJhZmI3MjE3NDhiIn19fQ==",
    },
    Glyph {
        symbol: 'X',
        profile_id: "0ba39a4c-083f-4943-a9e3-4dcd5f6f7bf3",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvMWQxYTNjOTY1NjIzNDg1MjdkNTc5OGYyOTE2MDkyODFmNzJlMTZkNjExZjFhNzZjMGZhN2FiZTA0MzY2NSJ9fX0=",
    },
    Glyph {
        symbol: 'Y',
        profile_id: "f3e98344-021b-45ed-a815-ee2c209b040b",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvM2RhOGI2NDczMDUyYWRhMjJlNmNhMzBjNDlmNmRjZTliOTk5MTZlNDIzYWM0ZmM2YjMwMWFkNzMzNjk3ZiJ9fX0=",
    },
    Glyph {
        symbol: 'Z',
        profile_id: "3162c17f-71b9-43f1-a412-dc0cea4ffdac",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvNzBkNDRmZWUwMzAzZjZkMzdmYWNhN2U5YzMxNTMwOTU1NmZhM2RmMzc5YmRkNTgyMzE3YWEzNjhhYTg0M2UifX19",
    },
    Glyph {
        symbol: '.',
        profile_id: "f9bd4a81-b5dd-4e03-96b8-d37215f42b73",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvMzIzZTYxOWRjYjc1MTFjZGMyNTJhNWRjYTg1NjViMTlkOTUyYWM5ZjgyZDQ2N2U2NmM1MjI0MmY5Y2Q4OGZhIn19fQ==",
    },
    Glyph {
        symbol: '?',
        profile_id: "a8806521-1911-4885-87ac-5a65755364e2",
        texture: "eyJ0ZXh0dXJlcyI6eyJTS0lOIjp7InVybCI6Imh0dHA6Ly90ZXh0dXJlcy5taW5lY3JhZnQubmV0L3RleHR1cmUvYmM4ZWExZjUxZjI1M2ZmNTE0MmNhMTFhZTQ1MTkzYTRhZDhjM2FiNWU5YzZlZWM4YmE3YTRmY2I3YmFjNDAifX19",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::alphabet::{HIDDEN_GLYPH, LETTERS};

    #[test]
    fn test_every_letter_and_symbol_is_present() {
        for letter in LETTERS {
            assert!(GlyphCatalog::get(letter).is_some(), "missing {letter}");
        }
        assert!(GlyphCatalog::get('.').is_some());
        assert!(GlyphCatalog::get(HIDDEN_GLYPH).is_some());
        assert_eq!(GlyphCatalog::iter().count(), 28);
    }

    #[test]
    fn test_lookup_upper_cases() {
        assert_eq!(GlyphCatalog::lookup('q').unwrap().symbol, 'Q');
    }

    #[test]
    fn test_unknown_symbol_is_an_error() {
        assert!(matches!(
            GlyphCatalog::lookup(' '),
            Err(HangmanError::MissingGlyph(' '))
        ));
    }

    #[test]
    fn test_profile_carries_texture() {
        let profile = GlyphCatalog::profile_for('?').unwrap();
        assert_eq!(profile.id, "a8806521-1911-4885-87ac-5a65755364e2");
        assert!(profile.texture().unwrap().starts_with("eyJ0ZXh0dXJlcyI6"));
    }

    #[test]
    fn test_identities_are_unique() {
        let mut ids: Vec<&str> = GlyphCatalog::iter().map(|g| g.profile_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 28);
    }
}
